//! In-memory adapters, used before database wiring exists and by the
//! in-process tests. Each store keeps a monotonic id counter and a single
//! mutex around the map so a snapshot never observes a half-written entry.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::city::City;
use crate::models::file::FileRecord;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;

use super::{CandidateRepository, CityRepository, FileRepository, UserRepository, VacancyRepository};

pub struct MemoryVacancyRepository {
    next_id: AtomicI32,
    vacancies: Mutex<BTreeMap<i32, Vacancy>>,
}

impl MemoryVacancyRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            vacancies: Mutex::new(BTreeMap::new()),
        }
    }

    /// Pre-populated variant used when the server runs without a database.
    pub fn with_sample_vacancies() -> Self {
        let repo = Self::new();
        let titles = [
            ("Intern Java Developer", 1),
            ("Junior Java Developer", 2),
            ("Junior+ Java Developer", 3),
            ("Middle Java Developer", 1),
            ("Middle+ Java Developer", 2),
            ("Senior Java Developer", 3),
        ];
        let mut guard = repo.vacancies.lock().expect("vacancy store mutex poisoned");
        for (title, city_id) in titles {
            let id = repo.next_id.fetch_add(1, Ordering::Relaxed);
            guard.insert(
                id,
                Vacancy {
                    id,
                    title: title.to_string(),
                    description: format!("description for {}", title),
                    creation_date: Utc::now(),
                    visible: true,
                    city_id,
                    file_id: 0,
                },
            );
        }
        drop(guard);
        repo
    }
}

impl Default for MemoryVacancyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VacancyRepository for MemoryVacancyRepository {
    async fn save(&self, mut vacancy: Vacancy) -> Result<Vacancy> {
        vacancy.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.vacancies
            .lock()
            .expect("vacancy store mutex poisoned")
            .insert(vacancy.id, vacancy.clone());
        Ok(vacancy)
    }

    async fn update(&self, vacancy: Vacancy) -> Result<bool> {
        let mut guard = self.vacancies.lock().expect("vacancy store mutex poisoned");
        match guard.get_mut(&vacancy.id) {
            Some(slot) => {
                *slot = vacancy;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.vacancies
            .lock()
            .expect("vacancy store mutex poisoned")
            .remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        Ok(self
            .vacancies
            .lock()
            .expect("vacancy store mutex poisoned")
            .get(&id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        Ok(self
            .vacancies
            .lock()
            .expect("vacancy store mutex poisoned")
            .values()
            .cloned()
            .collect())
    }
}

pub struct MemoryCandidateRepository {
    next_id: AtomicI32,
    candidates: Mutex<BTreeMap<i32, Candidate>>,
}

impl MemoryCandidateRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            candidates: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryCandidateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CandidateRepository for MemoryCandidateRepository {
    async fn save(&self, mut candidate: Candidate) -> Result<Candidate> {
        candidate.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.candidates
            .lock()
            .expect("candidate store mutex poisoned")
            .insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    async fn update(&self, candidate: Candidate) -> Result<bool> {
        let mut guard = self
            .candidates
            .lock()
            .expect("candidate store mutex poisoned");
        match guard.get_mut(&candidate.id) {
            Some(slot) => {
                *slot = candidate;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.candidates
            .lock()
            .expect("candidate store mutex poisoned")
            .remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        Ok(self
            .candidates
            .lock()
            .expect("candidate store mutex poisoned")
            .get(&id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        Ok(self
            .candidates
            .lock()
            .expect("candidate store mutex poisoned")
            .values()
            .cloned()
            .collect())
    }
}

pub struct MemoryFileRepository {
    next_id: AtomicI32,
    files: Mutex<BTreeMap<i32, FileRecord>>,
}

impl MemoryFileRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            files: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileRepository for MemoryFileRepository {
    async fn save(&self, name: String, content: Vec<u8>) -> Result<FileRecord> {
        let record = FileRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name,
            content,
        };
        self.files
            .lock()
            .expect("file store mutex poisoned")
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>> {
        Ok(self
            .files
            .lock()
            .expect("file store mutex poisoned")
            .get(&id)
            .cloned())
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.files
            .lock()
            .expect("file store mutex poisoned")
            .remove(&id);
        Ok(())
    }
}

pub struct MemoryUserRepository {
    next_id: AtomicI32,
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            users: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<Option<User>> {
        let mut guard = self.users.lock().expect("user store mutex poisoned");
        if guard.iter().any(|u| u.email == user.email) {
            tracing::warn!(email = %user.email, "a user with this email already exists");
            return Ok(None);
        }
        user.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        guard.push(user.clone());
        Ok(Some(user))
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("user store mutex poisoned")
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }
}

pub struct MemoryCityRepository {
    cities: Vec<City>,
}

impl MemoryCityRepository {
    pub fn new() -> Self {
        let cities = ["Москва", "Санкт-Петербург", "Екатеринбург"]
            .into_iter()
            .enumerate()
            .map(|(idx, name)| City {
                id: idx as i32 + 1,
                name: name.to_string(),
            })
            .collect();
        Self { cities }
    }
}

impl Default for MemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRepository for MemoryCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        Ok(self.cities.clone())
    }
}
