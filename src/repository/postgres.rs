//! sqlx-backed adapters. Queries use the runtime API so the crate builds
//! without a live database.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::city::City;
use crate::models::file::FileRecord;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;

use super::{CandidateRepository, CityRepository, FileRepository, UserRepository, VacancyRepository};

#[derive(Clone)]
pub struct PgVacancyRepository {
    pool: PgPool,
}

impl PgVacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRepository for PgVacancyRepository {
    async fn save(&self, mut vacancy: Vacancy) -> Result<Vacancy> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO vacancies (title, description, creation_date, visible, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(vacancy.creation_date)
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .fetch_one(&self.pool)
        .await?;

        vacancy.id = id;
        Ok(vacancy)
    }

    async fn update(&self, vacancy: Vacancy) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE vacancies
            SET title = $2, description = $3, creation_date = $4, visible = $5,
                city_id = $6, file_id = $7
            WHERE id = $1
            "#,
        )
        .bind(vacancy.id)
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(vacancy.creation_date)
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vacancy)
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        let vacancies = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(vacancies)
    }
}

#[derive(Clone)]
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn save(&self, mut candidate: Candidate) -> Result<Candidate> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO candidates (name, description, creation_date, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.creation_date)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .fetch_one(&self.pool)
        .await?;

        candidate.id = id;
        Ok(candidate)
    }

    async fn update(&self, candidate: Candidate) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET name = $2, description = $3, creation_date = $4, city_id = $5, file_id = $6
            WHERE id = $1
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.creation_date)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }
}

#[derive(Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn save(&self, name: String, content: Vec<u8>) -> Result<FileRecord> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO files (name, content) VALUES ($1, $2) RETURNING id")
                .bind(&name)
                .bind(&content)
                .fetch_one(&self.pool)
                .await?;

        Ok(FileRecord { id, name, content })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>> {
        let record =
            sqlx::query_as::<_, FileRecord>("SELECT id, name, content FROM files WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, mut user: User) -> Result<Option<User>> {
        let inserted: std::result::Result<i32, sqlx::Error> = sqlx::query_scalar(
            "INSERT INTO users (email, name, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(id) => {
                user.id = id;
                Ok(Some(user))
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!(email = %user.email, "a user with this email already exists");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password FROM users WHERE email = $1 AND password = $2",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}

#[derive(Clone)]
pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        let cities = sqlx::query_as::<_, City>("SELECT id, name FROM cities ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(cities)
    }
}
