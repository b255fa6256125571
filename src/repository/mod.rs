//! Persistence ports. Services receive these as `Arc<dyn …>` at
//! construction time; adapters live in [`memory`] and [`postgres`].

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::city::City;
use crate::models::file::FileRecord;
use crate::models::user::User;
use crate::models::vacancy::Vacancy;

pub mod memory;
pub mod postgres;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    /// Stores the vacancy under a freshly assigned id and returns it.
    async fn save(&self, vacancy: Vacancy) -> Result<Vacancy>;

    /// Replaces the whole record. Returns `false` when the id is unknown,
    /// leaving the store untouched.
    async fn update(&self, vacancy: Vacancy) -> Result<bool>;

    /// Idempotent: deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<()>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>>;

    async fn find_all(&self) -> Result<Vec<Vacancy>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn save(&self, candidate: Candidate) -> Result<Candidate>;

    async fn update(&self, candidate: Candidate) -> Result<bool>;

    async fn delete_by_id(&self, id: i32) -> Result<()>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>>;

    async fn find_all(&self) -> Result<Vec<Candidate>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn save(&self, name: String, content: Vec<u8>) -> Result<FileRecord>;

    async fn find_by_id(&self, id: i32) -> Result<Option<FileRecord>>;

    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `None` when the email is already taken; the existing row is
    /// never overwritten.
    async fn save(&self, user: User) -> Result<Option<User>>;

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<City>>;
}
