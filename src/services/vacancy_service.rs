use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::VacancyRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct VacancyService {
    vacancies: Arc<dyn VacancyRepository>,
    files: FileService,
}

impl VacancyService {
    pub fn new(vacancies: Arc<dyn VacancyRepository>, files: FileService) -> Self {
        Self { vacancies, files }
    }

    /// Saves the file first so the vacancy never points at a missing record.
    /// A zero-length payload still produces a file record.
    pub async fn save(&self, mut vacancy: Vacancy, file: FileDto) -> Result<Vacancy> {
        let record = self.files.save(file).await?;
        vacancy.file_id = record.id;
        self.vacancies.save(vacancy).await
    }

    /// A non-empty payload replaces the attachment: the new file is saved and
    /// linked before the old one is deleted. The replacement is best-effort
    /// and happens even if the repository update then reports a missing id.
    pub async fn update(&self, mut vacancy: Vacancy, file: FileDto) -> Result<bool> {
        if !file.is_empty() {
            let old_file_id = vacancy.file_id;
            let record = self.files.save(file).await?;
            vacancy.file_id = record.id;
            self.files.delete_by_id(old_file_id).await?;
        }
        self.vacancies.update(vacancy).await
    }

    /// Silent no-op when the id is unknown; otherwise the vacancy goes first,
    /// then its attachment.
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        if let Some(vacancy) = self.vacancies.find_by_id(id).await? {
            self.vacancies.delete_by_id(id).await?;
            self.files.delete_by_id(vacancy.file_id).await?;
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        self.vacancies.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Vacancy>> {
        self.vacancies.find_all().await
    }
}
