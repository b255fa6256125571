use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::repository::CandidateRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct CandidateService {
    candidates: Arc<dyn CandidateRepository>,
    files: FileService,
}

impl CandidateService {
    pub fn new(candidates: Arc<dyn CandidateRepository>, files: FileService) -> Self {
        Self { candidates, files }
    }

    /// Saves the resume first so the candidate never points at a missing
    /// record. A zero-length payload still produces a file record.
    pub async fn save(&self, mut candidate: Candidate, file: FileDto) -> Result<Candidate> {
        let record = self.files.save(file).await?;
        candidate.file_id = record.id;
        self.candidates.save(candidate).await
    }

    /// A non-empty payload replaces the resume: new file saved and linked
    /// before the old one is deleted, even if the repository update then
    /// reports a missing id.
    pub async fn update(&self, mut candidate: Candidate, file: FileDto) -> Result<bool> {
        if !file.is_empty() {
            let old_file_id = candidate.file_id;
            let record = self.files.save(file).await?;
            candidate.file_id = record.id;
            self.files.delete_by_id(old_file_id).await?;
        }
        self.candidates.update(candidate).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        if let Some(candidate) = self.candidates.find_by_id(id).await? {
            self.candidates.delete_by_id(id).await?;
            self.files.delete_by_id(candidate.file_id).await?;
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        self.candidates.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Candidate>> {
        self.candidates.find_all().await
    }
}
