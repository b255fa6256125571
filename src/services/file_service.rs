use std::sync::Arc;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::file::FileRecord;
use crate::repository::FileRepository;

/// The only component allowed to touch file records. Vacancy and candidate
/// services go through it to keep entity/file lifecycles in one place.
#[derive(Clone)]
pub struct FileService {
    files: Arc<dyn FileRepository>,
}

impl FileService {
    pub fn new(files: Arc<dyn FileRepository>) -> Self {
        Self { files }
    }

    pub async fn save(&self, file: FileDto) -> Result<FileRecord> {
        self.files.save(file.name, file.content).await
    }

    pub async fn get_file_by_id(&self, id: i32) -> Result<Option<FileRecord>> {
        self.files.find_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.files.delete_by_id(id).await
    }
}
