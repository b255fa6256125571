/// Binary upload payload carried from the HTTP layer into the services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDto {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileDto {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
