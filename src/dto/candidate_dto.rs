use validator::Validate;

/// Multipart form fields for creating or updating a candidate.
#[derive(Debug, Clone, Default, Validate)]
pub struct CandidateForm {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 1, message = "city_id must be a valid city"))]
    pub city_id: i32,
}
