use validator::Validate;

/// Multipart form fields for creating or updating a vacancy.
#[derive(Debug, Clone, Default, Validate)]
pub struct VacancyForm {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub visible: bool,
    #[validate(range(min = 1, message = "city_id must be a valid city"))]
    pub city_id: i32,
}
