pub mod candidate_dto;
pub mod file_dto;
pub mod user_dto;
pub mod vacancy_dto;
