pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;

use crate::repository::memory::{
    MemoryCandidateRepository, MemoryCityRepository, MemoryFileRepository, MemoryUserRepository,
    MemoryVacancyRepository,
};
use crate::repository::postgres::{
    PgCandidateRepository, PgCityRepository, PgFileRepository, PgUserRepository,
    PgVacancyRepository,
};
use crate::repository::{
    CandidateRepository, CityRepository, FileRepository, UserRepository, VacancyRepository,
};
use crate::services::{
    candidate_service::CandidateService, city_service::CityService, file_service::FileService,
    session_service::SessionService, user_service::UserService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub vacancy_service: VacancyService,
    pub candidate_service: CandidateService,
    pub file_service: FileService,
    pub user_service: UserService,
    pub city_service: CityService,
    pub session_service: SessionService,
}

impl AppState {
    /// Repositories are injected here; nothing below the routes reaches for
    /// globals.
    pub fn new(
        vacancies: Arc<dyn VacancyRepository>,
        candidates: Arc<dyn CandidateRepository>,
        files: Arc<dyn FileRepository>,
        users: Arc<dyn UserRepository>,
        cities: Arc<dyn CityRepository>,
    ) -> Self {
        let file_service = FileService::new(files);
        Self {
            vacancy_service: VacancyService::new(vacancies, file_service.clone()),
            candidate_service: CandidateService::new(candidates, file_service.clone()),
            user_service: UserService::new(users),
            city_service: CityService::new(cities),
            session_service: SessionService::new(),
            file_service,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgVacancyRepository::new(pool.clone())),
            Arc::new(PgCandidateRepository::new(pool.clone())),
            Arc::new(PgFileRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgCityRepository::new(pool)),
        )
    }

    /// Early-stage fallback used when `DATABASE_URL` is not configured.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryVacancyRepository::with_sample_vacancies()),
            Arc::new(MemoryCandidateRepository::new()),
            Arc::new(MemoryFileRepository::new()),
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryCityRepository::new()),
        )
    }
}

/// Full application router; layers (tracing, CORS, body limits) are added by
/// the binary.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/vacancies", get(routes::vacancy::list_vacancies))
        .route("/api/vacancies/:id", get(routes::vacancy::get_vacancy))
        .route("/api/candidates", get(routes::candidate::list_candidates))
        .route("/api/candidates/:id", get(routes::candidate::get_candidate))
        .route("/api/files/:id", get(routes::file::get_file))
        .route("/api/cities", get(routes::city::list_cities))
        .route("/api/users/register", post(routes::user::register))
        .route("/api/users/login", post(routes::user::login))
        .route("/api/users/logout", post(routes::user::logout));

    let protected = Router::new()
        .route("/api/vacancies", post(routes::vacancy::create_vacancy))
        .route(
            "/api/vacancies/:id",
            put(routes::vacancy::update_vacancy).delete(routes::vacancy::delete_vacancy),
        )
        .route("/api/candidates", post(routes::candidate::create_candidate))
        .route(
            "/api/candidates/:id",
            put(routes::candidate::update_candidate).delete(routes::candidate::delete_candidate),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session::require_session,
        ));

    public.merge(protected).with_state(state)
}
