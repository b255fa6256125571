use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use jobboard_backend::repository::memory::{
    MemoryCandidateRepository, MemoryCityRepository, MemoryFileRepository, MemoryUserRepository,
    MemoryVacancyRepository,
};
use jobboard_backend::AppState;

const BOUNDARY: &str = "test-boundary";

fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryVacancyRepository::new()),
        Arc::new(MemoryCandidateRepository::new()),
        Arc::new(MemoryFileRepository::new()),
        Arc::new(MemoryUserRepository::new()),
        Arc::new(MemoryCityRepository::new()),
    );
    jobboard_backend::app(state)
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let register = Request::builder()
        .method("POST")
        .uri("/api/users/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"email": email, "name": "Test User", "password": password}).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(register).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let login = Request::builder()
        .method("POST")
        .uri("/api/users/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"email": email, "password": password}).to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(login).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

fn multipart_request(method: &str, uri: &str, cookie: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("cookie", cookie)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app();
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn cities_are_listed() {
    let app = test_app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/cities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cities = body_json(resp).await;
    assert_eq!(cities.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn mutating_routes_require_a_session() {
    let app = test_app();
    let body = multipart_body(
        &[
            ("title", "Rust Developer"),
            ("description", "systems work"),
            ("visible", "true"),
            ("city_id", "1"),
        ],
        None,
    );
    let req = Request::builder()
        .method("POST")
        .uri("/api/vacancies")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn vacancy_lifecycle_keeps_entity_and_file_in_step() {
    let app = test_app();
    let cookie = register_and_login(&app, "hr@mail.ru", "qwerty").await;

    // create with photo.png [1,2,3]
    let body = multipart_body(
        &[
            ("title", "Rust Developer"),
            ("description", "systems work"),
            ("visible", "true"),
            ("city_id", "1"),
        ],
        Some(("photo.png", &[1, 2, 3])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/vacancies", &cookie, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    let file_id = created["file_id"].as_i64().unwrap();
    assert!(id > 0);
    assert!(file_id > 0);

    // the attachment resolves to the uploaded bytes
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/files/{file_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, vec![1, 2, 3]);

    // update with new.png [4,5,6] replaces the attachment
    let body = multipart_body(
        &[
            ("title", "Senior Rust Developer"),
            ("description", "more systems work"),
            ("visible", "false"),
            ("city_id", "2"),
        ],
        Some(("new.png", &[4, 5, 6])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request(
            "PUT",
            &format!("/api/vacancies/{id}"),
            &cookie,
            body,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    let new_file_id = updated["file_id"].as_i64().unwrap();
    assert_ne!(new_file_id, file_id);
    assert_eq!(updated["title"], "Senior Rust Developer");

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/files/{file_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/files/{new_file_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_bytes(resp).await, vec![4, 5, 6]);

    // delete removes vacancy and attachment
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/vacancies/{id}"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/vacancies/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/files/{new_file_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn candidate_create_and_delete_removes_resume() {
    let app = test_app();
    let cookie = register_and_login(&app, "hr@mail.ru", "qwerty").await;

    let body = multipart_body(
        &[
            ("name", "Ann"),
            ("description", "X"),
            ("city_id", "1"),
        ],
        Some(("cv.pdf", &[7, 8, 9])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/candidates", &cookie, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    let file_id = created["file_id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/candidates/{id}"))
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    for uri in [format!("/api/candidates/{id}"), format!("/api/files/{file_id}")] {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let app = test_app();
    let _ = register_and_login(&app, "ann@mail.ru", "qwerty").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": "ann@mail.ru", "name": "Impostor", "password": "hunter2"})
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // the impostor's password never works
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"email": "ann@mail.ru", "password": "hunter2"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = test_app();
    let cookie = register_and_login(&app, "hr@mail.ru", "qwerty").await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/logout")
                .header("cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = multipart_body(
        &[
            ("title", "Rust Developer"),
            ("description", "systems work"),
            ("visible", "true"),
            ("city_id", "1"),
        ],
        None,
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/vacancies", &cookie, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_vacancy_is_reported_as_not_found() {
    let app = test_app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/vacancies/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}
