pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::profiles::handlers as profiles;
use crate::reference::handlers as reference;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/auth/register", post(profiles::handle_register))
        .route("/api/v1/auth/login", post(profiles::handle_login))
        // Analysis
        .route("/api/v1/analysis", post(analysis::handle_analyze_upload))
        .route("/api/v1/analysis/text", post(analysis::handle_analyze_text))
        // Saved profile and progress tracking
        .route("/api/v1/profile", get(profiles::handle_get_profile))
        .route(
            "/api/v1/profile/progress",
            get(profiles::handle_get_progress),
        )
        .route(
            "/api/v1/profile/skills",
            post(profiles::handle_add_skill).patch(profiles::handle_update_skill),
        )
        // Reference data
        .route(
            "/api/v1/reference/countries",
            get(reference::handle_list_countries),
        )
        .route(
            "/api/v1/reference/visas/:country",
            get(reference::handle_get_visa),
        )
        .route(
            "/api/v1/reference/resources",
            get(reference::handle_get_resources),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::analyzer::CareerData;
    use crate::analysis::extractor::PdfTextExtractor;
    use crate::analysis::EXTRACTION_FAILURE_MESSAGE;
    use crate::config::Config;
    use crate::profiles::InMemoryProfileStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryProfileStore::new()),
            extractor: Arc::new(PdfTextExtractor),
            career: Arc::new(CareerData::builtin().unwrap()),
            config: Config {
                company_sample_seed: Some(7),
                ..Config::default()
            },
        })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn register(app: &Router, email: &str) {
        let (status, _) = send(
            app,
            Method::POST,
            "/api/v1/auth/register",
            Some(json!({"email": email, "password": "hunter2"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    async fn analyze(app: &Router, email: Option<&str>, resume_text: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/analysis/text",
            Some(json!({
                "job_title": "Senior DevOps Engineer",
                "country": "USA",
                "resume_text": resume_text,
                "email": email,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "navigator");
    }

    #[tokio::test]
    async fn test_register_login_flow() {
        let app = app();
        register(&app, " dev@example.com ").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/register",
            Some(json!({"email": "dev@example.com", "password": "other"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["message"], "User already exists. Please login.");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "dev@example.com", "password": "hunter2"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "dev@example.com");
        assert_eq!(body["profile"], Value::Null);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "dev@example.com", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "nobody@example.com", "password": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "User not found.");
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/auth/register",
            Some(json!({"email": "  ", "password": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_text_analysis_without_email_is_not_saved() {
        let body = analyze(&app(), None, "Skills: Docker, Kubernetes, AWS, Linux, Git").await;
        assert_eq!(body["success"], true);
        assert_eq!(body["match_score"], 50);
        assert_eq!(body["detected_role"], "DevOps Engineer");
        assert_eq!(body["saved"], false);
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_resume_is_ok_with_failure_body() {
        let body = analyze(&app(), None, "   ").await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], EXTRACTION_FAILURE_MESSAGE);
        assert_eq!(body["saved"], false);
    }

    #[tokio::test]
    async fn test_missing_job_title_is_rejected() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/v1/analysis/text",
            Some(json!({"job_title": "", "country": "USA", "resume_text": "Docker"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unregistered_email_is_not_saved() {
        let body = analyze(&app(), Some("ghost@example.com"), "Docker").await;
        assert_eq!(body["success"], true);
        assert_eq!(body["saved"], false);
    }

    #[tokio::test]
    async fn test_saved_analysis_drives_profile_and_progress() {
        let app = app();
        register(&app, "dev@example.com").await;

        let (status, _) =
            send(&app, Method::GET, "/api/v1/profile?email=dev@example.com", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let body = analyze(
            &app,
            Some("dev@example.com"),
            "Skills: Docker, Kubernetes, AWS, Linux, Git",
        )
        .await;
        assert_eq!(body["saved"], true);

        let (status, profile) =
            send(&app, Method::GET, "/api/v1/profile?email=dev@example.com", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["match_score"], 50);
        assert!(profile.get("saved").is_none());

        let (_, progress) = send(
            &app,
            Method::GET,
            "/api/v1/profile/progress?email=dev@example.com",
            None,
        )
        .await;
        let total = progress["summary"]["total"].as_u64().unwrap();
        let completed = progress["summary"]["completed"].as_u64().unwrap();
        assert_eq!(total, 16);
        assert_eq!(completed, 5);

        let (status, progress) = send(
            &app,
            Method::PATCH,
            "/api/v1/profile/skills",
            Some(json!({"email": "dev@example.com", "skill": "jenkins", "completed": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(progress["summary"]["completed"], 6);

        let (status, progress) = send(
            &app,
            Method::POST,
            "/api/v1/profile/skills",
            Some(json!({"email": "dev@example.com", "skill": "German", "category": "Language"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(progress["summary"]["total"], 17);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/profile/skills",
            Some(json!({"email": "dev@example.com", "skill": "german", "category": "Language"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/v1/profile/skills",
            Some(json!({"email": "dev@example.com", "skill": "COBOL", "completed": true})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, login) = send(
            &app,
            Method::POST,
            "/api/v1/auth/login",
            Some(json!({"email": "dev@example.com", "password": "hunter2"})),
        )
        .await;
        let missing = login["profile"]["missing_skills"].as_array().unwrap();
        assert!(missing.iter().all(|f| f["skill"] != "Jenkins"));
        assert!(missing.iter().any(|f| f["skill"] == "German"));
    }

    #[tokio::test]
    async fn test_multipart_upload() {
        let boundary = "navigatorboundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"job_title\"\r\n\r\nData Scientist\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"country\"\r\n\r\nIndia\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\nPython, SQL and Pandas\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/analysis")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["detected_role"], "Data Scientist");
        assert_eq!(json["target_country"], "India");
    }

    #[tokio::test]
    async fn test_unreadable_pdf_upload_reports_failure() {
        let boundary = "navigatorboundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"job_title\"\r\n\r\nData Scientist\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"country\"\r\n\r\nUK\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\nPython, SQL and Pandas\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/analysis")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], EXTRACTION_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_multipart_without_resume_is_rejected() {
        let boundary = "navigatorboundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"job_title\"\r\n\r\nDevOps\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"country\"\r\n\r\nUSA\r\n--{b}--\r\n",
            b = boundary
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/analysis")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reference_endpoints() {
        let app = app();

        let (status, countries) =
            send(&app, Method::GET, "/api/v1/reference/countries", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(countries.as_array().unwrap().len(), 7);

        let (status, visa) = send(&app, Method::GET, "/api/v1/reference/visas/uk", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(visa["visa"], "Skilled Worker Visa");

        let (status, _) = send(&app, Method::GET, "/api/v1/reference/visas/India", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, topics) = send(
            &app,
            Method::GET,
            "/api/v1/reference/resources?skills=Docker,CI/CD",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(topics[0]["topic"], "Docker");
        assert_eq!(topics[0]["matches_gap"], true);
        assert_eq!(topics[1]["topic"], "CI/CD");
        assert_eq!(topics[2]["matches_gap"], false);
    }
}
