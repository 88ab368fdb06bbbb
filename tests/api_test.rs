use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_api::config::Config;
use portfolio_api::state::AppState;

const PORTFOLIO_DOC: &str = r#"
personal:
  name: "John Doe"
  title: "Software Engineer"
  location: "San Francisco, CA"
  summary: "Experienced software engineer"
  email: "john@example.com"
  linkedin: "linkedin.com/in/johndoe"
  github: "github.com/johndoe"
  profile: "avatars.githubusercontent.com/u/123"
experience:
  - company: "Tech Corp"
    position: "Senior Engineer"
    duration: "2 years"
    location: "San Francisco, CA"
    period: "2022-2024"
    achievements:
      - "Built scalable system"
education:
  - institution: "University of Tech"
    degree: "Computer Science"
    period: "2018-2022"
    location: "San Francisco, CA"
skills:
  - category: "Programming"
    values: ["Python", "Rust"]
  - category: "Cloud"
    values: ["AWS", "GCP"]
  - category: "Backend"
    values: ["FastAPI"]
certifications:
  - name: "AWS Certified"
    issuer: "Amazon"
"#;

fn test_app(doc: &str) -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("portfolio.yml");
    std::fs::write(&path, doc).expect("Failed to write portfolio file");

    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        portfolio_file: path.to_string_lossy().into_owned(),
        templates_dir: "templates".into(),
        static_dir: "static".into(),
    };
    let state = AppState::new(config).expect("Failed to build state");
    (portfolio_api::app(state), temp_dir)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
}

#[tokio::test]
async fn test_health() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["data_loaded"], false);
}

#[tokio::test]
async fn test_get_portfolio() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app, "/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personal"]["name"], "John Doe");
    assert_eq!(body["personal"]["title"], "Software Engineer");
    assert_eq!(body["experience"].as_array().unwrap().len(), 1);
    assert_eq!(body["education"].as_array().unwrap().len(), 1);
    assert_eq!(body["skills"].as_array().unwrap().len(), 5);
    assert_eq!(body["certifications"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_skills_ranked() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app, "/api/skills").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["AWS", "GCP", "Python", "Rust", "FastAPI"]);
}

#[tokio::test]
async fn test_get_experience() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app, "/api/experience").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["company"], "Tech Corp");
    assert_eq!(body[0]["achievements"][0], "Built scalable system");
}

#[tokio::test]
async fn test_get_education_and_certifications() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app.clone(), "/api/education").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["institution"], "University of Tech");

    let (status, body) = get_json(app, "/api/certifications").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["issuer"], "Amazon");
}

#[tokio::test]
async fn test_get_projects_defaults_to_empty() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, body) = get_json(app, "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_get_projects_when_present() {
    let doc = format!(
        "{PORTFOLIO_DOC}\nprojects:\n  - name: \"portfolio-api\"\n    description: \"This site\"\n    technologies: [\"Rust\"]\n"
    );
    let (app, _temp) = test_app(&doc);

    let (status, body) = get_json(app, "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "portfolio-api");
}

#[tokio::test]
async fn test_index_page_renders_html() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("text/html"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("John Doe"));
    assert!(page.contains("Software Engineer"));
    assert!(page.contains("San Francisco, CA"));
}

#[tokio::test]
async fn test_missing_data_file_returns_500() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        host: "127.0.0.1".into(),
        port: 0,
        portfolio_file: temp_dir
            .path()
            .join("nonexistent.yml")
            .to_string_lossy()
            .into_owned(),
        templates_dir: "templates".into(),
        static_dir: "static".into(),
    };
    let app = portfolio_api::app(AppState::new(config).unwrap());

    let (status, body) = get_json(app, "/api/portfolio").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_invalid_data_file_returns_500() {
    let doc = PORTFOLIO_DOC.replace("  name: \"John Doe\"\n", "");
    let (app, _temp) = test_app(&doc);

    let (status, body) = get_json(app, "/api/portfolio").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("personal.name"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (app, _temp) = test_app(PORTFOLIO_DOC);

    let (status, _) = get(app, "/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cached_document_survives_file_removal() {
    let (app, temp) = test_app(PORTFOLIO_DOC);

    let (status, _) = get_json(app.clone(), "/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);

    std::fs::remove_file(temp.path().join("portfolio.yml")).unwrap();

    let (status, body) = get_json(app, "/api/portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personal"]["name"], "John Doe");
}
