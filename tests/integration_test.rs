//! Integration tests for the survey API, driven through the full router

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use futures_util::future::join_all;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use survey_form::api::{create_router, AppState};
use survey_form::{Question, QuestionCatalog, ServerConfig, SubmissionStore, SurveyService};
use tower::ServiceExt;

fn app_with(catalog: QuestionCatalog, config: ServerConfig) -> Router {
    let survey = SurveyService::new(catalog, SubmissionStore::new());
    create_router(Arc::new(AppState::new(config, survey)))
}

fn default_app() -> Router {
    app_with(QuestionCatalog::default(), ServerConfig::default())
}

fn name_age_app() -> Router {
    let catalog = QuestionCatalog::new(vec![
        Question::text("name", "What is your name?").required(),
        Question::number("age", "Your age"),
    ])
    .unwrap();
    app_with(catalog, ServerConfig::default())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap()
}

fn post_answers(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/answers")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://example.com")
        .body(body.into())
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, header::HeaderMap, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn valid_batch() -> Value {
    json!([
        {"questionId": "name", "value": "Ann"},
        {"questionId": "email", "value": "ann@example.com"},
        {"questionId": "age", "value": 30},
        {"questionId": "gender", "value": "Female"},
        {"questionId": "feedback", "value": null}
    ])
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("survey-form-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_get_questions() {
    let app = default_app();
    let (status, headers, body) = send(&app, get("/questions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let questions: Vec<Question> = serde_json::from_str(&body).unwrap();
    assert_eq!(questions, QuestionCatalog::default().list());

    let raw: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(raw[0]["id"], "name");
    assert_eq!(raw[0]["required"], true);
    assert_eq!(raw[2]["type"], "number");
    assert!(raw[2].get("placeholder").is_none());
    assert_eq!(raw[3]["options"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_name_age_scenario() {
    let app = name_age_app();

    let (status, _, body) = send(&app, post_answers(r#"[{"questionId":"age","value":5}]"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("What is your name?"));

    let (status, headers, body) =
        send(&app, post_answers(r#"[{"questionId":"name","value":"Ann"}]"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let resp: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["message"], "Answers saved");
    assert_eq!(resp["totalSubmissions"], 1);
    let submission_id = resp["submissionId"].as_str().unwrap().to_string();

    let (status, _, body) = send(&app, get("/submissions")).await;
    assert_eq!(status, StatusCode::OK);
    let stored: Value = serde_json::from_str(&body).unwrap();
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"], submission_id.as_str());
    assert_eq!(stored[0]["answers"], json!([{"questionId": "name", "value": "Ann"}]));
    let timestamp = stored[0]["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = default_app();

    let bodies = [
        "{not json",
        r#"{"questionId":"name"}"#,
        r#"[{"questionId":"name","value":[1]}]"#,
    ];

    for body in bodies {
        let (status, headers, text) = send(&app, post_answers(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));
        assert!(!text.is_empty());
        assert!(!text.contains("Required question"));
    }

    let (_, _, body) = send(&app, get("/submissions")).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_answer_without_question_id_is_stored() {
    let app = name_age_app();
    let batch = r#"[{"questionId":"name","value":"Ann"},{"value":"extra"}]"#;

    let (status, _, body) = send(&app, post_answers(batch)).await;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    let resp: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(resp["totalSubmissions"], 1);

    let (_, _, body) = send(&app, get("/submissions")).await;
    let stored: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0]["answers"],
        json!([
            {"questionId": "name", "value": "Ann"},
            {"questionId": "", "value": "extra"}
        ])
    );
}

#[tokio::test]
async fn test_body_decoded_without_content_type() {
    let app = name_age_app();
    let req = Request::builder()
        .method("POST")
        .uri("/answers")
        .body(Body::from(r#"[{"questionId":"name","value":"Ann"}]"#))
        .unwrap();
    let (status, _, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_required_names_question() {
    let app = default_app();
    let batch = json!([
        {"questionId": "name", "value": "Ann"},
        {"questionId": "email", "value": ""},
        {"questionId": "gender", "value": "Female"}
    ]);

    let (status, headers, body) = send(&app, post_answers(batch.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));
    assert_eq!(body, "Required question not answered: Your email");
}

#[tokio::test]
async fn test_identical_batches_stored_twice() {
    let app = default_app();

    let (_, _, first) = send(&app, post_answers(valid_batch().to_string())).await;
    let (_, _, second) = send(&app, post_answers(valid_batch().to_string())).await;

    let first: Value = serde_json::from_str(&first).unwrap();
    let second: Value = serde_json::from_str(&second).unwrap();
    assert_ne!(first["submissionId"], second["submissionId"]);
    assert_eq!(second["totalSubmissions"], 2);

    let (_, _, body) = send(&app, get("/submissions")).await;
    let stored: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["answers"], valid_batch());
    assert_eq!(stored[0]["answers"], stored[1]["answers"]);
    assert_eq!(stored[0]["id"], first["submissionId"]);
    assert_eq!(stored[1]["id"], second["submissionId"]);
}

#[tokio::test]
async fn test_submissions_empty_initially() {
    let app = default_app();
    let (status, headers, body) = send(&app, get("/submissions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(body, "[]");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions() {
    let app = default_app();
    let n = 64;

    let requests = (0..n).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let batch = json!([
                {"questionId": "name", "value": format!("user-{}", i)},
                {"questionId": "email", "value": "x@example.com"},
                {"questionId": "gender", "value": "Male"}
            ]);
            send(&app, post_answers(batch.to_string())).await
        })
    });

    let mut ids = HashSet::new();
    for result in join_all(requests).await {
        let (status, _, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        let resp: Value = serde_json::from_str(&body).unwrap();
        ids.insert(resp["submissionId"].as_str().unwrap().to_string());
    }
    assert_eq!(ids.len(), n);

    let (_, _, body) = send(&app, get("/submissions")).await;
    let stored: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(stored.len(), n);

    let stored_ids: HashSet<String> = stored
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(stored_ids, ids);

    let names: HashSet<&str> = stored
        .iter()
        .map(|s| s["answers"][0]["value"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), n);
}

#[tokio::test]
async fn test_health() {
    let app = default_app();
    send(&app, post_answers(valid_batch().to_string())).await;

    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(health["totalSubmissions"], 1);
}

#[tokio::test]
async fn test_landing_page_and_static_assets() {
    let templates = scratch_dir("templates");
    let assets = scratch_dir("static");
    std::fs::write(templates.join("index.html"), "<title>{{title}}</title>").unwrap();
    std::fs::write(assets.join("app.js"), "console.log('hi');").unwrap();

    let config = ServerConfig {
        templates_dir: templates,
        static_dir: assets,
        title: "Feedback".to_string(),
        ..Default::default()
    };
    let app = app_with(QuestionCatalog::default(), config);

    let (status, headers, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert_eq!(body, "<title>Feedback</title>");

    let (status, _, body) = send(&app, get("/static/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('hi');");

    let (status, _, _) = send(&app, get("/static/missing.js")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_landing_page_without_template() {
    let config = ServerConfig {
        templates_dir: PathBuf::from("/nonexistent/survey-form-templates"),
        ..Default::default()
    };
    let app = app_with(QuestionCatalog::default(), config);

    let (status, _, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.is_empty());
}
