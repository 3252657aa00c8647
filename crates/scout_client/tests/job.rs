use std::time::Duration;

use scout_client::{ClientSettings, JobFailureKind, JobStarter, ReqwestJobStarter};
use scout_core::CrawlRequest;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        api_base: server.uri(),
        ..ClientSettings::default()
    }
}

fn request() -> CrawlRequest {
    CrawlRequest::new(
        "https://example.edu",
        vec!["scholarship".to_string(), "aid".to_string()],
        2,
    )
}

#[tokio::test]
async fn create_job_posts_request_and_returns_job_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .and(body_json(serde_json::json!({
            "url": "https://example.edu",
            "keywords": ["scholarship", "aid"],
            "depth": 2,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "job_id": "abc",
        })))
        .mount(&server)
        .await;

    let starter = ReqwestJobStarter::new(settings(&server));
    let job_id = starter.create_job(&request()).await.expect("job created");
    assert_eq!(job_id, "abc");
}

#[tokio::test]
async fn create_job_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let starter = ReqwestJobStarter::new(settings(&server));
    let err = starter.create_job(&request()).await.unwrap_err();
    assert_eq!(err.kind, JobFailureKind::HttpStatus(503));
}

#[tokio::test]
async fn create_job_fails_on_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "jobid": "abc" })),
        )
        .mount(&server)
        .await;

    let starter = ReqwestJobStarter::new(settings(&server));
    let err = starter.create_job(&request()).await.unwrap_err();
    assert_eq!(err.kind, JobFailureKind::MalformedResponse);
}

#[tokio::test]
async fn create_job_times_out_on_stalled_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/crawl"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "job_id": "late" })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings(&server)
    };
    let starter = ReqwestJobStarter::new(settings);
    let err = starter.create_job(&request()).await.unwrap_err();
    assert_eq!(err.kind, JobFailureKind::Timeout);
}

#[tokio::test]
async fn create_job_fails_on_unreachable_base() {
    let starter = ReqwestJobStarter::new(ClientSettings {
        api_base: "this is not a url".to_string(),
        ..ClientSettings::default()
    });
    let err = starter.create_job(&request()).await.unwrap_err();
    assert_eq!(err.kind, JobFailureKind::InvalidUrl);
}
