use censys_client::{CensysClient, CensysError, Credentials};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds() -> Credentials {
    Credentials::new("api-id", "api-secret")
}

fn client_for(server: &MockServer) -> CensysClient {
    CensysClient::builder().base_url(server.uri()).build().unwrap()
}

#[tokio::test]
async fn test_submit_sends_json_export_request() {
    let server = MockServer::start().await;
    let query = "select ip from ipv4.20151020 where 443.https.tls.version = 'TLSv1.0'";

    Mock::given(method("POST"))
        .and(path("/export"))
        .and(basic_auth("api-id", "api-secret"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"query": query, "format": "json"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "configuration": {
                "format": "json",
                "compress": false,
                "headers": true,
                "flatten": true,
                "query": query
            },
            "job_id": "5627d5b4-a8d2-4f25-8d2e-ea5ed9b29c39"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let creds = creds();
    let job = client.export(&creds).submit(query).await.unwrap();

    assert_eq!(job.job_id, "5627d5b4-a8d2-4f25-8d2e-ea5ed9b29c39");
    assert_eq!(job.status, "success");
    assert_eq!(job.configuration.format, "json");
    assert_eq!(job.configuration.query, query);
    assert!(job.configuration.headers);
}

#[tokio::test]
async fn test_submit_rejects_incomplete_job() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "job_id": "abc123"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let creds = creds();
    let err = client.export(&creds).submit("q").await.unwrap_err();
    assert!(err.is_decode_error());
}

#[tokio::test]
async fn test_status_posts_literal_job_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export"))
        .and(basic_auth("api-id", "api-secret"))
        .and(header("content-type", "application/json"))
        .and(body_string("abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"pending"}"#))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let creds = creds();

    let raw = client.export(&creds).status("abc123").await.unwrap();
    assert_eq!(raw, br#"{"status":"pending"}"#);

    let value = client.export(&creds).status_value("abc123").await.unwrap();
    assert_eq!(value["status"], "pending");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.body == b"abc123"));
}

#[tokio::test]
async fn test_status_error_keeps_job_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/export"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let creds = creds();
    let err = client.export(&creds).status("missing-job").await.unwrap_err();

    match err {
        CensysError::Http { code, url, body } => {
            assert_eq!(code, 404);
            assert_eq!(url, format!("{}/export", server.uri()));
            assert_eq!(body, "missing-job");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_primitive_error_statuses() {
    for code in [400u16, 404, 429, 500] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let url = format!("{}/export", server.uri());
        let err = client
            .request(&creds(), &url, r#"{"query":"x"}"#)
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains(&code.to_string()), "{msg}");
        assert!(msg.contains(&url), "{msg}");
        assert!(msg.contains(r#"{"query":"x"}"#), "{msg}");
    }
}
