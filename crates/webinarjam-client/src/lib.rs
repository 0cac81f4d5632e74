//! WebinarJam registration API client.

mod client;
mod error;
mod types;

pub use client::{WebinarJamClient, DEFAULT_REGISTER_URL};
pub use error::WebinarJamError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer, timeout: Duration) -> WebinarJamClient {
        WebinarJamClient::new(
            Credentials::new("test-api-key", "42", "7"),
            format!("{}/webinarjam/register", mock_server.uri()),
            timeout,
        )
        .unwrap()
    }

    fn registrant() -> Registrant {
        Registrant {
            first_name: "Mary".into(),
            last_name: "Jane Watson".into(),
            email: "mary@example.com".into(),
            phone: "+15555550100".into(),
        }
    }

    #[tokio::test]
    async fn test_register_sends_form_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webinarjam/register"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header_exists("user-agent"))
            .and(body_string_contains("api_key=test-api-key"))
            .and(body_string_contains("webinar_id=42"))
            .and(body_string_contains("schedule=7"))
            .and(body_string_contains("first_name=Mary"))
            .and(body_string_contains("last_name=Jane+Watson"))
            .and(body_string_contains("email=mary%40example.com"))
            .and(body_string_contains("phone=%2B15555550100"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "success"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Duration::from_secs(5));
        let result = client.register(&registrant()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_success() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "status": "success",
            "user": {
                "user_id": "u1",
                "live_room_url": "http://x",
                "replay_room_url": "http://y",
                "thank_you_url": "http://z"
            }
        });

        Mock::given(method("POST"))
            .and(path("/webinarjam/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Duration::from_secs(5));
        let user = client.register(&registrant()).await.unwrap();

        assert_eq!(user.user_id.as_deref(), Some("u1"));
        assert_eq!(user.live_room_url.as_deref(), Some("http://x"));
        assert_eq!(user.replay_room_url.as_deref(), Some("http://y"));
        assert_eq!(user.thank_you_url.as_deref(), Some("http://z"));
    }

    #[tokio::test]
    async fn test_register_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webinarjam/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"status": "failed", "error": "Webinar full"}),
            ))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Duration::from_secs(5));
        let result = client.register(&registrant()).await;

        match result {
            Err(WebinarJamError::Rejected(message)) => assert_eq!(message, "Webinar full"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_service_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webinarjam/register"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Duration::from_secs(5));
        let result = client.register(&registrant()).await;

        match result {
            Err(WebinarJamError::Api { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "Service Unavailable");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webinarjam/register"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server, Duration::from_millis(200));
        let result = client.register(&registrant()).await;

        match result {
            Err(WebinarJamError::Http(e)) => assert!(e.is_timeout()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_connection_refused() {
        let client = WebinarJamClient::new(
            Credentials::new("test-api-key", "42", "7"),
            "http://127.0.0.1:9/webinarjam/register",
            Duration::from_secs(5),
        )
        .unwrap();

        let result = client.register(&registrant()).await;
        assert!(matches!(result, Err(WebinarJamError::Http(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_api_key() {
        let credentials = Credentials::new("super-secret", "42", "7");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("42"));
    }

    #[test]
    fn test_register_url_getter() {
        let client = WebinarJamClient::new(
            Credentials::new("k", "w", "s"),
            DEFAULT_REGISTER_URL,
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(client.register_url(), "https://api.webinarjam.com/webinarjam/register");
    }
}
