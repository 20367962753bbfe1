//! ChatClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, AiResponse, ChatClient, ChatMessage};

use super::client::GeminiClient;

#[async_trait]
impl ChatClient for GeminiClient {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages);
        let url = self.api_url();

        debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::gemini::GeminiConfig;
    use crate::{AiError, ChatClient, ChatMessage};

    use super::GeminiClient;

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key").with_api_base(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn send_message_parses_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "정답입니다!" }] } }],
                "usageMetadata": { "promptTokenCount": 8, "candidatesTokenCount": 3 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .send_message(&[ChatMessage::user("95%")])
            .await
            .unwrap();
        assert_eq!(response.content, "정답입니다!");
        assert_eq!(response.usage.total_tokens(), 11);
    }

    #[tokio::test]
    async fn send_message_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .send_message(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn send_message_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .send_message(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        match err {
            AiError::ApiError(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("quota exceeded"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_message_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client
            .send_message(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }
}
