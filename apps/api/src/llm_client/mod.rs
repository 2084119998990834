/// LLM Client — the single point of entry for all chat-completion calls in
/// linkpulse.
///
/// ARCHITECTURAL RULE: No other module may call the OpenRouter API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: openai/gpt-3.5-turbo (hardcoded — do not make configurable to
/// prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ApiError;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for all LLM calls in linkpulse.
pub const MODEL: &str = "openai/gpt-3.5-turbo";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// The single LLM client used by all handlers.
/// Wraps an OpenAI-compatible chat-completion endpoint. One message in, one
/// message out; no retries, no backoff, library-default timeout.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENROUTER_API_URL.to_string())
    }

    /// Same client pointed at a different completion endpoint.
    /// Used by tests to target a mock gateway.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Sends a one-message conversation and returns the first choice's
    /// message content.
    pub async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let request_body = ChatCompletionRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyChoices)?;

        debug!(
            "chat completion succeeded ({} chars)",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::with_base_url(
            "test-key".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
        )
    }

    #[tokio::test]
    async fn complete_returns_first_choice_content_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": MODEL,
                "messages": [{"role": "user", "content": "say hi"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "hi there"}},
                    {"message": {"role": "assistant", "content": "second choice, ignored"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).complete("say hi").await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn non_2xx_becomes_status_error_with_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server).complete("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "Status 503: unavailable");
    }

    #[tokio::test]
    async fn empty_choices_is_an_explicit_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).complete("hello").await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyChoices));
    }

    #[tokio::test]
    async fn missing_content_field_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant"}}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).complete("hello").await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
