//! OpenAI-compatible chat completions reasoner.

use async_trait::async_trait;
use parliament_application::{Reasoner, ReasonerError, ReasonerRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reasoner backed by `POST {base_url}/v1/chat/completions`
///
/// The structured context travels inside the user message as a fenced JSON
/// block ahead of the prompt.
pub struct HttpReasoner {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpReasoner {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, ReasonerError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ReasonerError::Unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn to_chat_request(&self, request: &ReasonerRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system_instruction.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Context:\n```json\n{}\n```\n\n{}",
                        request.structured_context, request.user_prompt
                    ),
                },
            ],
            temperature: 0.7,
        }
    }
}

#[async_trait]
impl Reasoner for HttpReasoner {
    async fn ask(&self, request: &ReasonerRequest) -> Result<String, ReasonerError> {
        let mut builder = self
            .client
            .post(self.endpoint())
            .json(&self.to_chat_request(request));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ReasonerError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Reasoner returned {}: {}", status, body);
            return Err(ReasonerError::Unavailable(format!("HTTP {}", status)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReasonerError::InvalidResponse(e.to_string()))?;
        extract_content(body)
    }
}

/// First choice's message text
fn extract_content(body: ChatResponse) -> Result<String, ReasonerError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ReasonerError::InvalidResponse("no message content".to_string()))
}

// ==================== Wire Types ====================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasoner() -> HttpReasoner {
        HttpReasoner::new("http://localhost:8080/", "test-model", None).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(reasoner().endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ReasonerRequest::new("You are Risk.", r#"{"topic":"swap"}"#, "Vote now.");
        let body = serde_json::to_value(reasoner().to_chat_request(&request)).unwrap();

        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are Risk.");
        let user = body["messages"][1]["content"].as_str().unwrap();
        assert!(user.contains(r#"{"topic":"swap"}"#));
        assert!(user.ends_with("Vote now."));
    }

    #[test]
    fn test_extract_content() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"VOTE: approve"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(body).unwrap(), "VOTE: approve");
    }

    #[test]
    fn test_extract_content_missing() {
        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_content(empty),
            Err(ReasonerError::InvalidResponse(_))
        ));

        let null_content: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(extract_content(null_content).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        // Port 9 (discard) is closed on test hosts
        let reasoner = HttpReasoner::new("http://127.0.0.1:9", "m", None).unwrap();
        let result = reasoner
            .ask(&ReasonerRequest::new("s", "{}", "p"))
            .await;
        assert!(matches!(result, Err(ReasonerError::Unavailable(_))));
    }
}
