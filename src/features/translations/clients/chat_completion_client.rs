use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::TranslationConfig;
use crate::features::translations::models::TranslationError;
use crate::shared::language::Language;
use crate::shared::prompts::render_translation_prompt;

/// Anything that can turn text into the target language
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Translator backed by an OpenAI-compatible chat-completion endpoint
pub struct ChatCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Translator for ChatCompletionClient {
    async fn translate(&self, text: &str, target: Language) -> Result<String, TranslationError> {
        let prompt = render_translation_prompt(text, target)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        tracing::debug!("Requesting {} translation from {}", target, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Request(format!(
                "upstream returned {}: {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(TranslationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> ChatCompletionClient {
        ChatCompletionClient::new(&TranslationConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            model: "deepseek-chat".to_string(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ]
        })
    }

    #[tokio::test]
    async fn test_translate_returns_first_choice() {
        let server = MockServer::start().await;
        let expected_prompt = "Translate the following English text to Russian:\n\nGood morning\n\nAnswer with only translated variant without anything else, if you can't translate, return the original text";

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "deepseek-chat",
                "messages": [{"role": "user", "content": expected_prompt}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Доброе утро")))
            .expect(1)
            .mount(&server)
            .await;

        let translated = client_for(&server)
            .translate("Good morning", Language::Ru)
            .await
            .unwrap();

        assert_eq!(translated, "Доброе утро");
    }

    #[tokio::test]
    async fn test_translate_to_english_uses_reverse_prompt() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "messages": [{"role": "user", "content": "Translate the following Russian text to English:\n\nпривет\n\nAnswer with only translated variant without anything else, if you can't translate, return the original text"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
            .mount(&server)
            .await;

        let translated = client_for(&server)
            .translate("привет", Language::En)
            .await
            .unwrap();

        assert_eq!(translated, "hello");
    }

    #[tokio::test]
    async fn test_translate_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let result = client_for(&server).translate("hello", Language::Ru).await;

        match result {
            Err(TranslationError::Request(msg)) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("overloaded"));
            }
            other => panic!("expected request error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let result = client_for(&server).translate("hello", Language::Ru).await;
        assert!(matches!(result, Err(TranslationError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_translate_undecodable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server).translate("hello", Language::Ru).await;
        assert!(matches!(result, Err(TranslationError::Request(_))));
    }

    #[tokio::test]
    async fn test_echoed_input_is_a_translation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("asdfgh")))
            .mount(&server)
            .await;

        let translated = client_for(&server)
            .translate("asdfgh", Language::Ru)
            .await
            .unwrap();
        assert_eq!(translated, "asdfgh");
    }
}
