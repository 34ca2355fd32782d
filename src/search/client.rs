//! OpenAI chat-completions client for the `web_search` tool.
//!
//! One outbound call per query, no retry, no streaming, no caching. All
//! transport and API failures are translated into a `Provider` error whose
//! message prefixes the original cause text.

use serde_json::{json, Value};

use crate::config::{Config, ReasoningEffort};
use crate::error::{JesterError, Result};

/// Default OpenAI API endpoint; any OpenAI-compatible base URL works.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Completion model used for search-and-reason queries.
pub const SEARCH_MODEL: &str = "o3-mini";

const NO_RESPONSE_FALLBACK: &str = "No response received from OpenAI";
const UNKNOWN_ERROR: &str = "Unknown error occurred while calling OpenAI API";

/// Seam for the external completion call, mockable in tests.
pub trait CompletionProvider: Send + Sync {
    /// Answer a search query, returning the completion text.
    fn complete(&self, query: &str) -> Result<String>;
}

/// Reqwest-backed client for OpenAI-compatible chat-completion APIs.
pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    context_size: i64,
    reasoning_effort: ReasoningEffort,
}

impl OpenAIClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, OPENAI_BASE_URL.to_string())
    }

    /// Point the client at an alternative OpenAI-compatible endpoint.
    pub fn with_base_url(config: &Config, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url,
            context_size: config.search_context_size,
            reasoning_effort: config.reasoning_effort,
        }
    }

    fn system_prompt(&self) -> String {
        format!(
            "You are a helpful assistant that performs web searches and provides comprehensive analysis. \n\
             Search for information about the given query and provide a detailed response with reasoning.\n\
             Context size limit: {} characters.\n\
             Reasoning effort: {}\n\
             \n\
             Please search the web for current information about the user's query and provide a comprehensive response.",
            self.context_size, self.reasoning_effort
        )
    }

    /// Async completion call; exactly one request per invocation.
    pub async fn complete_async(&self, query: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": SEARCH_MODEL,
                "messages": [
                    {"role": "system", "content": self.system_prompt()},
                    {"role": "user", "content": format!("Please search for information about: {}", query)},
                ],
                "reasoning_effort": self.reasoning_effort.as_str(),
            }))
            .send()
            .await
            .map_err(provider_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|_| JesterError::Provider(UNKNOWN_ERROR.to_string()))?;
            if body.is_empty() {
                return Err(provider_error(status));
            }
            return Err(provider_error(format!("{}: {}", status, body)));
        }

        let data: Value = response.json().await.map_err(provider_error)?;
        Ok(data["choices"][0]["message"]["content"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
    }
}

fn provider_error(err: impl std::fmt::Display) -> JesterError {
    let message = err.to_string();
    if message.is_empty() {
        JesterError::Provider(UNKNOWN_ERROR.to_string())
    } else {
        JesterError::Provider(format!("OpenAI API error: {}", message))
    }
}

impl CompletionProvider for OpenAIClient {
    fn complete(&self, query: &str) -> Result<String> {
        // Blocking call for the sync dispatch path; requires a multi-thread
        // tokio runtime on the calling thread.
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(self.complete_async(query))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            openai_api_key: "test-key".to_string(),
            search_context_size: 2000,
            reasoning_effort: ReasoningEffort::High,
        }
    }

    #[test]
    fn test_system_prompt_embeds_config() {
        let client = OpenAIClient::new(&test_config());
        let prompt = client.system_prompt();
        assert!(prompt.contains("Context size limit: 2000 characters."));
        assert!(prompt.contains("Reasoning effort: high"));
    }

    #[test]
    fn test_provider_error_prefixes_cause() {
        let err = provider_error("API error");
        assert_eq!(err.to_string(), "OpenAI API error: API error");
    }

    #[test]
    fn test_provider_error_without_message() {
        let err = provider_error("");
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }
}
