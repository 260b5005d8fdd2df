use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Gemini API returned {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("Gemini request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("No content in response")]
    EmptyResponse,
    #[error("Could not parse analysis JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Text generation backend used for task assessments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskAnalyzer: Send + Sync {
    /// Sends `prompt` and returns the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(client: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TaskAnalyzer for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024
            }
        });

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateResponse = response.json().await?;
        data.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AnalysisError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_provider_is_a_request_error() {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let gemini = GeminiClient::new(client, "http://127.0.0.1:9/generate", "test-key");
        let err = gemini.generate("hello").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Request(_)));
    }

    #[test]
    fn candidate_text_is_extracted() {
        let data: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"difficulty\":\"Easy\"}"}]}}]}"#,
        )
        .unwrap();
        let text = data.candidates[0].content.as_ref().unwrap().parts[0].text.clone();
        assert_eq!(text.as_deref(), Some("{\"difficulty\":\"Easy\"}"));
    }
}
