use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::{ports::RecipeLLMClient, value_objects::GenerationParameters},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiRecipeClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    fn into_text(self) -> Result<String, CoreError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CoreError::MalformedResponse("No response from LLM".to_string()))
    }
}

impl GeminiRecipeClient {
    pub fn new(config: &LLMConfig) -> Self {
        let base_url = if config.gemini_base_url.is_empty() {
            DEFAULT_GEMINI_BASE_URL.to_string()
        } else {
            config.gemini_base_url.trim_end_matches('/').to_string()
        };

        Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // the url carries the api key
                let e = e.without_url();
                error!("Gemini API request failed: {}", e);
                CoreError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            CoreError::MalformedResponse(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response.into_text()
    }
}

impl RecipeLLMClient for GeminiRecipeClient {
    async fn generate_recipes(
        &self,
        prompt: String,
        schema: serde_json::Value,
        parameters: GenerationParameters,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
                temperature: parameters.temperature,
                max_output_tokens: parameters.max_output_tokens,
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_carries_generation_parameters() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Create 3 recipes".to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({ "type": "array" }),
                temperature: 0.5,
                max_output_tokens: 2048,
            }),
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Create 3 recipes");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_response_text_extracted() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "[]" }] } }]
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "[]");
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();

        assert!(matches!(
            response.into_text(),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        let client = GeminiRecipeClient::new(&LLMConfig {
            gemini_api_key: "key".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: String::new(),
        });

        assert_eq!(client.base_url, DEFAULT_GEMINI_BASE_URL);
    }
}
