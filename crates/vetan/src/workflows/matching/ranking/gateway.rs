use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::RankingConfig;

/// Transport seam between the ranking client and the outside world.
///
/// Implementations take a fully rendered prompt and hand back the raw
/// candidate text. They do not interpret the reply; validation lives in the
/// ranking client so every backend degrades the same way.
#[async_trait]
pub trait RankingGateway: Send + Sync {
    async fn request_ranking(&self, prompt: &str) -> Result<String, RankingGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RankingGatewayError {
    #[error("ranking gateway is not configured: {0}")]
    Configuration(String),
    #[error("ranking transport failed: {0}")]
    Transport(String),
    #[error("ranking endpoint answered HTTP {0}")]
    Status(u16),
    #[error("ranking reply carried no candidate text")]
    EmptyReply,
    #[error("ranking is disabled: no API key configured")]
    Disabled,
}

/// Gateway backed by the Gemini `generateContent` endpoint.
pub struct GeminiGateway {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn from_config(config: &RankingConfig) -> Result<Self, RankingGatewayError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            RankingGatewayError::Configuration("GEMINI_API_KEY is not set".to_string())
        })?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| RankingGatewayError::Configuration(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl RankingGateway for GeminiGateway {
    async fn request_ranking(&self, prompt: &str) -> Result<String, RankingGatewayError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&generate_content_body(prompt))
            .send()
            .await
            .map_err(|err| RankingGatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RankingGatewayError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| RankingGatewayError::Transport(err.to_string()))?;
        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(RankingGatewayError::EmptyReply)
    }
}

/// Request body with a response schema pinning the reply to a JSON object
/// holding a numeric `recommended_ids` array.
fn generate_content_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "recommended_ids": {
                        "type": "ARRAY",
                        "items": { "type": "NUMBER" },
                        "description": "Array of top 5 recommended internship IDs."
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankingConfig;

    fn config_with_key(api_key: Option<&str>) -> RankingConfig {
        RankingConfig {
            api_key: api_key.map(str::to_owned),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn request_body_pins_the_reply_schema() {
        let body = generate_content_body("rank these");
        assert_eq!(
            body.pointer("/contents/0/parts/0/text").and_then(Value::as_str),
            Some("rank these")
        );
        assert_eq!(
            body.pointer("/generationConfig/responseMimeType")
                .and_then(Value::as_str),
            Some("application/json")
        );
        assert_eq!(
            body.pointer("/generationConfig/responseSchema/properties/recommended_ids/type")
                .and_then(Value::as_str),
            Some("ARRAY")
        );
    }

    #[test]
    fn construction_requires_an_api_key() {
        let err = GeminiGateway::from_config(&config_with_key(None));
        assert!(matches!(err, Err(RankingGatewayError::Configuration(_))));
    }

    #[test]
    fn trailing_base_url_slash_is_trimmed() {
        let gateway = GeminiGateway::from_config(&config_with_key(Some("k")))
            .expect("gateway should build");
        assert_eq!(
            gateway.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }
}
