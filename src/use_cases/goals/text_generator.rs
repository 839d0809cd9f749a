use serde::{Deserialize, Serialize};
use std::{error::Error, fmt::Display, future::Future};

use common::settings::types::TextGenerationSettings;

pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, TextGeneratorError>>;
}

#[derive(Debug)]
pub struct TextGeneratorError {
    method_detail: String,
    error: String,
}
impl TextGeneratorError {
    pub fn new(method_detail: impl ToString, error: impl ToString) -> Self {
        Self {
            method_detail: method_detail.to_string(),
            error: error.to_string(),
        }
    }
}
impl Display for TextGeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", &self.method_detail, &self.error)
    }
}
impl Error for TextGeneratorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

#[derive(Serialize, Debug)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize, Debug)]
struct InferenceParameters {
    max_new_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct GeneratedText {
    generated_text: String,
}

/// Client for a Hugging Face style inference endpoint: `POST {api_url}/{model}`
/// answered with `[{"generated_text": "..."}]`.
pub struct InferenceApiClient<'a> {
    client: &'a reqwest::Client,
    endpoint: String,
    api_token: String,
    max_new_tokens: u32,
    temperature: f32,
}

impl<'a> InferenceApiClient<'a> {
    /// `None` when no credential is configured.
    pub fn init(client: &'a reqwest::Client, settings: &TextGenerationSettings) -> Option<Self> {
        let api_token = settings.api_token.clone()?;
        Some(Self {
            client,
            endpoint: format!(
                "{}/{}",
                settings.api_url.trim_end_matches('/'),
                settings.model
            ),
            api_token,
            max_new_tokens: settings.max_new_tokens,
            temperature: settings.temperature,
        })
    }
}

impl TextGenerator for InferenceApiClient<'_> {
    async fn generate(&self, prompt: &str) -> Result<String, TextGeneratorError> {
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest {
                inputs: prompt,
                parameters: InferenceParameters {
                    max_new_tokens: self.max_new_tokens,
                    temperature: self.temperature,
                },
            })
            .send()
            .await
            .map_err(|e| TextGeneratorError::new("InferenceApiClient::generate", e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(TextGeneratorError::new(
                "InferenceApiClient::generate",
                format!("{}: {}", status, body),
            ));
        }

        res.json::<Vec<GeneratedText>>()
            .await
            .map_err(|e| TextGeneratorError::new("InferenceApiClient::generate", e))?
            .into_iter()
            .next()
            .map(|generated| generated.generated_text)
            .ok_or(TextGeneratorError::new(
                "InferenceApiClient::generate",
                "Response contained no generated text.",
            ))
    }
}
