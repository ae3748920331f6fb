use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::capture::errors::ExtractionError;
use business::domain::capture::model::StillImage;
use business::domain::capture::services::{PriceRecognitionService, RecognitionResponse};

use crate::client::GeminiClient;

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

pub struct PriceRecognizerGemini {
    client: GeminiClient,
}

impl PriceRecognizerGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn request_body(image: &StillImage, instruction: &str) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "parts": [
                        {
                            "inline_data": {
                                "mime_type": image.mime_type,
                                "data": image.to_base64(),
                            }
                        },
                        {"text": instruction},
                    ]
                }
            ]
        })
    }

    /// Joins the text parts of the first candidate.
    fn response_text(body: &str) -> Result<String, ExtractionError> {
        let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|err| {
            tracing::warn!(error = %err, "unreadable Gemini response body");
            ExtractionError::ProcessingFailure
        })?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .ok_or_else(|| {
                tracing::warn!("Gemini response has no candidate text");
                ExtractionError::ProcessingFailure
            })?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl PriceRecognitionService for PriceRecognizerGemini {
    async fn recognize(
        &self,
        image: &StillImage,
        instruction: &str,
    ) -> Result<RecognitionResponse, ExtractionError> {
        let body = Self::request_body(image, instruction);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Gemini request failed");
                ExtractionError::ProcessingFailure
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|err| {
            tracing::warn!(error = %err, %status, "could not read Gemini response");
            ExtractionError::ProcessingFailure
        })?;

        if !status.is_success() {
            tracing::warn!(%status, body = %raw, "Gemini rejected the request");
            return Err(ExtractionError::ProcessingFailure);
        }

        Ok(RecognitionResponse {
            text: Self::response_text(&raw)?,
        })
    }
}
