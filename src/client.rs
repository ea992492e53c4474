//! Client for the hosted generation service.
//!
//! Three operations, each a single request/response round trip: structured
//! prompt synthesis, best-effort attribute suggestion, and image
//! generation/editing/upscaling. The client is stateless between calls;
//! every request re-declares its full context.

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::{error, warn};
use regex::Regex;
use serde_json::{json, Value};

use crate::composer::{self, ComposeRequest};
use crate::error::{Error, Result};
use crate::models::{AspectRatio, GeneratedImage, GeneratedResult, Resolution, SuggestOption};
use crate::prompts;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fast text-only model for prompt synthesis and suggestions
const TEXT_MODEL: &str = "gemini-flash-lite-latest";
/// Multimodal model used when a reference image rides along
const MULTIMODAL_MODEL: &str = "gemini-2.5-flash";
/// Standard-quality image model (1K tier)
const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
/// High-resolution image model (2K tier)
const IMAGE_MODEL_2K: &str = "gemini-3-pro-image-preview";

/// Connection settings for the generation service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 120,
        }
    }

    /// Reads the credential from `GEMINI_API_KEY`
    pub fn from_env() -> Result<Self> {
        env::var(API_KEY_ENV)
            .map(Self::new)
            .map_err(|_| Error::ApiKeyMissing)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// One image-generation request: composition input plus output parameters
#[derive(Debug, Clone)]
pub struct ImageRequest<'a> {
    pub compose: ComposeRequest<'a>,
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
}

/// Stateless client for the generation service
pub struct GenerationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GenerationClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Synthesizes an optimized image/video prompt pair from the base
    /// concept, the selected details, and an optional reference image.
    ///
    /// The response must match the fixed schema (imagePrompt, videoPrompt,
    /// explanation, all required) or the call fails with `InvalidResponse`.
    pub async fn synthesize_prompt(
        &self,
        base_text: &str,
        selected_details: &[&str],
        image_base64: Option<&str>,
    ) -> Result<GeneratedResult> {
        if base_text.trim().is_empty() && image_base64.is_none() {
            return Err(Error::EmptyInput);
        }

        let has_image = image_base64.is_some();
        let task = composer::synthesis_task(base_text, selected_details, has_image);

        let mut parts = Vec::new();
        if let Some(image) = image_base64 {
            parts.push(inline_image_part(image));
        }
        parts.push(json!({ "text": task }));

        let body = json!({
            "contents": [{ "parts": parts }],
            "systemInstruction": { "parts": [{ "text": prompts::SYSTEM_INSTRUCTION }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": synthesis_schema(),
            }
        });

        let response = match self.post_generate(synthesis_model(has_image), &body).await {
            Ok(value) => value,
            Err(err) => {
                error!("prompt synthesis request failed: {}", err);
                return Err(err);
            }
        };
        parse_generated_result(&response)
    }

    /// Asks the service for 3-6 option ids matching the free text.
    ///
    /// Best-effort: every failure degrades to an empty list and is only
    /// logged, never surfaced to the caller.
    pub async fn suggest_attributes(
        &self,
        base_text: &str,
        options: &[SuggestOption],
    ) -> Vec<String> {
        match self.suggest_attributes_inner(base_text, options).await {
            Ok(ids) => ids,
            Err(err) => {
                warn!("attribute suggestion failed, returning none: {}", err);
                Vec::new()
            }
        }
    }

    async fn suggest_attributes_inner(
        &self,
        base_text: &str,
        options: &[SuggestOption],
    ) -> Result<Vec<String>> {
        if base_text.trim().is_empty() || options.is_empty() {
            return Ok(Vec::new());
        }

        let options_text = options
            .iter()
            .map(|o| format!("ID: {} | Label: {} | Desc: {}", o.id, o.label, o.description))
            .collect::<Vec<_>>()
            .join("\n");
        let task = composer::suggestion_task(base_text, &options_text);

        let body = json!({
            "contents": [{ "parts": [{ "text": task }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": suggestion_schema(),
                "temperature": 0.5,
            }
        });

        let response = self.post_generate(TEXT_MODEL, &body).await?;
        parse_suggestions(&response)
    }

    /// Generates (or edits, when a base image is set) a single image.
    ///
    /// The resolution tier selects the backing model variant; the composed
    /// text comes from the composer, so `EmptyInput` is raised before any
    /// network activity.
    pub async fn generate_image(&self, request: &ImageRequest<'_>) -> Result<GeneratedImage> {
        let final_prompt = composer::compose(&request.compose)?;

        let mut parts = Vec::new();
        if let Some(image) = request.compose.base_image {
            parts.push(inline_image_part(image));
        }
        parts.push(json!({ "text": final_prompt }));

        let mut image_config = json!({ "aspectRatio": request.aspect_ratio.as_str() });
        // Only the 2K model variant accepts an imageSize parameter
        if request.resolution == Resolution::TwoK {
            image_config["imageSize"] = json!("2K");
        }

        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "imageConfig": image_config }
        });

        let model = image_model(request.resolution);
        let response = match self.post_generate(model, &body).await {
            Ok(value) => value,
            Err(err) => {
                error!("image generation request failed: {}", err);
                return Err(err);
            }
        };
        parse_image(&response)
    }

    /// Re-issues the prompt at the 2K tier with the current image as the
    /// reference input to keep the composition stable while upscaling.
    pub async fn upscale<'a>(
        &self,
        request: &ImageRequest<'a>,
        current_image: &'a str,
    ) -> Result<GeneratedImage> {
        let mut retry = request.clone();
        retry.compose.base_image = Some(current_image);
        retry.resolution = Resolution::TwoK;
        self.generate_image(&retry).await
    }

    async fn post_generate(&self, model: &str, body: &Value) -> Result<Value> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

fn synthesis_model(has_image: bool) -> &'static str {
    if has_image {
        MULTIMODAL_MODEL
    } else {
        TEXT_MODEL
    }
}

fn image_model(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::TwoK => IMAGE_MODEL_2K,
        Resolution::OneK => IMAGE_MODEL,
    }
}

/// Strips an optional `data:image/...;base64,` prefix so raw base64 goes
/// over the wire
pub fn strip_data_uri(payload: &str) -> &str {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = PREFIX.get_or_init(|| {
        Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,").expect("data-uri pattern")
    });
    match re.find(payload) {
        Some(m) => &payload[m.end()..],
        None => payload,
    }
}

fn inline_image_part(payload: &str) -> Value {
    json!({
        "inlineData": {
            "mimeType": "image/png",
            "data": strip_data_uri(payload),
        }
    })
}

fn synthesis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "imagePrompt": {
                "type": "STRING",
                "description": "The highly detailed, optimized prompt for an image generation model.",
            },
            "videoPrompt": {
                "type": "STRING",
                "description": "A modified version of the prompt optimized for video generation models, focusing on motion and temporal coherence.",
            },
            "explanation": {
                "type": "STRING",
                "description": "A brief explanation of the enhancements made (max 2 sentences).",
            }
        },
        "required": ["imagePrompt", "videoPrompt", "explanation"],
    })
}

fn suggestion_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "STRING",
            "description": "The ID of the suggested option.",
        }
    })
}

/// First text part of the first candidate, if any
fn response_text(body: &Value) -> Option<&str> {
    body["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .find_map(|part| part["text"].as_str())
}

/// Salvages a JSON object from model output that wrapped it in prose or
/// code fences
fn extract_json_object(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(raw[start..=end].to_string())
}

fn parse_generated_result(body: &Value) -> Result<GeneratedResult> {
    let text = response_text(body)
        .ok_or_else(|| Error::InvalidResponse("response contained no text part".to_string()))?;

    serde_json::from_str::<GeneratedResult>(text).or_else(|first_err| {
        extract_json_object(text)
            .and_then(|candidate| serde_json::from_str::<GeneratedResult>(&candidate).ok())
            .ok_or_else(|| {
                Error::InvalidResponse(format!(
                    "structured payload did not match schema: {}",
                    first_err
                ))
            })
    })
}

fn parse_suggestions(body: &Value) -> Result<Vec<String>> {
    let text = response_text(body)
        .ok_or_else(|| Error::InvalidResponse("response contained no text part".to_string()))?;
    serde_json::from_str(text)
        .map_err(|err| Error::InvalidResponse(format!("suggestion list did not parse: {}", err)))
}

fn parse_image(body: &Value) -> Result<GeneratedImage> {
    let parts = body["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or(Error::NoImageInResponse)?;

    for part in parts {
        if let Some(data) = part["inlineData"]["data"].as_str() {
            let bytes = BASE64.decode(data).map_err(|err| {
                Error::InvalidResponse(format!("image payload was not valid base64: {}", err))
            })?;
            return Ok(GeneratedImage { data: bytes });
        }
    }

    Err(Error::NoImageInResponse)
}
