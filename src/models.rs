//! Data models and structures used throughout the crate

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

/// A selectable style/lighting/camera/mood descriptor.
///
/// `value` is the literal text fragment injected into outbound prompts;
/// selection state tracks values, not ids.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// A group of attribute options sharing a theme (e.g. "Lighting")
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttributeCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub options: &'static [AttributeOption],
}

/// A quick-start prompt template the caller can apply to the composer text
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VisualTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

/// Flattened catalog entry handed to the attribute-suggestion call
#[derive(Debug, Clone, Serialize)]
pub struct SuggestOption {
    pub id: String,
    pub label: String,
    pub description: String,
}

/// A saved character used for mention expansion and consistency context.
///
/// Lives for the session only; the name is whitespace-stripped so it can
/// serve as an `@Name` mention token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Data-URI image payload of the reference image, if any
    pub image: Option<String>,
    pub created_at: String,
}

/// Whether an issue entry is an interior page or the cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Page,
    Cover,
}

/// One entry in the current issue, ordered by insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComicPage {
    pub id: String,
    /// Data-URI image payload for display
    pub image: String,
    /// The prompt the page was generated from
    pub prompt: String,
    pub kind: PageKind,
    pub created_at: String,
}

/// Structured response from the prompt-synthesis call.
///
/// All three fields are required; a body missing any of them fails parsing
/// rather than defaulting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub image_prompt: String,
    pub video_prompt: String,
    pub explanation: String,
}

/// Decoded binary image returned by the image-generation call
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Raw PNG bytes as delivered by the service
    pub data: Vec<u8>,
}

impl GeneratedImage {
    /// Re-wraps the payload as a data URI for local display
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.data))
    }

    /// Pixel dimensions of the payload, if it decodes as an image
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        image::load_from_memory(&self.data)
            .ok()
            .map(|img| (img.width(), img.height()))
    }
}

/// Which template and required context the composer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    PlainImage,
    ComicPage,
    ComicCover,
    CharacterDesign,
}

/// Text rendering instruction for comic pages, mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComicTextStyle {
    /// Dialogue from the script is rendered verbatim
    #[default]
    WithText,
    /// Bubble shapes are drawn but left blank
    EmptyBubbles,
    /// No bubbles or text at all
    NoText,
}

/// Output aspect ratio, passed through to the service as-is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "16:9")]
    Wide,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Tall => "9:16",
            AspectRatio::Wide => "16:9",
        }
    }
}

/// Quality tier selecting which backing model variant serves the request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::OneK => "1K",
            Resolution::TwoK => "2K",
        }
    }
}

/// Lifecycle of the current primary request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_result_requires_all_fields() {
        let full = r#"{"imagePrompt":"a","videoPrompt":"b","explanation":"c"}"#;
        let parsed: GeneratedResult = serde_json::from_str(full).unwrap();
        assert_eq!(parsed.explanation, "c");

        let missing = r#"{"imagePrompt":"a","videoPrompt":"b"}"#;
        assert!(serde_json::from_str::<GeneratedResult>(missing).is_err());
    }

    #[test]
    fn generated_image_wraps_as_data_uri() {
        let img = GeneratedImage { data: vec![1, 2, 3] };
        assert!(img.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn generated_image_reports_dimensions() {
        let mut png = Vec::new();
        let buf = image::RgbaImage::new(4, 2);
        image::DynamicImage::ImageRgba8(buf)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let img = GeneratedImage { data: png };
        assert_eq!(img.dimensions(), Some((4, 2)));
        assert_eq!(GeneratedImage { data: vec![0] }.dimensions(), None);
    }

    #[test]
    fn aspect_ratio_serializes_to_wire_form() {
        assert_eq!(
            serde_json::to_string(&AspectRatio::Portrait).unwrap(),
            "\"3:4\""
        );
        assert_eq!(AspectRatio::Wide.as_str(), "16:9");
    }
}
