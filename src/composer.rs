//! Prompt composer: assembles the final instruction text for each
//! generation mode, injecting the persistent consistency block and the
//! selected attribute fragment.

use crate::error::{Error, Result};
use crate::models::{ComicTextStyle, GenerationMode};
use crate::prompts;
use crate::selection::SelectionSet;

/// Everything the composer needs to build one request text
#[derive(Debug, Clone)]
pub struct ComposeRequest<'a> {
    pub mode: GenerationMode,
    pub user_text: &'a str,
    pub selection: &'a SelectionSet,
    /// Persistent world/setting rules carried across requests
    pub world_context: Option<&'a str>,
    /// Persistent character roster/design notes carried across requests
    pub character_context: Option<&'a str>,
    /// Only consulted for `GenerationMode::ComicPage`
    pub text_style: ComicTextStyle,
    /// Base64 payload of the edit/reference input, if any
    pub base_image: Option<&'a str>,
}

impl<'a> ComposeRequest<'a> {
    /// Minimal request: plain image, no contexts, no base image
    pub fn plain(user_text: &'a str, selection: &'a SelectionSet) -> Self {
        Self {
            mode: GenerationMode::PlainImage,
            user_text,
            selection,
            world_context: None,
            character_context: None,
            text_style: ComicTextStyle::default(),
            base_image: None,
        }
    }
}

/// Builds the final request text for the image-generation call.
///
/// At least one content source is mandatory: with neither user text nor a
/// base image this fails with `EmptyInput` before any network activity.
pub fn compose(req: &ComposeRequest) -> Result<String> {
    if req.user_text.trim().is_empty() && req.base_image.is_none() {
        return Err(Error::EmptyInput);
    }

    let context_block = consistency_block(req.world_context, req.character_context);
    let style_context = style_fragment(req.selection);
    let prompt = req.user_text.trim();

    let text = match req.mode {
        GenerationMode::ComicPage => format!(
            "{ctx}\n{lead}\n\n{text_instruction}\n\n{reqs}{style}\n\nScript: {prompt}",
            ctx = context_block,
            lead = prompts::COMIC_PAGE_LEAD,
            text_instruction = text_style_instruction(req.text_style),
            reqs = prompts::COMIC_PAGE_REQUIREMENTS,
            style = style_context,
        ),
        GenerationMode::ComicCover => format!(
            "{ctx}\n{lead}\n\n{style}\n\nCover Concept/Story Context: {prompt}.\n\n{reqs}",
            ctx = context_block,
            lead = prompts::COMIC_COVER_LEAD,
            style = style_context,
            reqs = prompts::COMIC_COVER_REQUIREMENTS,
        ),
        GenerationMode::CharacterDesign => format!(
            "{ctx}\n{lead} {prompt}.\n\n{reqs}{style}\n\n{footer}",
            ctx = context_block,
            lead = prompts::CHARACTER_SHEET_LEAD,
            reqs = prompts::CHARACTER_SHEET_REQUIREMENTS,
            style = style_context,
            footer = prompts::CHARACTER_SHEET_FOOTER,
        ),
        GenerationMode::PlainImage => format!(
            "{ctx}\n{prompt}.{style}\n\n{footer}",
            ctx = context_block,
            style = style_context,
            footer = prompts::PLAIN_IMAGE_FOOTER,
        ),
    };

    Ok(text.trim_start().to_string())
}

/// Task text for the prompt-synthesis call; the multimodal variant is used
/// when a reference image rides along.
pub fn synthesis_task(base_text: &str, details: &[&str], has_image: bool) -> String {
    let template = if has_image {
        prompts::IMAGE_ANALYSIS_TASK
    } else {
        prompts::SYNTHESIS_TASK
    };
    template
        .replace("{concept}", base_text)
        .replace("{details}", &details.join(", "))
}

/// Task text for the attribute-suggestion call
pub fn suggestion_task(base_text: &str, options_text: &str) -> String {
    prompts::SUGGESTION_TASK
        .replace("{concept}", base_text)
        .replace("{options}", options_text)
}

/// The fenced block instructing strict adherence to persistent context,
/// or an empty string when no context is set
fn consistency_block(world: Option<&str>, character: Option<&str>) -> String {
    if world.is_none() && character.is_none() {
        return String::new();
    }

    let mut lines = vec![prompts::CONSISTENCY_BLOCK_START.to_string()];
    if let Some(world) = world {
        lines.push(format!("WORLD/SETTING RULES: {}", world));
    }
    if let Some(character) = character {
        lines.push(format!("CHARACTER ROSTER/DESIGNS: {}", character));
    }
    lines.push(prompts::CONSISTENCY_BLOCK_END.to_string());
    lines.push(prompts::CONSISTENCY_BLOCK_FOOTER.to_string());
    lines.join("\n")
}

fn style_fragment(selection: &SelectionSet) -> String {
    if selection.is_empty() {
        String::new()
    } else {
        format!(
            " Art Style, Lighting & Atmosphere details: {}",
            selection.to_fragment()
        )
    }
}

fn text_style_instruction(style: ComicTextStyle) -> &'static str {
    match style {
        ComicTextStyle::WithText => prompts::COMIC_TEXT_WITH_TEXT,
        ComicTextStyle::EmptyBubbles => prompts::COMIC_TEXT_EMPTY_BUBBLES,
        ComicTextStyle::NoText => prompts::COMIC_TEXT_NO_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text_without_base_image() {
        let selection = SelectionSet::new();
        let req = ComposeRequest::plain("   ", &selection);
        assert!(matches!(compose(&req), Err(Error::EmptyInput)));
    }

    #[test]
    fn accepts_empty_text_when_base_image_present() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("", &selection);
        req.base_image = Some("aGVsbG8=");
        assert!(compose(&req).is_ok());
    }

    #[test]
    fn plain_image_carries_text_fidelity_footer() {
        let mut selection = SelectionSet::new();
        selection.toggle("Golden hour, warm lighting");
        let req = ComposeRequest::plain("a lighthouse at dusk", &selection);
        let text = compose(&req).unwrap();
        assert!(text.starts_with("a lighthouse at dusk."));
        assert!(text.contains("Art Style, Lighting & Atmosphere details: Golden hour"));
        assert!(text.contains("rendered exactly as written"));
    }

    #[test]
    fn empty_bubbles_excludes_verbatim_dialogue_instruction() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("Panel 1: the hero runs", &selection);
        req.mode = GenerationMode::ComicPage;
        req.text_style = ComicTextStyle::EmptyBubbles;
        let text = compose(&req).unwrap();
        assert!(text.contains("NO TEXT** inside the bubbles"));
        assert!(!text.contains("rendered EXACTLY as written in the image"));
        assert!(text.contains("Script: Panel 1: the hero runs"));
    }

    #[test]
    fn with_text_demands_verbatim_dialogue() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("Panel 1: shout", &selection);
        req.mode = GenerationMode::ComicPage;
        req.text_style = ComicTextStyle::WithText;
        let text = compose(&req).unwrap();
        assert!(text.contains("TEXT FIDELITY"));
        assert!(!text.contains("BLANK WHITE SHAPES"));
    }

    #[test]
    fn cover_mode_reserves_title_space() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("Issue #1: The Fall", &selection);
        req.mode = GenerationMode::ComicCover;
        let text = compose(&req).unwrap();
        assert!(text.contains("COMIC BOOK COVER"));
        assert!(text.contains("space at top for title logo"));
        assert!(text.contains("Cover Concept/Story Context: Issue #1: The Fall."));
    }

    #[test]
    fn character_design_frames_a_reference_sheet() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("a clockwork knight", &selection);
        req.mode = GenerationMode::CharacterDesign;
        let text = compose(&req).unwrap();
        assert!(text.contains("CHARACTER REFERENCE SHEET for: a clockwork knight."));
        assert!(text.contains("Full body shot, neutral background"));
    }

    #[test]
    fn consistency_block_wraps_world_and_character_context() {
        let selection = SelectionSet::new();
        let mut req = ComposeRequest::plain("the plaza at noon", &selection);
        req.world_context = Some("all buildings are glass");
        req.character_context = Some("Hero: tall armored figure");
        let text = compose(&req).unwrap();
        assert!(text.starts_with(prompts::CONSISTENCY_BLOCK_START));
        assert!(text.contains("WORLD/SETTING RULES: all buildings are glass"));
        assert!(text.contains("CHARACTER ROSTER/DESIGNS: Hero: tall armored figure"));
        assert!(text.contains(prompts::CONSISTENCY_BLOCK_FOOTER));
    }

    #[test]
    fn context_block_absent_without_context() {
        let selection = SelectionSet::new();
        let req = ComposeRequest::plain("a quiet pond", &selection);
        let text = compose(&req).unwrap();
        assert!(!text.contains(prompts::CONSISTENCY_BLOCK_START));
    }

    #[test]
    fn synthesis_task_switches_on_image_presence() {
        let with_image = synthesis_task("a red kite", &["windy"], true);
        assert!(with_image.contains("Analyze this image"));
        let text_only = synthesis_task("a red kite", &["windy"], false);
        assert!(text_only.contains("expert prompt engineer"));
        assert!(text_only.contains("\"a red kite\""));
        assert!(text_only.contains("\"windy\""));
    }
}
