//! Instruction templates sent to the generation service.
//!
//! Order and exact wording matter only insofar as they steer the downstream
//! model; nothing here is machine-parsed on the way back.

/// System instruction for the prompt-synthesis call
pub const SYSTEM_INSTRUCTION: &str = "You are a world-class creative director and prompt engineer. Your goal is to maximize the aesthetic output of AI models.";

/// Task body for text-only prompt synthesis.
/// Interpolated with the user's base concept and the selected detail list.
pub const SYNTHESIS_TASK: &str = r#"You are an expert prompt engineer for advanced AI generation models like Midjourney V6, DALL-E 3, and Google Veo.

User's Base Concept: "{concept}"

Selected Style/Technical Details: "{details}"

Task:
1. Synthesize the base concept with the selected details into a cohesive, descriptive, and high-quality prompt.
2. Do not just list keywords at the end; weave them into the description naturally where possible.
3. For the 'imagePrompt', focus on texture, lighting, composition, and fidelity.
4. For the 'videoPrompt', take the same concept but emphasize motion, camera movement, temporal consistency, and physics.
5. Provide a short explanation of the choices.
6. CRITICAL: If the user provides specific text to be displayed (e.g., signs, speech, labels), preserve that text EXACTLY as written in the prompts."#;

/// Task body for multimodal prompt synthesis when a reference image is attached
pub const IMAGE_ANALYSIS_TASK: &str = r#"Analyze this image to create a perfect video generation prompt.

User's Additional Notes/Context: "{concept}"
Selected Style Details: "{details}"

Task:
1. Analyze the visual elements of the image (subject, lighting, angle, style) in extreme detail.
2. Create an 'imagePrompt' that would accurately recreate this static image.
3. Create a 'videoPrompt' that brings this image to life. Imagine how the subject would move, how the camera would interact, and the physics of the scene. Focus on motion and temporal flow.
4. Provide a short explanation of how you interpreted the image into motion."#;

/// Task body for the best-effort attribute-suggestion call
pub const SUGGESTION_TASK: &str = r#"You are a creative assistant. Based on the user's concept, suggest the most relevant Style, Lighting, Camera, and Mood options to enhance their prompt.

User's Concept: "{concept}"

Available Options:
{options}

Task:
Select 3 to 6 IDs from the Available Options that best fit the concept. Return ONLY the IDs in a JSON array."#;

/// Fence lines wrapping the persistent world/character context block
pub const CONSISTENCY_BLOCK_START: &str = "[PERSISTENT CONSISTENCY DATA START]";
pub const CONSISTENCY_BLOCK_END: &str = "[PERSISTENT CONSISTENCY DATA END]";
pub const CONSISTENCY_BLOCK_FOOTER: &str =
    "All generated content MUST adhere strictly to the World Rules and Character Designs above.";

/// Comic page: dialogue from the script must be lettered verbatim
pub const COMIC_TEXT_WITH_TEXT: &str = "**CRITICAL INSTRUCTION - TEXT FIDELITY:**\nAny dialogue, speech bubbles, captions, or onomatopoeia specified in the script MUST be rendered EXACTLY as written in the image. Do not summarize, paraphrase, or alter the text inside speech bubbles.";

/// Comic page: draw bubble shapes but leave them blank
pub const COMIC_TEXT_EMPTY_BUBBLES: &str = "**CRITICAL INSTRUCTION - EMPTY SPEECH BUBBLES ONLY:**\nThe image must contain speech bubbles and caption boxes corresponding to the script's dialogue, but they MUST BE COMPLETELY BLANK WHITE SHAPES.\n\n**ABSOLUTELY NO TEXT** inside the bubbles. Do not attempt to letter the comic. Just draw the empty white containers where text would go.";

/// Comic page: no bubbles or text overlays at all
pub const COMIC_TEXT_NO_TEXT: &str = "**CRITICAL INSTRUCTION - NO TEXT/BUBBLES:**\nDo NOT include any speech bubbles, caption boxes, or text overlays. Create only the visual art and panel composition. The dialogue in the script is for context on characters' expressions and actions only. Render the scene purely visually.";

/// Lead-in for the comic page layout template
pub const COMIC_PAGE_LEAD: &str =
    "Create a high-quality comic book page layout with multiple panels based on the following script.";

/// Trailing requirements for the comic page template
pub const COMIC_PAGE_REQUIREMENTS: &str =
    "Ensure clear visual storytelling and proper panel composition.";

/// Lead-in for the comic cover template
pub const COMIC_COVER_LEAD: &str = "Create a MASTERPIECE COMIC BOOK COVER art.\n\n**CRITICAL INSTRUCTION:**\nIf a specific title, issue number, or tag-line is provided in the prompt, it must be rendered EXACTLY as written.";

/// Trailing requirements for the comic cover template
pub const COMIC_COVER_REQUIREMENTS: &str = "Requirements: Single striking image, dynamic composition, central hero/subject, dramatic lighting, space at top for title logo, highly detailed, eye-catching.";

/// Lead-in for the character reference sheet template
pub const CHARACTER_SHEET_LEAD: &str = "Create a DETAILED CHARACTER REFERENCE SHEET for:";

/// Trailing requirements for the character reference sheet template
pub const CHARACTER_SHEET_REQUIREMENTS: &str = "Requirements: Full body shot, neutral background (studio grey or white), high fidelity, perfectly distinct facial features, costume details.";

/// Reminder that the sheet anchors future consistency
pub const CHARACTER_SHEET_FOOTER: &str =
    "(This image will be used as a reference for future consistency, so ensure traits are clear).";

/// Trailing instruction for plain image generation
pub const PLAIN_IMAGE_FOOTER: &str = "(IMPORTANT: If specific text is requested to be visible in the image, ensure it is rendered exactly as written).";
