//! Static attribute catalog: the selectable style, lighting, camera, and
//! mood descriptors shared by every composer surface, plus the quick-start
//! visual templates.
//!
//! The catalog is immutable and defined at process start; selection state
//! only ever stores `value` strings drawn from here.

use crate::models::{AttributeCategory, AttributeOption, SuggestOption, VisualTemplate};

const STYLE_OPTIONS: &[AttributeOption] = &[
    AttributeOption { id: "photorealistic", label: "Photorealistic", value: "Photorealistic, 8k, highly detailed, raw photo, Fujifilm XT3" },
    AttributeOption { id: "cyberpunk", label: "Cyberpunk", value: "Cyberpunk, neon lights, high tech low life, futuristic, blade runner aesthetic" },
    AttributeOption { id: "anime", label: "Anime / Manga", value: "Anime style, Studio Ghibli inspired, cel shaded, vibrant colors, Makoto Shinkai style" },
    AttributeOption { id: "comic_modern", label: "Modern Comic", value: "Modern comic book style, detailed inking, vibrant digital coloring, Marvel/DC style, dynamic" },
    AttributeOption { id: "comic_noir", label: "Noir Graphic Novel", value: "Noir graphic novel style, Frank Miller aesthetic, high contrast black and white, splashes of red, gritty" },
    AttributeOption { id: "comic_vintage", label: "Vintage Comic", value: "Golden Age comic style, halftone dots, CMYK printing offset, retro 1950s aesthetic, yellowed paper texture" },
    AttributeOption { id: "comic_moebius", label: "Moebius / Sci-Fi", value: "Moebius style, Jean Giraud, intricate line work, surreal sci-fi landscapes, pastel flat colors" },
    AttributeOption { id: "comic_ligne_claire", label: "Ligne Claire", value: "Ligne Claire style, Herge, clean uniform lines, flat colors, no hatching, precise perspective" },
    AttributeOption { id: "comic_manga_horror", label: "Horror Manga", value: "Junji Ito style, intricate horror manga, spiraling details, disturbing realism, black and white ink" },
    AttributeOption { id: "oil_painting", label: "Oil Painting", value: "Oil painting, thick brushstrokes, impasto, classical art style" },
    AttributeOption { id: "3d_render", label: "3D Render", value: "3D render, Unreal Engine 5, Octane Render, ray tracing, isometric" },
    AttributeOption { id: "watercolor", label: "Watercolor", value: "Watercolor, soft edges, pastel colors, wet-on-wet technique, artistic" },
    AttributeOption { id: "vintage", label: "Vintage Film", value: "Vintage 35mm film, grain, polaroid style, faded colors, nostalgic" },
    AttributeOption { id: "cartoon", label: "Cartoon", value: "Cartoon style, flat shading, bold lines, vibrant colors, 2D animation style" },
    AttributeOption { id: "impressionist", label: "Impressionist", value: "Impressionist style, Claude Monet inspired, dappled light, loose brushwork" },
    AttributeOption { id: "surrealism", label: "Surrealism", value: "Surrealism, Salvador Dali style, melting objects, dreamlike, bizarre" },
    AttributeOption { id: "pop_art", label: "Pop Art", value: "Pop Art, Andy Warhol style, halftone dots, bold contrasting colors" },
    AttributeOption { id: "pixel_art", label: "Pixel Art", value: "Pixel art, 16-bit, retro game aesthetic, sprite based, isometric" },
    AttributeOption { id: "charcoal", label: "Charcoal Sketch", value: "Charcoal sketch, rough texture, monochrome, heavy shadows, artistic smudge" },
    AttributeOption { id: "stained_glass", label: "Stained Glass", value: "Stained glass art, intricate lead lines, translucent vibrant colors, divine lighting" },
    AttributeOption { id: "claymation", label: "Claymation", value: "Claymation style, Aardman animation, plasticine texture, stop-motion look" },
    AttributeOption { id: "ukiyo_e", label: "Ukiyo-e", value: "Ukiyo-e, traditional Japanese woodblock print, Hokusai style, flat perspective" },
];

const LIGHTING_OPTIONS: &[AttributeOption] = &[
    AttributeOption { id: "golden_hour", label: "Golden Hour", value: "Golden hour, warm lighting, sunset, soft shadows, volumetric light" },
    AttributeOption { id: "cinematic", label: "Cinematic", value: "Cinematic lighting, dramatic shadows, rim lighting, studio setup" },
    AttributeOption { id: "dramatic", label: "Dramatic", value: "Dramatic lighting, high contrast, chiaroscuro, deep shadows, intense atmosphere" },
    AttributeOption { id: "volumetric", label: "God Rays", value: "Volumetric lighting, god rays, shafts of light through fog/dust, tyndall effect" },
    AttributeOption { id: "soft", label: "Soft / Diffused", value: "Soft lighting, diffused light, gentle gradients, cloud diffusion, flattering" },
    AttributeOption { id: "neon", label: "Neon / Night", value: "Neon lighting, blue and pink hues, dark atmosphere, glowing elements" },
    AttributeOption { id: "rembrandt", label: "Rembrandt", value: "Rembrandt lighting, classical portrait lighting, triangle of light on cheek" },
    AttributeOption { id: "natural", label: "Natural", value: "Natural light, realistic illumination, environmental lighting" },
    AttributeOption { id: "silhouette", label: "Silhouette", value: "Silhouette, strong backlight, dark subject, bright background, contour" },
    AttributeOption { id: "studio", label: "Studio", value: "Studio lighting, three-point lighting, professional photography, clean look" },
    AttributeOption { id: "biolum", label: "Bioluminescent", value: "Bioluminescent glow, magical atmosphere, ethereal light sources, dark background" },
];

const CAMERA_OPTIONS: &[AttributeOption] = &[
    AttributeOption { id: "wide", label: "Wide Angle", value: "Wide angle lens, 16mm, expansive view, distortion" },
    AttributeOption { id: "telephoto", label: "Telephoto", value: "Telephoto lens, 200mm, compressed background, flattened perspective" },
    AttributeOption { id: "macro", label: "Macro", value: "Macro photography, extreme close-up, high detail, shallow depth of field" },
    AttributeOption { id: "drone", label: "Drone View", value: "Drone shot, aerial view, bird's eye view, high altitude" },
    AttributeOption { id: "overhead", label: "Overhead", value: "Overhead shot, top-down view, flat lay composition, direct vertical angle" },
    AttributeOption { id: "low_angle", label: "Low Angle", value: "Low angle shot, worm's eye view, looking up at subject, imposing perspective" },
    AttributeOption { id: "dutch_angle", label: "Dutch Angle", value: "Dutch angle, tilted horizon, dynamic tension, disorienting" },
    AttributeOption { id: "bokeh", label: "Bokeh / Portrait", value: "85mm lens, f/1.8, bokeh background, sharp focus on subject, portrait photography" },
    AttributeOption { id: "fisheye", label: "Fisheye", value: "Fisheye lens, distorted, spherical view, skate video style" },
    AttributeOption { id: "gopro", label: "Action/GoPro", value: "GoPro footage, POV shot, wide FOV, action camera aesthetic" },
];

const MOOD_OPTIONS: &[AttributeOption] = &[
    AttributeOption { id: "ethereal", label: "Ethereal", value: "Ethereal, dreamy, fantasy, mystical, fog" },
    AttributeOption { id: "dark", label: "Dark / Gritty", value: "Dark, gritty, moody, mysterious, ominous, horror vibes" },
    AttributeOption { id: "cheerful", label: "Cheerful", value: "Cheerful, vibrant, happy, bright, energetic, summer vibes" },
    AttributeOption { id: "minimalist", label: "Minimalist", value: "Minimalist, clean, zen, negative space, simple" },
    AttributeOption { id: "chaos", label: "Chaotic", value: "Chaotic, explosive, dynamic, action-packed, intense" },
    AttributeOption { id: "nostalgic", label: "Nostalgic", value: "Nostalgic, sentimental, warm memories, sepia tones, retro" },
    AttributeOption { id: "whimsical", label: "Whimsical", value: "Whimsical, playful, quirky, magical realism, storybook" },
    AttributeOption { id: "suspenseful", label: "Suspenseful", value: "Suspenseful, tension, thriller atmosphere, lurking shadows" },
    AttributeOption { id: "romantic", label: "Romantic", value: "Romantic, passionate, soft focus, rose hues, intimate" },
];

const CATEGORIES: &[AttributeCategory] = &[
    AttributeCategory {
        id: "style",
        title: "Art Style & Medium",
        description: "The overall aesthetic and artistic medium.",
        options: STYLE_OPTIONS,
    },
    AttributeCategory {
        id: "lighting",
        title: "Lighting",
        description: "How the scene is illuminated.",
        options: LIGHTING_OPTIONS,
    },
    AttributeCategory {
        id: "camera",
        title: "Camera & Angle",
        description: "Perspective and lens choice.",
        options: CAMERA_OPTIONS,
    },
    AttributeCategory {
        id: "mood",
        title: "Mood & Atmosphere",
        description: "The feeling of the image.",
        options: MOOD_OPTIONS,
    },
];

const TEMPLATES: &[VisualTemplate] = &[
    VisualTemplate {
        id: "char_concept",
        label: "Character Concept",
        prompt: "Detailed character concept art of a [ROLE/CLASS], wearing [OUTFIT], standing in a [SETTING], [MOOD] expression, full body shot, neutral background, high fidelity.",
    },
    VisualTemplate {
        id: "env_fantasy",
        label: "Fantasy Environment",
        prompt: "A majestic [LANDSCAPE TYPE] with floating islands, cascading waterfalls, bioluminescent flora, golden hour lighting, epic scale, highly detailed matte painting.",
    },
    VisualTemplate {
        id: "cyber_city",
        label: "Cyberpunk City",
        prompt: "Futuristic cyberpunk city street level, neon signs reflecting in rain puddles, towering skyscrapers, holographic ads, bustling crowd, cinematic lighting, 8k.",
    },
    VisualTemplate {
        id: "logo_minimal",
        label: "Minimalist Logo",
        prompt: "A minimalist vector logo of a [ANIMAL/OBJECT], flat design, geometric shapes, orange and white color palette, white background, professional branding.",
    },
    VisualTemplate {
        id: "comic_page",
        label: "Comic Page Script",
        prompt: "Panel 1: Wide shot of a detective standing in a rainy alleyway, looking at a clue.\nPanel 2: Close up on the clue, a mysterious glowing amulet.\nPanel 3: The detective looks up, surprised, as a shadow looms over them.",
    },
    VisualTemplate {
        id: "isometric",
        label: "Isometric Room",
        prompt: "Isometric view of a cozy gamer bedroom, detailed computer setup, rgb lighting, messy bed, posters on wall, 3d render style, blender cycles.",
    },
];

/// All attribute categories, in display order
pub fn categories() -> &'static [AttributeCategory] {
    CATEGORIES
}

/// Quick-start templates for seeding the composer text
pub fn templates() -> &'static [VisualTemplate] {
    TEMPLATES
}

/// Looks up an option across all categories by id
pub fn find_option(id: &str) -> Option<&'static AttributeOption> {
    CATEGORIES
        .iter()
        .flat_map(|cat| cat.options.iter())
        .find(|opt| opt.id == id)
}

/// Maps suggested option ids back to their injectable values, skipping
/// anything the service invented that is not in the catalog
pub fn values_for_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
    ids.into_iter()
        .filter_map(|id| find_option(id).map(|opt| opt.value))
        .collect()
}

/// Flattens the catalog into the form the suggestion call expects
pub fn suggest_options() -> Vec<SuggestOption> {
    CATEGORIES
        .iter()
        .flat_map(|cat| {
            cat.options.iter().map(|opt| SuggestOption {
                id: opt.id.to_string(),
                label: opt.label.to_string(),
                description: format!("{} - {}", cat.title, opt.value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_categories() {
        let ids: Vec<&str> = categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["style", "lighting", "camera", "mood"]);
    }

    #[test]
    fn option_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for cat in categories() {
            for opt in cat.options {
                assert!(seen.insert(opt.id), "duplicate option id {}", opt.id);
            }
        }
    }

    #[test]
    fn find_option_resolves_across_categories() {
        assert_eq!(find_option("golden_hour").unwrap().label, "Golden Hour");
        assert!(find_option("does_not_exist").is_none());
    }

    #[test]
    fn values_for_ids_skips_unknown_ids() {
        let values = values_for_ids(["ethereal", "bogus", "macro"]);
        assert_eq!(values.len(), 2);
        assert!(values[0].starts_with("Ethereal"));
    }

    #[test]
    fn templates_include_a_comic_script_starter() {
        let tpl = templates().iter().find(|t| t.id == "comic_page").unwrap();
        assert!(tpl.prompt.starts_with("Panel 1:"));
    }

    #[test]
    fn suggest_options_carry_category_context() {
        let flat = suggest_options();
        let neon = flat.iter().find(|o| o.id == "neon").unwrap();
        assert!(neon.description.starts_with("Lighting - "));
    }
}
