//! PromptAlchemy core: prompt composition and generation-service client.
//!
//! This crate holds the session logic of a generative-AI studio client:
//! the static attribute catalog, per-session selection state, `@Name`
//! mention expansion against a character roster, the per-mode prompt
//! composer, the stateless client for the hosted generation service, and
//! the issue/roster collection managers.
//!
//! The presentation layer (rendering, styling, input handling) lives
//! elsewhere; everything here is plain state plus request/response calls.

pub mod catalog;
pub mod client;
pub mod composer;
pub mod error;
pub mod mentions;
pub mod models;
pub mod prompts;
pub mod selection;
pub mod session;

pub use client::{ClientConfig, GenerationClient, ImageRequest};
pub use composer::ComposeRequest;
pub use error::{Error, Result};
pub use models::{
    AspectRatio, AttributeCategory, AttributeOption, Character, ComicPage, ComicTextStyle,
    GeneratedImage, GeneratedResult, GenerationMode, GenerationStatus, PageKind, Resolution,
    SuggestOption, VisualTemplate,
};
pub use selection::SelectionSet;
pub use session::Session;
