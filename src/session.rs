//! Per-session state: attribute selection, character roster, issue pages,
//! persistent context blocks, and the primary-request guard.
//!
//! Everything here lives in one explicit owned object handed to the
//! caller; there are no ambient globals and nothing is persisted beyond
//! process memory.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::mentions::{self, MentionExpansion};
use crate::models::{Character, ComicPage, GeneratedResult, GenerationStatus, PageKind};
use crate::selection::SelectionSet;

#[derive(Debug, Default)]
pub struct Session {
    /// Selected descriptor values for this composer surface
    pub selection: SelectionSet,
    /// Persistent world/setting rules injected into every request
    pub world_context: Option<String>,
    /// Persistent character design notes injected into every request
    pub character_context: Option<String>,
    roster: Vec<Character>,
    pages: Vec<ComicPage>,
    status: GenerationStatus,
    /// Monotonic id of the newest primary request; anything older is stale
    latest_request_id: u64,
    last_result: Option<GeneratedResult>,
    last_image: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- primary request guard ----

    /// Marks the primary request slot busy and hands out its request id.
    ///
    /// At most one primary request is in flight at a time; a second call
    /// while one is pending fails with `RequestInFlight`. The id must be
    /// passed back to `commit_result` / `commit_image` / `fail_primary`,
    /// which discard anything but the newest request so a slow stale
    /// response can never overwrite a fresher one.
    pub fn begin_primary(&mut self) -> Result<u64> {
        if self.status == GenerationStatus::Generating {
            return Err(Error::RequestInFlight);
        }
        self.latest_request_id += 1;
        self.status = GenerationStatus::Generating;
        Ok(self.latest_request_id)
    }

    /// Commits a synthesis result; returns false if the id is stale
    pub fn commit_result(&mut self, request_id: u64, result: GeneratedResult) -> bool {
        if request_id != self.latest_request_id {
            return false;
        }
        self.last_result = Some(result);
        self.status = GenerationStatus::Success;
        true
    }

    /// Commits a generated image (stored as a data URI for display);
    /// returns false if the id is stale
    pub fn commit_image(&mut self, request_id: u64, data_uri: String) -> bool {
        if request_id != self.latest_request_id {
            return false;
        }
        self.last_image = Some(data_uri);
        self.status = GenerationStatus::Success;
        true
    }

    /// Records a failed primary request; stale failures are ignored
    pub fn fail_primary(&mut self, request_id: u64) {
        if request_id == self.latest_request_id {
            self.status = GenerationStatus::Error;
        }
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn last_result(&self) -> Option<&GeneratedResult> {
        self.last_result.as_ref()
    }

    pub fn last_image(&self) -> Option<&str> {
        self.last_image.as_deref()
    }

    // ---- character roster ----

    /// Saves a character for mention expansion and consistency context.
    ///
    /// The name is whitespace-stripped so it works as an `@Name` token.
    /// Duplicate names are not rejected; the resolver expands against the
    /// first roster entry with a given name.
    pub fn save_character(
        &mut self,
        name: &str,
        description: &str,
        image: Option<String>,
    ) -> &Character {
        let sanitized: String = name.split_whitespace().collect();
        self.roster.push(Character {
            id: Uuid::new_v4().to_string(),
            name: sanitized,
            description: description.to_string(),
            image,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        &self.roster[self.roster.len() - 1]
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    pub fn remove_character(&mut self, id: &str) -> bool {
        let before = self.roster.len();
        self.roster.retain(|c| c.id != id);
        self.roster.len() != before
    }

    /// Expands `@Name` mentions in free text against the roster
    pub fn resolve_text(&self, text: &str) -> MentionExpansion {
        mentions::expand_mentions(text, &self.roster)
    }

    /// Autocomplete candidates for an unterminated `@token` at the cursor
    pub fn mention_candidates(&self, text: &str, cursor: usize) -> Vec<&Character> {
        match mentions::pending_mention(text, cursor) {
            Some((_, partial)) => mentions::mention_candidates(partial, &self.roster),
            None => Vec::new(),
        }
    }

    /// The character context for one request: the persistent notes plus
    /// the reference lines for characters actually mentioned
    pub fn character_context_for(&self, expansion: &MentionExpansion) -> Option<String> {
        match (self.character_context.as_deref(), expansion.reference_block()) {
            (Some(ctx), Some(refs)) => Some(format!("{}\n{}", ctx, refs)),
            (Some(ctx), None) => Some(ctx.to_string()),
            (None, Some(refs)) => Some(refs),
            (None, None) => None,
        }
    }

    // ---- issue pages ----

    /// Appends a page to the current issue
    pub fn add_page(&mut self, image: String, prompt: &str, kind: PageKind) -> &ComicPage {
        self.pages.push(ComicPage {
            id: Uuid::new_v4().to_string(),
            image,
            prompt: prompt.to_string(),
            kind,
            created_at: chrono::Utc::now().to_rfc3339(),
        });
        &self.pages[self.pages.len() - 1]
    }

    pub fn remove_page(&mut self, id: &str) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| p.id != id);
        self.pages.len() != before
    }

    pub fn pages(&self) -> &[ComicPage] {
        &self.pages
    }

    /// `"Page N: prompt"` per entry in insertion order, used to seed a
    /// cover-generation prompt
    pub fn issue_summary(&self) -> String {
        self.pages
            .iter()
            .enumerate()
            .map(|(i, page)| format!("Page {}: {}", i + 1, page.prompt))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneratedResult;

    fn result(tag: &str) -> GeneratedResult {
        GeneratedResult {
            image_prompt: tag.to_string(),
            video_prompt: tag.to_string(),
            explanation: tag.to_string(),
        }
    }

    #[test]
    fn issue_summary_numbers_pages_in_order() {
        let mut session = Session::new();
        session.add_page("uri1".into(), "A hero runs", PageKind::Page);
        session.add_page("uri2".into(), "A villain appears", PageKind::Page);
        assert_eq!(
            session.issue_summary(),
            "Page 1: A hero runs\n\nPage 2: A villain appears"
        );
    }

    #[test]
    fn remove_page_filters_by_id() {
        let mut session = Session::new();
        let id = session
            .add_page("uri".into(), "first", PageKind::Cover)
            .id
            .clone();
        session.add_page("uri".into(), "second", PageKind::Page);
        assert!(session.remove_page(&id));
        assert_eq!(session.pages().len(), 1);
        assert_eq!(session.pages()[0].prompt, "second");
        assert!(!session.remove_page("missing"));
    }

    #[test]
    fn character_names_are_whitespace_stripped() {
        let mut session = Session::new();
        let name = session
            .save_character(" Iron  Man ", "red and gold armor", None)
            .name
            .clone();
        assert_eq!(name, "IronMan");
    }

    #[test]
    fn duplicate_character_names_are_allowed() {
        let mut session = Session::new();
        session.save_character("Hero", "first design", None);
        session.save_character("Hero", "second design", None);
        assert_eq!(session.roster().len(), 2);
        // The resolver expands against the first entry
        let out = session.resolve_text("@Hero arrives");
        assert!(out.text.contains("first design"));
    }

    #[test]
    fn busy_flag_blocks_concurrent_primary_requests() {
        let mut session = Session::new();
        let id = session.begin_primary().unwrap();
        assert!(matches!(
            session.begin_primary(),
            Err(Error::RequestInFlight)
        ));
        assert!(session.commit_result(id, result("ok")));
        // After a commit the slot is free again
        assert!(session.begin_primary().is_ok());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = Session::new();
        let first = session.begin_primary().unwrap();
        session.fail_primary(first);
        assert_eq!(session.status(), GenerationStatus::Error);

        let second = session.begin_primary().unwrap();
        assert!(!session.commit_result(first, result("stale")));
        assert!(session.last_result().is_none());

        assert!(session.commit_result(second, result("fresh")));
        assert_eq!(session.last_result().unwrap().explanation, "fresh");
        assert_eq!(session.status(), GenerationStatus::Success);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_request() {
        let mut session = Session::new();
        let first = session.begin_primary().unwrap();
        session.fail_primary(first);
        let second = session.begin_primary().unwrap();
        session.fail_primary(first);
        assert_eq!(session.status(), GenerationStatus::Generating);
        session.fail_primary(second);
        assert_eq!(session.status(), GenerationStatus::Error);
    }

    #[test]
    fn character_context_merges_persistent_notes_and_references() {
        let mut session = Session::new();
        session.character_context = Some("Hero wears silver".to_string());
        session.save_character("Hero", "tall armored figure", None);

        let expansion = session.resolve_text("@Hero enters");
        let ctx = session.character_context_for(&expansion).unwrap();
        assert!(ctx.starts_with("Hero wears silver"));
        assert!(ctx.contains("[Active Character Reference] Hero: tall armored figure"));

        let no_mention = session.resolve_text("an empty street");
        assert_eq!(
            session.character_context_for(&no_mention).unwrap(),
            "Hero wears silver"
        );
    }

    #[test]
    fn commit_image_stores_display_payload() {
        let mut session = Session::new();
        let id = session.begin_primary().unwrap();
        assert!(session.commit_image(id, "data:image/png;base64,AAAA".into()));
        assert_eq!(session.last_image(), Some("data:image/png;base64,AAAA"));
    }
}
