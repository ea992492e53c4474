//! `@Name` mention expansion against the character roster.
//!
//! Expansion replaces whole-word, case-insensitive `@name` tokens with
//! `name (VISUAL: description)` and collects one reference line per
//! character actually mentioned. Partial tokens (`@Heroic` when only
//! `Hero` is registered) never match.

use std::collections::HashSet;

use log::warn;
use regex::{NoExpand, Regex};

use crate::models::Character;

/// Result of expanding mentions in free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionExpansion {
    /// The input with every known `@name` replaced
    pub text: String,
    /// One `[Active Character Reference] name: description` line per
    /// mentioned character, deduplicated per character
    pub references: Vec<String>,
}

impl MentionExpansion {
    /// The side-channel context block, or `None` when nothing was mentioned
    pub fn reference_block(&self) -> Option<String> {
        if self.references.is_empty() {
            None
        } else {
            Some(self.references.join("\n"))
        }
    }
}

/// Expands every known `@name` mention in `text` against the roster.
///
/// Roster order decides which entry wins when names collide; once a name
/// has been expanded, a later duplicate finds nothing left to match.
pub fn expand_mentions(text: &str, roster: &[Character]) -> MentionExpansion {
    let mut expanded = text.to_string();
    let mut references = Vec::new();
    let mut seen = HashSet::new();

    for character in roster {
        if character.name.is_empty() {
            continue;
        }
        let pattern = format!(r"(?i)@{}\b", regex::escape(&character.name));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(err) => {
                warn!("skipping mention pattern for '{}': {}", character.name, err);
                continue;
            }
        };
        if !re.is_match(&expanded) {
            continue;
        }

        let replacement = format!("{} (VISUAL: {})", character.name, character.description);
        expanded = re
            .replace_all(&expanded, NoExpand(&replacement))
            .into_owned();

        if seen.insert(character.name.to_lowercase()) {
            references.push(format!(
                "[Active Character Reference] {}: {}",
                character.name, character.description
            ));
        }
    }

    MentionExpansion {
        text: expanded,
        references,
    }
}

/// Detects an unterminated `@token` immediately preceding the cursor.
///
/// Returns the byte offset of the `@` and the partial token (may be empty
/// when the user just typed `@`). `cursor` must sit on a char boundary.
pub fn pending_mention(text: &str, cursor: usize) -> Option<(usize, &str)> {
    let head = text.get(..cursor)?;
    let re = Regex::new(r"@(\w*)$").ok()?;
    let caps = re.captures(head)?;
    let full = caps.get(0)?;
    let partial = caps.get(1)?;
    Some((full.start(), partial.as_str()))
}

/// Roster entries whose name starts with the partial token, case-insensitive
pub fn mention_candidates<'a>(partial: &str, roster: &'a [Character]) -> Vec<&'a Character> {
    let needle = partial.to_lowercase();
    roster
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&needle))
        .collect()
}

/// Replaces the pending partial token with `@Name ` and returns the new
/// text plus the cursor position right after the inserted space.
/// No other text is altered; without a pending token the input is returned
/// unchanged.
pub fn apply_completion(text: &str, cursor: usize, name: &str) -> (String, usize) {
    match pending_mention(text, cursor) {
        Some((start, _)) => {
            let mut completed = String::with_capacity(text.len() + name.len() + 2);
            completed.push_str(&text[..start]);
            completed.push('@');
            completed.push_str(name);
            completed.push(' ');
            let new_cursor = completed.len();
            completed.push_str(&text[cursor..]);
            (completed, new_cursor)
        }
        None => (text.to_string(), cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Character> {
        vec![
            Character {
                id: "1".into(),
                name: "Hero".into(),
                description: "tall armored figure".into(),
                image: None,
                created_at: String::new(),
            },
            Character {
                id: "2".into(),
                name: "Villain".into(),
                description: "cloaked schemer".into(),
                image: None,
                created_at: String::new(),
            },
        ]
    }

    #[test]
    fn expands_known_mention_with_visual_description() {
        let out = expand_mentions("@Hero enters the room", &roster());
        assert_eq!(out.text, "Hero (VISUAL: tall armored figure) enters the room");
        assert_eq!(
            out.references,
            vec!["[Active Character Reference] Hero: tall armored figure"]
        );
    }

    #[test]
    fn mention_match_is_case_insensitive() {
        let out = expand_mentions("@hero waves", &roster());
        assert_eq!(out.text, "Hero (VISUAL: tall armored figure) waves");
    }

    #[test]
    fn partial_tokens_do_not_match() {
        let out = expand_mentions("@Heroic deeds", &roster());
        assert_eq!(out.text, "@Heroic deeds");
        assert!(out.references.is_empty());
    }

    #[test]
    fn references_deduplicate_per_character_not_per_occurrence() {
        let out = expand_mentions("@Hero meets @Hero and @Villain", &roster());
        assert_eq!(out.references.len(), 2);
        assert!(out.text.contains("cloaked schemer"));
    }

    #[test]
    fn unmentioned_roster_members_are_excluded() {
        let out = expand_mentions("@Villain laughs", &roster());
        assert_eq!(out.references.len(), 1);
        assert!(out.references[0].contains("Villain"));
    }

    #[test]
    fn replacement_descriptions_are_literal() {
        let cast = vec![Character {
            id: "1".into(),
            name: "Bot".into(),
            description: "unit $1 of the fleet".into(),
            image: None,
            created_at: String::new(),
        }];
        let out = expand_mentions("@Bot online", &cast);
        assert_eq!(out.text, "Bot (VISUAL: unit $1 of the fleet) online");
    }

    #[test]
    fn detects_pending_token_at_cursor() {
        let text = "say hi to @He";
        assert_eq!(pending_mention(text, text.len()), Some((10, "He")));
        assert_eq!(pending_mention("no token here", 13), None);
        // A completed token followed by a space is no longer pending
        assert_eq!(pending_mention("hi @Hero ", 9), None);
    }

    #[test]
    fn candidates_match_by_case_insensitive_prefix() {
        let cast = roster();
        let hits = mention_candidates("he", &cast);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hero");
        assert_eq!(mention_candidates("", &cast).len(), 2);
    }

    #[test]
    fn completion_replaces_partial_token_only() {
        let text = "say hi to @He tomorrow";
        let (completed, cursor) = apply_completion(text, 13, "Hero");
        assert_eq!(completed, "say hi to @Hero  tomorrow");
        assert_eq!(&completed[..cursor], "say hi to @Hero ");
    }
}
