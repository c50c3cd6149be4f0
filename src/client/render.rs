// ABOUTME: Terminal rendering of the cookbook view state
// ABOUTME: Produces the heading, status line, error line, and the recipe list as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::view::ViewState;
use cookbook_core::models::Entry;
use std::fmt::Write;

/// Page heading
pub const HEADING: &str = "The Cook Book";
/// Page subheading
pub const SUBHEADING: &str = "Your personal recipe collection";
/// Shown when the list is empty
pub const EMPTY_LIST: &str = "No messages yet.";

/// Render the whole page
#[must_use]
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "{SUBHEADING}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Recipe Catcher Status: {}", state.connectivity.label());
    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recipes:");
    out.push_str(&render_entries(&state.entries));
    out
}

/// Render the list section only
#[must_use]
pub fn render_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return format!("  {EMPTY_LIST}\n");
    }

    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&render_entry(index + 1, entry));
    }
    out
}

/// Render one entry as an indented block
#[must_use]
pub fn render_entry(position: usize, entry: &Entry) -> String {
    let title = if entry.title.is_empty() {
        "Untitled"
    } else {
        entry.title.as_str()
    };
    let text = if entry.text.is_empty() {
        "No description available."
    } else {
        entry.text.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(out, "  {position}. {title}  [{}]", entry.id);
    let _ = writeln!(out, "     {text}");
    if let Some(url) = entry.image_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "     image: {url}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view::Connectivity;
    use cookbook_core::models::{timestamp, EntryId, NewEntry};

    fn soup() -> Entry {
        NewEntry {
            title: "Soup".into(),
            text: "Boil it".into(),
            image_url: Some("https://x/y.png".into()),
        }
        .into_entry(EntryId::generate(), timestamp::now())
    }

    #[test]
    fn test_empty_list_placeholder() {
        let page = render(&ViewState::default());
        assert!(page.contains("Recipe Catcher Status: checking..."));
        assert!(page.contains(EMPTY_LIST));
    }

    #[test]
    fn test_entries_and_error_are_rendered() {
        let entry = soup();
        let state = ViewState {
            connectivity: Connectivity::Reported("ok".into()),
            entries: vec![entry.clone()],
            error: Some("Text is required.".into()),
            ..ViewState::default()
        };

        let page = render(&state);
        assert!(page.contains("Recipe Catcher Status: ok"));
        assert!(page.contains("! Text is required."));
        assert!(page.contains(&format!("1. Soup  [{}]", entry.id)));
        assert!(page.contains("image: https://x/y.png"));
        assert!(!page.contains(EMPTY_LIST));
    }

    #[test]
    fn test_blank_fields_use_placeholders() {
        let mut entry = soup();
        entry.title.clear();
        entry.text.clear();
        entry.image_url = None;

        let block = render_entry(3, &entry);
        assert!(block.contains("3. Untitled"));
        assert!(block.contains("No description available."));
        assert!(!block.contains("image:"));
    }
}
