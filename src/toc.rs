//! GitHub-flavored markdown anchor/slug generation for the group index.

use std::collections::{HashMap, HashSet};

/// Hands out heading anchors the way GitHub does: repeated slugs get a
/// `-1`, `-2`, ... suffix in document order, skipping any suffixed slug a
/// literal heading already took.
#[derive(Debug, Default)]
pub struct Slugger {
    /// Next suffix to try per base slug
    counters: HashMap<String, usize>,
    /// Every anchor handed out so far
    taken: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor for the next heading with this text.
    pub fn slug(&mut self, text: &str) -> String {
        let base = github_slug(text);
        let mut candidate = base.clone();
        while self.taken.contains(&candidate) {
            let counter = self.counters.entry(base.clone()).or_insert(0);
            *counter += 1;
            candidate = format!("{}-{}", base, counter);
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Generate a table-of-contents list item linking to `anchor`.
pub fn render_toc_item(text: &str, anchor: &str) -> String {
    format!("* [{}](#{})", escape_link_text(text), anchor)
}

/// GitHub heading anchor slug generation.
///
/// - lowercase
/// - drop everything that isn't alphanumeric, space, or hyphen
/// - spaces become hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
