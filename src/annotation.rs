//! Scraping of the informal annotation strings attached to marker points
//!
//! The annotations are HTML-ish strings like
//! `"Code: 123<br>Group: Energy<br>Description: Power generation"`.
//! Two independent patterns pull out the group and the description; each
//! value runs up to the next tag-like delimiter. The source strings are
//! informal, so this stays a pair of extractions rather than a markup
//! parser.

use once_cell::sync::Lazy;
use regex::Regex;

static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Group: ([^<]+)").expect("group pattern compiles"));

static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Description: ([^<]+)").expect("description pattern compiles"));

/// Fields scraped from one annotation string.
///
/// `category` is present whenever the group marker matched, even if the
/// captured value trims down to an empty string; `description` mirrors the
/// raw capture the same way. Callers apply their own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    /// Trimmed capture of the `Group:` marker
    pub category: Option<String>,
    /// Trimmed capture of the `Description:` marker
    pub description: Option<String>,
}

/// Extract category and description from an annotation string.
#[must_use]
pub fn scrape(text: &str) -> Annotation {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    Annotation {
        category: capture(&GROUP_RE),
        description: capture(&DESCRIPTION_RE),
    }
}
