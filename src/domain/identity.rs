use regex::Regex;
use std::sync::OnceLock;

// Canonical movie ids are lowercase-hex UUIDs; matching is case-insensitive.
fn canonical_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("canonical id pattern is valid")
    })
}

fn slug_separator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("slug separator pattern is valid"))
}

/// Normalizes a title into its URL slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into one
/// hyphen, then trims hyphens from both ends. The same function backs route
/// resolution, link generation and redirect targets.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    slug_separator_pattern()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// How a movie route parameter addresses its movie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieRef {
    /// Canonical backend id, with any `:suffix` already stripped.
    Id(String),
    /// Title-derived slug, taken verbatim from the route.
    Slug(String),
}

impl MovieRef {
    /// Classifies a route parameter. Returns `None` for an empty parameter.
    pub fn parse(param: &str) -> Option<Self> {
        if param.is_empty() {
            return None;
        }

        if is_canonical_id(param) {
            Some(MovieRef::Id(strip_suffix(param).to_string()))
        } else {
            Some(MovieRef::Slug(param.to_string()))
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, MovieRef::Id(_))
    }
}

/// True when the parameter (ignoring any `:suffix`) is a canonical id.
pub fn is_canonical_id(param: &str) -> bool {
    canonical_id_pattern().is_match(strip_suffix(param))
}

fn strip_suffix(param: &str) -> &str {
    param.split(':').next().unwrap_or(param)
}
