use serde::{Deserialize, Serialize};

/// The first anchor found in a fragment of HTML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLink {
    /// Value of the anchor's `href` attribute (empty if absent)
    url: String,

    /// Text content captured inside the anchor (empty if none)
    text: String,
}

impl ParsedLink {
    /// Create a new parsed link
    pub fn new(url: String, text: String) -> Self {
        Self { url, text }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true when neither a url nor any text was captured
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.text.is_empty()
    }

    /// Split into `(url, text)`
    pub fn into_parts(self) -> (String, String) {
        (self.url, self.text)
    }
}
