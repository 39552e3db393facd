//! Error types for DDB API interactions.

/// Errors that can occur when talking to the DDB API.
///
/// Two tiers exist in practice: fatal errors propagate out of the main
/// request paths, while per-item errors during downloads and thumbnail
/// fetches are caught by the enclosing loop and collected into reports.
#[derive(Debug, thiserror::Error)]
pub enum DdbError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status returned by a remote service
    #[error("API returned status {status} for {url}")]
    Api { status: u16, url: String },

    /// Parsing error (JSON or XML)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A field required by the caller is absent from the decoded response
    #[error("Missing field `{field}` in response from {url}")]
    MissingField { field: &'static str, url: String },

    /// The supplied portal URL could not be parsed
    #[error("Invalid portal URL: {0}")]
    InvalidUrl(String),

    /// Image decode or encode error
    #[error("Image error: {0}")]
    Image(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DdbError {
    fn from(err: reqwest::Error) -> Self {
        DdbError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for DdbError {
    fn from(err: serde_json::Error) -> Self {
        DdbError::Parse(format!("JSON: {}", err))
    }
}

impl From<quick_xml::Error> for DdbError {
    fn from(err: quick_xml::Error) -> Self {
        DdbError::Parse(format!("XML: {}", err))
    }
}

impl From<image::ImageError> for DdbError {
    fn from(err: image::ImageError) -> Self {
        DdbError::Image(err.to_string())
    }
}
