use thiserror::Error;

/// Why a quote load failed.
///
/// Transport, status, and parse failures stay distinct here so they can be
/// logged precisely; the state layer collapses all of them into a single
/// message string shown to the user.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the success range.
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a JSON array of quote records.
    #[error("malformed quote list: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
