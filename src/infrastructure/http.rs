use crate::domain::{LoadError, LoadResult, Quote};
use crossbeam_channel::Sender;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Endpoint the explorer reads from when no override is given.
pub const DEFAULT_QUOTES_URL: &str =
    "https://02-01-b-98151548779877511146s-projects.vercel.app/quotes";

/// A load completion: which request finished, and what it produced.
pub type LoadReply = (u64, LoadResult<Vec<Quote>>);

/// Read-only client for the remote quote source.
pub struct QuoteSource {
    client: Client,
    url: String,
}

impl QuoteSource {
    /// Builds a source for `url` with the given request timeout.
    pub fn new(url: &str, timeout: Duration) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetches the full quote list.
    ///
    /// Any non-success status is a failure carrying the status line, and the
    /// body must parse as a JSON array of quote records. There is no
    /// validation beyond the parse.
    pub fn fetch(&self) -> LoadResult<Vec<Quote>> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        let body = response.text()?;
        let quotes: Vec<Quote> = serde_json::from_str(&body)?;
        debug!("fetched {} quotes from {}", quotes.len(), self.url);
        Ok(quotes)
    }
}

/// Runs one fetch on a background thread and reports back over `replies`.
///
/// The UI loop keeps rendering while the request is in flight. If the
/// receiving side is gone by the time the fetch finishes, the completion is
/// silently dropped.
pub fn spawn_fetch(source: Arc<QuoteSource>, generation: u64, replies: Sender<LoadReply>) {
    thread::spawn(move || {
        let result = source.fetch();
        if let Err(ref err) = result {
            warn!("quote load failed: {}", err);
        }
        let _ = replies.send((generation, result));
    });
}
