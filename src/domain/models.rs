use serde::{Deserialize, Serialize};

/// One quote record as served by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub book: String,
    pub author: String,
    pub quote: String,
}

/// How the explorer walks the quote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseMode {
    /// Step through quotes in order, wrapping at either end.
    /// Loading is triggered manually and the view starts at the first quote.
    Sequential,
    /// Jump to a random quote, never the one currently shown.
    /// Loading starts automatically and the view opens on a random quote.
    #[default]
    Shuffle,
}
