//! Application state management for the quote explorer.
//!
//! This module contains the explorer state machine: the fetched quote
//! collection and the navigation cursor, wrapped in the loading/error
//! lifecycle. All mutation goes through named transition methods so the
//! state machine stays testable independent of any rendering mechanism.

use crate::domain::{BrowseMode, LoadError, Navigator, Quote};

/// Represents the current input mode of the application.
///
/// The mode determines how user input is interpreted and what UI elements
/// are displayed on top of the quote view.
#[derive(Debug)]
pub enum AppMode {
    /// Normal browsing mode - navigation keys page through quotes
    Normal,
    /// Help screen is displayed
    Help,
}

/// What the renderer should show, derived from the current state.
///
/// Exactly one of these applies at any time. An in-flight load wins over
/// everything; an error is only reported once loading has settled; the
/// loaded view additionally requires a non-empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<'a> {
    /// A fetch is in flight
    Loading,
    /// The last fetch failed; navigation is unavailable
    Error(&'a str),
    /// Quotes are available and one is selected
    Loaded(&'a Quote),
    /// Nothing to show: no load has finished yet (`fetched` false) or the
    /// source returned an empty list (`fetched` true)
    Empty {
        /// Whether a load has completed successfully before
        fetched: bool,
    },
}

/// Main application state containing the quote collection and view state.
///
/// This structure holds all the data needed to render the terminal UI and
/// page through the fetched quotes.
///
/// # Examples
///
/// ```
/// use tqex::application::App;
/// use tqex::domain::BrowseMode;
///
/// let app = App::new(BrowseMode::Sequential);
/// assert!(app.quotes.is_empty());
/// assert!(!app.loading);
/// ```
#[derive(Debug)]
pub struct App {
    /// Fetched quotes, replaced wholesale on every successful load
    pub quotes: Vec<Quote>,
    /// Index of the quote currently shown; only meaningful while `quotes`
    /// is non-empty
    pub current: usize,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Human-readable description of the last failed load
    pub error: Option<String>,
    /// Current input mode
    pub mode: AppMode,
    /// Navigation policy for this session
    pub navigator: Navigator,
    /// Whether any load has completed successfully
    pub fetched: bool,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Tag of the most recently started load; completions carrying an older
    /// tag are dropped
    generation: u64,
    /// Load queued by a transition, waiting to be dispatched by the event loop
    pending_load: Option<u64>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(BrowseMode::default())
    }
}

impl App {
    /// Creates an empty explorer using the given browse mode.
    ///
    /// The collection starts empty; nothing is fetched until
    /// [`Self::request_load`] is called.
    pub fn new(mode: BrowseMode) -> Self {
        Self {
            quotes: Vec::new(),
            current: 0,
            loading: false,
            error: None,
            mode: AppMode::Normal,
            navigator: Navigator::new(mode),
            fetched: false,
            help_scroll: 0,
            generation: 0,
            pending_load: None,
        }
    }

    /// Starts a new load cycle.
    ///
    /// Marks the state as loading and queues a request for the event loop to
    /// dispatch via [`Self::take_pending_load`]. Each call supersedes any
    /// not-yet-dispatched request, so rapid repeated triggers resolve to the
    /// newest load.
    pub fn request_load(&mut self) {
        self.generation += 1;
        self.loading = true;
        self.pending_load = Some(self.generation);
    }

    /// Hands the queued load request to the dispatcher, if one is waiting.
    ///
    /// Returns the generation tag the eventual completion must carry.
    pub fn take_pending_load(&mut self) -> Option<u64> {
        self.pending_load.take()
    }

    /// Applies the outcome of a finished load.
    ///
    /// On success the collection is replaced wholesale, the error is cleared,
    /// and the cursor is re-initialized per the navigation policy. On failure
    /// the collection is left unchanged and the error message is stored.
    /// Either way, loading stops.
    ///
    /// Completions tagged with anything but the most recent generation are
    /// dropped untouched: a fetch that lost the race against a newer load
    /// cannot clobber its result.
    ///
    /// # Arguments
    ///
    /// * `generation` - Tag returned by [`Self::take_pending_load`]
    /// * `result` - Quote list or the load failure
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<Quote>, LoadError>) {
        if generation != self.generation {
            return;
        }

        self.loading = false;
        match result {
            Ok(quotes) => {
                self.current = self.navigator.initial_index(quotes.len());
                self.quotes = quotes;
                self.error = None;
                self.fetched = true;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Moves to the next quote according to the navigation policy.
    ///
    /// No-op while a load is in flight, after a failed load, or when the
    /// policy reports nothing to move to.
    pub fn advance(&mut self) {
        if self.loading || self.error.is_some() {
            return;
        }
        if let Some(next) = self.navigator.advance(self.current, self.quotes.len()) {
            self.current = next;
        }
    }

    /// Moves to the previous quote according to the navigation policy.
    ///
    /// Same no-op conditions as [`Self::advance`].
    pub fn retreat(&mut self) {
        if self.loading || self.error.is_some() {
            return;
        }
        if let Some(previous) = self.navigator.retreat(self.current, self.quotes.len()) {
            self.current = previous;
        }
    }

    /// The quote the cursor points at, when the collection is non-empty.
    pub fn current_quote(&self) -> Option<&Quote> {
        self.quotes.get(self.current)
    }

    /// Pure projection of the state onto the four mutually exclusive views.
    pub fn view_state(&self) -> ViewState<'_> {
        if self.loading {
            ViewState::Loading
        } else if let Some(ref message) = self.error {
            ViewState::Error(message)
        } else if let Some(quote) = self.quotes.get(self.current) {
            ViewState::Loaded(quote)
        } else {
            ViewState::Empty {
                fetched: self.fetched,
            }
        }
    }

    /// Whether the navigation controls can do anything right now.
    pub fn can_navigate(&self) -> bool {
        !self.loading && self.error.is_none() && self.navigator.can_navigate(self.quotes.len())
    }

    /// Whether a manual reload is offered in the current mode.
    ///
    /// Only sequential mode has a manual trigger; shuffle mode loads once at
    /// startup and offers no retry.
    pub fn can_reload(&self) -> bool {
        matches!(self.navigator.mode(), BrowseMode::Sequential) && !self.loading
    }
}
