//! Locally held copy of a remote collection.
//!
//! A view moves `Empty -> Loading -> Populated | Failed` on every fetch. Each
//! fetch is tagged with a [`FetchTicket`]; results arriving for a stale ticket
//! (a newer fetch started, or the view was unmounted) are dropped instead of
//! overwriting newer state.

use std::future::Future;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Empty,
    Loading,
    Populated(Vec<T>),
    /// The last fetch failed. Renders as zero records, but stays
    /// distinguishable from a legitimately empty collection.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug)]
pub struct ListView<T> {
    name: &'static str,
    state: ViewState<T>,
    generation: u64,
    mounted: bool,
}

impl<T> ListView<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ViewState::Empty,
            generation: 0,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Records to display. Empty unless the last fetch succeeded.
    pub fn items(&self) -> &[T] {
        match &self.state {
            ViewState::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self.state {
            ViewState::Populated(items) => items,
            _ => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ViewState::Failed(_))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        if self.mounted {
            self.state = ViewState::Loading;
        }
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply a fetch result. Returns `false` when the result was discarded.
    ///
    /// Errors are logged and swallowed; the view falls back to zero records.
    pub fn commit(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!(view = self.name, "Discarding stale fetch result");
            return false;
        }

        self.state = match result {
            Ok(items) => ViewState::Populated(items),
            Err(e) => {
                tracing::warn!(view = self.name, "Failed to fetch {}: {e}", self.name);
                ViewState::Failed(e.detail())
            }
        };
        true
    }

    /// Start a fetch, await it, and commit its result.
    pub async fn load<F>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let ticket = self.begin_fetch();
        let result = fetch.await;
        self.commit(ticket, result)
    }

    /// Drop any displayed records without fetching.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::Empty;
    }

    /// Stop accepting results. Outstanding fetches resolve into nothing.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }
}
