//! Shared application state for axum handlers.

use ledgerhub_app::dispatch::Dispatcher;
use ledgerhub_app::ports::KeyedStore;

/// Application state shared across all axum handlers.
///
/// Generic over the store type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the store itself does not need to be `Clone` —
/// the dispatcher only clones its inner `Arc`.
pub struct AppState<S> {
    /// The name-based command dispatcher.
    pub dispatcher: Dispatcher<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<S> AppState<S>
where
    S: KeyedStore + Send + Sync + 'static,
{
    /// Create a new application state around the dispatcher.
    pub fn new(dispatcher: Dispatcher<S>) -> Self {
        Self { dispatcher }
    }
}
