//! JSON API route assembly.

use axum::Router;
use axum::routing::post;

use ledgerhub_app::ports::KeyedStore;

use crate::state::AppState;

pub mod invoke;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: KeyedStore + Send + Sync + 'static,
{
    Router::new().route("/invoke", post(invoke::invoke))
}
