// Composition root for the shopping list service.
//
// - Read config from environment.
// - Instantiate the in-memory item repository and the item store.
// - Wire the store into the HTTP router through AppState.

pub mod config;
pub mod http;
pub mod state;
