//! HTTP contract with the image processing server.
//!
//! Routes and request/response bodies are plain data so they can be checked
//! natively; the [`client`] that actually performs requests is browser-only.

mod error;
mod routes;
mod types;

#[cfg(target_arch = "wasm32")]
pub mod client;

pub use error::ApiError;
pub use routes::{cache_buster, ApiRoutes};
pub use types::{FilterPayload, FilterUpdate, OrderUpdate, PayloadValue, ServerReply, UploadReply};
