//! Data models for the filter studio.

mod board;
pub mod catalog;
mod filter;
mod session;

pub use board::{FilterBoard, FilterEntry, OrderError};
pub use filter::{
    FilterCategory, FilterDefinition, FilterParams, FilterValue, Param, ParamSpec, ValueKind,
};
pub use session::Session;
