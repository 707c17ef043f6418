//! Error types shared by the JSON bridge.
//!
//! Construction and accessors on [`crate::Value`] never fail loudly — the
//! only fallible surface is parsing untrusted JSON text, and even there the
//! public entry point collapses any error to `None` rather than propagating
//! it. `GlyphError` exists so the internal parse path keeps a real cause to
//! log, without leaking a `Result` into the infallible value-construction
//! API.

use thiserror::Error;

/// Failure modes for the JSON bridge.
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
