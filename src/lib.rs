//! GLYPH — deterministic textual serialization for LLM tool calls.
//!
//! A [`Value`] tree (the same domain as JSON, plus bytes, timestamps,
//! reference ids, structs and sums) canonicalizes to a unique text form:
//! two values that mean the same thing produce byte-identical output. That
//! determinism is what makes [`Value::fingerprint`], [`Value::hash`], and
//! loose equality possible, and what lets a homogeneous list of records
//! compact into the `@tab … @end` tabular form instead of `[…]`.
//!
//! ```
//! use glyph::Value;
//!
//! let mut v = Value::map();
//! v.map_set("name", Value::str("ada"));
//! v.map_set("age", Value::int(36));
//!
//! assert_eq!(v.canonicalize(), "{age=36 name=ada}");
//! assert_eq!(v.fingerprint(), v.canonicalize());
//! ```
//!
//! Only JSON → [`Value`] and [`Value`] → JSON/GLYPH are provided; there is
//! no parser back from GLYPH text into values.

mod bytes;
mod canon;
mod classify;
mod error;
mod fingerprint;
mod id;
mod json;
mod number;
mod time;
mod value;

pub use canon::{CanonOptions, NullStyle};
pub use error::{GlyphError, Result};
pub use value::{Kind, Value};
