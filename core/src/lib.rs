//! Validated record model for the todo service.
//!
//! # Overview
//! Converts untyped `serde_json::Value` trees into validated `Todo` records,
//! merges partial updates into existing records, and serializes records back
//! to JSON. Decoding bytes and transmitting responses is the caller's job,
//! so every operation here is a pure function of its inputs.
//!
//! # Design
//! - `Todo` is an immutable value. `with_id` and `apply_patch` return new
//!   records and never touch the receiver.
//! - `completed` and `order` are genuinely optional. Only `Todo::parse` fills
//!   `completed = false` when the key is absent; the direct constructor and
//!   `apply_patch` never invent a value.
//! - Validation stops at the first violation. `ModelError` names the
//!   offending property so the HTTP layer can report it verbatim.

pub mod error;
pub mod json;
pub mod todo;

pub use error::{ModelError, Result};
pub use json::JsonType;
pub use todo::Todo;
