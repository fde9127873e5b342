//! # Data Transfer Objects (DTOs)
//!
//! Wire types of the key check endpoint.
//!
//! ## Module Organization
//!
//! - [`models`] - Model listing returned by the generative-language endpoint
//!
//! The body of a key check response never decides whether a key is accepted;
//! only the HTTP status does. The listing is parsed on a best-effort basis to
//! log how many models the key can see.
//!
//! ## Example JSON
//!
//! ```text
//! GET /v1beta/models?key=AIza...
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "models": [
//!     { "name": "models/gemini-1.5-flash", "displayName": "Gemini 1.5 Flash" }
//!   ],
//!   "nextPageToken": "Ch5tb2RlbHMv..."
//! }
//! ```

pub mod models;

pub use models::*;
