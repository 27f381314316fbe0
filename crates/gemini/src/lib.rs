//! Gemini REST client for concept generation.
//!
//! Typed wire shapes for the `generateContent` endpoint, a thin HTTP
//! wrapper, configuration loading, and the [`service::GeminiGenerator`]
//! that turns domain parameters into the two generation calls.

pub mod api;
pub mod config;
pub mod messages;
pub mod service;
