//! Generative suggestion client for SkyCast.
//!
//! Advisory prompts (mood activity, travel itinerary) are relayed to a
//! Gemini-style `generateContent` endpoint. Every failure degrades to a
//! fixed placeholder so the dashboard never has to handle an error here.

pub mod client;
pub mod error;
pub mod text;

pub use client::SuggestionClient;
pub use error::SuggestionError;
pub use text::strip_markdown;
