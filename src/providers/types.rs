//! Wire model for the Gemini `generateContent` API.
//!
//! These types serialize to exactly the JSON the API expects, so a reply turn
//! can be appended to the history and sent back without conversion.
pub mod content;
pub mod message;
pub mod response;
pub mod tool;
