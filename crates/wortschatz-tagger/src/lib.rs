pub mod client;
pub mod matcher;
pub mod tags;

pub use client::{SentenceToken, TagError, Tagger, TaggerClient};
pub use matcher::{match_sentence, resolve_sentence};
pub use tags::Tag;
