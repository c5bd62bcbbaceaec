//! Core domain types for word ladders
//!
//! Words, per-tier dictionaries and exclusion policies. These types are pure
//! and carry no randomness; everything random is injected by the game layer.

mod dictionary;
mod policy;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use policy::ExclusionPolicy;
pub use word::{ALPHABET, Word, WordError};
