//! Serialization helpers shared by the vocabulary and block types.

pub mod extra_json;
pub mod timefmt;
