//! Cursor sources and byte sinks used by the tokenizer and the dump serializer.

pub mod traits;

/// Input sources the tokenizer can read from.
pub mod sources {
    pub mod buffer;
    #[cfg(feature = "std")]
    pub mod file;
}

/// Output sinks the canonical dump serializer can write to.
pub mod destinations {
    pub mod buffer;
    #[cfg(feature = "std")]
    pub mod file;
}
