//! The response transcript
//!
//! A single append-only buffer holding the AI's response so far. It is never
//! rewritten mid-stream; it is replaced (cleared) only when a new submission
//! begins, which also bumps the generation counter so a stale drain can be
//! told apart from the current one.

/// Append-only text buffer for one streamed response
#[derive(Debug, Default)]
pub struct Transcript {
    text: String,
    generation: u64,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append decoded text in arrival order
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// The accumulated response text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether anything has been appended since the last reset
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Generation counter, bumped by every reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clear the buffer for a new submission and return the new generation
    pub fn reset(&mut self) -> u64 {
        self.text.clear();
        self.generation += 1;
        self.generation
    }
}
