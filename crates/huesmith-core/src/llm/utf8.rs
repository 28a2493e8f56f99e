//! Cross-chunk UTF-8 decoding
//!
//! Network chunks can split a multi-byte character anywhere. This decoder
//! buffers the trailing incomplete sequence of each chunk and prepends it to
//! the next one, so callers always receive valid text in arrival order. Both
//! the SSE parser and the transcript consumer decode through it.

/// Stateful UTF-8 decoder for byte streams
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    /// Trailing bytes of an incomplete character from the previous chunk
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    /// Create a new decoder with no buffered state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a chunk, returning all complete text it yields
    ///
    /// An incomplete trailing sequence is buffered for the next call rather
    /// than decoded lossily.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let bytes = if self.pending.is_empty() {
            chunk.to_vec()
        } else {
            let mut combined = std::mem::take(&mut self.pending);
            combined.extend_from_slice(chunk);
            combined
        };

        let split = complete_prefix_len(&bytes);
        self.pending = bytes[split..].to_vec();

        match std::str::from_utf8(&bytes[..split]) {
            Ok(text) => text.to_string(),
            Err(e) => {
                // Genuinely invalid bytes (not a boundary split): keep what
                // decodes and drop the rest with a warning
                let valid_up_to = e.valid_up_to();
                tracing::warn!(
                    dropped = split - valid_up_to,
                    "invalid UTF-8 in stream chunk"
                );
                String::from_utf8_lossy(&bytes[..valid_up_to]).into_owned()
            }
        }
    }

    /// Whether bytes of an incomplete character are buffered
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of buffered bytes
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop any buffered bytes
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Length of the prefix that ends on a character boundary
///
/// Scans at most the last 4 bytes (the maximum UTF-8 sequence length) for a
/// start byte whose sequence runs past the end of the buffer.
fn complete_prefix_len(bytes: &[u8]) -> usize {
    if std::str::from_utf8(bytes).is_ok() {
        return bytes.len();
    }

    for i in 1..=4.min(bytes.len()) {
        let pos = bytes.len() - i;
        let byte = bytes[pos];
        if !is_continuation_byte(byte) {
            let expected = utf8_char_len(byte);
            if bytes.len() - pos < expected {
                return pos;
            }
            break;
        }
    }
    bytes.len()
}

#[inline]
fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0b1100_0000) == 0b1000_0000
}

#[inline]
fn utf8_char_len(first_byte: u8) -> usize {
    if first_byte & 0b1000_0000 == 0 {
        1
    } else if first_byte & 0b1110_0000 == 0b1100_0000 {
        2
    } else if first_byte & 0b1111_0000 == 0b1110_0000 {
        3
    } else if first_byte & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        1
    }
}
