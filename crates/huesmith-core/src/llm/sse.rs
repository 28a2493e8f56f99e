//! Server-Sent Events parsing for the upstream token stream
//!
//! Buffered parser handling multi-line data fields, event type prefixes and
//! events split across network chunks. Byte-level UTF-8 splits are handled
//! by [`Utf8ChunkDecoder`](crate::llm::utf8::Utf8ChunkDecoder) before any
//! text-level parsing happens.

use crate::llm::utf8::Utf8ChunkDecoder;

/// A parsed SSE event
#[derive(Debug, Clone, PartialEq)]
pub struct SseEvent {
    /// Event type, when the stream names one
    pub event_type: Option<String>,
    /// Event data (the payload after `data:` prefixes)
    pub data: String,
}

impl SseEvent {
    /// Check for the `[DONE]` end-of-stream marker
    pub fn is_done(&self) -> bool {
        self.data.trim() == "[DONE]"
    }
}

/// Buffered SSE parser
///
/// Events are separated by blank lines (`\n\n` or `\r\n\r\n`); incomplete
/// events are carried to the next `feed` call.
#[derive(Debug, Default)]
pub struct SseParser {
    decoder: Utf8ChunkDecoder,
    buffer: String,
}

impl SseParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes and extract all complete events
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.push_str(&self.decoder.decode(chunk));

        let mut events = Vec::new();
        while let Some(end) = self.find_event_boundary() {
            let event_text: String = self.buffer.drain(..end).collect();
            self.skip_delimiter();
            if let Some(event) = parse_event(&event_text) {
                events.push(event);
            }
        }
        events
    }

    /// Whether any partial event or byte sequence is still buffered
    pub fn has_remaining(&self) -> bool {
        !self.buffer.is_empty() || self.decoder.has_pending()
    }

    fn find_event_boundary(&self) -> Option<usize> {
        match (self.buffer.find("\n\n"), self.buffer.find("\r\n\r\n")) {
            (Some(unix), Some(windows)) => Some(unix.min(windows)),
            (unix, windows) => unix.or(windows),
        }
    }

    fn skip_delimiter(&mut self) {
        while self.buffer.starts_with('\n') || self.buffer.starts_with('\r') {
            self.buffer.remove(0);
        }
    }
}

fn parse_event(text: &str) -> Option<SseEvent> {
    let mut event_type: Option<String> = None;
    let mut data_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim_start();
        if line.is_empty() {
            continue;
        }
        if let Some(value) = line.strip_prefix("event:") {
            event_type = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("data:") {
            data_lines.push(value.trim_start());
        }
        // id:, retry: and unknown fields are ignored
    }

    if data_lines.is_empty() {
        return None;
    }

    Some(SseEvent {
        event_type,
        data: data_lines.join("\n"),
    })
}
