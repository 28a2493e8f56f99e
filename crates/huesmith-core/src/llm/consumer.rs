//! Streamed response consumer
//!
//! Pull-based read loop over an HTTP response body: await the next chunk,
//! decode it as text (preserving UTF-8 state across chunk boundaries), append
//! it to the transcript, repeat until end-of-stream. Cancellation is by drop;
//! no task is spawned and nothing outlives the returned future.

use crate::error::{HuesmithError, HuesmithResult};
use crate::llm::utf8::Utf8ChunkDecoder;
use crate::transcript::Transcript;
use futures::Stream;
use tokio_stream::StreamExt;

/// Drain a byte stream into the transcript, in strict arrival order
pub async fn drain_into<S, B, E>(stream: S, transcript: &mut Transcript) -> HuesmithResult<()>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    drain_observed(stream, transcript, |_| {}).await
}

/// Drain a byte stream into the transcript, invoking `on_text` for every
/// decoded fragment as it arrives
///
/// The observer sees exactly the text that is appended, which lets a caller
/// render the response incrementally without a second buffer.
pub async fn drain_observed<S, B, E>(
    mut stream: S,
    transcript: &mut Transcript,
    mut on_text: impl FnMut(&str),
) -> HuesmithResult<()>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut decoder = Utf8ChunkDecoder::new();

    while let Some(chunk_result) = stream.next().await {
        let chunk =
            chunk_result.map_err(|e| HuesmithError::Http(format!("stream read failed: {e}")))?;
        let text = decoder.decode(chunk.as_ref());
        if !text.is_empty() {
            transcript.append(&text);
            on_text(&text);
        }
    }

    if decoder.has_pending() {
        tracing::warn!(
            bytes = decoder.pending_len(),
            "stream ended mid-character; trailing bytes dropped"
        );
    }

    Ok(())
}
