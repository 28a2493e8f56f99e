//! Palette submission session
//!
//! Owns the state the form controller works against: the upload set, the
//! extracted color set, the response transcript and the single-submission
//! guard. Extraction runs one task per file under a `JoinSet`; results are
//! appended at the single merge point below in completion order, so display
//! order reflects completion order, not upload order. That non-determinism
//! is accepted; what is ruled out is any concurrent writer.

use crate::error::{HuesmithError, HuesmithResult};
use crate::extract;
use crate::transcript::Transcript;
use crate::types::{HexColor, PaletteRequest};
use std::path::PathBuf;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// State for one user's palette-generation workflow
#[derive(Debug)]
pub struct PaletteSession {
    credential_saved: bool,
    uploads: Vec<PathBuf>,
    colors: Vec<HexColor>,
    transcript: Transcript,
    in_flight: bool,
}

impl PaletteSession {
    /// Create a session; the credential flag is resolved once at startup and
    /// threaded in explicitly
    pub fn new(credential_saved: bool) -> Self {
        Self {
            credential_saved,
            uploads: Vec::new(),
            colors: Vec::new(),
            transcript: Transcript::new(),
            in_flight: false,
        }
    }

    /// Queue an image file for extraction
    pub fn add_upload(&mut self, path: PathBuf) {
        self.uploads.push(path);
    }

    /// Files currently queued
    pub fn uploads(&self) -> &[PathBuf] {
        &self.uploads
    }

    /// Colors extracted so far, in completion order, duplicates kept
    pub fn colors(&self) -> &[HexColor] {
        &self.colors
    }

    /// The response transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Mutable access for the draining consumer
    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Clear the upload set; repeating is a no-op
    pub fn reset_uploads(&mut self) {
        self.uploads.clear();
    }

    /// Clear the color set; repeating is a no-op
    pub fn reset_colors(&mut self) {
        self.colors.clear();
    }

    /// Remove every occurrence of one color from the set
    pub fn remove_color(&mut self, color: &HexColor) {
        self.colors.retain(|c| c != color);
    }

    /// Run extraction for every queued file and merge the results
    ///
    /// Each file is an independent task; a file that cannot be decoded
    /// contributes zero colors and a warning, never an error. Consumes the
    /// upload set. Returns how many colors were appended.
    pub async fn extract_uploads(&mut self) -> usize {
        let files = std::mem::take(&mut self.uploads);
        let mut tasks = JoinSet::new();
        for path in files {
            tasks.spawn_blocking(move || (extract::extract_palette(&path), path));
        }

        // Single-writer merge point: append as each task resolves
        let mut appended = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((Ok(colors), path)) => {
                    debug!(file = %path.display(), count = colors.len(), "extracted colors");
                    appended += colors.len();
                    self.colors.extend(colors);
                }
                Ok((Err(e), path)) => {
                    warn!(file = %path.display(), error = %e, "image could not be sampled");
                }
                Err(e) => warn!(error = %e, "extraction task panicked"),
            }
        }
        appended
    }

    /// Start a submission: validate, gate on the credential, reset the
    /// transcript and arm the busy guard
    ///
    /// A second submission while a response is still draining is rejected.
    pub fn begin_submission(&mut self, prompt: &str) -> HuesmithResult<PaletteRequest> {
        if self.in_flight {
            return Err(HuesmithError::Busy);
        }
        if !self.credential_saved {
            return Err(HuesmithError::auth("no credential saved"));
        }

        let request = PaletteRequest::new(prompt, self.colors.clone())?;
        self.transcript.reset();
        self.in_flight = true;
        Ok(request)
    }

    /// Mark the in-flight submission as drained (or failed)
    pub fn finish_submission(&mut self) {
        self.in_flight = false;
    }

    /// Whether a submission is currently draining
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    const PROMPT: &str = "surfing vibes tropical theme";

    fn write_solid_png(dir: &std::path::Path, name: &str, color: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb(color)));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_short_prompt_never_builds_a_request() {
        let mut session = PaletteSession::new(true);
        assert!(matches!(
            session.begin_submission("x"),
            Err(HuesmithError::Validation(_))
        ));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_missing_credential_blocks_submission() {
        let mut session = PaletteSession::new(false);
        assert!(matches!(
            session.begin_submission(PROMPT),
            Err(HuesmithError::Auth(_))
        ));
    }

    #[test]
    fn test_second_submission_while_draining_is_rejected() {
        let mut session = PaletteSession::new(true);
        session.begin_submission(PROMPT).unwrap();
        assert!(matches!(
            session.begin_submission(PROMPT),
            Err(HuesmithError::Busy)
        ));

        session.finish_submission();
        assert!(session.begin_submission(PROMPT).is_ok());
    }

    #[test]
    fn test_submission_resets_transcript() {
        let mut session = PaletteSession::new(true);
        session.transcript_mut().append("stale response");
        let generation = session.transcript().generation();

        session.begin_submission(PROMPT).unwrap();
        assert!(session.transcript().is_empty());
        assert_eq!(session.transcript().generation(), generation + 1);
    }

    #[test]
    fn test_double_reset_equals_single_reset() {
        let mut session = PaletteSession::new(true);
        session.add_upload(PathBuf::from("a.png"));
        session.colors.push("#eff6ff".parse().unwrap());

        session.reset_uploads();
        session.reset_uploads();
        session.reset_colors();
        session.reset_colors();

        assert!(session.uploads().is_empty());
        assert!(session.colors().is_empty());
    }

    #[test]
    fn test_remove_color_removes_all_occurrences() {
        let mut session = PaletteSession::new(true);
        let blue: HexColor = "#1d4ed8".parse().unwrap();
        let white: HexColor = "#ffffff".parse().unwrap();
        session.colors = vec![blue.clone(), white.clone(), blue.clone()];

        session.remove_color(&blue);
        assert_eq!(session.colors(), &[white]);
    }

    #[tokio::test]
    async fn test_extraction_merges_both_files_and_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = PaletteSession::new(true);
        session.add_upload(write_solid_png(dir.path(), "a.png", [255, 0, 0]));
        session.add_upload(write_solid_png(dir.path(), "b.png", [255, 0, 0]));

        let appended = session.extract_uploads().await;
        assert_eq!(appended, 2);
        // Same color from both files: no cross-batch dedup
        assert_eq!(
            session.colors(),
            &[HexColor::from_rgb(255, 0, 0), HexColor::from_rgb(255, 0, 0)]
        );
        // The upload set was consumed by the extraction pass
        assert!(session.uploads().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_upload_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("broken.png");
        std::fs::write(&bad, b"not pixels").unwrap();

        let mut session = PaletteSession::new(true);
        session.add_upload(bad);
        session.add_upload(write_solid_png(dir.path(), "ok.png", [0, 128, 255]));

        let appended = session.extract_uploads().await;
        assert_eq!(appended, 1);
        assert_eq!(session.colors().len(), 1);
    }
}
