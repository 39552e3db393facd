//! Collage request options and result models.

use std::path::PathBuf;
use std::time::Duration;

/// Options controlling thumbnail collage assembly.
#[derive(Debug, Clone)]
pub struct CollageOptions {
    /// Path of the animated GIF to write
    pub output: PathBuf,

    /// Cap on the number of thumbnails to fetch; `None` fetches one per
    /// document in the input list
    pub max_images: Option<usize>,

    /// How long each frame is shown
    pub frame_delay: Duration,

    /// Fixed pause between successive thumbnail requests, to go easy on the
    /// image service
    pub fetch_pacing: Duration,
}

impl CollageOptions {
    /// Options writing to `output` with one second per frame and half a
    /// second of pacing between fetches.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            max_images: None,
            frame_delay: Duration::from_secs(1),
            fetch_pacing: Duration::from_millis(500),
        }
    }

    /// Cap the number of thumbnails fetched
    pub fn max_images(mut self, max: usize) -> Self {
        self.max_images = Some(max);
        self
    }

    /// Set the per-frame display duration
    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Set the pause between thumbnail fetches
    pub fn fetch_pacing(mut self, pacing: Duration) -> Self {
        self.fetch_pacing = pacing;
        self
    }
}

/// The outcome of a collage build.
#[derive(Debug)]
pub struct CollageReport {
    /// Number of frames written to the output file
    pub frames: usize,
    /// Number of documents skipped (no thumbnail, fetch or decode failure)
    pub skipped: usize,
    /// Path of the written file; `None` when no thumbnail could be fetched
    /// and no file was created
    pub output: Option<PathBuf>,
}
