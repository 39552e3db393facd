//! Thumbnail collage assembly.
//!
//! Fetches the thumbnails of a harvested result list one by one (with a
//! fixed pause between requests to go easy on the image service) and writes
//! them as frames of an infinitely looping animated GIF. Source images are
//! assumed equal-sized; no resizing is performed.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};
use std::fs::File;
use tracing::{info, warn};

use crate::client::DdbClient;
use crate::error::DdbError;
use crate::models::{CollageOptions, CollageReport, DocumentSummary};

/// IIIF region/size/rotation segment the image service serves thumbnails under.
const IIIF_THUMBNAIL_PARAMS: &str = "full/!116,87/0/default.jpg";

impl DdbClient {
    /// Assemble the thumbnails of `docs` into an animated GIF.
    ///
    /// At most `min(max_images, docs.len())` documents are considered.
    /// Documents without a thumbnail reference and thumbnails that fail to
    /// fetch or decode are logged and skipped; the collage is built from
    /// whatever survived. When nothing survived, no file is created and the
    /// report's `output` is `None`.
    pub async fn build_collage(
        &self,
        docs: &[DocumentSummary],
        options: &CollageOptions,
    ) -> Result<CollageReport, DdbError> {
        let limit = options
            .max_images
            .map_or(docs.len(), |max| max.min(docs.len()));

        let mut frames: Vec<DynamicImage> = Vec::new();
        let mut skipped = 0usize;

        for (index, doc) in docs.iter().take(limit).enumerate() {
            if index > 0 {
                tokio::time::sleep(options.fetch_pacing).await;
            }

            let Some(reference) = doc.thumbnail.as_deref() else {
                warn!(id = %doc.id, "document has no thumbnail reference");
                skipped += 1;
                continue;
            };

            let url = self.thumbnail_url(reference);
            match self.fetch_thumbnail(&url).await {
                Ok(img) => frames.push(img),
                Err(e) => {
                    warn!(id = %doc.id, url = %url, error = %e, "skipping thumbnail");
                    skipped += 1;
                }
            }
        }

        if frames.is_empty() {
            info!(
                output = %options.output.display(),
                "no thumbnails available, skipping collage"
            );
            return Ok(CollageReport {
                frames: 0,
                skipped,
                output: None,
            });
        }

        let count = frames.len();
        let file = File::create(&options.output)?;
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_saturating_duration(options.frame_delay);
        for img in frames {
            let frame = Frame::from_parts(img.to_rgba8(), 0, 0, delay);
            encoder.encode_frame(frame)?;
        }

        info!(
            frames = count,
            skipped,
            output = %options.output.display(),
            "collage written"
        );
        Ok(CollageReport {
            frames: count,
            skipped,
            output: Some(options.output.clone()),
        })
    }

    /// Resolve a document's thumbnail reference against the IIIF image
    /// service. References are thumbnail UUIDs; already-absolute URLs are
    /// used as-is.
    fn thumbnail_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!(
                "{}/{}/{}",
                self.endpoints.image_base,
                reference.trim_start_matches('/'),
                IIIF_THUMBNAIL_PARAMS
            )
        }
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<DynamicImage, DdbError> {
        let bytes = self.http.get_bytes(url).await?;
        Ok(image::load_from_memory(&bytes)?)
    }
}
