//! Count probe and paginated harvesting.
//!
//! Result sets are fetched in fixed 100-row batches. The page sequence is
//! exposed lazily via [`DdbClient::pages`] so large harvests can be
//! processed incrementally; [`DdbClient::harvest`] drives that stream to
//! completion and optionally resolves and persists every document's detail
//! record along the way.

use std::path::{Path, PathBuf};

use async_stream::try_stream;
use futures_util::{pin_mut, Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::client::DdbClient;
use crate::error::DdbError;
use crate::models::{
    DocumentSummary, DownloadFailure, DownloadReport, Harvest, HarvestOptions, ResultPage,
    SearchResults,
};
use crate::portal::ApiUrl;

/// Rows requested per paged API call.
const PAGE_SIZE: u64 = 100;

impl DdbClient {
    /// Return the server-reported total result count for an API query.
    ///
    /// Issues a single one-row request at offset zero. Network and decode
    /// failures propagate to the caller.
    pub async fn total_results(&self, api_url: &ApiUrl) -> Result<u64, DdbError> {
        let url = api_url.paged(1, 0);
        let results: SearchResults = self.http.get_json(&url).await?;
        info!(total = results.number_of_results, "total results for query");
        Ok(results.number_of_results)
    }

    /// Lazily yield the result pages of an API query.
    ///
    /// The total count is probed first; pages are then fetched one at a time
    /// at offsets `0, 100, 200, …` as the stream is polled, so callers can
    /// process results incrementally and keep whatever pages arrived before
    /// a mid-harvest failure. A query with zero hits yields no pages.
    pub fn pages<'a>(
        &'a self,
        api_url: &'a ApiUrl,
    ) -> impl Stream<Item = Result<ResultPage, DdbError>> + 'a {
        try_stream! {
            let total = self.total_results(api_url).await?;
            let mut offset = 0u64;
            while offset < total {
                info!(
                    from = offset,
                    to = offset + PAGE_SIZE,
                    total,
                    "fetching result page"
                );
                let url = api_url.paged(PAGE_SIZE, offset);
                let results: SearchResults = self.http.get_json(&url).await?;
                let docs = results.into_docs();
                yield ResultPage { offset, total, docs };
                offset += PAGE_SIZE;
            }
        }
    }

    /// Harvest every document matching an API query.
    ///
    /// Pages through the full result set and returns the concatenated
    /// document summaries in page order. With [`HarvestOptions::download`]
    /// enabled, each document's detail record is resolved and written to
    /// disk as it is encountered: the extracted source XML as `<id>.xml`, or
    /// the full detail JSON as `<id>.json` when
    /// [`HarvestOptions::source_xml`] is off. Per-item failures (a missing
    /// source record, an unwritable file) are logged with the failing
    /// request URL, recorded in the returned report and do not abort the
    /// run. Page-level network or decode failures are fatal.
    pub async fn harvest(
        &self,
        api_url: &ApiUrl,
        options: &HarvestOptions,
    ) -> Result<Harvest, DdbError> {
        info!(url = %api_url, "starting harvest");

        if options.download {
            if let Some(dir) = &options.target_dir {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let mut docs = Vec::new();
        let mut report = DownloadReport::default();

        let pages = self.pages(api_url);
        pin_mut!(pages);
        while let Some(page) = pages.next().await {
            let page = page?;
            if options.download {
                for doc in &page.docs {
                    match self.download_document(doc, options).await {
                        Ok(()) => report.succeeded.push(doc.id.clone()),
                        Err(failure) => {
                            warn!(
                                id = %failure.id,
                                reason = %failure.reason,
                                request_url = failure.request_url.as_deref().unwrap_or(""),
                                "download failed, continuing"
                            );
                            report.failed.push(failure);
                        }
                    }
                }
            }
            docs.extend(page.docs);
        }

        Ok(Harvest { docs, report })
    }

    /// Resolve one document's detail record and write it to disk.
    async fn download_document(
        &self,
        doc: &DocumentSummary,
        options: &HarvestOptions,
    ) -> Result<(), DownloadFailure> {
        let detail = self.item(&doc.id).await.map_err(|e| DownloadFailure {
            id: doc.id.clone(),
            reason: e.to_string(),
            request_url: None,
        })?;

        let fail = |reason: String| DownloadFailure {
            id: doc.id.clone(),
            reason,
            request_url: Some(detail.request_url.clone()),
        };

        let dir = options
            .target_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let path = if options.source_xml {
            let xml = detail.source_xml().map_err(|e| fail(e.to_string()))?;
            let path = dir.join(format!("{}.xml", doc.id));
            write_file(&path, xml.as_bytes())
                .await
                .map_err(|e| fail(e.to_string()))?;
            path
        } else {
            let json = serde_json::to_string_pretty(&detail.body)
                .map_err(|e| fail(e.to_string()))?;
            let path = dir.join(format!("{}.json", doc.id));
            write_file(&path, json.as_bytes())
                .await
                .map_err(|e| fail(e.to_string()))?;
            path
        };

        debug!(id = %doc.id, path = %path.display(), "written");
        Ok(())
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), DdbError> {
    tokio::fs::write(path, contents).await?;
    Ok(())
}
