//! Harvest request options and result models.

use std::path::PathBuf;

use crate::models::DocumentSummary;

/// Options controlling a paginated harvest.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Resolve every harvested document's detail record and write it to disk
    pub download: bool,

    /// When downloading, write the extracted source XML (`<id>.xml`) instead
    /// of the full detail JSON (`<id>.json`)
    pub source_xml: bool,

    /// Directory downloaded files are written to, created with parents if
    /// absent. Defaults to the current directory.
    pub target_dir: Option<PathBuf>,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            download: false,
            source_xml: true,
            target_dir: None,
        }
    }
}

impl HarvestOptions {
    /// Options for a plain harvest without downloads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-item downloads
    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Choose between source XML and full JSON output
    pub fn source_xml(mut self, source_xml: bool) -> Self {
        self.source_xml = source_xml;
        self
    }

    /// Set the download target directory
    pub fn target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(dir.into());
        self
    }
}

/// The outcome of a harvest: all document summaries in page order, plus a
/// report of the per-item downloads if any were requested.
#[derive(Debug)]
pub struct Harvest {
    /// Concatenation of all document summaries across pages
    pub docs: Vec<DocumentSummary>,
    /// Per-item download outcomes (empty when `download` was off)
    pub report: DownloadReport,
}

/// Per-item download outcomes of a harvest.
///
/// Item failures do not abort the run; they are collected here so callers
/// can inspect them instead of scraping log output.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Identifiers of items whose file was written
    pub succeeded: Vec<String>,
    /// Items that failed, with the reason and the failing request URL
    pub failed: Vec<DownloadFailure>,
}

impl DownloadReport {
    /// Whether every attempted download succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A single failed per-item download.
#[derive(Debug)]
pub struct DownloadFailure {
    /// Identifier of the failing item
    pub id: String,
    /// Human-readable failure reason
    pub reason: String,
    /// The detail request URL, when the lookup itself succeeded
    pub request_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HarvestOptions::default();
        assert!(!options.download);
        assert!(options.source_xml);
        assert!(options.target_dir.is_none());
    }

    #[test]
    fn test_options_builder() {
        let options = HarvestOptions::new()
            .download(true)
            .source_xml(false)
            .target_dir("/tmp/ddb");
        assert!(options.download);
        assert!(!options.source_xml);
        assert_eq!(options.target_dir, Some(PathBuf::from("/tmp/ddb")));
    }

    #[test]
    fn test_report_is_clean() {
        let mut report = DownloadReport::default();
        assert!(report.is_clean());
        report.failed.push(DownloadFailure {
            id: "x".to_string(),
            reason: "missing field".to_string(),
            request_url: None,
        });
        assert!(!report.is_clean());
    }
}
