//! Search response models.

use serde::{Deserialize, Serialize};

/// Decoded body of a search API call.
///
/// The API nests the document list inside the first element of a `results`
/// array; [`SearchResults::into_docs`] unwraps that layer.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    /// Server-reported total number of matching documents
    #[serde(rename = "numberOfResults")]
    pub number_of_results: u64,

    /// Result blocks; the first block carries the documents of this page
    #[serde(default)]
    pub results: Vec<ResultGroup>,
}

impl SearchResults {
    /// Extract the document list of the first result block.
    pub fn into_docs(self) -> Vec<DocumentSummary> {
        self.results
            .into_iter()
            .next()
            .map(|group| group.docs)
            .unwrap_or_default()
    }
}

/// One block of documents inside a search response.
#[derive(Debug, Deserialize)]
pub struct ResultGroup {
    #[serde(default)]
    pub docs: Vec<DocumentSummary>,
}

/// Summary of a single matching document.
///
/// Only the identifier and thumbnail reference are typed; everything else
/// the API returns for a document is retained in `extra` so callers get the
/// complete summary object back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Stable DDB item identifier
    pub id: String,

    /// Thumbnail reference (a path on the image service), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// All remaining fields of the document summary
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of a paginated harvest.
#[derive(Debug)]
pub struct ResultPage {
    /// Offset of the first document on this page
    pub offset: u64,
    /// Server-reported total number of matching documents
    pub total: u64,
    /// Documents of this page, in server order
    pub docs: Vec<DocumentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "numberOfResults": 2,
        "results": [{
            "docs": [
                {"id": "A1", "thumbnail": "binary/a1.jpg", "title": "Brief", "type": "mediatype_002"},
                {"id": "B2"}
            ]
        }]
    }"#;

    #[test]
    fn test_deserialize_search_results() {
        let results: SearchResults = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(results.number_of_results, 2);

        let docs = results.into_docs();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "A1");
        assert_eq!(docs[0].thumbnail.as_deref(), Some("binary/a1.jpg"));
        assert_eq!(docs[1].id, "B2");
        assert!(docs[1].thumbnail.is_none());
    }

    #[test]
    fn test_extra_fields_are_retained() {
        let results: SearchResults = serde_json::from_str(SAMPLE).unwrap();
        let docs = results.into_docs();
        assert_eq!(
            docs[0].extra.get("title").and_then(|v| v.as_str()),
            Some("Brief")
        );
        assert_eq!(
            docs[0].extra.get("type").and_then(|v| v.as_str()),
            Some("mediatype_002")
        );
    }

    #[test]
    fn test_empty_results_block() {
        let results: SearchResults =
            serde_json::from_str(r#"{"numberOfResults": 0, "results": []}"#).unwrap();
        assert_eq!(results.number_of_results, 0);
        assert!(results.into_docs().is_empty());
    }

    #[test]
    fn test_document_summary_round_trips() {
        let results: SearchResults = serde_json::from_str(SAMPLE).unwrap();
        let doc = results.into_docs().remove(0);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json.get("id").and_then(|v| v.as_str()), Some("A1"));
        assert_eq!(json.get("title").and_then(|v| v.as_str()), Some("Brief"));
    }
}
