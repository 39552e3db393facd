//! Item detail (AIP) response model.

use crate::error::DdbError;

/// The decoded detail record of a single item, together with the URL that
/// produced it so failures can be reported with context.
#[derive(Debug, Clone)]
pub struct ItemDetail {
    /// The request URL this detail record was fetched from
    pub request_url: String,
    /// The full decoded response body
    pub body: serde_json::Value,
}

impl ItemDetail {
    /// Extract the embedded source XML of this item.
    ///
    /// The authoritative source record lives at `source.record.$` in the
    /// detail response. Not every item carries one; absence is reported as
    /// [`DdbError::MissingField`] naming the request URL.
    pub fn source_xml(&self) -> Result<&str, DdbError> {
        self.body
            .get("source")
            .and_then(|source| source.get("record"))
            .and_then(|record| record.get("$"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| DdbError::MissingField {
                field: "source.record.$",
                url: self.request_url.clone(),
            })
    }
}
