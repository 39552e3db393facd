//! Item detail lookup, dataset resolution and provider counts.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::info;

use crate::client::DdbClient;
use crate::error::DdbError;
use crate::models::{ItemDetail, SearchResults};
use crate::portal::ApiUrl;

/// Namespace of the portal's per-object XML representation.
const CORTEX_NS: &[u8] = b"http://www.deutsche-digitale-bibliothek.de/cortex";

impl DdbClient {
    /// Fetch the detail record (AIP) of a single item by identifier.
    ///
    /// The returned [`ItemDetail`] carries the raw decoded response body and
    /// the request URL so callers can report it on failure.
    pub async fn item(&self, id: &str) -> Result<ItemDetail, DdbError> {
        let url = format!(
            "{}/items/{}?oauth_consumer_key={}",
            self.endpoints.api_base, id, self.api_key
        );
        let body: serde_json::Value = self.http.get_json(&url).await?;
        Ok(ItemDetail {
            request_url: url,
            body,
        })
    }

    /// Build an API query for all items of the dataset an object belongs to.
    ///
    /// Fetches the object's portal XML representation and reads the
    /// `dataset-id` element from the cortex namespace. Fails with
    /// [`DdbError::MissingField`] when the element is absent.
    pub async fn dataset_query_for(&self, object_id: &str) -> Result<ApiUrl, DdbError> {
        let url = format!("{}/item/xml/{}", self.endpoints.portal_base, object_id);
        let xml = self.http.get_text(&url).await?;

        let dataset_id =
            extract_dataset_id(&xml)?.ok_or_else(|| DdbError::MissingField {
                field: "dataset-id",
                url: url.clone(),
            })?;
        info!(object_id, dataset_id = %dataset_id, "resolved dataset for object");

        Ok(ApiUrl::new(format!(
            "{}/search?query=dataset_id%3A%28{}%29&oauth_consumer_key={}",
            self.endpoints.api_base,
            urlencoding::encode(&dataset_id),
            self.api_key
        )))
    }

    /// Return the number of items a data provider contributes.
    pub async fn items_per_provider(&self, provider_id: &str) -> Result<u64, DdbError> {
        let url = format!(
            "{}/search?oauth_consumer_key={}&facet=provider_id&provider_id={}",
            self.endpoints.api_base,
            self.api_key,
            urlencoding::encode(provider_id)
        );
        let results: SearchResults = self.http.get_json(&url).await?;
        Ok(results.number_of_results)
    }
}

/// Read the text of the cortex-namespaced `dataset-id` element.
///
/// `Ok(None)` means the document is well-formed but carries no such element;
/// reader errors on broken XML surface as [`DdbError::Parse`].
fn extract_dataset_id(xml: &str) -> Result<Option<String>, DdbError> {
    let mut reader = NsReader::from_str(xml);
    let mut inside = false;
    loop {
        match reader.read_resolved_event()? {
            (ResolveResult::Bound(Namespace(ns)), Event::Start(e))
                if ns == CORTEX_NS && e.local_name().as_ref() == b"dataset-id" =>
            {
                inside = true;
            }
            (_, Event::Text(text)) if inside => {
                let value = text.unescape()?.trim().to_string();
                return Ok(if value.is_empty() { None } else { Some(value) });
            }
            (_, Event::End(_)) if inside => {
                inside = false;
            }
            (_, Event::Eof) => return Ok(None),
            _ => {}
        }
    }
}
