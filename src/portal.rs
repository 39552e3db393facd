//! Translation of portal search URLs into API queries.
//!
//! The DDB website produces human-oriented search URLs that are not directly
//! callable against the API. This module rewrites such a URL into an
//! authenticated API query string, mapping the portal's `query` and
//! `facetValues[]` parameters onto the API's `query` and `facet` clauses.

use std::fmt;

use tracing::warn;
use url::Url;

use crate::client::DdbClient;
use crate::error::DdbError;

/// Path fragments marking the specialised portal search pages.
const ORGANIZATION_MARKER: &str = "search/organization?";
const PERSON_MARKER: &str = "search/person?";

/// A fully built, authenticated API query URL.
///
/// Produced by [`DdbClient::portal_to_api`] and
/// [`DdbClient::dataset_query_for`]; paging parameters are appended per
/// request by the harvester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl(String);

impl ApiUrl {
    /// Wrap an already-built API query URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL with `rows` and `offset` paging parameters appended.
    pub(crate) fn paged(&self, rows: u64, offset: u64) -> String {
        format!("{}&rows={}&offset={}", self.0, rows, offset)
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl DdbClient {
    /// Translate a search URL copied from the DDB portal into an API URL.
    ///
    /// The endpoint is chosen from the URL path (organization search, person
    /// search, or the general search endpoint). The portal's free-text
    /// `query` values are joined with a single space and percent-encoded;
    /// each `facetValues[]` entry of the form `field=value` becomes a
    /// `facet=<field>&<field>=<value>` clause pair, in original order. The
    /// auth token is always appended as `oauth_consumer_key`.
    ///
    /// A missing `query` parameter is tolerated (facet-only queries are
    /// valid); malformed facet entries are skipped with a warning.
    pub fn portal_to_api(&self, portal_url: &str) -> Result<ApiUrl, DdbError> {
        let endpoint = if portal_url.contains(ORGANIZATION_MARKER) {
            "search/organization?"
        } else if portal_url.contains(PERSON_MARKER) {
            "search/person?"
        } else {
            "search?"
        };

        let parsed = Url::parse(portal_url)
            .map_err(|e| DdbError::InvalidUrl(format!("{}: {}", portal_url, e)))?;

        let mut clauses = vec![format!("oauth_consumer_key={}", self.api_key)];

        let terms: Vec<String> = parsed
            .query_pairs()
            .filter(|(key, _)| key == "query")
            .map(|(_, value)| value.into_owned())
            .collect();
        if terms.is_empty() {
            warn!(url = portal_url, "no query parameter in portal search URL");
        } else {
            clauses.push(format!(
                "query={}",
                urlencoding::encode(&terms.join(" "))
            ));
        }

        for (key, value) in parsed.query_pairs() {
            if key != "facetValues[]" {
                continue;
            }
            match value.split_once('=') {
                Some((field, facet_value)) => {
                    clauses.push(format!(
                        "facet={}&{}={}",
                        field,
                        field,
                        urlencoding::encode(facet_value)
                    ));
                }
                None => {
                    warn!(facet = %value, "skipping malformed facet value without `=`");
                }
            }
        }

        Ok(ApiUrl::new(format!(
            "{}/{}{}",
            self.endpoints.api_base,
            endpoint,
            clauses.join("&")
        )))
    }
}
