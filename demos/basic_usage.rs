//! Basic usage example for the DDB client library.
//!
//! Translates a portal search URL into an API query, probes the hit count
//! and harvests the matching document summaries.

use ddb_client::{DdbClient, HarvestOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::args()
        .nth(1)
        .expect("usage: basic_usage <api-key>");

    let client = DdbClient::new(api_key)?;

    // A search URL copied from the DDB website
    let api_url = client.portal_to_api(
        "https://www.deutsche-digitale-bibliothek.de/searchresults\
         ?query=nachlass&facetValues%5B%5D=type_fct%3Dmediatype_002",
    )?;
    println!("API call: {api_url}");

    let total = client.total_results(&api_url).await?;
    println!("Total hits: {total}");

    let harvest = client.harvest(&api_url, &HarvestOptions::default()).await?;
    println!("Harvested {} document summaries", harvest.docs.len());

    for doc in harvest.docs.iter().take(5) {
        println!("  {}", doc.id);
    }

    Ok(())
}
