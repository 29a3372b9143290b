//! JSON endpoint-source loader.
//!
//! Accepts either a bare array of endpoint sources or `{ "endpoints": [...] }`:
//!
//! ```json
//! [
//!   {
//!     "route": "GET /cars",
//!     "method": { "shortDescription": "List cars", "tags": [{ "name": "group", "content": "Cars" }] },
//!     "class": { "tags": [] }
//!   }
//! ]
//! ```

use crate::model::{Document, Endpoint, StructuredComment};
use crate::resolver;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Doc blocks for one route, as handed over by the doc-block provider.
#[derive(Debug, Clone)]
pub struct EndpointSource {
    pub route: String,
    pub method: StructuredComment,
    pub class: StructuredComment,
}

#[derive(Deserialize)]
struct Wrapped {
    endpoints: Vec<RawEndpoint>,
}

#[derive(Deserialize)]
struct RawEndpoint {
    route: String,
    method: Option<StructuredComment>,
    #[serde(default)]
    class: Option<StructuredComment>,
}

/// Parse endpoint sources from JSON. Fails on the first route without a
/// method doc block.
pub fn load(content: &str) -> Result<Vec<EndpointSource>> {
    // Pick the shape up front so serde reports the real field and position
    let endpoints: Vec<RawEndpoint> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content).context("invalid endpoint JSON")?
    } else {
        serde_json::from_str::<Wrapped>(content)
            .context("invalid endpoint JSON")?
            .endpoints
    };

    endpoints
        .into_iter()
        .map(|raw| {
            let method = raw.method.with_context(|| {
                format!("no doc block found for method of route {}", raw.route)
            })?;
            Ok(EndpointSource {
                route: raw.route,
                method,
                class: raw.class.unwrap_or_default(),
            })
        })
        .collect()
}

/// Resolve every source in order.
pub fn resolve_all(sources: &[EndpointSource], default_group: &str) -> Document {
    let endpoints = sources
        .iter()
        .map(|source| Endpoint {
            route: source.route.clone(),
            metadata: resolver::resolve(&source.method, &source.class, default_group),
        })
        .collect();
    Document { endpoints }
}
