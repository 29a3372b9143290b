//! JSON renderer — structured output for tooling integration.
//!
//! One object per endpoint: the route plus its flattened metadata record.

use crate::model::*;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(&doc.endpoints).context("failed to serialize endpoints")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
