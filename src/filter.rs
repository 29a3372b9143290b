//! `--filter` selection of endpoints by flag.

use crate::model::{Document, FlagKind};
use anyhow::{anyhow, Result};

/// One parsed `--filter` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Keep endpoints with the flag set.
    Require(FlagKind),
    /// Drop endpoints with the flag set (`!name`).
    Exclude(FlagKind),
}

impl Filter {
    pub fn parse(arg: &str) -> Result<Self> {
        let (negated, name) = match arg.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, arg),
        };
        let kind = FlagKind::from_name(name.trim()).ok_or_else(|| {
            anyhow!(
                "unknown filter flag: {}. Use authenticated, superadmin, farmer, partner, or public",
                name
            )
        })?;
        Ok(if negated {
            Filter::Exclude(kind)
        } else {
            Filter::Require(kind)
        })
    }
}

pub fn parse_filters(args: &[String]) -> Result<Vec<Filter>> {
    args.iter().map(|arg| Filter::parse(arg)).collect()
}

/// Keep only endpoints that pass every filter.
pub fn filter_endpoints(doc: &mut Document, filters: &[Filter]) {
    doc.endpoints.retain(|endpoint| {
        let flags = &endpoint.metadata.flags;
        filters.iter().all(|filter| match *filter {
            Filter::Require(kind) => flags.get(kind),
            Filter::Exclude(kind) => !flags.get(kind),
        })
    });
}
