//! Cluster resolved endpoints by group name.
//!
//! Endpoints from different controllers can land in the same group, so
//! groups are keyed by name and keep the order in which they first appear.

use crate::model::*;
use std::collections::HashMap;

/// Group endpoints by `group_name`, preserving first-seen order.
///
/// The group description is the first non-empty one among its endpoints.
pub fn group(doc: &Document) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for endpoint in &doc.endpoints {
        let meta = &endpoint.metadata;
        let slot = *index.entry(meta.group_name.as_str()).or_insert_with(|| {
            groups.push(Group {
                name: meta.group_name.as_str(),
                description: "",
                endpoints: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        if group.description.is_empty() && !meta.group_description.is_empty() {
            group.description = meta.group_description.as_str();
        }
        group.endpoints.push(endpoint);
    }

    groups
}
