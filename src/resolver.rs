//! Endpoint metadata resolution from a method doc block and its controller's.
//!
//! A `@group` tag on the method overrides the one on the controller. The
//! tag content is `Name\nOptional description`:
//!
//! ```text
//! /**
//!  * Fetch cars.        <- endpoint title
//!  * @group Cars        <- group name
//!  * APIs for cars.     <- group description
//!  */
//! ```
//!
//! When the method has no short description, the text under the group name
//! is taken as the endpoint title instead:
//!
//! ```text
//! /**
//!  * @group Cars        <- group name
//!  * Fetch cars.        <- endpoint title, not group description
//!  */
//! ```

use crate::model::*;

/// Tag name carrying the group. Compared case-sensitively, unlike flag tags.
const GROUP_TAG: &str = "group";

/// Where the resolved group came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    Method,
    Class,
    Default,
}

/// Resolved group name, group description and endpoint title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResolution {
    pub name: String,
    pub description: String,
    pub title: String,
    pub source: GroupSource,
}

/// Resolve the full metadata record for one endpoint.
pub fn resolve(
    method: &StructuredComment,
    class: &StructuredComment,
    default_group: &str,
) -> MetadataRecord {
    let group = resolve_group(method, class, default_group);
    tracing::trace!(
        group = %group.name,
        source = ?group.source,
        "resolved endpoint group"
    );

    let mut flags = Flags::default();
    for kind in FlagKind::ALL {
        flags.set(kind, has_tag(&method.tags, kind.tag_name()));
    }

    MetadataRecord {
        group_name: group.name,
        group_description: group.description,
        title: group.title,
        description: method.long_description.clone(),
        flags,
    }
}

/// Resolve group name, group description and title. Method tag first, then
/// class tag, then the default group.
pub fn resolve_group(
    method: &StructuredComment,
    class: &StructuredComment,
    default_group: &str,
) -> GroupResolution {
    if let Some(tag) = first_group_tag(&method.tags) {
        let (name, rest) = split_group_content(&tag.content);
        let rest = rest.trim().to_string();

        if method.short_description.is_empty() {
            return GroupResolution {
                name,
                description: String::new(),
                title: rest,
                source: GroupSource::Method,
            };
        }

        return GroupResolution {
            name,
            description: rest,
            title: method.short_description.clone(),
            source: GroupSource::Method,
        };
    }

    if let Some(tag) = first_group_tag(&class.tags) {
        // Class-level description is left untrimmed
        let (name, rest) = split_group_content(&tag.content);
        return GroupResolution {
            name,
            description: rest,
            title: method.short_description.clone(),
            source: GroupSource::Class,
        };
    }

    GroupResolution {
        name: default_group.to_string(),
        description: String::new(),
        title: method.short_description.clone(),
        source: GroupSource::Default,
    }
}

/// Whether any tag's lower-cased name equals `name`.
pub fn has_tag(tags: &[Tag], name: &str) -> bool {
    tags.iter().any(|tag| tag.name.to_lowercase() == name)
}

fn first_group_tag(tags: &[Tag]) -> Option<&Tag> {
    tags.iter().find(|tag| tag.name == GROUP_TAG)
}

/// Split trimmed `@group` content into the first line and the rest.
fn split_group_content(content: &str) -> (String, String) {
    let mut lines = content.trim().split('\n');
    let name = lines.next().unwrap_or_default().to_string();
    let rest = lines.collect::<Vec<_>>().join("\n");
    (name, rest)
}
