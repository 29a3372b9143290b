//! GitHub-flavored markdown renderer.
//!
//! Endpoints are clustered by group, with an index of groups at the top.

use crate::group::group;
use crate::model::*;
use crate::render::Renderer;
use crate::toc::{self, Slugger};
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let groups = group(doc);
        let mut output = String::new();
        if groups.is_empty() {
            return Ok(output);
        }

        // Anchors follow heading order, so slug every heading before the index
        let mut slugger = Slugger::new();
        slugger.slug("Index");
        let mut anchors = Vec::with_capacity(groups.len());
        for g in &groups {
            anchors.push(slugger.slug(g.name));
            for endpoint in &g.endpoints {
                slugger.slug(&heading(endpoint));
            }
        }

        output.push_str("## Index\n\n");
        for (g, anchor) in groups.iter().zip(&anchors) {
            output.push_str(&toc::render_toc_item(g.name, anchor));
            output.push('\n');
        }
        output.push('\n');

        for g in &groups {
            output.push_str(&render_group(g));
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_group(group: &Group<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", group.name));
    let description = paragraph(group.description);
    if !description.is_empty() {
        lines.push(description);
        lines.push(String::new());
    }

    for endpoint in &group.endpoints {
        render_endpoint(&mut lines, endpoint);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a single endpoint block.
fn render_endpoint(lines: &mut Vec<String>, endpoint: &Endpoint) {
    let meta = &endpoint.metadata;

    lines.push(format!("### {}\n", heading(endpoint)));

    let badges = render_badges(&meta.flags);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    lines.push(format!("`{}`", endpoint.route));
    lines.push(String::new());

    if !meta.description.is_empty() {
        lines.push(meta.description.clone());
        lines.push(String::new());
    }
}

/// Endpoint heading: the title, or the route when there is none.
///
/// A title taken from `@group` text can span lines; a heading can't.
fn heading(endpoint: &Endpoint) -> String {
    let title = endpoint
        .metadata
        .title
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() {
        endpoint.route.clone()
    } else {
        title
    }
}

/// Strip leading indentation so controller text never becomes a code block.
fn paragraph(text: &str) -> String {
    text.lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Render flag badges.
///
/// Output: `> `authenticated` `superadmin``
fn render_badges(flags: &Flags) -> String {
    let badges: Vec<String> = flags
        .enabled()
        .map(|kind| format!("`{}`", kind.tag_name()))
        .collect();

    if badges.is_empty() {
        return String::new();
    }

    format!("> {}", badges.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(route: &str, group: &str, title: &str, flags: Flags) -> Endpoint {
        Endpoint {
            route: route.to_string(),
            metadata: MetadataRecord {
                group_name: group.to_string(),
                title: title.to_string(),
                flags,
                ..Default::default()
            },
        }
    }

    #[test]
    fn badges_in_flag_order() {
        let flags = Flags {
            public: true,
            authenticated: true,
            ..Default::default()
        };
        assert_eq!(render_badges(&flags), "> `authenticated` `public`");
        assert_eq!(render_badges(&Flags::default()), "");
    }

    #[test]
    fn heading_falls_back_to_route() {
        let e = endpoint("GET /cars", "Cars", "", Flags::default());
        assert_eq!(heading(&e), "GET /cars");
    }

    #[test]
    fn multiline_title_becomes_one_heading() {
        let method = StructuredComment {
            tags: vec![Tag::new("group", "Cars\nFetch cars.\n  Returns a page.")],
            ..Default::default()
        };
        let doc = Document {
            endpoints: vec![Endpoint {
                route: "GET /cars".to_string(),
                metadata: crate::resolver::resolve(&method, &StructuredComment::default(), "Misc"),
            }],
        };

        let out = MarkdownRenderer.render(&doc).unwrap();
        assert!(out.contains("### Fetch cars. Returns a page.\n\n`GET /cars`"));
        assert!(!out.contains("Fetch cars.\n"));
    }

    #[test]
    fn multiline_title_slug_matches_heading() {
        let doc = Document {
            endpoints: vec![
                endpoint("GET /a", "Misc", "Cars\nand more", Flags::default()),
                endpoint("GET /b", "Cars and more", "List", Flags::default()),
            ],
        };
        let out = MarkdownRenderer.render(&doc).unwrap();
        assert!(out.contains("### Cars and more\n"));
        assert!(out.contains("* [Cars and more](#cars-and-more-1)"));
    }

    #[test]
    fn indented_class_description_is_a_paragraph() {
        let method = StructuredComment {
            short_description: "T".to_string(),
            ..Default::default()
        };
        let class = StructuredComment {
            tags: vec![Tag::new("group", "Cars\n    indented desc\n      second line")],
            ..Default::default()
        };
        let doc = Document {
            endpoints: vec![Endpoint {
                route: "GET /cars".to_string(),
                metadata: crate::resolver::resolve(&method, &class, "Misc"),
            }],
        };

        let out = MarkdownRenderer.render(&doc).unwrap();
        assert!(out.contains("## Cars\n\nindented desc\nsecond line\n\n### T\n"));
        assert!(!out.contains("    indented"));
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(MarkdownRenderer.render(&Document::default()).unwrap(), "");
    }

    #[test]
    fn renders_groups_and_endpoints() {
        let mut list = endpoint(
            "GET /cars",
            "Cars",
            "List cars",
            Flags {
                authenticated: true,
                ..Default::default()
            },
        );
        list.metadata.group_description = "Car endpoints".to_string();
        list.metadata.description = "Returns every car.".to_string();
        let doc = Document {
            endpoints: vec![list, endpoint("GET /status", "Misc", "", Flags::default())],
        };

        let expected = "\
## Index

* [Cars](#cars)
* [Misc](#misc)

## Cars

Car endpoints

### List cars

> `authenticated`

`GET /cars`

Returns every car.

## Misc

### GET /status

`GET /status`

";
        assert_eq!(MarkdownRenderer.render(&doc).unwrap(), expected);
    }

    #[test]
    fn index_anchor_skips_earlier_duplicate_heading() {
        let doc = Document {
            endpoints: vec![
                endpoint("GET /a", "Misc", "Cars", Flags::default()),
                endpoint("GET /cars", "Cars", "List", Flags::default()),
            ],
        };
        let out = MarkdownRenderer.render(&doc).unwrap();
        assert!(out.contains("* [Cars](#cars-1)"));
    }
}
