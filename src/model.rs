//! Data model for doc blocks and resolved endpoint metadata — format-agnostic.

use serde::{Deserialize, Serialize};

/// A single `@name content` annotation from a doc block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Raw text after the tag name, may span lines
    #[serde(default)]
    pub content: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One parsed doc block, attached to a method or to its controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredComment {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    /// Ordered: the first `@group` wins
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Access and visibility markers recognized on a method doc block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Authenticated,
    Superadmin,
    Farmer,
    Partner,
    Public,
}

impl FlagKind {
    pub const ALL: [FlagKind; 5] = [
        FlagKind::Authenticated,
        FlagKind::Superadmin,
        FlagKind::Farmer,
        FlagKind::Partner,
        FlagKind::Public,
    ];

    /// Lower-case tag name that sets this flag.
    pub fn tag_name(self) -> &'static str {
        match self {
            FlagKind::Authenticated => "authenticated",
            FlagKind::Superadmin => "superadmin",
            FlagKind::Farmer => "farmer",
            FlagKind::Partner => "partner",
            FlagKind::Public => "public",
        }
    }

    /// Look up a flag by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<FlagKind> {
        FlagKind::ALL
            .into_iter()
            .find(|kind| kind.tag_name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub authenticated: bool,
    pub superadmin: bool,
    pub farmer: bool,
    pub partner: bool,
    pub public: bool,
}

impl Flags {
    pub fn get(&self, kind: FlagKind) -> bool {
        match kind {
            FlagKind::Authenticated => self.authenticated,
            FlagKind::Superadmin => self.superadmin,
            FlagKind::Farmer => self.farmer,
            FlagKind::Partner => self.partner,
            FlagKind::Public => self.public,
        }
    }

    pub fn set(&mut self, kind: FlagKind, value: bool) {
        let slot = match kind {
            FlagKind::Authenticated => &mut self.authenticated,
            FlagKind::Superadmin => &mut self.superadmin,
            FlagKind::Farmer => &mut self.farmer,
            FlagKind::Partner => &mut self.partner,
            FlagKind::Public => &mut self.public,
        };
        *slot = value;
    }

    /// Flags that are set, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = FlagKind> + '_ {
        FlagKind::ALL.into_iter().filter(|kind| self.get(*kind))
    }
}

/// Metadata resolved for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub group_name: String,
    pub group_description: String,
    pub title: String,
    pub description: String,
    pub flags: Flags,
}

/// A route label paired with its resolved metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub route: String,
    #[serde(flatten)]
    pub metadata: MetadataRecord,
}

/// All endpoints resolved from one input source, in input order.
#[derive(Debug, Default)]
pub struct Document {
    pub endpoints: Vec<Endpoint>,
}

/// Endpoints clustered under one group name.
#[derive(Debug)]
pub struct Group<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub endpoints: Vec<&'a Endpoint>,
}
