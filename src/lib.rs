//! docmeta — resolve API endpoint metadata from parsed doc blocks.
//!
//! The core is [`resolver::resolve`]: given the doc block of a
//! request-handling method and the doc block of its controller, it decides
//! the endpoint's group, group description, title, description, and
//! access flags. Everything else in the crate feeds it and renders its
//! output.

pub mod config;
pub mod filter;
pub mod group;
pub mod input;
pub mod model;
pub mod render;
pub mod resolver;
pub mod toc;

pub use model::{Flags, FlagKind, MetadataRecord, StructuredComment, Tag};
pub use resolver::resolve;
