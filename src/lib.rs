#![forbid(unsafe_code)]

//! An in-memory XML document tree: parse once, query many times.
//!
//! A [`Document`] is built from XML text, bytes or a reader. Its nodes are
//! addressed with lightweight [`Node`] handles. You can:
//!
//! - navigate the tree ([`Document::parent`], [`Document::children`],
//!   [`Document::descendants`], [`Document::traverse`] and friends),
//! - look up children and attributes by qualified name
//!   ([`Document::select_element`], [`Document::select_attr`]),
//! - find nodes with path expressions ([`Document::find`]),
//! - detach subtrees ([`Document::remove`]),
//! - serialize any node back to XML ([`Document::output_xml`]).
//!
//! ```rust
//! use xmlquery::Document;
//!
//! let mut doc = Document::parse(
//!     r#"<class_list><student><name>Robert</name></student><student><name>Alice</name></student></class_list>"#,
//! )?;
//! let students = doc.find(doc.root(), "//student")?;
//! assert_eq!(students.len(), 2);
//!
//! doc.remove(students[0]);
//! assert_eq!(
//!     doc.output_xml(doc.root(), false),
//!     "<class_list><student><name>Alice</name></student></class_list>"
//! );
//! # Ok::<(), xmlquery::Error>(())
//! ```
//!
//! Names are qualified names as written in the document (`S:Envelope`).
//! Namespace declarations are kept as ordinary attributes and prefixes are
//! not resolved.
//!
//! Whitespace in text is handled according to `xml:space`: text under
//! `xml:space="preserve"` is serialized exactly, all other text is trimmed
//! on output.

mod access;
mod creation;
mod document;
mod encoding;
mod entity;
mod error;
pub mod events;
mod idmap;
mod manipulation;
mod name;
mod parse;
mod path;
mod select;
mod serializer;
mod space;
mod valueaccess;
mod xmlvalue;

pub use access::NodeEdge;
pub use document::{Document, Node};
pub use error::{Error, ParseError, PathError, Span};
pub use events::{Event, EventAttributes, Events};
pub use name::NameId;
pub use path::SimplePath;
pub use select::PathEvaluator;
pub use serializer::OutputParameters;
pub use space::SpaceMode;
pub use xmlvalue::{Attributes, Comment, Declaration, Element, Text, Value, ValueType};
