//! retag - mapping-driven markup tree serializer
//!
//! Walks an already-parsed element/text tree and re-renders the elements a
//! caller-supplied mapping names, wrapping their accumulated content in
//! replacement tags (or custom functions) and dropping everything unmapped.
//! Namespace-qualified names resolve against the caller's declared mapping
//! namespaces by URI, not by prefix string.
//!
//! # Quick Start
//!
//! ```
//! use retag::{serialize, Element, Mapping, Options, Tree};
//! # fn main() -> Result<(), retag::Error> {
//! let tree = Tree::from(
//!     Element::new("person")
//!         .child(Element::new("name").text("Ada"))
//!         .child(Element::new("internal").text("dropped")),
//! );
//! let mapping = Mapping::table().rule("person", "p").rule("name", "b");
//! let output = serialize(&tree, &mapping, &Options::new())?;
//! assert_eq!(output, "<p><b>Ada</b></p>");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod tree;
pub use tree::{wrap, Element, Fragment, Tree};

pub mod namespace;
pub use namespace::{declarations, Namespace, QName};

pub mod mapping;
pub use mapping::{MapFn, Mapping, Payload, Rule, WILDCARD};

pub mod transform;
pub use transform::{serialize, Options};
