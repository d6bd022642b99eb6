//! Markup tree data model

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};

/// Markup element
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Fragment>,
}

impl Element {
    /// Create an element with the given (possibly qualified) name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child fragment
    pub fn child(mut self, fragment: impl Into<Fragment>) -> Self {
        self.children.push(fragment.into());
        self
    }

    /// Append a text child
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Fragment::text(text));
        self
    }
}

/// One node of the markup tree
///
/// The serde shape mirrors the JSON tree this model is built from:
/// `{"type":"element","name":...,"attributes":...,"children":[...]}` or
/// `{"type":"text","text":...}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Fragment {
    Element(Element),
    Text { text: String },
}

impl Fragment {
    /// Create a text fragment
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Returns true if this fragment is an element
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Root wrapper handed to the serializer
///
/// Only `elements[0]` is consumed by the transform; an empty `elements`
/// sequence means "no usable tree" and serializes to the empty string.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    pub elements: Vec<Fragment>,
}

impl From<Element> for Tree {
    fn from(element: Element) -> Self {
        Self {
            elements: vec![Fragment::Element(element)],
        }
    }
}

/// Wrap element fragments into root tree objects
///
/// Each element becomes its own `Tree`. An empty input yields an empty
/// vec. Any non-element fragment fails the whole call; no partial output
/// is produced.
pub fn wrap(fragments: Vec<Fragment>) -> Result<Vec<Tree>> {
    fragments
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| match fragment {
            Fragment::Element(_) => Ok(Tree {
                elements: vec![fragment],
            }),
            Fragment::Text { .. } => Err(Error::new(ErrorKind::MalformedFragment { index })),
        })
        .collect()
}
