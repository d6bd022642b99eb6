//! Mapping specification and rule resolution

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::namespace::{Namespace, QName};

/// Table key matched when no name-specific rule applies
pub const WILDCARD: &str = "*";

/// A mapping function, called with the payload of the node it applies to
pub type MapFn = Box<dyn Fn(&Payload<'_>) -> String + Send + Sync>;

/// The value passed to a mapping function
///
/// `name` and `attributes` are present for element-originated calls only;
/// a text-originated call carries just the text as `content`.
#[derive(Clone, Copy, Debug)]
pub struct Payload<'a> {
    pub content: &'a str,
    pub name: Option<&'a str>,
    pub attributes: Option<&'a IndexMap<String, String>>,
}

/// One entry of a mapping table
pub enum Rule {
    /// Wrap the accumulated content in this replacement tag
    Tag(String),
    /// Produce the output by calling this function with the payload
    Call(MapFn),
}

impl Rule {
    /// Create a function rule
    pub fn call(f: impl Fn(&Payload<'_>) -> String + Send + Sync + 'static) -> Self {
        Self::Call(Box::new(f))
    }
}

impl From<&str> for Rule {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl From<String> for Rule {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Call(_) => f.debug_tuple("Call").field(&"<fn>").finish(),
        }
    }
}

/// Caller-supplied mapping specification
///
/// Either a single function applied uniformly to every node, or a table of
/// per-name rules keyed by local name, `prefix:local`, or [`WILDCARD`].
pub enum Mapping {
    Uniform(MapFn),
    Table(IndexMap<String, Rule>),
}

impl Mapping {
    /// Create an empty rule table
    pub fn table() -> Self {
        Self::Table(IndexMap::new())
    }

    /// Create a uniform mapping from a single function
    pub fn uniform(f: impl Fn(&Payload<'_>) -> String + Send + Sync + 'static) -> Self {
        Self::Uniform(Box::new(f))
    }

    /// Add or replace a table rule; has no effect on a uniform mapping
    pub fn rule(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        if let Self::Table(table) = &mut self {
            table.insert(name.into(), rule.into());
        }
        self
    }

    /// Returns true if this mapping cannot produce output for any node
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Table(table) if table.is_empty())
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(_) => f.debug_tuple("Uniform").field(&"<fn>").finish(),
            Self::Table(table) => f.debug_tuple("Table").field(table).finish(),
        }
    }
}

/// Resolve the rule applying to an element, if any
///
/// With no namespaces in scope the raw name is looked up directly. Otherwise
/// the element's active URI (own prefix, or the default declaration) is
/// matched by URI against the caller-declared mapping namespaces, and the
/// lookup key is rebuilt from the mapping-side prefix and the local name.
/// Every miss falls back to the wildcard entry.
pub(crate) fn resolve<'t>(
    table: &'t IndexMap<String, Rule>,
    name: &str,
    visible: &[Namespace],
    declared: &[Namespace],
) -> Option<&'t Rule> {
    let named = if visible.is_empty() {
        table.get(name)
    } else {
        let qname = QName::parse(name);
        let default_uri = visible
            .iter()
            .find(|ns| ns.prefix.is_none())
            .map(|ns| ns.uri.as_str());
        let active_uri = match qname.prefix {
            Some(prefix) => visible
                .iter()
                .find(|ns| ns.prefix.as_deref() == Some(prefix))
                .map(|ns| ns.uri.as_str()),
            None => default_uri,
        };

        if qname.prefix.is_none() && default_uri.is_none() {
            // Unqualified element despite namespaces in scope.
            table.get(name)
        } else {
            // An undeclared document prefix, or an active URI the caller
            // never declared, yields no key and drops to the wildcard.
            active_uri
                .and_then(|uri| declared.iter().find(|ns| ns.uri == uri))
                .and_then(|ns| ns.prefix.as_deref())
                .and_then(|prefix| table.get(&format!("{prefix}:{}", qname.local)))
        }
    };

    if named.is_none() {
        trace!(element = name, "no name-specific rule, trying wildcard");
    }
    named.or_else(|| table.get(WILDCARD))
}
