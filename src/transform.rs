//! Recursive transform engine and the `serialize` entry point

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::mapping::{resolve, Mapping, Payload, Rule};
use crate::namespace::{self, Namespace};
use crate::tree::{Element, Fragment, Tree};

/// Serialization options
#[derive(Debug, Default)]
pub struct Options {
    /// Mapping-side namespace declarations; each must carry a prefix
    pub namespaces: Vec<Namespace>,
    /// Pass mapped-but-empty elements through unwrapped
    pub skip_empty: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a mapping namespace
    pub fn namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.push(Namespace::new(prefix, uri));
        self
    }

    /// Enable `skip_empty`
    pub fn skip_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }

    fn validate(&self) -> Result<()> {
        for ns in &self.namespaces {
            if ns.prefix.is_none() {
                return Err(Error::new(ErrorKind::NamespaceMissingPrefix {
                    uri: ns.uri.clone(),
                }));
            }
        }
        Ok(())
    }
}

/// Serialize a markup tree using the given mapping rules
///
/// Options are validated before any traversal. An absent root fragment or an
/// empty mapping table is a defined no-op and yields the empty string.
pub fn serialize(tree: &Tree, mapping: &Mapping, options: &Options) -> Result<String> {
    options.validate()?;

    let Some(root) = tree.elements.first() else {
        return Ok(String::new());
    };
    if mapping.is_empty() {
        return Ok(String::new());
    }

    debug!(namespaces = options.namespaces.len(), "serializing tree");
    Ok(walk(root, &IndexMap::new(), mapping, options).unwrap_or_default())
}

/// Transform one fragment, returning `None` when it produces no output
fn walk(
    fragment: &Fragment,
    inherited: &IndexMap<String, String>,
    mapping: &Mapping,
    options: &Options,
) -> Option<String> {
    match fragment {
        // Only reachable as the root fragment; text children are appended
        // verbatim by the element arm below.
        Fragment::Text { text } => match mapping {
            Mapping::Uniform(f) => Some(f(&Payload {
                content: text,
                name: None,
                attributes: None,
            })),
            Mapping::Table(_) => Some(text.clone()),
        },
        Fragment::Element(element) => {
            let merged = merge(inherited, &element.attributes);

            let mut content = String::new();
            for child in &element.children {
                match child {
                    // Verbatim, including whitespace-only text.
                    Fragment::Text { text } => content.push_str(text),
                    element_child => {
                        if let Some(output) = walk(element_child, &merged, mapping, options) {
                            content.push_str(&output);
                        }
                    }
                }
            }

            let visible = namespace::declarations(&merged);
            apply(element, &visible, &content, &merged, mapping, options)
        }
    }
}

/// Own attributes win over inherited ones; the result is a fresh map
fn merge(
    inherited: &IndexMap<String, String>,
    own: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = inherited.clone();
    for (key, value) in own {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Map an element's accumulated content through its resolved rule
fn apply(
    element: &Element,
    visible: &[Namespace],
    content: &str,
    merged: &IndexMap<String, String>,
    mapping: &Mapping,
    options: &Options,
) -> Option<String> {
    let payload = Payload {
        content,
        name: Some(&element.name),
        attributes: Some(merged),
    };

    let table = match mapping {
        Mapping::Uniform(f) => return Some(f(&payload)),
        Mapping::Table(table) => table,
    };

    let Some(rule) = resolve(table, &element.name, visible, &options.namespaces) else {
        trace!(element = %element.name, "no rule, dropping subtree");
        return None;
    };

    if options.skip_empty && content.is_empty() {
        // Visited but passed through empty; distinct from "no output".
        return Some(String::new());
    }

    match rule {
        Rule::Call(f) => Some(f(&payload)),
        Rule::Tag(tag) => Some(format!("<{tag}>{content}</{tag}>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_own_wins() {
        let mut inherited = IndexMap::new();
        inherited.insert("a".to_string(), "1".to_string());
        inherited.insert("b".to_string(), "2".to_string());
        let mut own = IndexMap::new();
        own.insert("b".to_string(), "3".to_string());

        let merged = merge(&inherited, &own);
        assert_eq!(merged.get("a").map(String::as_str), Some("1"));
        assert_eq!(merged.get("b").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_merge_is_fresh() {
        let inherited = IndexMap::new();
        let mut own = IndexMap::new();
        own.insert("a".to_string(), "1".to_string());

        let merged = merge(&inherited, &own);
        assert!(inherited.is_empty());
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_options_validation() {
        let options = Options {
            namespaces: vec![Namespace::default_ns("urn:x")],
            skip_empty: false,
        };
        let err = options.validate();
        assert!(matches!(
            err.map_err(|e| e.kind().clone()),
            Err(ErrorKind::NamespaceMissingPrefix { uri }) if uri == "urn:x"
        ));
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new().namespace("p", "urn:x").skip_empty();
        assert!(options.skip_empty);
        assert_eq!(options.namespaces, vec![Namespace::new("p", "urn:x")]);
        assert!(options.validate().is_ok());
    }
}
