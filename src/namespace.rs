//! Namespace declarations and qualified names

use indexmap::IndexMap;

const XMLNS: &str = "xmlns";
const XMLNS_PREFIX: &str = "xmlns:";

/// A namespace declaration (prefix to URI binding)
///
/// An absent prefix denotes the default namespace of its scope. Mapping-side
/// declarations passed through `Options::namespaces` must always carry one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: Option<String>,
    pub uri: String,
}

impl Namespace {
    /// Create a prefixed declaration
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            uri: uri.into(),
        }
    }

    /// Create a default (unprefixed) declaration
    pub fn default_ns(uri: impl Into<String>) -> Self {
        Self {
            prefix: None,
            uri: uri.into(),
        }
    }
}

/// Extract the namespace declarations encoded in an attribute map
///
/// The key `xmlns` declares the default namespace; `xmlns:<p>` declares the
/// prefix `p`. Order follows the attribute map.
pub fn declarations(attributes: &IndexMap<String, String>) -> Vec<Namespace> {
    attributes
        .iter()
        .filter_map(|(key, value)| {
            if key == XMLNS {
                Some(Namespace::default_ns(value))
            } else {
                key.strip_prefix(XMLNS_PREFIX)
                    .map(|prefix| Namespace::new(prefix, value))
            }
        })
        .collect()
}

/// A qualified element name split into its prefix and local part
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QName<'a> {
    pub prefix: Option<&'a str>,
    pub local: &'a str,
}

impl<'a> QName<'a> {
    /// Split a name at its first `:`; names without one are unprefixed
    pub fn parse(name: &'a str) -> Self {
        match name.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix),
                local,
            },
            None => Self {
                prefix: None,
                local: name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_with_prefix() {
        let qname = QName::parse("ns:person");
        assert_eq!(qname.prefix, Some("ns"));
        assert_eq!(qname.local, "person");
    }

    #[test]
    fn test_qname_without_prefix() {
        let qname = QName::parse("person");
        assert_eq!(qname.prefix, None);
        assert_eq!(qname.local, "person");
    }

    #[test]
    fn test_qname_splits_at_first_colon() {
        let qname = QName::parse("a:b:c");
        assert_eq!(qname.prefix, Some("a"));
        assert_eq!(qname.local, "b:c");
    }

    #[test]
    fn test_declarations_default_and_prefixed() {
        let mut attributes = IndexMap::new();
        attributes.insert("xmlns".to_string(), "urn:default".to_string());
        attributes.insert("xmlns:ns".to_string(), "urn:x".to_string());
        attributes.insert("id".to_string(), "1".to_string());

        let declared = declarations(&attributes);
        assert_eq!(
            declared,
            vec![
                Namespace::default_ns("urn:default"),
                Namespace::new("ns", "urn:x"),
            ]
        );
    }

    #[test]
    fn test_declarations_empty() {
        let attributes = IndexMap::new();
        assert!(declarations(&attributes).is_empty());
    }
}
