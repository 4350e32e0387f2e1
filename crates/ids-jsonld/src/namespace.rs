//! Prefix ↔ namespace table used for compaction on encode and expansion on decode.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::model::iri::split_compact;
use crate::model::ontology::{ids, idsc, info, kdsf, standard};

/// Ordered prefix → namespace table.
///
/// Each prefix is bound to exactly one namespace. When several namespaces
/// match a URI, the longest one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceRegistry {
    entries: Vec<(String, String)>,
    root_prefix: String,
}

static INFOMODEL: OnceLock<NamespaceRegistry> = OnceLock::new();

impl NamespaceRegistry {
    /// The shared default table of the information model.
    pub fn infomodel() -> &'static NamespaceRegistry {
        INFOMODEL.get_or_init(|| {
            NamespaceRegistry::builder()
                .prefix(ids::PREFIX, ids::NS)
                .prefix(idsc::PREFIX, idsc::NS)
                .prefix(info::PREFIX, info::NS)
                .prefix(kdsf::PREFIX, kdsf::NS)
                .prefix("xsd", standard::XSD)
                .prefix("rdf", standard::RDF)
                .prefix("rdfs", standard::RDFS)
                .prefix("owl", standard::OWL)
                .root_prefix(ids::PREFIX)
                .build()
        })
    }

    pub fn builder() -> NamespaceRegistryBuilder {
        NamespaceRegistryBuilder::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    /// Prefix that unprefixed local names default to.
    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    /// Namespace bound to the root prefix, if the table declares it.
    pub fn root_namespace(&self) -> Option<&str> {
        self.namespace(&self.root_prefix)
    }

    /// Rewrite an absolute URI into `prefix:local` using the longest matching
    /// namespace. Returns the prefix used, or `None` if the URI was left alone.
    pub fn canonicalize(&self, uri: &str) -> (String, Option<&str>) {
        let best = self
            .entries
            .iter()
            .filter(|(_, ns)| uri.len() > ns.len() && uri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len());
        match best {
            Some((prefix, ns)) => (format!("{prefix}:{}", &uri[ns.len()..]), Some(prefix.as_str())),
            None => (uri.to_string(), None),
        }
    }

    /// Inverse of [`canonicalize`](Self::canonicalize).
    ///
    /// `prefix:local` with a known prefix expands against its namespace; a
    /// bare local name expands against the root namespace. Anything else
    /// (absolute IRIs, unknown prefixes, blank node labels) is returned as is.
    pub fn expand(&self, value: &str) -> String {
        if value.starts_with("_:") || value.starts_with('@') {
            return value.to_string();
        }
        if let Some((prefix, local)) = split_compact(value) {
            return match self.namespace(prefix) {
                Some(ns) => format!("{ns}{local}"),
                None => value.to_string(),
            };
        }
        if !value.contains(':') && !value.is_empty() {
            if let Some(ns) = self.root_namespace() {
                return format!("{ns}{value}");
            }
        }
        value.to_string()
    }

    /// `@context` object declaring only `used_prefixes`, in table order.
    ///
    /// Prefixes unknown to the table are skipped.
    pub fn minimal_context(&self, used_prefixes: &BTreeSet<String>) -> Map<String, Value> {
        self.entries
            .iter()
            .filter(|(prefix, _)| used_prefixes.contains(prefix))
            .map(|(prefix, ns)| (prefix.clone(), Value::String(ns.clone())))
            .collect()
    }
}

/// Builder for custom namespace tables.
#[derive(Debug, Default)]
pub struct NamespaceRegistryBuilder {
    entries: Vec<(String, String)>,
    root_prefix: Option<String>,
}

impl NamespaceRegistryBuilder {
    /// Bind `prefix` to `namespace`. Rebinding a prefix replaces the old URI.
    pub fn prefix(mut self, prefix: &str, namespace: &str) -> Self {
        match self.entries.iter_mut().find(|(p, _)| p == prefix) {
            Some(entry) => entry.1 = namespace.to_string(),
            None => self.entries.push((prefix.to_string(), namespace.to_string())),
        }
        self
    }

    pub fn root_prefix(mut self, prefix: &str) -> Self {
        self.root_prefix = Some(prefix.to_string());
        self
    }

    /// Finish the table. Without an explicit root prefix the first bound
    /// prefix is used.
    pub fn build(self) -> NamespaceRegistry {
        let root_prefix = self
            .root_prefix
            .or_else(|| self.entries.first().map(|(p, _)| p.clone()))
            .unwrap_or_default();
        NamespaceRegistry {
            entries: self.entries,
            root_prefix,
        }
    }
}
