//! Static type descriptors and concrete-type resolution.
//!
//! Every mapped type is described by a `static` [`TypeDescriptor`]. Abstract
//! types carry no constructor and list their admissible implementations in
//! `subtypes`; that list is closed, so resolution never scans for types at
//! runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::literal::NativeKind;
use crate::model::iri::local_name;
use crate::namespace::NamespaceRegistry;
use crate::object::RdfObject;

/// Constructor of a concrete type's empty instance.
pub type Constructor = fn() -> Box<dyn RdfObject>;

/// Boxed default instance of `T`; used as a [`Constructor`].
pub fn construct<T: RdfObject + Default>() -> Box<dyn RdfObject> {
    Box::new(T::default())
}

pub struct TypeDescriptor {
    pub name: &'static str,
    pub type_uri: &'static str,
    /// `None` marks an abstract type.
    pub construct: Option<Constructor>,
    /// Admissible implementations, in declaration order.
    pub subtypes: &'static [&'static TypeDescriptor],
    pub properties: &'static [PropertyDescriptor],
    /// Claims payloads are written with fixed field names instead of
    /// prefixed predicates.
    pub claims_payload: bool,
}

impl TypeDescriptor {
    pub fn is_abstract(&self) -> bool {
        self.construct.is_none()
    }

    pub fn property(&self, accessor: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.accessor == accessor)
    }

    pub fn property_by_predicate(&self, predicate: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.predicate == predicate)
    }

    /// True if a type name observed in a document denotes this type.
    /// Generated implementation names (`FooImpl`) are accepted for `Foo`.
    pub fn matches_local_name(&self, local: &str) -> bool {
        local == self.name || local.strip_suffix("Impl") == Some(self.name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("type_uri", &self.type_uri)
            .field("abstract", &self.is_abstract())
            .field(
                "subtypes",
                &self.subtypes.iter().map(|t| t.name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_uri == other.type_uri
    }
}

impl Eq for TypeDescriptor {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Multiplicity {
    Single,
    Multi,
}

#[derive(Clone, Copy, Debug)]
pub enum ValueKind {
    Literal(NativeKind),
    Object(&'static TypeDescriptor),
    /// Enumerator URIs, absolute.
    Enum(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug)]
pub struct PropertyDescriptor {
    pub accessor: &'static str,
    pub predicate: &'static str,
    pub multiplicity: Multiplicity,
    pub nullable: bool,
    pub kind: ValueKind,
}

impl PropertyDescriptor {
    /// Mandatory single-valued property.
    pub const fn required(accessor: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self {
            accessor,
            predicate,
            multiplicity: Multiplicity::Single,
            nullable: false,
            kind,
        }
    }

    /// Optional single-valued property.
    pub const fn optional(accessor: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self {
            nullable: true,
            ..Self::required(accessor, predicate, kind)
        }
    }

    /// Multi-valued property; may be empty.
    pub const fn many(accessor: &'static str, predicate: &'static str, kind: ValueKind) -> Self {
        Self {
            multiplicity: Multiplicity::Multi,
            nullable: true,
            ..Self::required(accessor, predicate, kind)
        }
    }

    /// Multi-valued property that needs at least one value.
    pub const fn at_least_one(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    pub fn is_multi(&self) -> bool {
        self.multiplicity == Multiplicity::Multi
    }
}

/// The resolved view of a declared type.
#[derive(Debug)]
pub struct Schema {
    pub declared: &'static TypeDescriptor,
    /// Concrete implementations, depth-first in declaration order.
    pub concrete: Vec<&'static TypeDescriptor>,
}

/// Collect the concrete implementations admissible for `declared`.
///
/// A concrete type is its own first candidate; subtypes follow depth-first.
pub fn build_schema(declared: &'static TypeDescriptor) -> Schema {
    fn visit(ty: &'static TypeDescriptor, out: &mut Vec<&'static TypeDescriptor>) {
        if !ty.is_abstract() && !out.contains(&ty) {
            out.push(ty);
        }
        for sub in ty.subtypes {
            visit(sub, out);
        }
    }
    let mut concrete = Vec::new();
    visit(declared, &mut concrete);
    debug!(
        declared = declared.name,
        candidates = concrete.len(),
        "built schema"
    );
    Schema { declared, concrete }
}

impl Schema {
    /// Pick the implementation named by the observed `rdf:type` URIs of `node`.
    ///
    /// An exact type URI match wins over a local-name match. When nothing
    /// matches, the first candidate is used and a warning is logged.
    pub fn resolve_concrete_type(
        &self,
        observed: &[&str],
        node: &str,
        registry: &NamespaceRegistry,
    ) -> Result<&'static TypeDescriptor> {
        let Some(&first) = self.concrete.first() else {
            return Err(Error::SchemaResolution {
                type_name: self.declared.name.to_string(),
                node: node.to_string(),
            });
        };
        if let Some(exact) = self
            .concrete
            .iter()
            .find(|c| observed.iter().any(|uri| *uri == c.type_uri))
            .copied()
        {
            return Ok(exact);
        }
        let locals: Vec<String> = observed
            .iter()
            .map(|uri| local_name(&registry.canonicalize(uri).0).to_string())
            .collect();
        if let Some(by_name) = self
            .concrete
            .iter()
            .find(|c| locals.iter().any(|l| c.matches_local_name(l)))
            .copied()
        {
            return Ok(by_name);
        }
        warn!(
            node,
            declared = self.declared.name,
            observed = ?observed,
            fallback = first.name,
            "no implementation matches the observed type; using the first candidate"
        );
        Ok(first)
    }
}

/// Lookup table of every registered descriptor, by name and by type URI.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    types: Vec<&'static TypeDescriptor>,
    by_name: HashMap<&'static str, usize>,
    by_uri: HashMap<&'static str, usize>,
}

static INFOMODEL: OnceLock<TypeCatalog> = OnceLock::new();

impl TypeCatalog {
    /// Catalog of the bundled information-model types.
    pub fn infomodel() -> &'static TypeCatalog {
        INFOMODEL.get_or_init(|| TypeCatalog::new(crate::infomodel::ROOTS))
    }

    /// Register `roots` and everything reachable from them through subtypes
    /// and object-valued properties.
    pub fn new(roots: &[&'static TypeDescriptor]) -> Self {
        let mut catalog = TypeCatalog::default();
        let mut pending: Vec<&'static TypeDescriptor> = roots.to_vec();
        while let Some(ty) = pending.pop() {
            if catalog.by_uri.contains_key(ty.type_uri) {
                continue;
            }
            let index = catalog.types.len();
            catalog.types.push(ty);
            catalog.by_name.insert(ty.name, index);
            catalog.by_uri.insert(ty.type_uri, index);
            pending.extend(ty.subtypes.iter().copied());
            pending.extend(ty.properties.iter().filter_map(|p| match p.kind {
                ValueKind::Object(target) => Some(target),
                _ => None,
            }));
        }
        catalog
    }

    pub fn by_name(&self, name: &str) -> Option<&'static TypeDescriptor> {
        self.by_name.get(name).map(|&i| self.types[i])
    }

    pub fn by_uri(&self, uri: &str) -> Option<&'static TypeDescriptor> {
        self.by_uri.get(uri).map(|&i| self.types[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static TypeDescriptor> + '_ {
        self.types.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
