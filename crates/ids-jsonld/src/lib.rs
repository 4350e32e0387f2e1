//! Map typed information-model objects to and from JSON-LD.
//!
//! [`Serializer`] is the entry point: it encodes any [`RdfObject`] into a
//! JSON-LD document with a minimal `@context`, converts documents to Turtle
//! or N-Triples, and decodes documents back into typed instances, resolving
//! abstract declared types to their concrete implementations.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod decoder;
pub mod emitter;
pub mod encoder;
pub mod error;
pub mod graph;
pub mod infomodel;
pub mod literal;
pub mod model;
pub mod namespace;
pub mod object;
pub mod preprocess;
pub mod schema;
pub mod serializer;

pub use error::{Error, Result};
pub use graph::{Graph, RdfFormat, Term, Triple};
pub use namespace::NamespaceRegistry;
pub use object::{ExtraProperties, ExtraValue, Field, FieldValue, ObjectValue, RdfEnum, RdfObject};
pub use preprocess::{JsonPreprocessor, TypeNamePreprocessor};
pub use schema::{PropertyDescriptor, TypeCatalog, TypeDescriptor, ValueKind};
pub use serializer::{Serializer, SerializerOptions};
