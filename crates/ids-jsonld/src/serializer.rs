//! Entry point tying encoder, decoder, preprocessing and format conversion together.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::graph::{self, jsonld, RdfFormat};
use crate::namespace::NamespaceRegistry;
use crate::object::RdfObject;
use crate::preprocess::{JsonPreprocessor, PreprocessingPipeline};
use crate::schema::TypeDescriptor;

/// Serializer settings, loadable from a JSON config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerOptions {
    /// Indent JSON-LD output.
    pub pretty: bool,
    /// Parse each preprocessor's output to check it is still valid JSON-LD.
    pub validate_preprocessing: bool,
    /// Install the type-name normalizer in front of every decode.
    pub normalize_type_names: bool,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            validate_preprocessing: false,
            normalize_type_names: false,
        }
    }
}

/// Encodes objects to JSON-LD (or another RDF format) and decodes documents
/// back into typed instances.
///
/// A `Serializer` holds no per-call state; it can be shared across threads.
pub struct Serializer {
    registry: NamespaceRegistry,
    options: SerializerOptions,
    pipeline: PreprocessingPipeline,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::with_options(SerializerOptions::default())
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SerializerOptions) -> Self {
        let registry = NamespaceRegistry::infomodel().clone();
        let mut pipeline = PreprocessingPipeline::new();
        if options.normalize_type_names {
            pipeline.push_type_names(&registry, options.validate_preprocessing);
        }
        Self {
            registry,
            options,
            pipeline,
        }
    }

    /// Replace the namespace table used for compaction and parsing.
    ///
    /// The type-name normalizer installed by the options switches to the new
    /// table too; preprocessors added with `add_preprocessor` are kept as is.
    pub fn with_registry(mut self, registry: NamespaceRegistry) -> Self {
        self.pipeline.rebind(&registry);
        self.registry = registry;
        self
    }

    pub fn options(&self) -> &SerializerOptions {
        &self.options
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// Encode `root` as a JSON-LD document.
    pub fn serialize(&self, root: &dyn RdfObject) -> Result<String> {
        let value = Encoder::new(&self.registry).encode(root)?;
        self.render(&value)
    }

    /// Encode `root` and write it in `format`.
    pub fn serialize_as(&self, root: &dyn RdfObject, format: RdfFormat) -> Result<String> {
        let document = self.serialize(root)?;
        self.convert(&document, format)
    }

    /// Encode several objects as a JSON array, each element with its own `@context`.
    pub fn serialize_collection(&self, items: &[&dyn RdfObject]) -> Result<String> {
        let value = Encoder::new(&self.registry).encode_collection(items)?;
        self.render(&value)
    }

    /// Re-express a JSON-LD document in `format`.
    pub fn convert(&self, jsonld_text: &str, format: RdfFormat) -> Result<String> {
        match format {
            RdfFormat::JsonLd => {
                let value: Value = serde_json::from_str(jsonld_text)?;
                self.render(&value)
            }
            RdfFormat::RdfXml => Err(Error::UnsupportedFormat(format.to_string())),
            _ => {
                let graph = jsonld::parse(jsonld_text, &self.registry)?;
                debug!(format = %format, triples = graph.len(), "converting document");
                graph::write(&graph, format, &self.registry)
            }
        }
    }

    /// Run the preprocessing pipeline on `text`.
    pub fn preprocess(&self, text: &str) -> Result<String> {
        self.pipeline.run(text, &self.registry)
    }

    /// Decode `text` into an instance of `declared` or one of its implementations.
    pub fn deserialize(
        &self,
        text: &str,
        declared: &'static TypeDescriptor,
    ) -> Result<Box<dyn RdfObject>> {
        let text = self.preprocess(text)?;
        let graph = jsonld::parse(&text, &self.registry)?;
        Decoder::new(&self.registry).decode_message(&graph, declared)
    }

    /// Decode `text` into the concrete type `T`.
    pub fn deserialize_into<T: RdfObject + Default>(&self, text: &str) -> Result<T> {
        let declared = T::default().descriptor();
        let obj = self.deserialize(text, declared)?;
        let id = obj.id().to_string();
        let resolved = obj.descriptor().name;
        obj.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            debug!(resolved, "decoded object is not of the requested type");
            Error::SchemaResolution {
                type_name: declared.name.to_string(),
                node: id,
            }
        })
    }

    /// Append a preprocessor; preprocessors run in insertion order.
    pub fn add_preprocessor(&mut self, preprocessor: impl JsonPreprocessor + 'static, validate: bool) {
        self.pipeline.push(preprocessor, validate);
    }

    pub fn remove_preprocessors(&mut self) {
        self.pipeline.clear();
    }

    fn render(&self, value: &Value) -> Result<String> {
        Ok(if self.options.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }
}
