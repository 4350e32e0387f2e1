use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset};
use num_bigint::BigInt;

use crate::literal::{Bytes, NativeKind, RdfResource, TypedLiteral, XsdDuration};
use crate::model::ontology::{ids, standard};
use crate::object::{ExtraProperties, ObjectValue};
use crate::rdf_object;
use crate::schema::{construct, PropertyDescriptor as P, TypeDescriptor, ValueKind};

use super::autogen_id;

const TEXT: ValueKind = ValueKind::Literal(NativeKind::TypedLiteral);

/// Collection of offered resources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceCatalog {
    pub id: String,
    pub offered_resource: Vec<ObjectValue>,
    pub extra: ExtraProperties,
}

impl ResourceCatalog {
    pub fn new(key: &str) -> Self {
        Self {
            id: autogen_id("ResourceCatalog", key),
            ..Self::default()
        }
    }
}

pub static RESOURCE_CATALOG: TypeDescriptor = TypeDescriptor {
    name: "ResourceCatalog",
    type_uri: ids::RESOURCE_CATALOG,
    construct: Some(construct::<ResourceCatalog>),
    subtypes: &[],
    properties: &[P::many(
        "offeredResource",
        ids::OFFERED_RESOURCE,
        ValueKind::Object(&RESOURCE),
    )],
    claims_payload: false,
};

rdf_object!(ResourceCatalog, RESOURCE_CATALOG, {
    "offeredResource" => offered_resource,
});

/// A described data asset. Carries one property of nearly every literal kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: Vec<TypedLiteral>,
    pub description: Vec<TypedLiteral>,
    pub keyword: Vec<TypedLiteral>,
    pub version: Option<String>,
    pub created: Option<DateTime<FixedOffset>>,
    pub byte_size: Option<BigInt>,
    pub checksum: Option<Bytes>,
    pub temporal_resolution: Option<XsdDuration>,
    pub price: Option<BigDecimal>,
    pub shapes_graph: Option<RdfResource>,
    pub sample: Vec<ObjectValue>,
    pub same_as: Option<ObjectValue>,
    pub extra: ExtraProperties,
}

impl Resource {
    pub fn new(key: &str) -> Self {
        Self {
            id: autogen_id("Resource", key),
            ..Self::default()
        }
    }
}

pub static RESOURCE: TypeDescriptor = TypeDescriptor {
    name: "Resource",
    type_uri: ids::RESOURCE,
    construct: Some(construct::<Resource>),
    subtypes: &[],
    properties: &[
        P::many("title", ids::TITLE, TEXT),
        P::many("description", ids::DESCRIPTION, TEXT),
        P::many("keyword", ids::KEYWORD, TEXT),
        P::optional("version", ids::VERSION, ValueKind::Literal(NativeKind::String)),
        P::optional("created", ids::CREATED, ValueKind::Literal(NativeKind::Calendar)),
        P::optional("byteSize", ids::BYTE_SIZE, ValueKind::Literal(NativeKind::BigInteger)),
        P::optional("checksum", ids::CHECKSUM, ValueKind::Literal(NativeKind::Bytes)),
        P::optional(
            "temporalResolution",
            ids::TEMPORAL_RESOLUTION,
            ValueKind::Literal(NativeKind::Duration),
        ),
        P::optional("price", ids::PRICE, ValueKind::Literal(NativeKind::Decimal)),
        P::optional("shapesGraph", ids::SHAPES_GRAPH, ValueKind::Literal(NativeKind::Resource)),
        P::many("sample", ids::SAMPLE, ValueKind::Object(&RESOURCE)),
        P::optional("sameAs", standard::OWL_SAME_AS, ValueKind::Object(&RESOURCE)),
    ],
    claims_payload: false,
};

rdf_object!(Resource, RESOURCE, {
    "title" => title,
    "description" => description,
    "keyword" => keyword,
    "version" => version,
    "created" => created,
    "byteSize" => byte_size,
    "checksum" => checksum,
    "temporalResolution" => temporal_resolution,
    "price" => price,
    "shapesGraph" => shapes_graph,
    "sample" => sample,
    "sameAs" => same_as,
});
