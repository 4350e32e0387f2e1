use crate::literal::{NativeKind, TypedLiteral, Uri};
use crate::model::ontology::ids;
use crate::object::{ExtraProperties, ObjectValue};
use crate::rdf_object;
use crate::schema::{construct, PropertyDescriptor as P, TypeDescriptor, ValueKind};

use super::resource::RESOURCE_CATALOG;
use super::{autogen_id, SecurityProfile, SECURITY_PROFILE_URIS};

const TEXT: ValueKind = ValueKind::Literal(NativeKind::TypedLiteral);
const STRING: ValueKind = ValueKind::Literal(NativeKind::String);
const URI: ValueKind = ValueKind::Literal(NativeKind::Uri);

static CONNECTOR_PROPERTIES: [P; 8] = [
    P::many("title", ids::TITLE, TEXT),
    P::many("description", ids::DESCRIPTION, TEXT),
    P::required("curator", ids::CURATOR, URI),
    P::required("maintainer", ids::MAINTAINER, URI),
    P::required("outboundModelVersion", ids::OUTBOUND_MODEL_VERSION, STRING),
    P::many("inboundModelVersion", ids::INBOUND_MODEL_VERSION, STRING).at_least_one(),
    P::required(
        "securityProfile",
        ids::SECURITY_PROFILE,
        ValueKind::Enum(SECURITY_PROFILE_URIS),
    ),
    P::many(
        "resourceCatalog",
        ids::RESOURCE_CATALOG_PROP,
        ValueKind::Object(&RESOURCE_CATALOG),
    ),
];

pub static CONNECTOR: TypeDescriptor = TypeDescriptor {
    name: "Connector",
    type_uri: ids::CONNECTOR,
    construct: None,
    subtypes: &[&BASE_CONNECTOR, &TRUSTED_CONNECTOR],
    properties: &CONNECTOR_PROPERTIES,
    claims_payload: false,
};

macro_rules! connector {
    ($(#[$meta:meta])* $name:ident, $descriptor:ident, $type_uri:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub id: String,
            pub title: Vec<TypedLiteral>,
            pub description: Vec<TypedLiteral>,
            pub curator: Uri,
            pub maintainer: Uri,
            pub outbound_model_version: String,
            pub inbound_model_version: Vec<String>,
            pub security_profile: SecurityProfile,
            pub resource_catalog: Vec<ObjectValue>,
            pub extra: ExtraProperties,
        }

        impl $name {
            pub fn new(key: &str) -> Self {
                Self {
                    id: autogen_id(stringify!($name), key),
                    ..Self::default()
                }
            }
        }

        pub static $descriptor: TypeDescriptor = TypeDescriptor {
            name: stringify!($name),
            type_uri: $type_uri,
            construct: Some(construct::<$name>),
            subtypes: &[],
            properties: &CONNECTOR_PROPERTIES,
            claims_payload: false,
        };

        rdf_object!($name, $descriptor, {
            "title" => title,
            "description" => description,
            "curator" => curator,
            "maintainer" => maintainer,
            "outboundModelVersion" => outbound_model_version,
            "inboundModelVersion" => inbound_model_version,
            "securityProfile" => security_profile,
            "resourceCatalog" => resource_catalog,
        });
    };
}

connector!(
    /// Connector without attested software stack.
    BaseConnector, BASE_CONNECTOR, ids::BASE_CONNECTOR
);

connector!(TrustedConnector, TRUSTED_CONNECTOR, ids::TRUSTED_CONNECTOR);
