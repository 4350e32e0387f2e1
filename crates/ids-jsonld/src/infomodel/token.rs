use crate::literal::{NativeKind, Uri};
use crate::model::ontology::ids;
use crate::object::ExtraProperties;
use crate::rdf_object;
use crate::schema::{construct, PropertyDescriptor as P, TypeDescriptor, ValueKind};

use super::{
    autogen_id, SecurityProfile, TokenFormat, SECURITY_PROFILE_URIS, TOKEN_FORMAT_URIS,
};

const STRING: ValueKind = ValueKind::Literal(NativeKind::String);
const LONG: ValueKind = ValueKind::Literal(NativeKind::Long);

pub static TOKEN: TypeDescriptor = TypeDescriptor {
    name: "Token",
    type_uri: ids::TOKEN,
    construct: None,
    subtypes: &[&DYNAMIC_ATTRIBUTE_TOKEN],
    properties: &[],
    claims_payload: false,
};

/// Security token carried in a message header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicAttributeToken {
    pub id: String,
    pub token_value: String,
    pub token_format: TokenFormat,
    pub extra: ExtraProperties,
}

impl DynamicAttributeToken {
    pub fn new(key: &str) -> Self {
        Self {
            id: autogen_id("DynamicAttributeToken", key),
            ..Self::default()
        }
    }
}

pub static DYNAMIC_ATTRIBUTE_TOKEN: TypeDescriptor = TypeDescriptor {
    name: "DynamicAttributeToken",
    type_uri: ids::DYNAMIC_ATTRIBUTE_TOKEN,
    construct: Some(construct::<DynamicAttributeToken>),
    subtypes: &[],
    properties: &[
        P::required("tokenValue", ids::TOKEN_VALUE, STRING),
        P::required("tokenFormat", ids::TOKEN_FORMAT, ValueKind::Enum(TOKEN_FORMAT_URIS)),
    ],
    claims_payload: false,
};

rdf_object!(DynamicAttributeToken, DYNAMIC_ATTRIBUTE_TOKEN, {
    "tokenValue" => token_value,
    "tokenFormat" => token_format,
});

/// Claims of a dynamic attribute token.
///
/// Claims use the registered JWT claim names as JSON keys, so the encoder
/// writes accessor names instead of prefixed predicates and defines each
/// one in the document context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatPayload {
    pub id: String,
    pub iss: String,
    pub sub: String,
    pub aud: Uri,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub scope: Vec<String>,
    pub security_profile: SecurityProfile,
    pub referring_connector: Option<Uri>,
    pub extra: ExtraProperties,
}

impl DatPayload {
    pub fn new(key: &str) -> Self {
        Self {
            id: autogen_id("DatPayload", key),
            ..Self::default()
        }
    }
}

pub static DAT_PAYLOAD: TypeDescriptor = TypeDescriptor {
    name: "DatPayload",
    type_uri: ids::DAT_PAYLOAD,
    construct: Some(construct::<DatPayload>),
    subtypes: &[],
    properties: &[
        P::required("iss", ids::ISS, STRING),
        P::required("sub", ids::SUB, STRING),
        P::required("aud", ids::AUD, ValueKind::Literal(NativeKind::Uri)),
        P::required("exp", ids::EXP, LONG),
        P::required("iat", ids::IAT, LONG),
        P::required("nbf", ids::NBF, LONG),
        P::many("scope", ids::SCOPE, STRING),
        P::required(
            "securityProfile",
            ids::SECURITY_PROFILE,
            ValueKind::Enum(SECURITY_PROFILE_URIS),
        ),
        P::optional(
            "referringConnector",
            ids::REFERRING_CONNECTOR,
            ValueKind::Literal(NativeKind::Uri),
        ),
    ],
    claims_payload: true,
};

rdf_object!(DatPayload, DAT_PAYLOAD, {
    "iss" => iss,
    "sub" => sub,
    "aud" => aud,
    "exp" => exp,
    "iat" => iat,
    "nbf" => nbf,
    "scope" => scope,
    "securityProfile" => security_profile,
    "referringConnector" => referring_connector,
});
