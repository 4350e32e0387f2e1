use chrono::{DateTime, FixedOffset};

use crate::literal::{NativeKind, TypedLiteral, Uri};
use crate::model::ontology::ids;
use crate::object::{ExtraProperties, ObjectValue};
use crate::rdf_object;
use crate::schema::{construct, PropertyDescriptor as P, TypeDescriptor, ValueKind};

use super::token::TOKEN;
use super::{autogen_id, DataRequestAction, DATA_REQUEST_ACTION_URIS};

const STRING: ValueKind = ValueKind::Literal(NativeKind::String);
const URI: ValueKind = ValueKind::Literal(NativeKind::Uri);

/// Header properties shared by every message type, followed by the type's own.
macro_rules! message_properties {
    ($($own:expr),* $(,)?) => {
        &[
            P::required("modelVersion", ids::MODEL_VERSION, STRING),
            P::required("issued", ids::ISSUED, ValueKind::Literal(NativeKind::Calendar)),
            P::required("issuerConnector", ids::ISSUER_CONNECTOR, URI),
            P::required("senderAgent", ids::SENDER_AGENT, URI),
            P::many("recipientConnector", ids::RECIPIENT_CONNECTOR, URI),
            P::optional("correlationMessage", ids::CORRELATION_MESSAGE, URI),
            P::optional("securityToken", ids::SECURITY_TOKEN, ValueKind::Object(&TOKEN)),
            P::optional("contentVersion", ids::CONTENT_VERSION, STRING),
            $($own,)*
        ]
    };
}

/// A message struct with the shared header fields plus its own.
macro_rules! message {
    (
        $(#[$meta:meta])*
        $name:ident, $descriptor:ident, $type_uri:expr,
        { $($(#[$fmeta:meta])* $field:ident : $fty:ty => $accessor:literal),* $(,)? },
        [$($own:expr),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub id: String,
            pub model_version: String,
            pub issued: DateTime<FixedOffset>,
            pub issuer_connector: Uri,
            pub sender_agent: Uri,
            pub recipient_connector: Vec<Uri>,
            pub correlation_message: Option<Uri>,
            pub security_token: Option<ObjectValue>,
            pub content_version: Option<String>,
            $($(#[$fmeta])* pub $field: $fty,)*
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
            properties: message_properties!($($own),*),
            claims_payload: false,
        };

        rdf_object!($name, $descriptor, {
            "modelVersion" => model_version,
            "issued" => issued,
            "issuerConnector" => issuer_connector,
            "senderAgent" => sender_agent,
            "recipientConnector" => recipient_connector,
            "correlationMessage" => correlation_message,
            "securityToken" => security_token,
            "contentVersion" => content_version,
            $($accessor => $field,)*
        });
    };
}

/// Abstract root of all messages.
pub static MESSAGE: TypeDescriptor = TypeDescriptor {
    name: "Message",
    type_uri: ids::MESSAGE,
    construct: None,
    subtypes: &[
        &ARTIFACT_REQUEST_MESSAGE,
        &MESSAGE_PROCESSED_NOTIFICATION_MESSAGE,
        &CONTRACT_REJECTION_MESSAGE,
    ],
    properties: message_properties!(),
    claims_payload: false,
};

message!(
    /// Asks a connector for the artifact named by `requested_artifact`.
    ArtifactRequestMessage, ARTIFACT_REQUEST_MESSAGE, ids::ARTIFACT_REQUEST_MESSAGE,
    { requested_artifact: Uri => "requestedArtifact" },
    [P::required("requestedArtifact", ids::REQUESTED_ARTIFACT, URI)]
);

message!(
    MessageProcessedNotificationMessage,
    MESSAGE_PROCESSED_NOTIFICATION_MESSAGE,
    ids::MESSAGE_PROCESSED_NOTIFICATION_MESSAGE,
    {},
    []
);

message!(
    ContractRejectionMessage, CONTRACT_REJECTION_MESSAGE, ids::CONTRACT_REJECTION_MESSAGE,
    { contract_rejection_reason: Option<TypedLiteral> => "contractRejectionReason" },
    [P::optional(
        "contractRejectionReason",
        ids::CONTRACT_REJECTION_REASON,
        ValueKind::Literal(NativeKind::TypedLiteral)
    )]
);

/// Registration request sent to a broker about one entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrokerDataRequest {
    pub id: String,
    pub data_request_action: DataRequestAction,
    pub message_content: Option<String>,
    pub covered_entity: Uri,
    pub extra: ExtraProperties,
}

impl BrokerDataRequest {
    pub fn new(key: &str) -> Self {
        Self {
            id: autogen_id("BrokerDataRequest", key),
            ..Self::default()
        }
    }
}

pub static BROKER_DATA_REQUEST: TypeDescriptor = TypeDescriptor {
    name: "BrokerDataRequest",
    type_uri: ids::BROKER_DATA_REQUEST,
    construct: Some(construct::<BrokerDataRequest>),
    subtypes: &[],
    properties: &[
        P::required(
            "dataRequestAction",
            ids::DATA_REQUEST_ACTION,
            ValueKind::Enum(DATA_REQUEST_ACTION_URIS),
        ),
        P::optional("messageContent", ids::MESSAGE_CONTENT, STRING),
        P::required("coveredEntity", ids::COVERED_ENTITY, URI),
    ],
    claims_payload: false,
};

rdf_object!(BrokerDataRequest, BROKER_DATA_REQUEST, {
    "dataRequestAction" => data_request_action,
    "messageContent" => message_content,
    "coveredEntity" => covered_entity,
});
