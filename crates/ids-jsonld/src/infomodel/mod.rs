//! A small catalog of information-model types.
//!
//! Each type is a plain struct plus a `static` [`TypeDescriptor`]; the
//! `rdf_object!` macro connects the two.

mod connector;
mod message;
mod resource;
mod token;

pub use connector::{BaseConnector, TrustedConnector, BASE_CONNECTOR, CONNECTOR, TRUSTED_CONNECTOR};
pub use message::{
    ArtifactRequestMessage, BrokerDataRequest, ContractRejectionMessage,
    MessageProcessedNotificationMessage, ARTIFACT_REQUEST_MESSAGE, BROKER_DATA_REQUEST,
    CONTRACT_REJECTION_MESSAGE, MESSAGE, MESSAGE_PROCESSED_NOTIFICATION_MESSAGE,
};
pub use resource::{Resource, ResourceCatalog, RESOURCE, RESOURCE_CATALOG};
pub use token::{DatPayload, DynamicAttributeToken, DAT_PAYLOAD, DYNAMIC_ATTRIBUTE_TOKEN, TOKEN};

use crate::model::iri::IriMinter;
use crate::model::ontology::{idsc, AUTOGEN_BASE};
use crate::rdf_enum;
use crate::schema::TypeDescriptor;

/// Entry points of the bundled catalog; everything else is reachable from here.
pub static ROOTS: &[&TypeDescriptor] = &[
    &MESSAGE,
    &BROKER_DATA_REQUEST,
    &TOKEN,
    &CONNECTOR,
    &RESOURCE_CATALOG,
    &RESOURCE,
    &DAT_PAYLOAD,
];

/// Identifier for a new instance, e.g.
/// `https://w3id.org/idsa/autogen/resource/3f2a`.
pub fn autogen_id(type_name: &str, key: &str) -> String {
    IriMinter::new(AUTOGEN_BASE).instance_iri(type_name, key)
}

rdf_enum! {
    /// Encoding of a security token's value.
    pub enum TokenFormat {
        Jwt => idsc::JWT,
        Other => idsc::OTHER_TOKEN,
    }
    uris = TOKEN_FORMAT_URIS;
}

rdf_enum! {
    /// What a broker should do with the covered entity.
    pub enum DataRequestAction {
        Register => idsc::REGISTER,
        Update => idsc::UPDATE,
        Unregister => idsc::UNREGISTER,
    }
    uris = DATA_REQUEST_ACTION_URIS;
}

rdf_enum! {
    pub enum SecurityProfile {
        Base => idsc::BASE_SECURITY_PROFILE,
        Trust => idsc::TRUST_SECURITY_PROFILE,
        TrustPlus => idsc::TRUST_PLUS_SECURITY_PROFILE,
    }
    uris = SECURITY_PROFILE_URIS;
}
