//! RDF vocabulary constants for the information model.
//!
//! - `ids:` prefix (https://w3id.org/idsa/core/) -- classes and predicates of the core model
//! - `idsc:` prefix (https://w3id.org/idsa/code/) -- enumerated code values
//! - `info:` / `kdsf:` prefixes -- domain extensions accepted on input

/// Standard RDF/RDFS/OWL/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

/// XSD datatype IRIs used by the literal codec
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const DATE_TIME_STAMP: &str = "http://www.w3.org/2001/XMLSchema#dateTimeStamp";
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    pub const BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// Core information model (`ids:` prefix)
pub mod ids {
    pub const PREFIX: &str = "ids";
    pub const NS: &str = "https://w3id.org/idsa/core/";

    // Classes
    pub const MESSAGE: &str = "https://w3id.org/idsa/core/Message";
    pub const ARTIFACT_REQUEST_MESSAGE: &str = "https://w3id.org/idsa/core/ArtifactRequestMessage";
    pub const MESSAGE_PROCESSED_NOTIFICATION_MESSAGE: &str =
        "https://w3id.org/idsa/core/MessageProcessedNotificationMessage";
    pub const CONTRACT_REJECTION_MESSAGE: &str =
        "https://w3id.org/idsa/core/ContractRejectionMessage";
    pub const BROKER_DATA_REQUEST: &str = "https://w3id.org/idsa/core/BrokerDataRequest";
    pub const TOKEN: &str = "https://w3id.org/idsa/core/Token";
    pub const DYNAMIC_ATTRIBUTE_TOKEN: &str = "https://w3id.org/idsa/core/DynamicAttributeToken";
    pub const CONNECTOR: &str = "https://w3id.org/idsa/core/Connector";
    pub const BASE_CONNECTOR: &str = "https://w3id.org/idsa/core/BaseConnector";
    pub const TRUSTED_CONNECTOR: &str = "https://w3id.org/idsa/core/TrustedConnector";
    pub const RESOURCE_CATALOG: &str = "https://w3id.org/idsa/core/ResourceCatalog";
    pub const RESOURCE: &str = "https://w3id.org/idsa/core/Resource";
    pub const DAT_PAYLOAD: &str = "https://w3id.org/idsa/core/DatPayload";

    // Message properties
    pub const MODEL_VERSION: &str = "https://w3id.org/idsa/core/modelVersion";
    pub const ISSUED: &str = "https://w3id.org/idsa/core/issued";
    pub const ISSUER_CONNECTOR: &str = "https://w3id.org/idsa/core/issuerConnector";
    pub const SENDER_AGENT: &str = "https://w3id.org/idsa/core/senderAgent";
    pub const RECIPIENT_CONNECTOR: &str = "https://w3id.org/idsa/core/recipientConnector";
    pub const CORRELATION_MESSAGE: &str = "https://w3id.org/idsa/core/correlationMessage";
    pub const SECURITY_TOKEN: &str = "https://w3id.org/idsa/core/securityToken";
    pub const CONTENT_VERSION: &str = "https://w3id.org/idsa/core/contentVersion";
    pub const REQUESTED_ARTIFACT: &str = "https://w3id.org/idsa/core/requestedArtifact";
    pub const CONTRACT_REJECTION_REASON: &str =
        "https://w3id.org/idsa/core/contractRejectionReason";

    // Broker data request
    pub const DATA_REQUEST_ACTION: &str = "https://w3id.org/idsa/core/dataRequestAction";
    pub const MESSAGE_CONTENT: &str = "https://w3id.org/idsa/core/messageContent";
    pub const COVERED_ENTITY: &str = "https://w3id.org/idsa/core/coveredEntity";

    // Token
    pub const TOKEN_VALUE: &str = "https://w3id.org/idsa/core/tokenValue";
    pub const TOKEN_FORMAT: &str = "https://w3id.org/idsa/core/tokenFormat";

    // Connector / catalog / resource
    pub const CURATOR: &str = "https://w3id.org/idsa/core/curator";
    pub const MAINTAINER: &str = "https://w3id.org/idsa/core/maintainer";
    pub const TITLE: &str = "https://w3id.org/idsa/core/title";
    pub const DESCRIPTION: &str = "https://w3id.org/idsa/core/description";
    pub const OUTBOUND_MODEL_VERSION: &str = "https://w3id.org/idsa/core/outboundModelVersion";
    pub const INBOUND_MODEL_VERSION: &str = "https://w3id.org/idsa/core/inboundModelVersion";
    pub const SECURITY_PROFILE: &str = "https://w3id.org/idsa/core/securityProfile";
    pub const RESOURCE_CATALOG_PROP: &str = "https://w3id.org/idsa/core/resourceCatalog";
    pub const OFFERED_RESOURCE: &str = "https://w3id.org/idsa/core/offeredResource";
    pub const KEYWORD: &str = "https://w3id.org/idsa/core/keyword";
    pub const VERSION: &str = "https://w3id.org/idsa/core/version";
    pub const CREATED: &str = "https://w3id.org/idsa/core/created";
    pub const BYTE_SIZE: &str = "https://w3id.org/idsa/core/byteSize";
    pub const CHECKSUM: &str = "https://w3id.org/idsa/core/checksum";
    pub const TEMPORAL_RESOLUTION: &str = "https://w3id.org/idsa/core/temporalResolution";
    pub const PRICE: &str = "https://w3id.org/idsa/core/price";
    pub const SHAPES_GRAPH: &str = "https://w3id.org/idsa/core/shapesGraph";
    pub const SAMPLE: &str = "https://w3id.org/idsa/core/sample";

    // Claims payload
    pub const ISS: &str = "https://w3id.org/idsa/core/iss";
    pub const SUB: &str = "https://w3id.org/idsa/core/sub";
    pub const AUD: &str = "https://w3id.org/idsa/core/aud";
    pub const EXP: &str = "https://w3id.org/idsa/core/exp";
    pub const IAT: &str = "https://w3id.org/idsa/core/iat";
    pub const NBF: &str = "https://w3id.org/idsa/core/nbf";
    pub const SCOPE: &str = "https://w3id.org/idsa/core/scope";
    pub const REFERRING_CONNECTOR: &str = "https://w3id.org/idsa/core/referringConnector";
}

/// Enumerated code values (`idsc:` prefix)
pub mod idsc {
    pub const PREFIX: &str = "idsc";
    pub const NS: &str = "https://w3id.org/idsa/code/";

    pub const JWT: &str = "https://w3id.org/idsa/code/JWT";
    pub const OTHER_TOKEN: &str = "https://w3id.org/idsa/code/OTHER_TOKEN";

    pub const REGISTER: &str = "https://w3id.org/idsa/code/REGISTER";
    pub const UPDATE: &str = "https://w3id.org/idsa/code/UPDATE";
    pub const UNREGISTER: &str = "https://w3id.org/idsa/code/UNREGISTER";

    pub const BASE_SECURITY_PROFILE: &str = "https://w3id.org/idsa/code/BASE_SECURITY_PROFILE";
    pub const TRUST_SECURITY_PROFILE: &str = "https://w3id.org/idsa/code/TRUST_SECURITY_PROFILE";
    pub const TRUST_PLUS_SECURITY_PROFILE: &str =
        "https://w3id.org/idsa/code/TRUST_PLUS_SECURITY_PROFILE";
}

/// Fraunhofer information-model extension (`info:` prefix)
pub mod info {
    pub const PREFIX: &str = "info";
    pub const NS: &str = "http://www.fraunhofer.de/fraunhofer-digital/infomodell#";
}

/// Research core dataset extension (`kdsf:` prefix)
pub mod kdsf {
    pub const PREFIX: &str = "kdsf";
    pub const NS: &str =
        "http://kerndatensatz-forschung.de/version1/technisches_datenmodell/owl/Basis#";
}

/// Namespace for autogenerated instance identifiers.
pub const AUTOGEN_BASE: &str = "https://w3id.org/idsa/autogen";
