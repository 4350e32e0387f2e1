//! End-to-end encode/decode tests against the bundled catalog.

use std::path::PathBuf;

use chrono::DateTime;
use serde_json::Value;

use ids_jsonld::graph::jsonld;
use ids_jsonld::infomodel::{
    ArtifactRequestMessage, BaseConnector, BrokerDataRequest, ContractRejectionMessage,
    DataRequestAction, DynamicAttributeToken, MessageProcessedNotificationMessage, Resource,
    ResourceCatalog, SecurityProfile, TokenFormat, TrustedConnector, CONNECTOR, MESSAGE,
    RESOURCE, TOKEN,
};
use ids_jsonld::literal::{Bytes, RdfResource, TypedLiteral, Uri, XsdDuration};
use ids_jsonld::model::ontology::{ids, idsc, xsd};
use ids_jsonld::{
    Error, ExtraValue, NamespaceRegistry, ObjectValue, RdfFormat, RdfObject, Serializer, Term,
};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn context_keys(document: &Value) -> Vec<String> {
    document["@context"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect()
}

fn sample_token() -> DynamicAttributeToken {
    DynamicAttributeToken {
        token_value: "eyJhbGciOiJSUzI1NiJ9.e30.c2ln".into(),
        token_format: TokenFormat::Jwt,
        ..DynamicAttributeToken::new("t1")
    }
}

fn sample_request() -> ArtifactRequestMessage {
    ArtifactRequestMessage {
        model_version: "4.0.0".into(),
        issued: DateTime::parse_from_rfc3339("2024-03-01T10:15:30.250+01:00").unwrap(),
        issuer_connector: Uri::new("https://example.org/connectors/c7"),
        sender_agent: Uri::new("https://example.org/participants/dwd"),
        recipient_connector: vec![
            Uri::new("https://example.org/connectors/c9"),
            Uri::new("https://example.org/connectors/c10"),
        ],
        security_token: Some(sample_token().into()),
        requested_artifact: Uri::new("https://example.org/artifacts/a1"),
        ..ArtifactRequestMessage::new("m1")
    }
}

fn sample_resource() -> Resource {
    Resource {
        title: vec![TypedLiteral::plain("Weather"), TypedLiteral::tagged("Weather", "en")],
        keyword: vec![TypedLiteral::tagged("Wetter", "de")],
        version: Some("1.2".into()),
        created: Some(DateTime::parse_from_rfc3339("2023-12-24T18:00:00Z").unwrap()),
        byte_size: Some("123456789012345678901234567890".parse().unwrap()),
        checksum: Some(Bytes(b"hello".to_vec())),
        temporal_resolution: Some("P1DT2H".parse::<XsdDuration>().unwrap()),
        price: Some("19.99".parse().unwrap()),
        shapes_graph: Some(RdfResource("https://example.org/shapes/weather".into())),
        ..Resource::new("r1")
    }
}

fn sample_connector() -> TrustedConnector {
    let mut catalog = ResourceCatalog::new("c1");
    catalog.offered_resource.push(sample_resource().into());
    TrustedConnector {
        title: vec![TypedLiteral::tagged("Gateway", "en")],
        curator: Uri::new("https://example.org/participants/dwd"),
        maintainer: Uri::new("https://example.org/participants/dwd"),
        outbound_model_version: "4.0.0".into(),
        inbound_model_version: vec!["3.1.0".into(), "4.0.0".into()],
        security_profile: SecurityProfile::TrustPlus,
        resource_catalog: vec![catalog.into()],
        ..TrustedConnector::new("tc1")
    }
}

fn round_trip<T: RdfObject + Default + PartialEq>(serializer: &Serializer, original: &T) -> T {
    let text = serializer.serialize(original).unwrap();
    let decoded: T = serializer.deserialize_into(&text).unwrap();
    assert_eq!(&decoded, original, "round trip changed the object:\n{text}");
    // Encoding the decoded object again yields the same document.
    assert_eq!(json(&serializer.serialize(&decoded).unwrap()), json(&text));
    decoded
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn artifact_request_round_trip() {
    round_trip(&Serializer::new(), &sample_request());
}

#[test]
fn notification_and_rejection_round_trip() {
    let serializer = Serializer::new();
    let notification = MessageProcessedNotificationMessage {
        model_version: "4.0.0".into(),
        issuer_connector: Uri::new("https://example.org/connectors/c7"),
        sender_agent: Uri::new("https://example.org/participants/dwd"),
        correlation_message: Some(Uri::new("https://w3id.org/idsa/autogen/artifactRequestMessage/m1")),
        content_version: Some("1".into()),
        ..MessageProcessedNotificationMessage::new("n1")
    };
    round_trip(&serializer, &notification);

    let rejection = ContractRejectionMessage {
        model_version: "4.0.0".into(),
        issuer_connector: Uri::new("https://example.org/connectors/c7"),
        sender_agent: Uri::new("https://example.org/participants/dwd"),
        contract_rejection_reason: Some(TypedLiteral::tagged("price too high", "en")),
        ..ContractRejectionMessage::new("x1")
    };
    round_trip(&serializer, &rejection);
}

#[test]
fn connector_with_nested_catalog_round_trip() {
    let decoded = round_trip(&Serializer::new(), &sample_connector());
    let catalog = decoded.resource_catalog[0]
        .downcast_ref::<ResourceCatalog>()
        .unwrap();
    let resource = catalog.offered_resource[0].downcast_ref::<Resource>().unwrap();
    assert_eq!(resource.checksum, Some(Bytes(b"hello".to_vec())));
}

#[test]
fn resource_round_trip_covers_literal_kinds() {
    round_trip(&Serializer::new(), &sample_resource());
}

#[test]
fn base_connector_round_trip_compact_output() {
    let serializer = Serializer::with_options(ids_jsonld::SerializerOptions {
        pretty: false,
        ..Default::default()
    });
    let connector = BaseConnector {
        curator: Uri::new("https://example.org/p/1"),
        maintainer: Uri::new("https://example.org/p/2"),
        outbound_model_version: "4.0.0".into(),
        inbound_model_version: vec!["4.0.0".into()],
        ..BaseConnector::new("bc1")
    };
    let text = serializer.serialize(&connector).unwrap();
    assert!(!text.contains('\n'));
    round_trip(&serializer, &connector);
}

#[test]
fn blank_root_decodes_without_id() {
    let serializer = Serializer::new();
    let token = DynamicAttributeToken {
        id: String::new(),
        ..sample_token()
    };
    let text = serializer.serialize(&token).unwrap();
    assert!(json(&text).get("@id").is_none());
    let decoded: DynamicAttributeToken = serializer.deserialize_into(&text).unwrap();
    assert_eq!(decoded, token);
}

// ---------------------------------------------------------------------------
// Encoding shape
// ---------------------------------------------------------------------------

#[test]
fn context_declares_only_used_prefixes() {
    let serializer = Serializer::new();
    let resource = Resource {
        same_as: Some(ObjectValue::Reference("https://example.org/resources/other".into())),
        ..Resource::new("r2")
    };
    let document = json(&serializer.serialize(&resource).unwrap());
    assert_eq!(context_keys(&document), ["ids", "owl"]);
    assert_eq!(document["@type"], "ids:Resource");
    assert_eq!(
        document["owl:sameAs"],
        json(r#"{"@id": "https://example.org/resources/other"}"#)
    );
}

#[test]
fn nested_nodes_carry_no_context() {
    let document = json(&Serializer::new().serialize(&sample_request()).unwrap());
    let token = &document["ids:securityToken"];
    assert_eq!(token["@type"], "ids:DynamicAttributeToken");
    assert!(token.get("@context").is_none());
    assert_eq!(token["ids:tokenFormat"], json(&format!(r#"{{"@id": "{}"}}"#, idsc::JWT)));
}

#[test]
fn multi_valued_properties_are_arrays() {
    let document = json(&Serializer::new().serialize(&sample_request()).unwrap());
    let recipients = document["ids:recipientConnector"].as_array().unwrap();
    assert_eq!(recipients.len(), 2);
    assert_eq!(recipients[0]["@id"], "https://example.org/connectors/c9");
    // Unset optional properties are omitted.
    assert!(document.get("ids:correlationMessage").is_none());
}

#[test]
fn literal_values_use_absolute_datatypes() {
    let document = json(&Serializer::new().serialize(&sample_resource()).unwrap());
    assert_eq!(document["ids:price"]["@type"], xsd::DECIMAL);
    assert_eq!(document["ids:checksum"]["@value"], "aGVsbG8=");
    assert_eq!(document["ids:temporalResolution"]["@type"], xsd::DURATION);
    assert_eq!(document["ids:created"]["@value"], "2023-12-24T18:00:00Z");
    assert_eq!(document["ids:version"], "1.2");
}

#[test]
fn collection_elements_have_their_own_context() {
    let serializer = Serializer::new();
    let token = sample_token();
    let resource = Resource {
        same_as: Some(ObjectValue::Reference("urn:x".into())),
        ..Resource::new("r3")
    };
    let text = serializer.serialize_collection(&[&token, &resource]).unwrap();
    let items = json(&text);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(context_keys(&items[0]), ["ids"]);
    assert_eq!(context_keys(&items[1]), ["ids", "owl"]);
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_basic_object() {
    let serializer = Serializer::new();
    let decoded: BrokerDataRequest = serializer
        .deserialize_into(&fixture("broker_data_request.jsonld"))
        .unwrap();
    assert_eq!(decoded.id, "https://w3id.org/idsa/autogen/brokerDataRequest/u1");
    assert_eq!(decoded.data_request_action, DataRequestAction::Register);
    assert_eq!(decoded.message_content.as_deref(), Some("Hello world"));
    assert_eq!(decoded.covered_entity.as_str(), "https://example.org/connectors/c7");

    let document = json(&serializer.serialize(&decoded).unwrap());
    let expected = json(
        r#"{
            "@context": {"ids": "https://w3id.org/idsa/core/"},
            "@type": "ids:BrokerDataRequest",
            "@id": "https://w3id.org/idsa/autogen/brokerDataRequest/u1",
            "ids:messageContent": "Hello world",
            "ids:coveredEntity": {"@id": "https://example.org/connectors/c7"},
            "ids:dataRequestAction": {"@id": "https://w3id.org/idsa/code/REGISTER"}
        }"#,
    );
    assert_eq!(document, expected);
}

#[test]
fn scenario_abstract_root_selects_matching_implementation() {
    let serializer = Serializer::new();
    let decoded = serializer
        .deserialize(&fixture("trusted_connector.jsonld"), &CONNECTOR)
        .unwrap();
    assert_eq!(decoded.descriptor().name, "TrustedConnector");
    let connector = decoded.downcast_ref::<TrustedConnector>().unwrap();
    assert_eq!(connector.security_profile, SecurityProfile::Trust);
    assert_eq!(connector.inbound_model_version, ["3.1.0", "4.0.0"]);
    let catalog = connector.resource_catalog[0]
        .downcast_ref::<ResourceCatalog>()
        .unwrap();
    let resource = catalog.offered_resource[0].downcast_ref::<Resource>().unwrap();
    assert_eq!(resource.byte_size, Some(1_048_576.into()));
    assert_eq!(resource.keyword.len(), 2);
}

#[test]
fn scenario_unknown_predicates_survive_round_trip() {
    let serializer = Serializer::new();
    let decoded: Resource = serializer
        .deserialize_into(&fixture("resource_with_extra.jsonld"))
        .unwrap();
    let rating = &decoded.extra["http://example.org/vocab/rating"];
    assert_eq!(rating.len(), 1);
    assert!(matches!(&rating[0], ExtraValue::Literal(l) if l.lexical() == "five stars"));
    assert!(matches!(
        &decoded.extra["http://example.org/vocab/provenance"][0],
        ExtraValue::Node(props) if props.contains_key("http://example.org/vocab/source")
    ));

    let text = serializer.serialize(&decoded).unwrap();
    let document = json(&text);
    assert_eq!(document["http://example.org/vocab/rating"], json(r#"["five stars"]"#));
    let again: Resource = serializer.deserialize_into(&text).unwrap();
    assert_eq!(again, decoded);
}

#[test]
fn unknown_timestamp_keeps_its_datatype_and_text() {
    let serializer = Serializer::new();
    let text = r#"{
        "@context": {"ids": "https://w3id.org/idsa/core/", "xsd": "http://www.w3.org/2001/XMLSchema#"},
        "@id": "https://example.org/resources/r1",
        "@type": "ids:Resource",
        "http://example.org/vocab/observedAt": {"@value": "2024-03-01T10:15:30.000", "@type": "xsd:dateTime"}
    }"#;
    let decoded: Resource = serializer.deserialize_into(text).unwrap();
    let document = json(&serializer.serialize(&decoded).unwrap());
    assert_eq!(
        document["http://example.org/vocab/observedAt"],
        json(&format!(
            r#"[{{"@value": "2024-03-01T10:15:30.000", "@type": "{}"}}]"#,
            xsd::DATE_TIME
        ))
    );
}

#[test]
fn timestamp_typed_literal_round_trips() {
    let rejection = ContractRejectionMessage {
        model_version: "4.0.0".into(),
        issuer_connector: Uri::new("https://example.org/connectors/c7"),
        sender_agent: Uri::new("https://example.org/participants/dwd"),
        contract_rejection_reason: Some(TypedLiteral::typed("2024-03-01T10:15:30Z", xsd::DATE_TIME)),
        ..ContractRejectionMessage::new("x2")
    };
    let decoded = round_trip(&Serializer::new(), &rejection);
    assert_eq!(
        decoded.contract_rejection_reason.unwrap().datatype.as_deref(),
        Some(xsd::DATE_TIME)
    );
}

#[test]
fn scenario_integer_literals_are_typed() {
    let serializer = Serializer::new();
    let resource = Resource {
        byte_size: Some(4096.into()),
        ..Resource::new("r4")
    };
    let text = serializer.serialize(&resource).unwrap();
    let graph = jsonld::parse(&text, NamespaceRegistry::infomodel()).unwrap();
    let subject = Term::iri(resource.id.clone());
    let values = graph.objects(&subject, ids::BYTE_SIZE);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].as_literal(), Some(("4096", xsd::INTEGER, None)));
}

// ---------------------------------------------------------------------------
// Decoding rules
// ---------------------------------------------------------------------------

#[test]
fn literal_fidelity_for_tagged_and_untagged_values() {
    let serializer = Serializer::new();
    let resource = Resource {
        title: vec![TypedLiteral::plain("Weather"), TypedLiteral::tagged("Weather", "en")],
        ..Resource::new("r5")
    };
    let decoded: Resource = serializer
        .deserialize_into(&serializer.serialize(&resource).unwrap())
        .unwrap();
    assert_eq!(decoded.title.len(), 2);
    assert!(decoded.title.contains(&TypedLiteral::plain("Weather")));
    assert!(decoded.title.contains(&TypedLiteral::tagged("Weather", "en")));
}

#[test]
fn missing_mandatory_field_is_named() {
    let err = Serializer::new()
        .deserialize_into::<BrokerDataRequest>(&fixture("missing_mandatory.jsonld"))
        .unwrap_err();
    match err {
        Error::MissingMandatoryField {
            type_name, fields, ..
        } => {
            assert_eq!(type_name, "BrokerDataRequest");
            assert_eq!(fields, ["coveredEntity"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn at_least_one_is_mandatory() {
    let connector = BaseConnector {
        curator: Uri::new("https://example.org/p/1"),
        maintainer: Uri::new("https://example.org/p/2"),
        outbound_model_version: "4.0.0".into(),
        ..BaseConnector::new("bc2")
    };
    let serializer = Serializer::new();
    let text = serializer.serialize(&connector).unwrap();
    let err = serializer.deserialize_into::<BaseConnector>(&text).unwrap_err();
    assert!(
        matches!(&err, Error::MissingMandatoryField { fields, .. } if fields == &["inboundModelVersion"]),
        "{err}"
    );
}

#[test]
fn message_fixture_decodes_through_abstract_type() {
    let decoded = Serializer::new()
        .deserialize(&fixture("artifact_request.jsonld"), &MESSAGE)
        .unwrap();
    let message = decoded.downcast_ref::<ArtifactRequestMessage>().unwrap();
    assert_eq!(message.issued.timestamp_millis(), 1_709_288_130_250);
    let token = message
        .security_token
        .as_ref()
        .and_then(|t| t.downcast_ref::<DynamicAttributeToken>())
        .unwrap();
    assert_eq!(token.token_format, TokenFormat::Jwt);
}

#[test]
fn self_reference_becomes_a_reference() {
    let serializer = Serializer::new();
    let mut resource = Resource::new("loop");
    resource.same_as = Some(ObjectValue::Reference(resource.id.clone()));
    let decoded: Resource = serializer
        .deserialize_into(&serializer.serialize(&resource).unwrap())
        .unwrap();
    assert_eq!(decoded.same_as, Some(ObjectValue::Reference(resource.id.clone())));
}

#[test]
fn cycle_through_nested_node_terminates() {
    let serializer = Serializer::new();
    let root_id = "https://example.org/resources/root";
    let text = format!(
        r#"{{
            "@id": "{root_id}",
            "@type": "ids:Resource",
            "ids:sample": {{
                "@id": "https://example.org/resources/child",
                "@type": "ids:Resource",
                "owl:sameAs": {{"@id": "{root_id}"}}
            }}
        }}"#
    );
    let decoded = serializer.deserialize(&text, &RESOURCE).unwrap();
    let root = decoded.downcast_ref::<Resource>().unwrap();
    let child = root.sample[0].downcast_ref::<Resource>().unwrap();
    assert_eq!(child.same_as, Some(ObjectValue::Reference(root_id.into())));
}

#[test]
fn impl_suffix_names_resolve() {
    let text = r#"{
        "@id": "urn:connector:1",
        "@type": "ids:TrustedConnectorImpl",
        "ids:curator": {"@id": "urn:p:1"},
        "ids:maintainer": {"@id": "urn:p:1"},
        "ids:outboundModelVersion": "4.0.0",
        "ids:inboundModelVersion": "4.0.0",
        "ids:securityProfile": "idsc:BASE_SECURITY_PROFILE"
    }"#;
    let decoded = Serializer::new().deserialize(text, &CONNECTOR).unwrap();
    let connector = decoded.downcast_ref::<TrustedConnector>().unwrap();
    assert_eq!(connector.security_profile, SecurityProfile::Base);
}

#[test]
fn unmatched_nested_type_falls_back_to_first_candidate() {
    let text = r#"{
        "@id": "urn:m:1",
        "@type": "ids:MessageProcessedNotificationMessage",
        "ids:modelVersion": "4.0.0",
        "ids:issued": "2024-01-01T00:00:00Z",
        "ids:issuerConnector": {"@id": "urn:c:1"},
        "ids:senderAgent": {"@id": "urn:a:1"},
        "ids:securityToken": {
            "@id": "urn:t:1",
            "@type": "ids:JwtToken",
            "ids:tokenValue": "abc",
            "ids:tokenFormat": {"@id": "idsc:OTHER_TOKEN"}
        }
    }"#;
    let decoded = Serializer::new().deserialize(text, &MESSAGE).unwrap();
    let message = decoded
        .downcast_ref::<MessageProcessedNotificationMessage>()
        .unwrap();
    let token = message.security_token.as_ref().unwrap();
    assert_eq!(token.as_object().unwrap().descriptor().name, "DynamicAttributeToken");
}

#[test]
fn untyped_node_for_abstract_property_is_an_error() {
    let text = r#"{
        "@id": "urn:m:2",
        "@type": "ids:MessageProcessedNotificationMessage",
        "ids:modelVersion": "4.0.0",
        "ids:issued": "2024-01-01T00:00:00Z",
        "ids:issuerConnector": {"@id": "urn:c:1"},
        "ids:senderAgent": {"@id": "urn:a:1"},
        "ids:securityToken": {"@id": "urn:t:2", "ids:tokenValue": "abc"}
    }"#;
    let err = Serializer::new().deserialize(text, &MESSAGE).unwrap_err();
    assert!(
        matches!(&err, Error::MissingType { type_name, node } if type_name == "Token" && node == "urn:t:2"),
        "{err}"
    );
}

#[test]
fn token_without_statements_stays_a_reference() {
    let mut message = sample_request();
    message.security_token = Some(ObjectValue::Reference("urn:t:remote".into()));
    let serializer = Serializer::new();
    let decoded: ArtifactRequestMessage = serializer
        .deserialize_into(&serializer.serialize(&message).unwrap())
        .unwrap();
    assert_eq!(decoded.security_token, message.security_token);
}

#[test]
fn two_roots_are_ambiguous() {
    let text = format!(
        "[{}, {}]",
        fixture("broker_data_request.jsonld"),
        fixture("missing_mandatory.jsonld")
    );
    let err = Serializer::new()
        .deserialize_into::<BrokerDataRequest>(&text)
        .unwrap_err();
    assert!(
        matches!(&err, Error::AmbiguousRoot { candidates, .. } if candidates.len() == 2),
        "{err}"
    );
}

#[test]
fn document_without_matching_root_is_rejected() {
    let err = Serializer::new()
        .deserialize(&fixture("broker_data_request.jsonld"), &TOKEN)
        .unwrap_err();
    assert!(matches!(&err, Error::AmbiguousRoot { candidates, .. } if candidates.is_empty()));
}

#[test]
fn unknown_enumerator_is_rejected() {
    let text = r#"{
        "@type": "ids:BrokerDataRequest",
        "dataRequestAction": "idsc:DELETE_EVERYTHING",
        "coveredEntity": "https://example.org/e"
    }"#;
    let err = Serializer::new()
        .deserialize_into::<BrokerDataRequest>(text)
        .unwrap_err();
    assert!(
        matches!(&err, Error::EnumResolution { value, .. } if value == "idsc:DELETE_EVERYTHING"),
        "{err}"
    );
}

#[test]
fn repeated_single_valued_property_is_rejected() {
    let text = r#"{
        "@type": "ids:BrokerDataRequest",
        "dataRequestAction": "idsc:UPDATE",
        "coveredEntity": ["https://example.org/e1", "https://example.org/e2"]
    }"#;
    let err = Serializer::new()
        .deserialize_into::<BrokerDataRequest>(text)
        .unwrap_err();
    assert!(matches!(err, Error::MultipleBindings { count: 2, .. }), "{err}");
}

#[test]
fn literal_for_object_property_is_rejected() {
    let text = r#"{
        "@id": "urn:r:1",
        "@type": "ids:Resource",
        "ids:sample": "not a node"
    }"#;
    let err = Serializer::new().deserialize(text, &RESOURCE).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLiteralType { .. }), "{err}");
}

#[test]
fn invalid_lexical_form_is_reported() {
    let text = r#"{
        "@id": "urn:r:2",
        "@type": "ids:Resource",
        "ids:byteSize": {"@value": "lots", "@type": "http://www.w3.org/2001/XMLSchema#integer"}
    }"#;
    let err = Serializer::new().deserialize(text, &RESOURCE).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteral { .. }), "{err}");
}

#[test]
fn requesting_a_different_concrete_type_fails() {
    let err = Serializer::new()
        .deserialize_into::<BaseConnector>(&fixture("trusted_connector.jsonld"))
        .unwrap_err();
    // The document's only connector is a TrustedConnector, so no BaseConnector root exists.
    assert!(matches!(err, Error::AmbiguousRoot { .. }), "{err}");
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

#[test]
fn turtle_output_uses_prefixes() {
    let serializer = Serializer::new();
    let decoded: BrokerDataRequest = serializer
        .deserialize_into(&fixture("broker_data_request.jsonld"))
        .unwrap();
    let turtle = serializer.serialize_as(&decoded, RdfFormat::Turtle).unwrap();
    assert!(turtle.contains("@prefix ids: <https://w3id.org/idsa/core/> ."));
    assert!(turtle.contains(" ids:messageContent \"Hello world\" ."), "{turtle}");
    assert!(turtle.contains(" rdf:type ids:BrokerDataRequest ."), "{turtle}");
}

#[test]
fn ntriples_output_has_one_line_per_statement() {
    let serializer = Serializer::new();
    let nt = serializer
        .serialize_as(&sample_resource(), RdfFormat::NTriples)
        .unwrap();
    // type, two titles, keyword, version, created, byteSize, checksum,
    // temporalResolution, price, shapesGraph
    assert_eq!(nt.lines().count(), 11, "{nt}");
    assert!(nt.contains("\"Weather\"@en ."));
    assert!(nt.contains("\"19.99\"^^<http://www.w3.org/2001/XMLSchema#decimal> ."));
}

#[test]
fn jsonld_conversion_re_renders() {
    let serializer = Serializer::new();
    let out = serializer
        .convert(&fixture("broker_data_request.jsonld"), RdfFormat::JsonLd)
        .unwrap();
    assert_eq!(json(&out), json(&fixture("broker_data_request.jsonld")));
}

#[test]
fn rdfxml_is_not_supported() {
    let err = Serializer::new()
        .serialize_as(&sample_token(), RdfFormat::RdfXml)
        .unwrap_err();
    assert!(matches!(&err, Error::UnsupportedFormat(f) if f == "rdfxml"));
    assert!(matches!(
        "yaml".parse::<RdfFormat>(),
        Err(Error::UnsupportedFormat(_))
    ));
    assert_eq!("TTL".parse::<RdfFormat>().unwrap(), RdfFormat::Turtle);
}
