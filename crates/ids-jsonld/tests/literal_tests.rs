use bigdecimal::BigDecimal;
use chrono::DateTime;
use num_bigint::BigInt;

use ids_jsonld::graph::Term;
use ids_jsonld::literal::{
    decode, encode, lang_concat, lang_split, Bytes, LiteralValue, NativeKind, NativeValue,
    NumericKind, TypedLiteral, Uri, XsdDuration,
};
use ids_jsonld::model::ontology::xsd;
use ids_jsonld::Error;

fn decode_term(term: Term, kind: NativeKind) -> Result<NativeValue, Error> {
    decode(&LiteralValue::from_term(&term), kind)
}

// --- Classification ---

#[test]
fn terms_are_classified_by_datatype() {
    assert_eq!(
        LiteralValue::from_term(&Term::string("x")),
        LiteralValue::Plain("x".into())
    );
    assert_eq!(
        LiteralValue::from_term(&Term::typed("7", xsd::SHORT)),
        LiteralValue::Numeric {
            kind: NumericKind::Short,
            lexical: "7".into()
        }
    );
    assert_eq!(
        LiteralValue::from_term(&Term::iri("urn:a")),
        LiteralValue::Uri("urn:a".into())
    );
    assert_eq!(
        LiteralValue::from_term(&Term::typed("aGk=", xsd::BASE64_BINARY)),
        LiteralValue::Binary(b"hi".to_vec())
    );
}

#[test]
fn timestamps_keep_wire_text_and_datatype() {
    let term = Term::typed("2024-03-01T10:15:30.000", xsd::DATE_TIME);
    let literal = LiteralValue::from_term(&term);
    assert_eq!(
        literal,
        LiteralValue::Typed {
            text: "2024-03-01T10:15:30.000".into(),
            datatype: xsd::DATE_TIME.into()
        }
    );
    assert_eq!(
        literal.to_json(),
        serde_json::json!({"@value": "2024-03-01T10:15:30.000", "@type": xsd::DATE_TIME})
    );
    // Still usable where a calendar is declared.
    assert_eq!(
        decode(&literal, NativeKind::Calendar).unwrap(),
        NativeValue::Calendar(DateTime::parse_from_rfc3339("2024-03-01T10:15:30Z").unwrap())
    );
}

#[test]
fn unparseable_typed_lexical_stays_typed() {
    assert_eq!(
        LiteralValue::from_term(&Term::typed("yesterday", xsd::DATE_TIME)),
        LiteralValue::Typed {
            text: "yesterday".into(),
            datatype: xsd::DATE_TIME.into()
        }
    );
}

// --- Encoding ---

#[test]
fn numeric_kinds_get_their_datatype() {
    let cases = [
        (NativeValue::Byte(-8), NativeKind::Byte, xsd::BYTE),
        (NativeValue::Short(300), NativeKind::Short, xsd::SHORT),
        (NativeValue::Int(70_000), NativeKind::Int, xsd::INT),
        (NativeValue::Long(1 << 40), NativeKind::Long, xsd::LONG),
        (NativeValue::Float(1.5), NativeKind::Float, xsd::FLOAT),
        (NativeValue::Double(2.25), NativeKind::Double, xsd::DOUBLE),
        (NativeValue::BigInteger(BigInt::from(12)), NativeKind::BigInteger, xsd::INTEGER),
    ];
    for (value, kind, datatype) in cases {
        let literal = encode(&value, kind).unwrap();
        assert_eq!(literal.datatype(), Some(datatype), "{value:?}");
    }
}

#[test]
fn encoding_checks_declared_kind() {
    let err = encode(&NativeValue::Int(1), NativeKind::Long).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLiteralType { .. }));
}

#[test]
fn booleans_are_typed() {
    let literal = encode(&NativeValue::Bool(true), NativeKind::Bool).unwrap();
    assert_eq!(literal.lexical(), "true");
    assert_eq!(literal.datatype(), Some(xsd::BOOLEAN));
}

#[test]
fn special_floats_use_xsd_spelling() {
    let nan = encode(&NativeValue::Float(f32::NAN), NativeKind::Float).unwrap();
    assert_eq!(nan.lexical(), "NaN");
    let inf = encode(&NativeValue::Double(f64::INFINITY), NativeKind::Double).unwrap();
    assert_eq!(inf.lexical(), "INF");
}

#[test]
fn typed_literal_encoding_follows_its_parts() {
    let tagged = encode(
        &NativeValue::TypedLiteral(TypedLiteral::tagged("Wetter", "de")),
        NativeKind::TypedLiteral,
    )
    .unwrap();
    assert_eq!(
        tagged.to_json(),
        serde_json::json!({"@value": "Wetter", "@language": "de"})
    );
    let plain = encode(
        &NativeValue::TypedLiteral(TypedLiteral::typed("x", xsd::STRING)),
        NativeKind::TypedLiteral,
    )
    .unwrap();
    assert_eq!(plain.to_json(), serde_json::json!("x"));
}

#[test]
fn uris_render_as_node_references() {
    let literal = encode(&NativeValue::Uri(Uri::new("urn:a")), NativeKind::Uri).unwrap();
    assert_eq!(literal.to_json(), serde_json::json!({"@id": "urn:a"}));
}

// --- Decoding ---

#[test]
fn integers_decode_from_plain_and_typed_text() {
    assert_eq!(
        decode_term(Term::string(" 42 "), NativeKind::Int).unwrap(),
        NativeValue::Int(42)
    );
    assert_eq!(
        decode_term(Term::typed("-7", xsd::INTEGER), NativeKind::Long).unwrap(),
        NativeValue::Long(-7)
    );
    assert_eq!(
        decode_term(Term::typed("+123456789012345678901234567890", xsd::INTEGER), NativeKind::BigInteger)
            .unwrap(),
        NativeValue::BigInteger("123456789012345678901234567890".parse().unwrap())
    );
}

#[test]
fn out_of_range_byte_is_invalid() {
    let err = decode_term(Term::typed("300", xsd::BYTE), NativeKind::Byte).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteral { .. }), "{err}");
}

#[test]
fn numbers_reject_language_tagged_text() {
    let err = decode_term(Term::lang_string("12", "en"), NativeKind::Int).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLiteralType { .. }));
}

#[test]
fn floats_accept_xsd_special_values() {
    assert_eq!(
        decode_term(Term::typed("-INF", xsd::DOUBLE), NativeKind::Double).unwrap(),
        NativeValue::Double(f64::NEG_INFINITY)
    );
    assert!(decode_term(Term::typed("infinity", xsd::DOUBLE), NativeKind::Double).is_err());
    match decode_term(Term::typed("NaN", xsd::FLOAT), NativeKind::Float).unwrap() {
        NativeValue::Float(v) => assert!(v.is_nan()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn booleans_accept_numeric_forms() {
    assert_eq!(
        decode_term(Term::typed("1", xsd::BOOLEAN), NativeKind::Bool).unwrap(),
        NativeValue::Bool(true)
    );
    assert!(decode_term(Term::string("yes"), NativeKind::Bool).is_err());
}

#[test]
fn decimals_keep_precision() {
    assert_eq!(
        decode_term(Term::typed("0.1000000000000000055511151231257827", xsd::DECIMAL), NativeKind::Decimal)
            .unwrap(),
        NativeValue::Decimal(
            "0.1000000000000000055511151231257827"
                .parse::<BigDecimal>()
                .unwrap()
        )
    );
}

#[test]
fn uris_need_an_absolute_form() {
    assert_eq!(
        decode_term(Term::string("https://example.org/x"), NativeKind::Uri).unwrap(),
        NativeValue::Uri(Uri::new("https://example.org/x"))
    );
    let err = decode_term(Term::string("relative/path"), NativeKind::Uri).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteral { .. }));
}

#[test]
fn calendars_accept_zone_suffix_and_plain_text() {
    let expected = DateTime::parse_from_rfc3339("2023-05-04T10:00:00+02:00").unwrap();
    assert_eq!(
        decode_term(Term::string("2023-05-04T10:00:00+02:00[Europe/Berlin]"), NativeKind::Calendar)
            .unwrap(),
        NativeValue::Calendar(expected)
    );
    assert!(decode_term(Term::string("tomorrow"), NativeKind::Calendar).is_err());
}

#[test]
fn durations_are_validated() {
    assert_eq!(
        decode_term(Term::typed("PT1H30M", xsd::DURATION), NativeKind::Duration).unwrap(),
        NativeValue::Duration("PT1H30M".parse::<XsdDuration>().unwrap())
    );
    assert!(decode_term(Term::string("90 minutes"), NativeKind::Duration).is_err());
}

#[test]
fn bytes_from_base64_or_raw_text() {
    assert_eq!(
        decode_term(Term::typed("aGVsbG8=", xsd::BASE64_BINARY), NativeKind::Bytes).unwrap(),
        NativeValue::Bytes(Bytes(b"hello".to_vec()))
    );
    assert_eq!(
        decode_term(Term::string("raw"), NativeKind::Bytes).unwrap(),
        NativeValue::Bytes(Bytes(b"raw".to_vec()))
    );
}

#[test]
fn typed_literals_keep_tag_or_datatype() {
    assert_eq!(
        decode_term(Term::lang_string("Wetter", "de"), NativeKind::TypedLiteral).unwrap(),
        NativeValue::TypedLiteral(TypedLiteral::tagged("Wetter", "de"))
    );
    assert_eq!(
        decode_term(Term::typed("5", xsd::INT), NativeKind::TypedLiteral).unwrap(),
        NativeValue::TypedLiteral(TypedLiteral::typed("5", xsd::INT))
    );
    assert_eq!(
        decode_term(Term::typed("2024-03-01T10:15:30Z", xsd::DATE_TIME), NativeKind::TypedLiteral)
            .unwrap(),
        NativeValue::TypedLiteral(TypedLiteral::typed("2024-03-01T10:15:30Z", xsd::DATE_TIME))
    );
    assert!(decode_term(Term::iri("urn:a"), NativeKind::TypedLiteral).is_err());
}

#[test]
fn string_datatype_is_the_plain_form() {
    let typed = TypedLiteral::typed("x", xsd::STRING);
    assert_eq!(typed, TypedLiteral::plain("x"));
    let literal = encode(&NativeValue::TypedLiteral(typed.clone()), NativeKind::TypedLiteral).unwrap();
    assert_eq!(
        decode(&literal, NativeKind::TypedLiteral).unwrap(),
        NativeValue::TypedLiteral(typed)
    );
}

// --- Legacy aggregate form ---

#[test]
fn lang_concat_marks_tagged_values() {
    let joined = lang_concat(&[
        TypedLiteral::plain("Weather"),
        TypedLiteral::tagged("Wetter", "de"),
    ]);
    assert_eq!(joined, r#""Weather"@|\"Wetter\"@de"#);
}

#[test]
fn lang_split_inverts_lang_concat() {
    let values = vec![
        TypedLiteral::plain("Weather"),
        TypedLiteral::tagged("Wetter", "de"),
        TypedLiteral::tagged("Météo", "fr"),
    ];
    assert_eq!(lang_split(&lang_concat(&values)), values);
    assert!(lang_split("").is_empty());
    assert_eq!(lang_split("bare"), [TypedLiteral::plain("bare")]);
}

#[test]
fn lang_split_keeps_separators_and_backslashes_in_text() {
    let values = vec![
        TypedLiteral::plain("a|b"),
        TypedLiteral::tagged("c", "en"),
        TypedLiteral::plain("ends with \\"),
        TypedLiteral::tagged("x\\|y\\", "de"),
        TypedLiteral::plain(""),
    ];
    let joined = lang_concat(&values);
    assert_eq!(lang_split(&joined), values, "{joined}");
}
