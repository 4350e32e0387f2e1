//! Conversion between native scalar values and wire literal forms.
//!
//! [`encode`] and [`decode`] dispatch on a declared [`NativeKind`]. The wire
//! side is a [`LiteralValue`], which can be built from a parsed graph
//! [`Term`] and rendered as a JSON-LD value.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use num_bigint::BigInt;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::graph::Term;
use crate::model::iri::is_absolute;
use crate::model::ontology::xsd;

/// Numeric XSD datatypes the codec distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Byte,
    Short,
    Int,
    Long,
    Integer,
    Float,
    Double,
    Decimal,
}

impl NumericKind {
    pub fn datatype(&self) -> &'static str {
        match self {
            NumericKind::Byte => xsd::BYTE,
            NumericKind::Short => xsd::SHORT,
            NumericKind::Int => xsd::INT,
            NumericKind::Long => xsd::LONG,
            NumericKind::Integer => xsd::INTEGER,
            NumericKind::Float => xsd::FLOAT,
            NumericKind::Double => xsd::DOUBLE,
            NumericKind::Decimal => xsd::DECIMAL,
        }
    }

    pub fn from_datatype(datatype: &str) -> Option<Self> {
        [
            NumericKind::Byte,
            NumericKind::Short,
            NumericKind::Int,
            NumericKind::Long,
            NumericKind::Integer,
            NumericKind::Float,
            NumericKind::Double,
            NumericKind::Decimal,
        ]
        .into_iter()
        .find(|kind| kind.datatype() == datatype)
    }
}

/// A literal as it appears on the wire.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Plain(String),
    LanguageTagged { text: String, language: String },
    Typed { text: String, datatype: String },
    Numeric { kind: NumericKind, lexical: String },
    Uri(String),
    Binary(Vec<u8>),
    Duration(String),
    Calendar(DateTime<FixedOffset>),
}

impl LiteralValue {
    /// Classify a graph term.
    ///
    /// Node terms become [`LiteralValue::Uri`]. Literals whose lexical form
    /// does not parse for their datatype stay [`LiteralValue::Typed`], as do
    /// `xsd:dateTime` and `xsd:dateTimeStamp` values.
    pub fn from_term(term: &Term) -> Self {
        let Some((lexical, datatype, language)) = term.as_literal() else {
            return LiteralValue::Uri(term.text());
        };
        if let Some(language) = language {
            return LiteralValue::LanguageTagged {
                text: lexical.to_string(),
                language: language.to_string(),
            };
        }
        if let Some(kind) = NumericKind::from_datatype(datatype) {
            return LiteralValue::Numeric {
                kind,
                lexical: lexical.to_string(),
            };
        }
        let typed = || LiteralValue::Typed {
            text: lexical.to_string(),
            datatype: datatype.to_string(),
        };
        match datatype {
            xsd::STRING => LiteralValue::Plain(lexical.to_string()),
            xsd::BASE64_BINARY => BASE64
                .decode(lexical.trim())
                .map(LiteralValue::Binary)
                .unwrap_or_else(|_| typed()),
            xsd::DURATION => LiteralValue::Duration(lexical.to_string()),
            // Timestamps keep their wire text and datatype; `decode` parses
            // them when a calendar is declared.
            _ => typed(),
        }
    }

    /// The lexical form of the value.
    pub fn lexical(&self) -> Cow<'_, str> {
        match self {
            LiteralValue::Plain(text)
            | LiteralValue::LanguageTagged { text, .. }
            | LiteralValue::Typed { text, .. }
            | LiteralValue::Numeric { lexical: text, .. }
            | LiteralValue::Uri(text)
            | LiteralValue::Duration(text) => Cow::Borrowed(text),
            LiteralValue::Binary(bytes) => Cow::Owned(BASE64.encode(bytes)),
            LiteralValue::Calendar(dt) => Cow::Owned(format_calendar(dt)),
        }
    }

    /// Datatype IRI, `None` for node references and language-tagged text.
    pub fn datatype(&self) -> Option<&str> {
        match self {
            LiteralValue::Plain(_) => Some(xsd::STRING),
            LiteralValue::Typed { datatype, .. } => Some(datatype),
            LiteralValue::Numeric { kind, .. } => Some(kind.datatype()),
            LiteralValue::Binary(_) => Some(xsd::BASE64_BINARY),
            LiteralValue::Duration(_) => Some(xsd::DURATION),
            LiteralValue::Calendar(_) => Some(xsd::DATE_TIME_STAMP),
            LiteralValue::LanguageTagged { .. } | LiteralValue::Uri(_) => None,
        }
    }

    /// JSON-LD rendering. Datatype IRIs are written absolute so no prefix
    /// has to be declared for them.
    pub fn to_json(&self) -> Value {
        match self {
            LiteralValue::Plain(text) => Value::String(text.clone()),
            LiteralValue::LanguageTagged { text, language } => {
                json!({ "@value": text, "@language": language })
            }
            LiteralValue::Uri(uri) => json!({ "@id": uri }),
            other => json!({
                "@value": other.lexical(),
                "@type": other.datatype().unwrap_or(xsd::STRING),
            }),
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            LiteralValue::Plain(_) => "plain literal",
            LiteralValue::LanguageTagged { .. } => "language-tagged literal",
            LiteralValue::Typed { .. } => "typed literal",
            LiteralValue::Numeric { .. } => "numeric literal",
            LiteralValue::Uri(_) => "resource reference",
            LiteralValue::Binary(_) => "binary literal",
            LiteralValue::Duration(_) => "duration literal",
            LiteralValue::Calendar(_) => "calendar literal",
        }
    }
}

/// Native scalar types a property can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Uri,
    String,
    Calendar,
    Duration,
    BigInteger,
    Decimal,
    Bytes,
    TypedLiteral,
    Resource,
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeKind::Byte => "byte",
            NativeKind::Short => "short",
            NativeKind::Int => "int",
            NativeKind::Long => "long",
            NativeKind::Float => "float",
            NativeKind::Double => "double",
            NativeKind::Bool => "boolean",
            NativeKind::Uri => "URI",
            NativeKind::String => "string",
            NativeKind::Calendar => "calendar",
            NativeKind::Duration => "duration",
            NativeKind::BigInteger => "big integer",
            NativeKind::Decimal => "decimal",
            NativeKind::Bytes => "byte sequence",
            NativeKind::TypedLiteral => "typed literal",
            NativeKind::Resource => "resource",
        };
        f.write_str(name)
    }
}

/// An absolute URI value.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Uri(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri::new(s)
    }
}

/// An `xsd:duration` lexical value, e.g. `P1DT2H` or `-PT0.5S`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct XsdDuration(String);

impl XsdDuration {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for XsdDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if is_valid_duration(s) {
            Ok(XsdDuration(s.to_string()))
        } else {
            Err(Error::InvalidLiteral {
                kind: NativeKind::Duration.to_string(),
                lexical: s.to_string(),
                reason: "not an ISO-8601 duration".into(),
            })
        }
    }
}

impl fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_duration(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let Some(body) = body.strip_prefix('P') else {
        return false;
    };
    let (date, time) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };
    let date_ok = components_ok(date, &['Y', 'M', 'D'], false);
    let time_ok = time.is_none_or(|t| !t.is_empty() && components_ok(t, &['H', 'M', 'S'], true));
    date_ok && time_ok && !(date.is_empty() && time.is_none())
}

/// Checks `<number><designator>` runs in designator order.
fn components_ok(part: &str, designators: &[char], fraction_on_last: bool) -> bool {
    let mut rest = part;
    let mut next = 0;
    while !rest.is_empty() {
        let Some(pos) = rest.find(|c: char| c.is_ascii_alphabetic()) else {
            return false;
        };
        let (number, tail) = rest.split_at(pos);
        let Some(designator) = tail.chars().next() else {
            return false;
        };
        let Some(offset) = designators[next..].iter().position(|d| *d == designator) else {
            return false;
        };
        let index = next + offset;
        let allow_fraction = fraction_on_last && index == designators.len() - 1;
        let valid_number = match number.split_once('.') {
            Some((int, frac)) => {
                allow_fraction
                    && !int.is_empty()
                    && !frac.is_empty()
                    && int.bytes().all(|b| b.is_ascii_digit())
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()),
        };
        if !valid_number {
            return false;
        }
        next = index + 1;
        rest = &tail[designator.len_utf8()..];
    }
    true
}

/// Byte sequence, written as `xsd:base64Binary`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

/// Text with an optional language tag or datatype.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypedLiteral {
    pub value: String,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl TypedLiteral {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Text with a datatype. `xsd:string` is the plain form and is stored as
    /// no datatype at all.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let datatype: String = datatype.into();
        Self {
            value: value.into(),
            language: None,
            datatype: (datatype != xsd::STRING).then_some(datatype),
        }
    }
}

/// Generic resource reference: the identifier of some node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RdfResource(pub String);

/// A native value produced by [`decode`] or accepted by [`encode`].
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Uri(Uri),
    String(String),
    Calendar(DateTime<FixedOffset>),
    Duration(XsdDuration),
    BigInteger(BigInt),
    Decimal(BigDecimal),
    Bytes(Bytes),
    TypedLiteral(TypedLiteral),
    Resource(RdfResource),
}

impl NativeValue {
    pub fn kind(&self) -> NativeKind {
        match self {
            NativeValue::Byte(_) => NativeKind::Byte,
            NativeValue::Short(_) => NativeKind::Short,
            NativeValue::Int(_) => NativeKind::Int,
            NativeValue::Long(_) => NativeKind::Long,
            NativeValue::Float(_) => NativeKind::Float,
            NativeValue::Double(_) => NativeKind::Double,
            NativeValue::Bool(_) => NativeKind::Bool,
            NativeValue::Uri(_) => NativeKind::Uri,
            NativeValue::String(_) => NativeKind::String,
            NativeValue::Calendar(_) => NativeKind::Calendar,
            NativeValue::Duration(_) => NativeKind::Duration,
            NativeValue::BigInteger(_) => NativeKind::BigInteger,
            NativeValue::Decimal(_) => NativeKind::Decimal,
            NativeValue::Bytes(_) => NativeKind::Bytes,
            NativeValue::TypedLiteral(_) => NativeKind::TypedLiteral,
            NativeValue::Resource(_) => NativeKind::Resource,
        }
    }
}

/// Encode `value` as a wire literal of the declared kind.
pub fn encode(value: &NativeValue, declared: NativeKind) -> Result<LiteralValue> {
    if value.kind() != declared {
        return Err(Error::UnsupportedLiteralType {
            declared: declared.to_string(),
            found: value.kind().to_string(),
        });
    }
    let numeric = |kind, lexical: String| LiteralValue::Numeric { kind, lexical };
    Ok(match value {
        NativeValue::Byte(v) => numeric(NumericKind::Byte, v.to_string()),
        NativeValue::Short(v) => numeric(NumericKind::Short, v.to_string()),
        NativeValue::Int(v) => numeric(NumericKind::Int, v.to_string()),
        NativeValue::Long(v) => numeric(NumericKind::Long, v.to_string()),
        NativeValue::BigInteger(v) => numeric(NumericKind::Integer, v.to_string()),
        NativeValue::Decimal(v) => numeric(NumericKind::Decimal, v.to_string()),
        NativeValue::Float(v) => numeric(NumericKind::Float, xsd_float(f64::from(*v), v.to_string())),
        NativeValue::Double(v) => numeric(NumericKind::Double, xsd_float(*v, v.to_string())),
        NativeValue::Bool(v) => LiteralValue::Typed {
            text: v.to_string(),
            datatype: xsd::BOOLEAN.to_string(),
        },
        NativeValue::Uri(uri) => LiteralValue::Uri(uri.as_str().to_string()),
        NativeValue::Resource(resource) => LiteralValue::Uri(resource.0.clone()),
        NativeValue::String(s) => LiteralValue::Plain(s.clone()),
        NativeValue::Calendar(dt) => LiteralValue::Calendar(*dt),
        NativeValue::Duration(d) => LiteralValue::Duration(d.as_str().to_string()),
        NativeValue::Bytes(bytes) => LiteralValue::Binary(bytes.0.clone()),
        NativeValue::TypedLiteral(tl) => match (&tl.language, &tl.datatype) {
            (Some(language), _) => LiteralValue::LanguageTagged {
                text: tl.value.clone(),
                language: language.clone(),
            },
            (None, Some(datatype)) if datatype != xsd::STRING => LiteralValue::Typed {
                text: tl.value.clone(),
                datatype: datatype.clone(),
            },
            (None, _) => LiteralValue::Plain(tl.value.clone()),
        },
    })
}

fn xsd_float(v: f64, display: String) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v > 0.0 { "INF".into() } else { "-INF".into() }
    } else {
        display
    }
}

/// Decode a wire literal into a native value of the declared kind.
pub fn decode(literal: &LiteralValue, declared: NativeKind) -> Result<NativeValue> {
    let unsupported = || Error::UnsupportedLiteralType {
        declared: declared.to_string(),
        found: literal.shape().to_string(),
    };
    let lexical = literal.lexical();
    let text = lexical.trim();
    let textual = matches!(
        literal,
        LiteralValue::Plain(_) | LiteralValue::Typed { .. } | LiteralValue::Numeric { .. }
    );

    match declared {
        NativeKind::Byte | NativeKind::Short | NativeKind::Int | NativeKind::Long => {
            if !textual {
                return Err(unsupported());
            }
            let bad = |e: std::num::ParseIntError| invalid(declared, text, e);
            Ok(match declared {
                NativeKind::Byte => NativeValue::Byte(text.parse().map_err(bad)?),
                NativeKind::Short => NativeValue::Short(text.parse().map_err(bad)?),
                NativeKind::Int => NativeValue::Int(text.parse().map_err(bad)?),
                _ => NativeValue::Long(text.parse().map_err(bad)?),
            })
        }
        NativeKind::Float | NativeKind::Double => {
            if !textual {
                return Err(unsupported());
            }
            let v = parse_xsd_float(text).ok_or_else(|| invalid(declared, text, "not a number"))?;
            Ok(if declared == NativeKind::Float {
                NativeValue::Float(v as f32)
            } else {
                NativeValue::Double(v)
            })
        }
        NativeKind::BigInteger => {
            if !textual {
                return Err(unsupported());
            }
            BigInt::from_str(text.strip_prefix('+').unwrap_or(text))
                .map(NativeValue::BigInteger)
                .map_err(|e| invalid(declared, text, e))
        }
        NativeKind::Decimal => {
            if !textual {
                return Err(unsupported());
            }
            BigDecimal::from_str(text)
                .map(NativeValue::Decimal)
                .map_err(|e| invalid(declared, text, e))
        }
        NativeKind::Bool => {
            if !textual {
                return Err(unsupported());
            }
            match text {
                "true" | "1" => Ok(NativeValue::Bool(true)),
                "false" | "0" => Ok(NativeValue::Bool(false)),
                _ => Err(invalid(declared, text, "expected true, false, 1 or 0")),
            }
        }
        NativeKind::Uri => match literal {
            LiteralValue::Uri(uri) => Ok(NativeValue::Uri(Uri::new(uri.clone()))),
            LiteralValue::Plain(_) | LiteralValue::Typed { .. } if is_absolute(text) => {
                Ok(NativeValue::Uri(Uri::new(text)))
            }
            LiteralValue::Plain(_) | LiteralValue::Typed { .. } => {
                Err(invalid(declared, text, "not an absolute URI"))
            }
            _ => Err(unsupported()),
        },
        NativeKind::Resource => match literal {
            LiteralValue::LanguageTagged { .. } | LiteralValue::Binary(_) => Err(unsupported()),
            _ => Ok(NativeValue::Resource(RdfResource(lexical.into_owned()))),
        },
        NativeKind::String => match literal {
            LiteralValue::Binary(_) => Err(unsupported()),
            _ => Ok(NativeValue::String(lexical.into_owned())),
        },
        NativeKind::Calendar => match literal {
            LiteralValue::Calendar(dt) => Ok(NativeValue::Calendar(*dt)),
            LiteralValue::Plain(_) | LiteralValue::Typed { .. } => {
                parse_calendar(text).map(NativeValue::Calendar)
            }
            _ => Err(unsupported()),
        },
        NativeKind::Duration => match literal {
            LiteralValue::Duration(_) | LiteralValue::Plain(_) | LiteralValue::Typed { .. } => {
                text.parse().map(NativeValue::Duration)
            }
            _ => Err(unsupported()),
        },
        NativeKind::Bytes => match literal {
            LiteralValue::Binary(bytes) => Ok(NativeValue::Bytes(Bytes(bytes.clone()))),
            // Untyped text carries its raw UTF-8 bytes.
            LiteralValue::Plain(s) => Ok(NativeValue::Bytes(Bytes(s.as_bytes().to_vec()))),
            _ => Err(unsupported()),
        },
        NativeKind::TypedLiteral => {
            let tl = match literal {
                LiteralValue::Plain(text) => TypedLiteral::plain(text.clone()),
                LiteralValue::LanguageTagged { text, language } => {
                    TypedLiteral::tagged(text.clone(), language.clone())
                }
                LiteralValue::Uri(_) => return Err(unsupported()),
                other => TypedLiteral::typed(
                    other.lexical().into_owned(),
                    other.datatype().unwrap_or(xsd::STRING),
                ),
            };
            Ok(NativeValue::TypedLiteral(tl))
        }
    }
}

fn invalid(kind: NativeKind, lexical: &str, reason: impl fmt::Display) -> Error {
    Error::InvalidLiteral {
        kind: kind.to_string(),
        lexical: lexical.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_xsd_float(text: &str) -> Option<f64> {
    match text {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // Rust accepts "inf"/"infinity" spellings that XSD does not.
        _ if text.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') => None,
        _ => text.parse().ok(),
    }
}

/// Parse an ISO-8601 timestamp.
///
/// A trailing zone-name suffix such as `[Europe/Berlin]` is stripped; a
/// timestamp without offset is read as UTC.
pub fn parse_calendar(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    let text = match text.find('[') {
        Some(pos) if text.ends_with(']') => &text[..pos],
        _ => text,
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|e| invalid(NativeKind::Calendar, text, e))
}

/// Canonical offset form, e.g. `2024-03-01T10:15:30.250+01:00`; UTC is `Z`.
pub fn format_calendar(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Join values into the legacy aggregate form.
///
/// An untagged value is written `"text"@`, a tagged one `\"text\"@lang`;
/// elements are separated by `|`. A `\` or `|` inside the text is escaped
/// with a backslash.
pub fn lang_concat(values: &[TypedLiteral]) -> String {
    values
        .iter()
        .map(|v| {
            let text = escape_aggregate(&v.value);
            match &v.language {
                Some(lang) => format!("\\\"{text}\\\"@{lang}"),
                None => format!("\"{text}\"@"),
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Split the legacy aggregate form back into (text, language) values.
///
/// Elements in neither quoted form are taken as untagged text.
pub fn lang_split(aggregate: &str) -> Vec<TypedLiteral> {
    if aggregate.is_empty() {
        return Vec::new();
    }
    let mut elements = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in aggregate.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '|' {
            elements.push(&aggregate[start..i]);
            start = i + 1;
        }
    }
    elements.push(&aggregate[start..]);
    elements.into_iter().map(split_element).collect()
}

fn split_element(element: &str) -> TypedLiteral {
    // The closing quote is the last one: a language tag holds no quotes.
    let parts = if let Some(rest) = element.strip_prefix("\\\"") {
        rest.rfind("\\\"@").map(|at| (&rest[..at], &rest[at + 3..]))
    } else if let Some(rest) = element.strip_prefix('"') {
        rest.rfind("\"@").map(|at| (&rest[..at], &rest[at + 2..]))
    } else {
        None
    };
    match parts {
        Some((text, "")) => TypedLiteral::plain(unescape_aggregate(text)),
        Some((text, language)) => TypedLiteral::tagged(unescape_aggregate(text), language),
        None => TypedLiteral::plain(unescape_aggregate(element)),
    }
}

fn escape_aggregate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn unescape_aggregate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.extend(chars.next());
        } else {
            out.push(c);
        }
    }
    out
}
