//! IRI minting and inspection helpers.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that need percent-encoding in IRI path segments.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987.
const IRI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Generates identifiers for instances that were built without an explicit `@id`.
pub struct IriMinter {
    base_uri: String,
}

impl IriMinter {
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Escape a string for use in an IRI path segment.
    fn escape(value: &str) -> String {
        utf8_percent_encode(value, IRI_ENCODE_SET).to_string()
    }

    /// IRI for an instance of `type_name`, e.g. `<base>/brokerDataRequest/<key>`.
    ///
    /// The type segment is the decapitalized class name, matching the
    /// identifiers the model builders hand out.
    pub fn instance_iri(&self, type_name: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_uri,
            Self::escape(&decapitalize(type_name)),
            Self::escape(key)
        )
    }
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if the IRI is absolute (has an RFC 3986 scheme).
///
/// Compact IRIs such as `ids:Resource` also satisfy this check; use
/// [`split_compact`] to tell them apart.
pub fn is_absolute(iri: &str) -> bool {
    match iri.find(':') {
        Some(colon) => {
            let scheme = &iri[..colon];
            !scheme.is_empty()
                && scheme.as_bytes()[0].is_ascii_alphabetic()
                && scheme
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-' || b == b'.')
        }
        None => false,
    }
}

/// Split a compact IRI `prefix:local` into its parts.
///
/// Returns `None` for strings without a colon, for blank node labels and for
/// absolute IRIs whose suffix starts with `//`.
pub fn split_compact(value: &str) -> Option<(&str, &str)> {
    let (prefix, local) = value.split_once(':')?;
    if prefix.is_empty() || prefix == "_" || prefix.contains('/') || local.starts_with("//") {
        return None;
    }
    Some((prefix, local))
}

/// Local name of an IRI: the segment after the last `#`, `/` or `:`.
pub fn local_name(iri: &str) -> &str {
    let cut = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'));
    match cut {
        Some(pos) => &iri[pos + 1..],
        None => iri,
    }
}
