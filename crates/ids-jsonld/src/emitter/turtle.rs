use std::collections::HashMap;
use std::io::{self, Write};

use super::{escape_literal, TriplesEmitter};

/// Turtle format emitter with prefix support.
///
/// Triples are written one per line; subjects are not grouped.
pub struct TurtleEmitter<W: Write> {
    writer: W,
    count: u64,
    prefixes: HashMap<String, String>,
    prefix_written: bool,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            prefixes: HashMap::new(),
            prefix_written: false,
        }
    }

    /// Write all registered prefixes (called before first triple).
    fn write_prefixes(&mut self) -> io::Result<()> {
        if self.prefix_written {
            return Ok(());
        }
        self.prefix_written = true;
        let mut prefixes: Vec<_> = self.prefixes.iter().collect();
        prefixes.sort();
        for (prefix, iri) in prefixes {
            writeln!(self.writer, "@prefix {prefix}: <{iri}> .")?;
        }
        if !self.prefixes.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Compact an IRI with the longest registered namespace, or write it in full.
    fn compact_iri(&self, iri: &str) -> String {
        if iri.starts_with("_:") {
            return iri.to_string();
        }
        let best = self
            .prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len());
        if let Some((prefix, ns)) = best {
            let local = &iri[ns.len()..];
            // PN_LOCAL subset: letters, digits, '_' and inner '-'
            if !local.is_empty()
                && local.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
                && !local.starts_with('-')
                && !local.ends_with('-')
            {
                return format!("{prefix}:{local}");
            }
        }
        format!("<{iri}>")
    }

    fn line(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.write_prefixes()?;
        let s = self.compact_iri(subject);
        let p = self.compact_iri(predicate);
        writeln!(self.writer, "{s} {p} {object} .")?;
        self.count += 1;
        Ok(())
    }
}

impl<W: Write> TriplesEmitter for TurtleEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        let o = self.compact_iri(object);
        self.line(subject, predicate, &o)
    }

    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()> {
        let o = format!("\"{}\"", escape_literal(value));
        self.line(subject, predicate, &o)
    }

    fn emit_lang_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: &str,
    ) -> io::Result<()> {
        let o = format!("\"{}\"@{language}", escape_literal(value));
        self.line(subject, predicate, &o)
    }

    fn emit_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> io::Result<()> {
        let dt = self.compact_iri(datatype);
        let o = format!("\"{}\"^^{dt}", escape_literal(value));
        self.line(subject, predicate, &o)
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) {
        self.prefixes.insert(prefix.to_string(), iri.to_string());
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
