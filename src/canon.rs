//! Container encoders, tabular detector, and the canonical writer options.

use crate::bytes::format_bytes;
use crate::classify::write_string;
use crate::id::format_id;
use crate::number::{format_float, format_int};
use crate::time::format_time;
use crate::value::{ObjectMap, Value};
use std::collections::BTreeSet;

/// Null glyph choice (`auto_tabular` rows fill absent cells with this too).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullStyle {
    Underscore,
    Symbol,
}

impl NullStyle {
    fn glyph(self) -> &'static str {
        match self {
            NullStyle::Underscore => "_",
            NullStyle::Symbol => "\u{2205}",
        }
    }
}

/// Options recognized by the canonical writer. See the presets below for
/// the four named configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonOptions {
    pub auto_tabular: bool,
    pub min_rows: usize,
    pub max_cols: usize,
    pub allow_missing: bool,
    pub null_style: NullStyle,
}

impl Default for CanonOptions {
    fn default() -> Self {
        CanonOptions {
            auto_tabular: true,
            min_rows: 3,
            max_cols: 64,
            allow_missing: true,
            null_style: NullStyle::Underscore,
        }
    }
}

impl CanonOptions {
    /// Identical to `default`.
    pub fn llm() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        CanonOptions {
            null_style: NullStyle::Symbol,
            ..Self::default()
        }
    }

    pub fn no_tabular() -> Self {
        CanonOptions {
            auto_tabular: false,
            ..Self::default()
        }
    }
}

impl Value {
    /// Canonical form under default options.
    pub fn canonicalize(&self) -> String {
        self.canonicalize_with_options(&CanonOptions::default())
    }

    /// Canonical form with tabular compaction disabled.
    pub fn canonicalize_no_tabular(&self) -> String {
        self.canonicalize_with_options(&CanonOptions::no_tabular())
    }

    pub fn canonicalize_with_options(&self, opts: &CanonOptions) -> String {
        write_value(self, opts)
    }
}

fn write_value(v: &Value, opts: &CanonOptions) -> String {
    match v {
        Value::Null => opts.null_style.glyph().to_string(),
        Value::Bool(true) => "t".to_string(),
        Value::Bool(false) => "f".to_string(),
        Value::Int(n) => format_int(*n),
        Value::Float(x) => format_float(*x),
        Value::Str(s) => write_string(s),
        Value::Bytes(b) => format_bytes(b),
        Value::Time(ms) => format_time(*ms),
        Value::Id { prefix, value } => format_id(prefix, value),
        Value::List(items) => write_list(items, opts),
        Value::Map(entries) => write_map(entries, opts),
        Value::Struct { name, fields } => format!("{}{}", name, write_map(fields, opts)),
        Value::Sum { tag, value } => match value {
            Some(inner) => format!("{}({})", tag, write_value(inner, opts)),
            None => format!("{}()", tag),
        },
    }
}

fn write_map(entries: &ObjectMap, opts: &CanonOptions) -> String {
    let mut sorted: Vec<(&String, &Value)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let body = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", write_string(k), write_value(v, opts)))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{{{}}}", body)
}

fn write_list(items: &[Value], opts: &CanonOptions) -> String {
    if opts.auto_tabular {
        if let Some(columns) = tabular_columns(items, opts) {
            return write_tabular(items, &columns, opts);
        }
    }
    let body = items
        .iter()
        .map(|v| write_value(v, opts))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", body)
}

fn entry_fields(v: &Value) -> Option<&ObjectMap> {
    match v {
        Value::Map(entries) => Some(entries),
        Value::Struct { fields, .. } => Some(fields),
        _ => None,
    }
}

/// Returns the sorted column set when `items` is tabular-eligible, `None`
/// otherwise.
fn tabular_columns(items: &[Value], opts: &CanonOptions) -> Option<Vec<String>> {
    if items.len() < opts.min_rows {
        return None;
    }

    let rows: Vec<&ObjectMap> = items.iter().map(entry_fields).collect::<Option<_>>()?;

    let union: BTreeSet<&str> = rows
        .iter()
        .flat_map(|fields| fields.keys().map(String::as_str))
        .collect();
    if union.is_empty() || union.len() > opts.max_cols {
        return None;
    }

    let common_count = union
        .iter()
        .filter(|col| rows.iter().all(|fields| fields.contains_key(**col)))
        .count();
    if common_count * 2 < union.len() {
        return None;
    }
    if !opts.allow_missing && common_count != union.len() {
        return None;
    }

    Some(union.into_iter().map(str::to_string).collect())
}

fn write_tabular(items: &[Value], columns: &[String], opts: &CanonOptions) -> String {
    let mut out = String::new();
    let header_cols = columns
        .iter()
        .map(|c| write_string(c))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(
        "@tab _ rows={} cols={} [{}]\n",
        items.len(),
        columns.len(),
        header_cols
    ));

    for item in items {
        let fields = entry_fields(item).expect("tabular_columns already checked this");
        let cells = columns
            .iter()
            .map(|col| {
                fields
                    .get(col.as_str())
                    .map(|v| write_value(v, opts))
                    .unwrap_or_else(|| opts.null_style.glyph().to_string())
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push('|');
        out.push_str(&cells);
        out.push_str("|\n");
    }

    out.push_str("@end");
    out
}
