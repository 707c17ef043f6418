//! Reference id formatter: `^prefix:value` or `^value`.

use crate::classify::write_id_value;

/// `prefix` is rendered verbatim (callers guarantee it is simple and needs
/// no escaping); `value` goes through the stricter id-bareword rule.
pub fn format_id(prefix: &str, value: &str) -> String {
    let mut out = String::from("^");
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(&write_id_value(value));
    out
}
