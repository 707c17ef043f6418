//! Bytes formatter: `b64"..."` using the standard Base64 alphabet.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

/// Renders `buf` as `b64"<base64 body>"`. Empty input produces `b64""`.
pub fn format_bytes(buf: &[u8]) -> String {
    let mut out = String::with_capacity(buf.len() * 4 / 3 + 8);
    out.push_str("b64\"");
    out.push_str(&BASE64_STANDARD.encode(buf));
    out.push('"');
    out
}
