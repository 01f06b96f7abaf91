use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::ParseError;

/// Detect the character encoding of raw XML bytes.
///
/// Looks at byte order marks and the encoding named in the XML
/// declaration; falls back to UTF-8 when nothing is detected.
pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Result<&'static Encoding, ParseError> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).unwrap_or_default();
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        &charsets[0]
    };
    Encoding::for_label(label.as_bytes()).ok_or_else(|| ParseError::UnknownEncoding {
        label: label.to_string(),
    })
}
