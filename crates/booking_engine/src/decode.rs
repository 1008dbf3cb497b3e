use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use engine_logging::{engine_debug, engine_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPage {
    pub html: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode the report bytes to UTF-8: BOM, then Content-Type charset, then detection.
///
/// Never fails; undecodable bytes are replaced so extraction can still run.
pub fn decode_page(bytes: &[u8], content_type: Option<&str>) -> DecodedPage {
    let encoding = Encoding::for_bom(bytes)
        .map(|(enc, _)| enc)
        .or_else(|| {
            content_type
                .and_then(charset_label)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        engine_warn!(
            "Page contained bytes invalid for {}; replaced them",
            encoding.name()
        );
    }
    engine_debug!("Decoded {} bytes as {}", bytes.len(), encoding.name());

    DecodedPage {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
        had_errors,
    }
}

fn charset_label(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(['"', '\'']).to_string())
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_label_is_case_insensitive_and_unquoted() {
        assert_eq!(
            charset_label("text/html; CharSet=\"windows-1252\""),
            Some("windows-1252".to_string())
        );
        assert_eq!(charset_label("text/html"), None);
    }
}
