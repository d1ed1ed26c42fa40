//! Escaping of spec text for inline `<script>` embedding.
//!
//! The rendered page hands the spec to the viewer as a JavaScript string
//! literal. [`escape_js_string`] rewrites the characters that would end the
//! literal or change its meaning, one code point at a time, so that
//! already-escaped output is never escaped a second time.

/// Escape `raw` so it can be spliced verbatim between `"` or `` ` `` quotes
/// inside an inline script.
///
/// | input                          | output          |
/// |--------------------------------|-----------------|
/// | `` ` ``, `"`, `\`              | backslash + char|
/// | newline, CR, tab, FF, BS, VT   | `\n` `\r` `\t` `\f` `\b` `\v` |
/// | NUL                            | `\u0000`        |
/// | other C0 controls, DEL         | `\u00XX` (lowercase hex) |
/// | anything else                  | unchanged       |
///
/// Non-ASCII characters are copied through as-is.
pub fn escape_js_string(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw.len() + raw.len() / 10);
    for ch in raw.chars() {
        match ch {
            '`' => out.push_str("\\`"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0c}' => out.push_str("\\f"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\0' => out.push_str("\\u0000"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => push_unicode_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out
}

fn push_unicode_escape(out: &mut String, c: char) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let cp = c as u32;
    out.push_str("\\u");
    for shift in [12, 8, 4, 0] {
        out.push(HEX[((cp >> shift) & 0xf) as usize] as char);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reverse of [`escape_js_string`], as a JS engine would read the literal.
    pub(crate) fn unescape(escaped: &str) -> String {
        let mut out = String::with_capacity(escaped.len());
        let mut chars = escaped.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('f') => out.push('\u{0c}'),
                Some('b') => out.push('\u{08}'),
                Some('v') => out.push('\u{0b}'),
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let cp = u32::from_str_radix(&hex, 16).unwrap();
                    out.push(char::from_u32(cp).unwrap());
                }
                Some(other) => out.push(other),
                None => panic!("dangling backslash in {escaped:?}"),
            }
        }
        out
    }

    /// True when every quote, backtick and backslash in `s` is escaped.
    fn specials_are_escaped(s: &str) -> bool {
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if chars.next().is_none() {
                        return false;
                    }
                }
                '"' | '`' => return false,
                _ => {}
            }
        }
        true
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_js_string(""), "");
    }

    #[test]
    fn test_plain_ascii_unchanged() {
        assert_eq!(escape_js_string("openapi 3.1.0"), "openapi 3.1.0");
    }

    #[test]
    fn test_quotes_backtick_and_newline() {
        let raw = "hello \"world\"`\n";
        assert_eq!(escape_js_string(raw), "hello \\\"world\\\"\\`\\n");
    }

    #[test]
    fn test_backslash_not_double_escaped() {
        assert_eq!(escape_js_string("a\\nb"), "a\\\\nb");
        assert_eq!(escape_js_string("\\\""), "\\\\\\\"");
    }

    #[test]
    fn test_named_control_escapes() {
        assert_eq!(escape_js_string("\r\t\u{0c}\u{08}\u{0b}"), "\\r\\t\\f\\b\\v");
        assert_eq!(escape_js_string("\0"), "\\u0000");
    }

    #[test]
    fn test_other_controls_use_lowercase_hex() {
        assert_eq!(escape_js_string("\u{01}"), "\\u0001");
        assert_eq!(escape_js_string("\u{1f}"), "\\u001f");
        assert_eq!(escape_js_string("\u{1b}[0m"), "\\u001b[0m");
        assert_eq!(escape_js_string("\u{7f}"), "\\u007f");
    }

    #[test]
    fn test_unicode_passes_through() {
        let raw = "título — 日本語 🚀";
        assert_eq!(escape_js_string(raw), raw);
        // C1 controls are above the escaped range.
        assert_eq!(escape_js_string("\u{85}"), "\u{85}");
    }

    #[test]
    fn test_json_document_round_trips() {
        let raw = r#"{"info":{"title":"Pet \"Store\"","description":"line1\nline2"}}"#;
        let escaped = escape_js_string(raw);
        assert!(specials_are_escaped(&escaped));
        assert_eq!(unescape(&escaped), raw);
    }

    proptest! {
        #[test]
        fn prop_unescape_reverses_escape(raw in any::<String>()) {
            prop_assert_eq!(unescape(&escape_js_string(&raw)), raw);
        }

        #[test]
        fn prop_no_unescaped_specials(raw in "[\\x00-\\x7f`\"\\\\a-z\u{e9}\u{1f600}]{0,64}") {
            let escaped = escape_js_string(&raw);
            prop_assert!(specials_are_escaped(&escaped));
        }

        #[test]
        fn prop_output_has_no_raw_controls(raw in any::<String>()) {
            let escaped = escape_js_string(&raw);
            prop_assert!(!escaped.chars().any(|c| (c as u32) < 0x20 || c == '\u{7f}'), "escaped output contains a control character");
        }
    }
}
