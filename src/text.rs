//! Text normalization for PDF literal strings.
//!
//! The report only uses the two standard Helvetica fonts with
//! WinAnsiEncoding and never embeds a font, so every string that reaches a
//! content stream is reduced to printable ASCII first. Accented letters keep
//! their base letter ("Crédito" becomes "Credito"); everything else outside
//! 0x20..=0x7E is dropped.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// CR, LF, VT, FF, NEL and the Unicode line and paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Reduces `text` to printable ASCII (0x20 - 0x7E).
///
/// Diacritics are stripped via NFKD decomposition, each run of line breaks
/// becomes a single space and tabs become spaces. Applying this twice gives
/// the same result as applying it once.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_line_break = false;

    for c in text.nfkd() {
        if is_line_break(c) {
            if !in_line_break {
                out.push(' ');
                in_line_break = true;
            }
            continue;
        }

        // dropped characters do not end a run of line breaks
        if c == '\t' {
            out.push(' ');
        } else if !is_combining_mark(c) && (' '..='~').contains(&c) {
            out.push(c);
        } else {
            continue;
        }
        in_line_break = false;
    }

    out
}

/// Sanitizes `text` and escapes the characters reserved inside a PDF literal
/// string: `\`, `(` and `)`.
pub fn escape(text: &str) -> String {
    let clean = sanitize(text);
    let mut out = String::with_capacity(clean.len() + 8);
    for c in clean.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Sanitizes `text` and shortens it to at most `max_len` characters.
///
/// Text that is too long keeps its first `max_len - 3` characters followed by
/// `"..."`. A budget below 3 has no room for the ellipsis, so the text is cut
/// to `max_len` characters instead.
pub fn truncate(text: &str, max_len: usize) -> String {
    let mut clean = sanitize(text);
    if clean.len() <= max_len {
        return clean;
    }
    // sanitized text is ASCII, byte and char indices coincide
    if max_len < 3 {
        clean.truncate(max_len);
        return clean;
    }
    clean.truncate(max_len - 3);
    clean.push_str("...");
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_instead_of_dropping_letters() {
        assert_eq!(sanitize("Crédito São João"), "Credito Sao Joao");
        assert_eq!(sanitize("Ação Poupança"), "Acao Poupanca");
        assert_eq!(sanitize("naïve façade"), "naive facade");
    }

    #[test]
    fn collapses_line_breaks() {
        assert_eq!(sanitize("one\r\ntwo\n\n\nthree\rfour"), "one two three four");
        assert_eq!(sanitize("tab\tseparated"), "tab separated");
    }

    #[test]
    fn unicode_separators_are_line_breaks() {
        assert_eq!(sanitize("a\u{2028}b"), "a b");
        assert_eq!(sanitize("a\u{2029}b\u{85}c"), "a b c");
        assert_eq!(sanitize("page\u{0C}feed\u{0B}tab"), "page feed tab");
    }

    #[test]
    fn dropped_characters_keep_a_break_run_together() {
        assert_eq!(sanitize("a\r\n\u{200B}\r\nb"), "a b");
        assert_eq!(sanitize("a\n\u{301}\nb"), "a b");
        assert_eq!(sanitize("a\n\u{20AC}\n\u{2028}b"), "a b");
    }

    #[test]
    fn drops_non_ascii_symbols() {
        assert_eq!(sanitize("€ 10 \u{1F600} ok"), " 10  ok");
        assert_eq!(sanitize("\u{0}\u{7f}bell\u{7}"), "bell");
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape(r"a (b) c\d"), r"a \(b\) c\\d");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate("Supermarket", 20), "Supermarket");
        assert_eq!(truncate("Supermarket", 11), "Supermarket");
        assert_eq!(truncate("Supermarket", 8), "Super...");
        assert_eq!(truncate("Supermarket", 3), "...");
    }

    #[test]
    fn tiny_budgets_do_not_panic() {
        assert_eq!(truncate("Supermarket", 2), "Su");
        assert_eq!(truncate("Supermarket", 0), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn truncation_counts_sanitized_length() {
        // 12 chars once the accents are gone
        assert_eq!(truncate("Alimentação!", 12), "Alimentacao!");
    }
}
