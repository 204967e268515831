//! A test-only reader for single-line GraphQL string literals, used to check
//! that emitted source text resolves back to the value it was emitted from.

/// Error returned when a quoted GraphQL string cannot be read back.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StringLiteralReadError {
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    #[error("Unescaped `\"` inside string")]
    UnescapedQuote,

    #[error("Unescaped line terminator inside string")]
    UnescapedLineTerminator,
}

/// Resolve the escapes of a double-quoted GraphQL string literal.
pub fn read_graphql_string_literal(
    raw: &str,
) -> Result<String, StringLiteralReadError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(StringLiteralReadError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(StringLiteralReadError::UnescapedQuote),
            '\n' | '\r' =>
                return Err(StringLiteralReadError::UnescapedLineTerminator),
            '\\' => match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('/') => result.push('/'),
                Some('b') => result.push('\u{0008}'),
                Some('f') => result.push('\u{000C}'),
                Some('u') => result.push(read_unicode_escape(&mut chars)?),
                Some(other) => {
                    return Err(StringLiteralReadError::InvalidEscapeSequence(
                        format!("\\{other}"),
                    ));
                },
                None => {
                    return Err(StringLiteralReadError::InvalidEscapeSequence(
                        "\\".to_string(),
                    ));
                },
            },
            _ => result.push(c),
        }
    }

    Ok(result)
}

/// Read a Unicode escape after seeing `\u`: either `\u{...}` or `\uXXXX`.
fn read_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, StringLiteralReadError> {
    let hex: String = if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => {
                    return Err(StringLiteralReadError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        hex
    } else {
        let hex: String = chars.by_ref().take(4).collect();
        if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StringLiteralReadError::InvalidUnicodeEscape(
                format!("\\u{hex}"),
            ));
        }
        hex
    };

    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            StringLiteralReadError::InvalidUnicodeEscape(format!("\\u{hex}"))
        })
}
