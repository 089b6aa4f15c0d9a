//! Line codec for the flat-file stores
//!
//! Records are single lines of `|`-separated fields. Inside a field a
//! backslash escapes the next character: `\\`, `\|`, `\n` and `\r` are the
//! only legal escapes, so notes may contain any character without breaking
//! the layout.

use thiserror::Error;

/// Field separator
pub const DELIMITER: char = '|';

/// Why a stored line could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),

    #[error("line ends inside an escape sequence")]
    DanglingEscape,

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Escape one field
pub fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Join fields into one line
pub fn encode_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Split a line into unescaped fields, requiring exactly `expected` of them
pub fn decode_line(line: &str, expected: usize) -> Result<Vec<String>, CodecError> {
    let mut fields = Vec::with_capacity(expected);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => current.push('\\'),
                Some('|') => current.push('|'),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => return Err(CodecError::UnknownEscape(other)),
                None => return Err(CodecError::DanglingEscape),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);

    if fields.len() != expected {
        return Err(CodecError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        let line = encode_line(["alice", "1", "income"]);
        assert_eq!(line, "alice|1|income");
        assert_eq!(decode_line(&line, 3).unwrap(), vec!["alice", "1", "income"]);
    }

    #[test]
    fn test_special_characters_survive() {
        let note = "rent | march\\april\nsecond line\r";
        let line = encode_line(["bob", note]);

        assert!(!line.contains('\n'));
        assert_eq!(decode_line(&line, 2).unwrap(), vec!["bob", note]);
    }

    #[test]
    fn test_empty_fields() {
        let line = encode_line(["", "x", ""]);
        assert_eq!(line, "|x|");
        assert_eq!(decode_line(&line, 3).unwrap(), vec!["", "x", ""]);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            decode_line("a|b", 3).unwrap_err(),
            CodecError::FieldCount {
                expected: 3,
                found: 2
            }
        );
        assert!(decode_line("a|b|c|d", 3).is_err());
    }

    #[test]
    fn test_bad_escapes() {
        assert_eq!(
            decode_line("a\\tb", 1).unwrap_err(),
            CodecError::UnknownEscape('t')
        );
        assert_eq!(decode_line("ab\\", 1).unwrap_err(), CodecError::DanglingEscape);
    }
}
