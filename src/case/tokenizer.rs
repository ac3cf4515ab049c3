use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use tracing::trace;

const BOUNDARY: &str = " ";

lazy_static! {
    // lowercase-or-digit followed by uppercase: camelCase / PascalCase transition
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z0-9])([A-Z])").unwrap();
    // any run of characters outside the ASCII alphanumeric class
    static ref SEPARATOR_RUN: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// A maximal run of ASCII alphanumerics, case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    numeric: bool,
}

impl Token {
    fn new(text: &str) -> Self {
        Self {
            numeric: text.bytes().all(|b| b.is_ascii_digit()),
            text: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when every character is a digit.
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered tokens, in order of appearance in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(Token::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split `input` into tokens on case transitions and separator runs.
///
/// Separator-only input (`"---"`) yields an empty sequence, as does `""`.
pub fn tokenize(input: &str) -> Tokens {
    if input.is_empty() {
        return Tokens::default();
    }

    // Order matters: case boundaries are resolved before separators collapse,
    // so the inserted marker is absorbed by the separator pass.
    let marked = CASE_BOUNDARY.replace_all(input, "$1 $2");
    let collapsed = SEPARATOR_RUN.replace_all(&marked, BOUNDARY);
    let normalized = collapsed.trim_matches(' ');

    let tokens: Vec<Token> = if normalized.is_empty() {
        Vec::new()
    } else {
        normalized.split(BOUNDARY).map(Token::new).collect()
    };

    trace!(input = %input, count = tokens.len(), "tokenized");

    Tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_and_pascal_boundaries() {
        assert_eq!(tokenize("HelloWorld").texts(), vec!["Hello", "World"]);
        assert_eq!(tokenize("mobileNumber").texts(), vec!["mobile", "Number"]);
        assert_eq!(
            tokenize("alreadyCamelCase").texts(),
            vec!["already", "Camel", "Case"]
        );
    }

    #[test]
    fn test_digits_stay_inside_tokens() {
        assert_eq!(tokenize("field123").texts(), vec!["field123"]);
        assert_eq!(tokenize("field123Value").texts(), vec!["field123", "Value"]);
        assert_eq!(tokenize("FIELD 123 VALUE").texts(), vec!["FIELD", "123", "VALUE"]);
    }

    #[test]
    fn test_upper_runs_are_not_split() {
        assert_eq!(tokenize("SCREEN_NAME").texts(), vec!["SCREEN", "NAME"]);
        assert_eq!(tokenize("HTTPServer").texts(), vec!["HTTPServer"]);
    }

    #[test]
    fn test_separators_collapse_and_trim() {
        assert_eq!(
            tokenize("  __user--id..  ").texts(),
            vec!["user", "id"]
        );
        assert_eq!(tokenize("a, b; c!").texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_and_separator_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("---").is_empty());
        assert!(tokenize("___").is_empty());
        assert!(tokenize("-_. !").is_empty());
    }

    #[test]
    fn test_numeric_flag() {
        let tokens = tokenize("field 123 value");
        let flags: Vec<bool> = tokens.iter().map(Token::is_numeric).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_non_ascii_letters_act_as_separators() {
        assert_eq!(tokenize("café au lait").texts(), vec!["caf", "au", "lait"]);
    }
}
