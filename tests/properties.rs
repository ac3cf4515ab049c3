use proptest::prelude::*;
use recase::case::formatter::format;
use recase::{convert, tokenize, CaseError, CaseStyle};

/// Printable ASCII that is not whitespace-only.
fn valid_input() -> impl Strategy<Value = String> {
    "[ -~]{0,40}".prop_filter("whitespace-only", |s| s.is_empty() || !s.trim().is_empty())
}

fn rerender(output: &str, style: CaseStyle) -> String {
    format(&tokenize(output), style)
}

proptest! {
    #[test]
    fn conversion_is_deterministic(s in valid_input()) {
        for style in CaseStyle::ALL {
            prop_assert_eq!(convert(s.as_str(), style), convert(s.as_str(), style));
        }
    }

    #[test]
    fn separated_styles_are_idempotent(s in valid_input()) {
        for style in [CaseStyle::Kebab, CaseStyle::Dot, CaseStyle::Snake] {
            let once = convert(s.as_str(), style).unwrap();
            prop_assert_eq!(rerender(&once, style), once);
        }
    }

    #[test]
    fn tokens_are_nonempty_alphanumeric(s in valid_input()) {
        for token in &tokenize(&s) {
            prop_assert!(!token.as_str().is_empty());
            prop_assert!(token.as_str().bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn kebab_output_shape(s in valid_input()) {
        let out = convert(s.as_str(), CaseStyle::Kebab).unwrap();
        prop_assert!(!out.starts_with('-') && !out.ends_with('-'));
        prop_assert!(!out.contains("--"));
        prop_assert!(out.bytes().all(|b| b == b'-' || b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn whitespace_only_always_rejected(s in "[ \t\n]{1,10}") {
        for style in CaseStyle::ALL {
            prop_assert_eq!(convert(s.as_str(), style), Err(CaseError::WhitespaceOnly));
        }
    }
}
