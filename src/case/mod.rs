pub mod formatter;
pub mod tokenizer;
pub mod validator;

use crate::error::CaseError;
use formatter::CaseStyle;
use rayon::prelude::*;
use tracing::debug;
use validator::CaseInput;

/// Validate, tokenize and render `input` in `style`.
pub fn convert<I: CaseInput + ?Sized>(input: &I, style: CaseStyle) -> Result<String, CaseError> {
    let text = validator::validate(input)?;
    let tokens = tokenizer::tokenize(text);
    Ok(formatter::format(&tokens, style))
}

/// Convert to lower camelCase.
///
/// ```
/// assert_eq!(recase::to_camel_case("first name").unwrap(), "firstName");
/// assert_eq!(recase::to_camel_case("SCREEN_NAME").unwrap(), "screenName");
/// ```
pub fn to_camel_case<I: CaseInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    convert(input, CaseStyle::Camel)
}

/// Convert to kebab-case.
///
/// ```
/// assert_eq!(recase::to_kebab_case("mobileNumber").unwrap(), "mobile-number");
/// ```
pub fn to_kebab_case<I: CaseInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    convert(input, CaseStyle::Kebab)
}

/// Convert to dot.case.
///
/// ```
/// assert_eq!(recase::dot_case("Field 123 Value").unwrap(), "field.123.value");
/// ```
pub fn dot_case<I: CaseInput + ?Sized>(input: &I) -> Result<String, CaseError> {
    convert(input, CaseStyle::Dot)
}

/// Convert every input in parallel. Results line up with `inputs`.
pub fn convert_all<I>(inputs: &[I], style: CaseStyle) -> Vec<Result<String, CaseError>>
where
    I: CaseInput + Sync,
{
    debug!(count = inputs.len(), %style, "converting batch");
    inputs.par_iter().map(|input| convert(input, style)).collect()
}
