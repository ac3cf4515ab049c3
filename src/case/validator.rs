use crate::error::CaseError;
use serde_json::Value;

/// Anything that may be handed to a case conversion.
///
/// Plain strings always pass the type check. Dynamic values (JSON, optional
/// fields) report the runtime type they actually carry, so a missing field
/// fails as `undefined` and a JSON number as `number`.
pub trait CaseInput {
    fn as_text(&self) -> Result<&str, CaseError>;
}

impl CaseInput for str {
    fn as_text(&self) -> Result<&str, CaseError> {
        Ok(self)
    }
}

impl CaseInput for String {
    fn as_text(&self) -> Result<&str, CaseError> {
        Ok(self.as_str())
    }
}

impl CaseInput for Value {
    fn as_text(&self) -> Result<&str, CaseError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(CaseError::InvalidType {
                received: json_type_name(other),
            }),
        }
    }
}

impl<T: CaseInput> CaseInput for Option<T> {
    fn as_text(&self) -> Result<&str, CaseError> {
        match self {
            Some(inner) => inner.as_text(),
            None => Err(CaseError::InvalidType {
                received: "undefined",
            }),
        }
    }
}

impl<T: CaseInput + ?Sized> CaseInput for &T {
    fn as_text(&self) -> Result<&str, CaseError> {
        (**self).as_text()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check that `input` is a string with something other than whitespace in it.
///
/// The empty string is accepted and returned unchanged.
pub fn validate<I: CaseInput + ?Sized>(input: &I) -> Result<&str, CaseError> {
    let text = input.as_text()?;

    if !text.is_empty() && text.trim().is_empty() {
        return Err(CaseError::WhitespaceOnly);
    }

    Ok(text)
}
