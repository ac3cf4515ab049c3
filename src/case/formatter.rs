use crate::case::tokenizer::{Token, Tokens};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target rendering for a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `firstName`
    #[default]
    Camel,
    /// `first-name`
    Kebab,
    /// `first.name`
    Dot,
    /// `first_name`
    Snake,
    /// `FirstName`
    Pascal,
    /// `FIRST_NAME`
    Constant,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Camel,
        CaseStyle::Kebab,
        CaseStyle::Dot,
        CaseStyle::Snake,
        CaseStyle::Pascal,
        CaseStyle::Constant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
            CaseStyle::Snake => "snake",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Constant => "constant",
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "-",
            CaseStyle::Dot => ".",
            CaseStyle::Snake | CaseStyle::Constant => "_",
            CaseStyle::Camel | CaseStyle::Pascal => "",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "lower-camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot-case" => Ok(CaseStyle::Dot),
            "snake" | "snake-case" => Ok(CaseStyle::Snake),
            "pascal" | "pascalcase" => Ok(CaseStyle::Pascal),
            "constant" | "screaming-snake" => Ok(CaseStyle::Constant),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `tokens` in `style`. An empty sequence renders as `""`.
pub fn format(tokens: &Tokens, style: CaseStyle) -> String {
    let separator = style.separator();

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match style {
            CaseStyle::Camel if i == 0 => lower(token),
            CaseStyle::Camel | CaseStyle::Pascal => title(token),
            CaseStyle::Constant => token.as_str().to_ascii_uppercase(),
            CaseStyle::Kebab | CaseStyle::Dot | CaseStyle::Snake => lower(token),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn lower(token: &Token) -> String {
    token.as_str().to_ascii_lowercase()
}

fn title(token: &Token) -> String {
    let mut word = lower(token);
    if let Some(first) = word.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    word
}
