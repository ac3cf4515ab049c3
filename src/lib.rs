pub mod case;
pub mod cli;
pub mod config;
pub mod error;

pub use case::formatter::CaseStyle;
pub use case::tokenizer::{tokenize, Token, Tokens};
pub use case::validator::{validate, CaseInput};
pub use case::{convert, convert_all, dot_case, to_camel_case, to_kebab_case};
pub use config::Config;
pub use error::{CaseError, ErrorKind};

/// Outcome of converting a batch of inputs, in input order.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub converted: usize,
    pub failed: usize,
    pub entries: Vec<Conversion>,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: Result<String, CaseError>,
}

impl ConversionReport {
    /// Convert `inputs` in `style` and tally the outcome.
    pub fn build(inputs: Vec<String>, style: CaseStyle) -> Self {
        let outputs = convert_all(&inputs, style);

        let entries: Vec<Conversion> = inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| Conversion { input, output })
            .collect();

        let failed = entries.iter().filter(|e| e.output.is_err()).count();

        Self {
            converted: entries.len() - failed,
            failed,
            entries,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
