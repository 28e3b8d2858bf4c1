//! Interactive translation loop
//!
//! Reads text from the input, runs language identification and the local
//! gender/formality heuristics, lets the user confirm or override what was
//! detected, and prints the translation. Errors are printed and the loop
//! moves on to the next text; only `quit` or the end of input stops it.

use crate::classifier::{self, Classification};
use crate::languages;
use crate::mt::client::{TranslationClient, TranslationOutcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const BANNER: &str = "=== Indian Language Translator using SarvamAI ===";
pub const DEFAULT_GENDER: &str = "Male";
pub const DEFAULT_MODE: &str = "formal";
const QUIT: &str = "quit";

/// Everything detected for one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub language_code: Option<String>,
    pub classification: Classification,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.language_code.is_none()
            && self.classification.gender.is_none()
            && self.classification.formality.is_none()
    }

    /// `Language: hi-IN (Hindi), Gender: Male, Formality: formal`, detected parts only
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(code) = &self.language_code {
            match languages::name_for_code(code) {
                Some(name) => parts.push(format!("Language: {} ({})", code, name)),
                None => parts.push(format!("Language: {}", code)),
            }
        }
        if let Some(gender) = self.classification.gender {
            parts.push(format!("Gender: {}", gender));
        }
        if let Some(formality) = self.classification.formality {
            parts.push(format!("Formality: {}", formality));
        }
        parts.join(", ")
    }

    /// Question asking the user to confirm the detected parameters
    pub fn confirmation_question(&self) -> String {
        let mut params = Vec::new();
        if self.language_code.is_some() {
            params.push("language");
        }
        if self.classification.gender.is_some() {
            params.push("gender");
        }
        if self.classification.formality.is_some() {
            params.push("formal/informal tone");
        }

        if params.len() == 1 {
            format!("Is the detected {} correct?", params[0])
        } else {
            format!("Are the detected {} correct?", params.join(", "))
        }
    }
}

/// Parameters settled for one translation; `None` still has to be asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Parameters {
    source_language: Option<String>,
    gender: Option<String>,
    mode: Option<String>,
}

impl Parameters {
    /// Accept detected values, defaulting gender and mode
    fn from_detection(detection: &Detection) -> Self {
        let classification = detection.classification;
        Self {
            source_language: detection.language_code.clone(),
            gender: Some(
                classification
                    .gender
                    .map_or(DEFAULT_GENDER, |g| g.as_str())
                    .to_string(),
            ),
            mode: Some(
                classification
                    .formality
                    .map_or(DEFAULT_MODE, |f| f.as_str())
                    .to_string(),
            ),
        }
    }
}

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    client: TranslationClient,
    input: R,
    output: W,
    verbose: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(client: TranslationClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
            verbose: false,
        }
    }

    /// Also print the provider name and detected script
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        self.print_intro()?;

        loop {
            writeln!(self.output, "\n{}", "=".repeat(50))?;

            let Some(text) = self.prompt("Enter text to translate (or 'quit' to exit): ")? else {
                break;
            };
            if text.to_lowercase() == QUIT {
                break;
            }
            if text.is_empty() {
                writeln!(self.output, "Please enter some text!")?;
                continue;
            }

            if self.translate_one(&text).await? == Flow::Quit {
                break;
            }
        }

        info!("session finished");
        Ok(())
    }

    fn print_intro(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}\n", BANNER)?;
        if self.verbose {
            writeln!(self.output, "Provider: {}", self.client.provider_name())?;
        }

        writeln!(self.output, "\nSupported Languages:")?;
        for (name, code) in languages::get_supported_languages() {
            writeln!(self.output, "  {}: {}", name, code)?;
        }

        writeln!(
            self.output,
            "\nWhen prompted for source or target language, enter the language codes listed above"
        )
    }

    /// Write `message`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn detect(&mut self, text: &str) -> io::Result<Detection> {
        writeln!(self.output, "\nAnalyzing text...")?;

        let identified = self.client.detect_language(text).await;
        if self.verbose {
            if let Some(script) = identified.as_ref().and_then(|d| d.script_code.as_deref()) {
                writeln!(self.output, "Detected script: {}", script)?;
            }
        }

        let detection = Detection {
            language_code: identified
                .as_ref()
                .and_then(|d| d.language_code())
                .map(str::to_string),
            classification: classifier::classify(text),
        };
        debug!(?detection, "analysis complete");
        Ok(detection)
    }

    async fn translate_one(&mut self, text: &str) -> io::Result<Flow> {
        let detection = self.detect(text).await?;

        let mut params = Parameters::default();
        if detection.is_empty() {
            writeln!(
                self.output,
                "Could not detect language, gender, or formality automatically."
            )?;
        } else {
            writeln!(self.output, "Detected - {}", detection.summary())?;

            let question = format!("{} (y/n) [default: y]: ", detection.confirmation_question());
            let Some(answer) = self.prompt(&question)? else {
                return Ok(Flow::Quit);
            };
            let answer = answer.to_lowercase();
            if answer != "n" && answer != "no" {
                params = Parameters::from_detection(&detection);
            }
        }

        let source_language = match params.source_language {
            Some(code) => code,
            None => {
                let Some(code) = self.prompt("Enter source language code: ")? else {
                    return Ok(Flow::Quit);
                };
                if code.is_empty() {
                    writeln!(self.output, "Source language is required!")?;
                    return Ok(Flow::Continue);
                }
                code
            }
        };

        let gender = match params.gender {
            Some(gender) => gender,
            None => match self.prompt("Enter speaker gender (Male/Female) [default: Male]: ")? {
                Some(gender) => or_default(gender, DEFAULT_GENDER),
                None => return Ok(Flow::Quit),
            },
        };

        let mode = match params.mode {
            Some(mode) => mode,
            None => match self.prompt("Enter mode (formal/informal) [default: formal]: ")? {
                Some(mode) => or_default(mode, DEFAULT_MODE),
                None => return Ok(Flow::Quit),
            },
        };

        let Some(target_language) = self.prompt("Enter target language code: ")? else {
            return Ok(Flow::Quit);
        };
        if target_language.is_empty() {
            writeln!(self.output, "Target language is required!")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nTranslating...")?;
        let outcome = self
            .client
            .translate(text, &source_language, &target_language, &mode, &gender)
            .await;

        match outcome {
            TranslationOutcome::Translated(translated) => {
                writeln!(self.output, "\n{}", translated)?;
                writeln!(
                    self.output,
                    "Source language: {} -> Target language: {}",
                    source_language, target_language
                )?;
            }
            TranslationOutcome::Failed(message) => {
                writeln!(self.output, "\nTranslation Result:")?;
                writeln!(self.output, "{}", message)?;
            }
        }

        Ok(Flow::Continue)
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
