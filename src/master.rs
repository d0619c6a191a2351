//! Master password resolution.
//!
//! Sources are tried in a fixed order: the `MASTER_PASSWORD` positional, then
//! the `LESSPASS_MASTER_PASSWORD` snapshot, then the interactive prompt (only
//! with `--prompt`). Empty strings count as absent.

use std::fmt;

use log::debug;
use zeroize::Zeroizing;

use crate::error::LesspassError;
use crate::Result;

/// Something that can ask the user for a value. Implemented for the terminal
/// by [`crate::prompt::Terminal`].
pub trait Prompt {
    /// Reads a value without echoing it.
    fn secret(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Reads an echoed line.
    fn line(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        (**self).secret(prompt)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        (**self).line(prompt)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MasterPasswordSource {
    Positional,
    Environment,
    Prompt,
}

impl fmt::Display for MasterPasswordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MasterPasswordSource::Positional => "command line",
            MasterPasswordSource::Environment => "environment",
            MasterPasswordSource::Prompt => "prompt",
        })
    }
}

/// The resolved secret. Wiped on drop and never shown by `Debug`.
#[derive(Clone, Eq, PartialEq)]
pub struct MasterPassword(Zeroizing<String>);

impl MasterPassword {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for MasterPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterPassword(********)")
    }
}

/// Every place a master password may come from, as seen by one invocation.
#[derive(Default)]
pub struct MasterPasswordSources<'a> {
    pub positional: Option<String>,
    pub environment: Option<&'a str>,
    pub prompt: bool,
}

impl<'a> MasterPasswordSources<'a> {
    pub fn resolve<P: Prompt>(self, mut prompter: P) -> Result<MasterPassword> {
        let positional = self.positional.map(Zeroizing::new);

        let (source, secret) = if let Some(value) = positional.filter(|v| !v.is_empty()) {
            (MasterPasswordSource::Positional, value)
        } else if let Some(value) = self.environment.filter(|v| !v.is_empty()) {
            (
                MasterPasswordSource::Environment,
                Zeroizing::new(value.to_owned()),
            )
        } else if self.prompt {
            let value = prompter.secret("Master Password: ")?;
            if value.is_empty() {
                return Err(LesspassError::MissingMasterPassword);
            }
            (MasterPasswordSource::Prompt, value)
        } else {
            return Err(LesspassError::MissingMasterPassword);
        };

        debug!("master password taken from {}", source);
        Ok(MasterPassword(secret))
    }
}
