use std::fmt;

use crate::classes::{CharacterClassSet, ClassFlags};
use crate::consts::{DEFAULT_COUNTER, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::error::LesspassError;
use crate::master::MasterPassword;
use crate::Result;

/// Everything the derivation function needs for one password. Built once by
/// [`PolicyBuilder`] and handed off by value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationPolicy {
    site: String,
    login: String,
    master_password: MasterPassword,
    length: u8,
    counter: u64,
    classes: CharacterClassSet,
}

impl GenerationPolicy {
    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn master_password(&self) -> &MasterPassword {
        &self.master_password
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn classes(&self) -> CharacterClassSet {
        self.classes
    }
}

// the master password is deliberately absent
impl fmt::Display for GenerationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "site:    {}", self.site)?;
        writeln!(f, "login:   {}", self.login)?;
        writeln!(f, "length:  {}", self.length)?;
        writeln!(f, "counter: {}", self.counter)?;
        write!(f, "classes: {}", self.classes)
    }
}

#[derive(Debug)]
pub struct PolicyBuilder {
    site: Option<String>,
    login: String,
    length: i64,
    counter: i64,
    classes: ClassFlags,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        PolicyBuilder {
            site: None,
            login: String::new(),
            length: DEFAULT_LENGTH,
            counter: DEFAULT_COUNTER,
            classes: ClassFlags::default(),
        }
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn site<S: Into<String>>(mut self, site: Option<S>) -> Self {
        self.site = site.map(Into::into);
        self
    }

    pub fn login<S: Into<String>>(mut self, login: S) -> Self {
        self.login = login.into();
        self
    }

    pub fn length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn counter(mut self, counter: i64) -> Self {
        self.counter = counter;
        self
    }

    pub fn classes(mut self, classes: ClassFlags) -> Self {
        self.classes = classes;
        self
    }

    /// Validates every field and assembles the policy, stopping at the first
    /// invalid one. `master_password` runs last, so a doomed invocation never
    /// blocks on a prompt.
    pub fn build<F>(self, master_password: F) -> Result<GenerationPolicy>
    where
        F: FnOnce() -> Result<MasterPassword>,
    {
        let site = match self.site {
            Some(site) if !site.is_empty() => site,
            _ => return Err(LesspassError::MissingSite),
        };

        let length = u8::try_from(self.length)
            .ok()
            .filter(|_| (MIN_LENGTH..=MAX_LENGTH).contains(&self.length))
            .ok_or(LesspassError::InvalidLength(self.length))?;

        let counter = u64::try_from(self.counter)
            .ok()
            .filter(|&c| c > 0)
            .ok_or(LesspassError::InvalidCounter(self.counter))?;

        let classes = self.classes.resolve()?;
        let master_password = master_password()?;

        Ok(GenerationPolicy {
            site,
            login: self.login,
            master_password,
            length,
            counter,
            classes,
        })
    }
}
