//! Character class resolution
//!
//! Turns the four `--<class>` / `--no-<class>` flag pairs into the final set of
//! character classes a password may draw from.
//!
//! With no class flag at all every class is enabled. As soon as a single class
//! flag is given, enabling or disabling, only the classes explicitly enabled
//! survive: `-lud` means lowercase, uppercase and digits, *without* symbols.

use std::fmt;

use log::debug;

use crate::error::LesspassError;
use crate::Result;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// The long flag name, without leading dashes.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the command line said about one character class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassFlag {
    Enabled,
    Disabled,
    Unset,
}

impl Default for ClassFlag {
    fn default() -> Self {
        ClassFlag::Unset
    }
}

impl ClassFlag {
    /// Builds the tri-state from an `(enable, disable)` flag pair. Both set is
    /// rejected; the argument parser normally catches that first.
    pub fn from_pair(class: CharClass, enable: bool, disable: bool) -> Result<Self> {
        match (enable, disable) {
            (true, true) => Err(LesspassError::MutuallyExclusiveFlags(class)),
            (true, false) => Ok(ClassFlag::Enabled),
            (false, true) => Ok(ClassFlag::Disabled),
            (false, false) => Ok(ClassFlag::Unset),
        }
    }

    fn is_set(self) -> bool {
        self != ClassFlag::Unset
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClassFlags {
    pub lowercase: ClassFlag,
    pub uppercase: ClassFlag,
    pub digits: ClassFlag,
    pub symbols: ClassFlag,
}

impl ClassFlags {
    pub fn get(&self, class: CharClass) -> ClassFlag {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, flag: ClassFlag) {
        match class {
            CharClass::Lowercase => self.lowercase = flag,
            CharClass::Uppercase => self.uppercase = flag,
            CharClass::Digits => self.digits = flag,
            CharClass::Symbols => self.symbols = flag,
        }
    }

    /// Resolves the flags into the final class set.
    pub fn resolve(&self) -> Result<CharacterClassSet> {
        let explicit = CharClass::ALL.iter().any(|&class| self.get(class).is_set());

        let set = if explicit {
            debug!("class flags given, enabling only the named classes");
            let mut set = CharacterClassSet::none();
            for &class in &CharClass::ALL {
                set.insert_if(class, self.get(class) == ClassFlag::Enabled);
            }
            set
        } else {
            debug!("no class flags given, enabling every class");
            CharacterClassSet::all()
        };

        if set.is_empty() {
            return Err(LesspassError::EmptyCharacterClassSet);
        }

        debug!("resolved character classes: {}", set);
        Ok(set)
    }
}

/// The character classes a generated password may contain. Never empty once
/// it leaves [`ClassFlags::resolve`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CharacterClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClassSet {
    pub fn all() -> Self {
        CharacterClassSet {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    fn none() -> Self {
        CharacterClassSet {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    fn insert_if(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Digits => self.digits = enabled,
            CharClass::Symbols => self.symbols = enabled,
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn is_empty(&self) -> bool {
        !CharClass::ALL.iter().any(|&class| self.contains(class))
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .iter()
            .copied()
            .filter(move |&class| self.contains(class))
    }
}

impl fmt::Display for CharacterClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.iter().map(CharClass::name).collect::<Vec<_>>();
        write!(f, "{}", names.join(", "))
    }
}
