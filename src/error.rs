use thiserror::Error;

use crate::classes::CharClass;
use crate::consts::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Error)]
pub enum LesspassError {
    #[error("Error: A site is required (pass it as SITE or use --prompt)")]
    MissingSite,
    #[error("Error: At least one character class must be enabled")]
    EmptyCharacterClassSet,
    #[error("Error: Length {0} is out of range ({min}-{max})", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(i64),
    #[error("Error: Counter {0} must be a positive integer")]
    InvalidCounter(i64),
    #[error("Error: No master password given (pass it as MASTER_PASSWORD, set LESSPASS_MASTER_PASSWORD, or use --prompt)")]
    MissingMasterPassword,
    #[error("Error: --{0} and --no-{0} are mutually exclusive")]
    MutuallyExclusiveFlags(CharClass),
    #[error("Error: User aborted")]
    UserAbort,
    #[error("Error: Terminal I/O failed")]
    Io(#[from] std::io::Error),
}
