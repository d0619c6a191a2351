pub mod classes;
pub mod cli;
pub mod consts;
pub mod error;
pub mod master;
pub mod policy;
pub mod prompt;

use error::LesspassError;

pub type Result<T> = std::result::Result<T, LesspassError>;
