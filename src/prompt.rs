use std::io::{self, Write};

use termion::input::TermRead;
use zeroize::Zeroizing;

use crate::error::LesspassError;
use crate::master::Prompt;
use crate::Result;

/// Prompts on the controlling terminal: questions go to stdout, answers come
/// from stdin. Closing stdin (Ctrl+D) aborts the run.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl Prompt for Terminal {
    fn secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = io::stdout();

        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let reply = stdin.read_passwd(&mut stdout)?.map(Zeroizing::new);
        // read_passwd swallows the newline
        writeln!(stdout)?;

        reply.ok_or(LesspassError::UserAbort)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = io::stdout();

        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        match stdin.read_line()? {
            Some(reply) => Ok(reply.trim().to_owned()),
            None => Err(LesspassError::UserAbort),
        }
    }
}
