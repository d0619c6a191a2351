use std::collections::VecDeque;

use lesspass::error::LesspassError;
use lesspass::master::Prompt;
use lesspass::Result;
use zeroize::Zeroizing;

/// Answers prompts from a fixed script and records what was asked.
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Scripted {
            answers: answers.iter().map(|&a| a.to_owned()).collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_owned());
        self.answers.pop_front().ok_or(LesspassError::UserAbort)
    }
}

impl Prompt for Scripted {
    fn secret(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        self.next(prompt).map(Zeroizing::new)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }
}
