//! Blocking confirmations and notices
//!
//! The reducer never talks to the user directly; it asks the runtime, which
//! asks a `Prompter`. Tests substitute a scripted one.

use std::io::{self, Write};

/// Blocking user interaction: yes/no questions and acknowledgements
pub trait Prompter {
    /// Ask a yes/no question; `true` means proceed
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a notice the user has to see before continuing
    fn alert(&mut self, message: &str);
}

/// Whether a typed answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prompter on the process's stdin/stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter {
    /// Accept every confirmation without asking
    pub assume_yes: bool,
}

impl StdinPrompter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} [y/N] y", message);
            return true;
        }

        print!("{} [y/N] ", message);
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush prompt: {}", e);
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn alert(&mut self, message: &str) {
        println!("! {}", message);
    }
}
