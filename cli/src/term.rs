// Terminal implementation of the core Console trait.

use colored::*;
use rolodex_core::Console;
use std::io::{self, BufRead, Write};

/// Prompts on stdout, blocking line reads from stdin. A closed stdin is
/// reported as `UnexpectedEof` so the menu loop can exit cleanly.
pub struct TermConsole {
    stdin: io::Stdin,
}

impl TermConsole {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Console for TermConsole {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        println!("{}", message.bold());
        print!("{} ", ">".bright_green());
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.stdin.lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}
