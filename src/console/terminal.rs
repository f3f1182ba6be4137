#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::console::Console;

/// Console over the process' standard streams.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn ask(&mut self) -> anyhow::Result<String> {
        print!("-> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            anyhow::bail!("standard input closed");
        }
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, text: &str) {
        println!("{}", text);
    }

    fn notify_error(&mut self, text: &str) {
        let banner = "#".repeat(80);
        eprintln!("\n{}", banner);
        eprintln!("{}", text);
        eprintln!("{}\n", banner);
    }

    fn clear_display(&mut self) {
        print!("{}", "\n".repeat(5));
    }
}
