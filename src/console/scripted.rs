use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::console::Console;

/// Something written to a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Message(String),
    Error(String),
    Clear,
}

/// In-memory console answering prompts from a fixed script.
///
/// Once the script is exhausted `ask` fails instead of blocking.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<Line>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    /// Inputs not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().filter_map(|line| match line {
            Line::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.transcript.iter().filter_map(|line| match line {
            Line::Error(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// `true` if any message contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.messages().any(|m| m.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self) -> anyhow::Result<String> {
        match self.inputs.pop_front() {
            Some(line) => Ok(String::from(line.trim())),
            None => Err(anyhow::anyhow!("scripted console ran out of input")),
        }
    }

    fn notify(&mut self, text: &str) {
        self.transcript.push(Line::Message(String::from(text)));
    }

    fn notify_error(&mut self, text: &str) {
        self.transcript.push(Line::Error(String::from(text)));
    }

    fn clear_display(&mut self) {
        self.transcript.push(Line::Clear);
    }
}
