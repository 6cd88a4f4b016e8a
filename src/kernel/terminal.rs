//! Simulated terminal panel: a fixed build transcript followed by the live log tail.

use std::collections::VecDeque;

pub const PROMPT: &str = "código@solana-dev:~/project$ ";

const LOG_BUFFER_CAP: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStyle {
    Command,
    Output,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptLine {
    pub style: TranscriptStyle,
    pub text: &'static str,
}

const fn line(style: TranscriptStyle, text: &'static str) -> TranscriptLine {
    TranscriptLine { style, text }
}

pub const TRANSCRIPT: &[TranscriptLine] = &[
    line(TranscriptStyle::Command, "cargo build"),
    line(
        TranscriptStyle::Output,
        "   Compiling codigo-solana-project v0.1.0",
    ),
    line(
        TranscriptStyle::Output,
        "    Finished dev [unoptimized + debuginfo] target(s) in 2.43s",
    ),
    line(TranscriptStyle::Command, "anchor test"),
    line(
        TranscriptStyle::Output,
        "BPF SDK: /Users/.local/share/solana/install/releases/1.16.0/solana-release/bin/sdk/bpf",
    ),
    line(TranscriptStyle::Success, "✓ All tests passed!"),
];

#[derive(Debug, Clone, Default)]
pub struct TerminalState {
    logs: VecDeque<String>,
}

impl TerminalState {
    pub fn transcript(&self) -> &'static [TranscriptLine] {
        TRANSCRIPT
    }

    pub fn logs(&self) -> &VecDeque<String> {
        &self.logs
    }

    pub fn push_log(&mut self, line: String) {
        if self.logs.len() >= LOG_BUFFER_CAP {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/terminal.rs"]
mod tests;
