//! Document decomposition into sections and code blocks.
//!
//! A single pass over the lines with two states: outside a fence (headers,
//! fence openings and prose are recognized) and inside a fence (every line
//! is code until the closing fence).

use crate::filename::infer_filename;
use crate::line::{content, fence_language, header_title, is_fence_close};
use crate::section::{CodeBlock, Section};

/// Decompose a notes document into its sections.
///
/// Never fails. Header lines start a new section (`section-1`, `section-2`,
/// ...); fenced blocks are attached to the section open when they close;
/// the first prose line under a header becomes its description.
///
/// Recovery rules:
/// - a fence still open at end of input is committed as a final block
/// - blocks fenced before the first header are dropped
/// - empty input yields no sections
pub fn decompose(text: &str) -> Vec<Section> {
    Decomposer::new().run(text)
}

/// Code block being accumulated between fences.
#[derive(Debug)]
struct PendingBlock<'a> {
    language: &'a str,
    filename: Option<String>,
    lines: Vec<&'a str>,
    /// Line of the opening fence (1-indexed).
    start_line: usize,
}

impl PendingBlock<'_> {
    fn finish(self) -> CodeBlock {
        CodeBlock {
            language: self.language.to_owned(),
            code: self.lines.join("\n"),
            filename: self.filename,
        }
    }
}

/// Scanner state.
#[derive(Debug)]
enum State<'a> {
    /// Between code blocks.
    Outside,
    /// Inside a fenced code block.
    InFence(PendingBlock<'a>),
}

struct Decomposer<'a> {
    state: State<'a>,
    sections: Vec<Section>,
    current: Option<Section>,
    next_number: usize,
    dropped_blocks: usize,
}

impl<'a> Decomposer<'a> {
    fn new() -> Self {
        Self {
            state: State::Outside,
            sections: Vec::new(),
            current: None,
            next_number: 1,
            dropped_blocks: 0,
        }
    }

    fn run(mut self, text: &'a str) -> Vec<Section> {
        let mut previous = None;

        for (idx, raw) in text.split('\n').enumerate() {
            self.process_line(raw, previous, idx + 1);
            previous = Some(raw);
        }

        self.finish()
    }

    /// Process one raw line (carriage return still attached).
    fn process_line(&mut self, raw: &'a str, previous: Option<&'a str>, line_num: usize) {
        let line = content(raw);

        match std::mem::replace(&mut self.state, State::Outside) {
            State::InFence(mut pending) => {
                if is_fence_close(line) {
                    self.commit(pending);
                } else {
                    // Code keeps the line verbatim, headers included
                    pending.lines.push(raw);
                    self.state = State::InFence(pending);
                }
            }
            State::Outside => self.process_outside(line, previous, line_num),
        }
    }

    fn process_outside(&mut self, line: &'a str, previous: Option<&'a str>, line_num: usize) {
        if let Some(title) = header_title(line) {
            self.open_section(title);
        } else if let Some(language) = fence_language(line) {
            let filename = previous.map(content).and_then(infer_filename);
            self.state = State::InFence(PendingBlock {
                language,
                filename,
                lines: Vec::new(),
                start_line: line_num,
            });
        } else if let Some(section) = &mut self.current {
            let trimmed = line.trim();
            if section.description.is_none() && !trimmed.is_empty() && !line.starts_with('#') {
                section.description = Some(trimmed.to_owned());
            }
        }
    }

    fn open_section(&mut self, title: &str) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        self.current = Some(Section::new(self.next_number, title));
        self.next_number += 1;
    }

    fn commit(&mut self, pending: PendingBlock<'a>) {
        let start_line = pending.start_line;
        let block = pending.finish();

        if let Some(section) = &mut self.current {
            section.blocks.push(block);
        } else {
            self.dropped_blocks += 1;
            tracing::debug!(
                line = start_line,
                language = %block.language,
                "Dropped code block before first header"
            );
        }
    }

    fn finish(mut self) -> Vec<Section> {
        if let State::InFence(pending) = std::mem::replace(&mut self.state, State::Outside) {
            tracing::debug!(
                line = pending.start_line,
                language = pending.language,
                "Unterminated code fence, keeping trailing code"
            );
            self.commit(pending);
        }

        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }

        tracing::debug!(
            sections = self.sections.len(),
            dropped_blocks = self.dropped_blocks,
            "Document decomposed"
        );
        self.sections
    }
}
