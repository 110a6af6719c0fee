//! Cue accumulation shared by every format extractor.

/// Collects the lines of the current cue and the finished output text.
///
/// Lives for exactly one extraction pass.
#[derive(Debug, Default)]
pub struct CueBuffer {
    /// Lines of the cue being built.
    lines: Vec<String>,

    /// Finalized cues, each followed by a newline.
    output: String,

    /// Number of cues emitted so far.
    cue_count: usize,
}

impl CueBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the current cue. Blank lines are ignored.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !line.trim().is_empty() {
            self.lines.push(line);
        }
    }

    /// Close the current cue, appending it to the output if it has text.
    pub fn finalize(&mut self) {
        if self.lines.is_empty() {
            return;
        }

        let joined = self.lines.join("\n");
        let cue = joined.trim();
        if !cue.is_empty() {
            self.output.push_str(cue);
            self.output.push('\n');
            self.cue_count += 1;
        }
        self.lines.clear();
    }

    /// Number of cues emitted so far.
    pub fn cue_count(&self) -> usize {
        self.cue_count
    }

    /// Finalize any pending cue and return the trimmed text.
    pub fn into_text(mut self) -> String {
        self.finalize();
        self.output.trim().to_string()
    }
}
