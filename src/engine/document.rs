//! Line buffer with terminators preserved

/// Split text into lines, keeping each line's terminator attached.
/// CRLF endings stay intact inside their line; an empty string splits
/// into zero lines.
pub(crate) fn split_keepends(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(String::from).collect()
}

/// An ordered sequence of lines plus the whole-file trailing-newline style
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    ends_with_newline: bool,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: split_keepends(text),
            ends_with_newline: text.ends_with('\n'),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn ends_with_newline(&self) -> bool {
        self.ends_with_newline
    }

    /// Join an edited line buffer back into text, restoring the original
    /// trailing-newline style no matter what the edits did to line endings.
    pub fn finish(&self, buffer: Vec<String>) -> String {
        let mut text = buffer.concat();
        if self.ends_with_newline && !text.ends_with('\n') {
            text.push('\n');
        } else if !self.ends_with_newline && text.ends_with('\n') {
            // strip exactly one trailing newline
            text.pop();
        }
        text
    }
}
