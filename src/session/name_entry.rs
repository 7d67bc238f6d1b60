//! Player name buffer for leaderboard entry

/// Longest name the buffer accepts
pub const MAX_NAME_LEN: usize = 20;

/// Typed name, limited to `MAX_NAME_LEN` allowed characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBuffer {
    text: String,
}

impl NameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters, digits, space, underscore and hyphen
    pub fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')
    }

    /// Append `c`. Returns false if it is not allowed or the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        if !Self::is_allowed(c) || self.len() >= MAX_NAME_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove the last character; a no-op when empty
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        // ASCII only, so bytes == chars
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether the submit button is enabled
    pub fn is_submittable(&self) -> bool {
        !self.trimmed().is_empty()
    }
}
