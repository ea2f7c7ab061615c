//! Error notices
//!
//! Notices stack: every call appends a new one, nothing is deduplicated or
//! cleared.

/// Text shown when the dashboard had to switch to the built-in dataset
pub const FALLBACK_NOTICE: &str = "Failed to fetch data from the server. Using fallback data.";

/// A container that visible notices are appended to
pub trait NoticeSink {
    fn append(&mut self, message: &str);
}

/// Surface `message` to the user
pub fn show_error<S: NoticeSink + ?Sized>(sink: &mut S, message: &str) {
    sink.append(message);
}

/// In-memory notice container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    messages: Vec<String>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl NoticeSink for NoticeBoard {
    fn append(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack() {
        let mut board = NoticeBoard::new();
        show_error(&mut board, FALLBACK_NOTICE);
        show_error(&mut board, FALLBACK_NOTICE);

        assert_eq!(board.len(), 2);
        assert!(board.messages().iter().all(|m| m == FALLBACK_NOTICE));
    }
}
