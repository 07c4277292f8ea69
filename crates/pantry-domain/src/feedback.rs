//! Pantry Feedback
//!
//! The "Vouched for?" row on the details panel. Feedback stays in the panel
//! and is never sent anywhere.

/// Longest comment the box accepts, in characters
pub const FEEDBACK_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vouch {
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub vouch: Option<Vouch>,
    comment: String,
    pub submitted: bool,
}

impl FeedbackDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Either thumb opens the comment box
    pub fn vote(&mut self, vouch: Vouch) {
        self.vouch = Some(vouch);
        self.submitted = false;
    }

    pub fn shows_comment_box(&self) -> bool {
        self.vouch.is_some() && !self.submitted
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Keep at most `FEEDBACK_MAX_CHARS` characters
    pub fn set_comment(&mut self, text: &str) {
        self.comment = text.chars().take(FEEDBACK_MAX_CHARS).collect();
    }

    pub fn submit(&mut self) {
        if self.vouch.is_some() {
            self.submitted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_box_opens_after_vote() {
        let mut draft = FeedbackDraft::new();
        assert!(!draft.shows_comment_box());

        draft.vote(Vouch::Down);
        assert!(draft.shows_comment_box());
        assert_eq!(draft.vouch, Some(Vouch::Down));
    }

    #[test]
    fn test_comment_is_capped() {
        let mut draft = FeedbackDraft::new();
        draft.set_comment(&"é".repeat(FEEDBACK_MAX_CHARS + 20));
        assert_eq!(draft.comment().chars().count(), FEEDBACK_MAX_CHARS);
    }

    #[test]
    fn test_submit_needs_a_vote() {
        let mut draft = FeedbackDraft::new();
        draft.submit();
        assert!(!draft.submitted);

        draft.vote(Vouch::Up);
        draft.submit();
        assert!(draft.submitted);
        assert!(!draft.shows_comment_box());

        // voting again reopens the box
        draft.vote(Vouch::Up);
        assert!(draft.shows_comment_box());
    }
}
