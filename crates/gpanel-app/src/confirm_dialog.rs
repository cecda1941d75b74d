//! Confirm dialog state.
//!
//! Data model for yes/no prompts. The rendering widget lives in
//! `gpanel-tui/src/widgets/confirm_dialog.rs`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// Button labels and the message each one sends
    pub options: Vec<(String, Message)>,
    pub selected: usize,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Two-button dialog: `confirm_label` sends `on_confirm`, Cancel closes.
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: &str,
        on_confirm: Message,
    ) -> Self {
        Self::new(
            title,
            message,
            vec![(confirm_label, on_confirm), ("Cancel", Message::ConfirmCancel)],
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    /// Message attached to option `index`.
    pub fn choice(&self, index: usize) -> Option<Message> {
        self.options.get(index).map(|(_, msg)| msg.clone())
    }
}
