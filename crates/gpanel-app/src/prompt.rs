//! Single-line text prompt used for names, colors and credentials

use crate::message::Message;

/// What the prompt is collecting; decides the message sent on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    KeyName,
    RenameKey { old: String },
    AddBrand,
    RenameBrand { old: String },
    BrandFilter,
    CustomColor,
    SystemColor { id: u32 },
    WifiSsid,
    WifiPassword,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::KeyName => "Key name",
            PromptKind::RenameKey { .. } => "Rename key",
            PromptKind::AddBrand => "New custom brand",
            PromptKind::RenameBrand { .. } => "Rename brand",
            PromptKind::BrandFilter => "Filter brands",
            PromptKind::CustomColor => "Custom color (#rrggbb)",
            PromptKind::SystemColor { .. } => "State color (#rrggbb)",
            PromptKind::WifiSsid => "Wi-Fi SSID",
            PromptKind::WifiPassword => "Wi-Fi password",
        }
    }

    /// Input is echoed as `*`.
    pub fn is_secret(&self) -> bool {
        matches!(self, PromptKind::WifiPassword)
    }

    fn submit(self, input: String) -> Message {
        match self {
            PromptKind::KeyName => Message::SetKeyName(input),
            PromptKind::RenameKey { old } => Message::RenameKey { old, new: input },
            PromptKind::AddBrand => Message::AddBrand(input),
            PromptKind::RenameBrand { old } => Message::RenameBrand { old, new: input },
            PromptKind::BrandFilter => Message::FilterBrands(input),
            PromptKind::CustomColor => Message::SetCustomColor(input),
            PromptKind::SystemColor { id } => Message::SaveSystemColor { id, hex: input },
            PromptKind::WifiSsid => Message::SetWifiSsid(input),
            PromptKind::WifiPassword => Message::SetWifiPassword(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
}

impl PromptState {
    pub fn new(kind: PromptKind, initial: impl Into<String>) -> Self {
        Self {
            kind,
            input: initial.into(),
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// What the input line shows.
    pub fn display_input(&self) -> String {
        if self.kind.is_secret() {
            "*".repeat(self.input.chars().count())
        } else {
            self.input.clone()
        }
    }

    pub fn into_message(self) -> Message {
        self.kind.submit(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut p = PromptState::new(PromptKind::AddBrand, "Gre");
        p.push('e');
        p.push('x');
        p.backspace();
        assert_eq!(p.input, "Gree");
        p.clear();
        assert!(p.input.is_empty());
    }

    #[test]
    fn test_submit_carries_context() {
        let p = PromptState::new(
            PromptKind::RenameBrand {
                old: "My%20AC".into(),
            },
            "Office AC",
        );
        match p.into_message() {
            Message::RenameBrand { old, new } => {
                assert_eq!(old, "My%20AC");
                assert_eq!(new, "Office AC");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_password_is_masked() {
        let p = PromptState::new(PromptKind::WifiPassword, "hunter2");
        assert_eq!(p.display_input(), "*******");
        let p = PromptState::new(PromptKind::WifiSsid, "home");
        assert_eq!(p.display_input(), "home");
    }
}
