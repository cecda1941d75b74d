//! Semantic style builders.

use gpanel_core::{ButtonTone, Severity};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on accent" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn severity(severity: Severity) -> Style {
    let color = match severity {
        Severity::Success => palette::STATUS_GREEN,
        Severity::Error => palette::STATUS_RED,
        Severity::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color)
}

/// AC power button. Highlighted buttons get a filled background.
pub fn power_button(tone: ButtonTone) -> Style {
    match tone {
        ButtonTone::OnActive => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        ButtonTone::OffActive => Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
        ButtonTone::Inactive => text_muted(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Rounded card with a title.
pub fn titled_block(title: &str) -> Block<'_> {
    glass_block(false).title(format!(" {title} "))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
