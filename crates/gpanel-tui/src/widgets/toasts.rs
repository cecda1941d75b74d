//! Toast stack in the bottom-right corner of the content area

use gpanel_app::notifications::ToastQueue;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 44;

pub struct Toasts<'a> {
    queue: &'a ToastQueue,
}

impl<'a> Toasts<'a> {
    pub fn new(queue: &'a ToastQueue) -> Self {
        Self { queue }
    }
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width);
        if width < 6 {
            return;
        }
        let text_width = usize::from(width - 4);

        // Newest at the bottom, stacking upward
        let mut bottom = area.bottom();
        for toast in self.queue.iter().collect::<Vec<_>>().into_iter().rev() {
            let notification = &toast.notification;
            let rows: u16 = notification
                .message
                .lines()
                .map(|l| (l.width() + 2).div_ceil(text_width) as u16)
                .sum::<u16>()
                .max(1);
            let height = rows + 2;
            if bottom < area.y + height {
                break;
            }
            let rect = Rect::new(area.right() - width, bottom - height, width, height);
            bottom = rect.y;

            let style = styles::severity(notification.severity);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(Style::default().bg(palette::POPUP_BG));

            let mut lines: Vec<Line> = Vec::new();
            for (i, text) in notification.message.lines().enumerate() {
                let prefix = if i == 0 {
                    format!("{} ", notification.severity.icon())
                } else {
                    "  ".to_string()
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(text.to_string(), styles::text_primary()),
                ]));
            }

            Clear.render(rect, buf);
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .render(rect, buf);
        }
    }
}
