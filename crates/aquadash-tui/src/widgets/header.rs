//! Header bar widget
//!
//! Back affordance on the left, centered page title, and the optional
//! secondary-action affordance on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles, IconSet};

/// Header showing the back affordance, the page title, and (when
/// instructed) the overflow action. Pure presentational widget: the title
/// is an uninterpreted display string and the affordances themselves do
/// nothing here; key handling lives in the app layer.
pub struct Header<'a> {
    title: &'a str,
    show_secondary_action: bool,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, icons: IconSet) -> Self {
        Self {
            title,
            show_secondary_action: false,
            icons,
        }
    }

    /// Show the overflow-action affordance on the right.
    pub fn with_secondary_action(mut self, show: bool) -> Self {
        self.show_secondary_action = show;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: back affordance with its key hint
        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.back_arrow(), styles::accent()),
            Span::styled(" [esc]", styles::text_muted()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Center: title
        let title_line = Line::from(Span::styled(self.title, styles::accent_bold()));
        let title_width = title_line.width() as u16;
        if title_width < inner.width {
            let title_x = inner.x + (inner.width - title_width) / 2;
            if title_x >= inner.x + left_width + 1 {
                buf.set_line(title_x, inner.y, &title_line, title_width);
            }
        }

        // Right: overflow action, only when instructed
        if self.show_secondary_action {
            let right_line = Line::from(vec![
                Span::styled("[.] ", styles::text_muted()),
                Span::styled(self.icons.more_vertical(), styles::accent()),
                Span::raw(" "),
            ]);
            let right_width = right_line.width() as u16;
            if inner.width > right_width {
                let right_x = inner.x + inner.width - right_width;
                buf.set_line(right_x, inner.y, &right_line, right_width);
            }
        }
    }
}
