//! Bottom navigation bar widget
//!
//! Exactly four fixed destinations in constant order. The entry matching
//! the current page is highlighted by enum equality, never by comparing
//! title strings.

use aquadash_app::Page;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles, IconSet};

/// The four-destination navigation bar pinned to the bottom of the screen.
pub struct NavBar {
    current_page: Page,
    icons: IconSet,
}

impl NavBar {
    pub fn new(current_page: Page, icons: IconSet) -> Self {
        Self {
            current_page,
            icons,
        }
    }

    fn entry_line(&self, page: Page, key_hint: char) -> Line<'static> {
        // Highlight by enum identity
        let style = if page == self.current_page {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        Line::from(vec![
            Span::styled(format!("[{}] ", key_hint), styles::keybinding()),
            Span::styled(self.icons.nav_icon(page).to_string(), style),
            Span::styled(format!(" {}", page.nav_label()), style),
        ])
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // One equal-width slot per destination, constant order
        let slots = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(inner);

        for (idx, page) in Page::ALL.into_iter().enumerate() {
            let key_hint = char::from_digit(idx as u32 + 1, 10).unwrap_or('?');
            let line = self.entry_line(page, key_hint);
            let width = line.width() as u16;
            let slot = slots[idx];

            // Center the entry within its slot
            let x = if width < slot.width {
                slot.x + (slot.width - width) / 2
            } else {
                slot.x
            };
            buf.set_line(x, slot.y, &line, slot.width);
        }
    }
}
