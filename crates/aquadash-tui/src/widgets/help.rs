//! Help panel
//!
//! Four static rows, each with an icon, a label, and a chevron. Rows are
//! inert: selecting one is logged by the app layer and nothing opens.

use aquadash_core::HelpEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, IconSet};

/// Help panel listing the support entries.
pub struct HelpPanel<'a> {
    entries: &'a [HelpEntry],
    icons: IconSet,
}

impl<'a> HelpPanel<'a> {
    pub fn new(entries: &'a [HelpEntry], icons: IconSet) -> Self {
        Self { entries, icons }
    }
}

impl Widget for HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = styles::card_block(false);
        let inner = card.inner(area);
        card.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // One row per entry with a blank spacer line between rows
        for (idx, entry) in self.entries.iter().enumerate() {
            let y = inner.y + (idx as u16) * 2;
            if y >= inner.y + inner.height {
                break;
            }

            let left = Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.help_icon(entry.icon), styles::accent()),
                Span::raw("  "),
                Span::styled(entry.label.clone(), styles::text_primary()),
            ]);
            buf.set_line(inner.x, y, &left, inner.width);

            let chevron = Line::from(vec![
                Span::styled(self.icons.chevron_right(), styles::text_muted()),
                Span::raw(" "),
            ]);
            let chevron_width = chevron.width() as u16;
            if inner.width > chevron_width {
                buf.set_line(
                    inner.x + inner.width - chevron_width,
                    y,
                    &chevron,
                    chevron_width,
                );
            }
        }
    }
}
