//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)
//!
//! This is the opaque icon/asset boundary: widgets look glyphs up by
//! named slot and never embed raw characters themselves.

use aquadash_app::config::IconMode;
use aquadash_app::Page;
use aquadash_core::HelpIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // --- Header ---

    pub fn back_arrow(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn more_vertical(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f142}", // nf-fa-ellipsis_v
            IconMode::Unicode => "\u{22ee}",   // ⋮
        }
    }

    // --- Navigation bar ---

    pub fn home(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f015}", // nf-fa-home
            IconMode::Unicode => "\u{2302}",   // ⌂
        }
    }

    pub fn file_text(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f15c}", // nf-fa-file_text
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
        }
    }

    pub fn help_circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f059}", // nf-fa-question_circle
            IconMode::Unicode => "?",
        }
    }

    /// Navigation bar icon for a destination.
    pub fn nav_icon(&self, page: Page) -> &'static str {
        match page {
            Page::WaterQuality => self.home(),
            Page::Reports => self.file_text(),
            Page::Alerts => self.bell(),
            Page::Help => self.help_circle(),
        }
    }

    // --- Readings ---

    pub fn droplet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f043}", // nf-fa-tint
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn flask(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c3}", // nf-fa-flask
            IconMode::Unicode => "\u{2697}",   // ⚗
        }
    }

    pub fn thermometer(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2c9}", // nf-fa-thermometer_half
            IconMode::Unicode => "\u{00b0}",   // °
        }
    }

    pub fn activity(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f1}", // nf-fa-heartbeat
            IconMode::Unicode => "~",
        }
    }

    // --- Reports ---

    pub fn calendar(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f073}", // nf-fa-calendar
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    // --- Alerts ---

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "\u{26a1}",   // ⚡
        }
    }

    // --- Help rows ---

    pub fn phone(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f095}", // nf-fa-phone
            IconMode::Unicode => "\u{260e}",   // ☎
        }
    }

    pub fn book(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f02d}", // nf-fa-book
            IconMode::Unicode => "\u{270d}",   // ✍
        }
    }

    pub fn clipboard(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0ea}", // nf-fa-clipboard
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn alert_circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    /// Resolve a help-row icon token to a glyph.
    pub fn help_icon(&self, icon: HelpIcon) -> &'static str {
        match icon {
            HelpIcon::Phone => self.phone(),
            HelpIcon::Book => self.book(),
            HelpIcon::Clipboard => self.clipboard(),
            HelpIcon::AlertCircle => self.alert_circle(),
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_icon_covers_all_pages() {
        let icons = IconSet::default();
        for page in Page::ALL {
            assert!(!icons.nav_icon(page).is_empty());
        }
    }

    #[test]
    fn test_help_icon_covers_all_tokens() {
        let icons = IconSet::default();
        for token in [
            HelpIcon::Phone,
            HelpIcon::Book,
            HelpIcon::Clipboard,
            HelpIcon::AlertCircle,
        ] {
            assert!(!icons.help_icon(token).is_empty());
        }
    }

    #[test]
    fn test_modes_resolve_different_glyphs() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.back_arrow(), nerd.back_arrow());
        assert_ne!(unicode.bell(), nerd.bell());
    }
}
