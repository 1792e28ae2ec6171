use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType};

pub struct Theme;

impl Theme {
    // ── Border ───────────────────────────────────────────────────────
    pub const BORDER_DIM: Color = Color::DarkGray;
    pub const BORDER_NORMAL: Color = Color::Rgb(60, 65, 80);

    // ── Text hierarchy ───────────────────────────────────────────────
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(80, 85, 100);

    // ── Key style (for footer hints) ─────────────────────────────────
    pub const TEXT_KEY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_KEY_DESC: Color = Color::DarkGray;

    // ── Accent ───────────────────────────────────────────────────────
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 180, 240);
    pub const ACCENT_GREEN: Color = Color::Rgb(80, 200, 120);
    pub const ACCENT_RED: Color = Color::Rgb(220, 80, 80);
    pub const ACCENT_YELLOW: Color = Color::Rgb(220, 180, 60);

    // ── Tab style ────────────────────────────────────────────────────
    pub const TAB_INACTIVE: Color = Color::Rgb(120, 125, 140);

    // ── Block helpers ────────────────────────────────────────────────

    pub fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_NORMAL))
    }

    pub fn block_dim() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_DIM))
    }
}

// ── File series palette ──────────────────────────────────────────────
//
// Same RGB values as the PNG chart palette, so a source file keeps its
// color between the terminal chart and the exported raster.

const FILE_PALETTE: [Color; 8] = [
    Color::Rgb(100, 180, 240), // blue
    Color::Rgb(80, 200, 120),  // green
    Color::Rgb(220, 180, 60),  // yellow
    Color::Rgb(180, 140, 220), // purple
    Color::Rgb(220, 130, 80),  // orange
    Color::Rgb(80, 200, 200),  // teal
    Color::Rgb(220, 100, 160), // pink
    Color::Rgb(160, 200, 80),  // lime
];

/// Color of a file series by its position in the sorted file list.
pub fn series_color(index: usize) -> Color {
    FILE_PALETTE[index % FILE_PALETTE.len()]
}
