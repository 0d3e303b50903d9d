//! Viewport metrics
//!
//! Pure functions of the content-area geometry and the glyph cell size.

use super::types::{ContentArea, Scrollbar};
use crate::config::GlyphMetrics;

/// Visible line count and characters per line for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub visible_lines: usize,
    pub max_chars_per_line: usize,
}

impl ViewportMetrics {
    pub fn from_area(area: ContentArea, glyph: &GlyphMetrics) -> Self {
        let cell_height = glyph.cell_height.max(1);
        let cell_width = glyph.cell_width.max(1);
        let reserved = glyph.reserved_lines.saturating_mul(cell_height);
        Self {
            visible_lines: (area.height.saturating_sub(reserved) / cell_height) as usize,
            max_chars_per_line: (area.width.saturating_sub(glyph.margin) / cell_width) as usize,
        }
    }

    /// Largest valid scroll offset for `line_count` lines.
    pub fn max_scroll(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.visible_lines)
    }
}

/// Scrollbar for the scrollback region, present only when it overflows.
pub fn scrollbar(
    area: ContentArea,
    glyph: &GlyphMetrics,
    metrics: ViewportMetrics,
    line_count: usize,
    scroll_position: usize,
) -> Option<Scrollbar> {
    if line_count <= metrics.visible_lines {
        return None;
    }
    let track = area
        .height
        .saturating_sub(glyph.reserved_lines.saturating_mul(glyph.cell_height));
    let scale = |n: usize| (u64::from(track) * n as u64 / line_count as u64) as u32;
    Some(Scrollbar {
        position: scale(scroll_position),
        extent: scale(metrics.visible_lines),
        track,
    })
}

/// `"cwd: <path>"`, with the path shortened to fit the line.
pub fn cwd_indicator(path: &str, max_chars_per_line: usize) -> String {
    const LABEL: &str = "cwd: ";
    let room = max_chars_per_line.saturating_sub(LABEL.len());
    if path.chars().count() <= room {
        return format!("{}{}", LABEL, path);
    }
    let kept: String = path.chars().take(room.saturating_sub(3)).collect();
    format!("{}{}...", LABEL, kept)
}
