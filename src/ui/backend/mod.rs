//! Rendering backends.
//!
//! Widgets only ever produce [`PaintCmd`]s. Backends expose a [`CellGrid`]
//! and let [`rasterize`] write the commands into it.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{BorderKind, PaintCmd};
use crate::ui::core::style::Style;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

/// Writable grid of styled cells. Writes outside `bounds` are ignored.
pub trait CellGrid {
    fn bounds(&self) -> Rect;
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

/// Box-drawing glyphs for a border kind: corners (tl, tr, bl, br), then
/// horizontal and vertical edges.
fn border_glyphs(kind: BorderKind) -> (char, char, char, char, char, char) {
    match kind {
        BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
        BorderKind::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    }
}

/// Write `cmds` into `grid` in order; later commands paint over earlier ones.
pub fn rasterize<G: CellGrid + ?Sized>(grid: &mut G, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill(grid, *rect, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => text_run(grid, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style, kind } => border(grid, *rect, *style, *kind),
        }
    }
}

fn fill<G: CellGrid + ?Sized>(grid: &mut G, rect: Rect, style: Style) {
    let rect = rect.intersect(grid.bounds());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            grid.put(x, y, " ", style);
        }
    }
}

fn text_run<G: CellGrid + ?Sized>(
    grid: &mut G,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Option<Rect>,
) {
    let bounds = grid.bounds();
    let clip = clip.unwrap_or(bounds).intersect(bounds);
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }

    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = g.width() as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > clip.right() {
            // Wide glyphs are never split at the clip edge.
            break;
        }
        if x >= clip.x {
            grid.put(x, pos.y, g, style);
            for dx in 1..w {
                grid.put(x + dx, pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn border<G: CellGrid + ?Sized>(grid: &mut G, rect: Rect, style: Style, kind: BorderKind) {
    let rect = rect.intersect(grid.bounds());
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let (tl, tr, bl, br, h, v) = border_glyphs(kind);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut buf = [0u8; 4];

    for x in rect.x + 1..right {
        grid.put(x, rect.y, h.encode_utf8(&mut buf), style);
        grid.put(x, bottom, h.encode_utf8(&mut buf), style);
    }
    for y in rect.y + 1..bottom {
        grid.put(rect.x, y, v.encode_utf8(&mut buf), style);
        grid.put(right, y, v.encode_utf8(&mut buf), style);
    }
    grid.put(rect.x, rect.y, tl.encode_utf8(&mut buf), style);
    grid.put(right, rect.y, tr.encode_utf8(&mut buf), style);
    grid.put(rect.x, bottom, bl.encode_utf8(&mut buf), style);
    grid.put(right, bottom, br.encode_utf8(&mut buf), style);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
