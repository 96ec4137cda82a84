//! Terminal backend: paint commands rasterized into a ratatui buffer.

use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crate::ui::backend::{rasterize, Backend, CellGrid};
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

/// Owns the crossterm-backed terminal; callers only see [`Backend`] and cell rects.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// Run one frame. `f` gets a backend for the frame and the full area.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            f(&mut FrameBackend { frame }, area);
        })?;
        Ok(())
    }
}

struct FrameBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl Backend for FrameBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintList { cmds }, area.into());
    }
}

struct PaintList<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintList<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        rasterize(
            &mut BufferGrid {
                buf,
                bounds: area.into(),
            },
            self.cmds,
        );
    }
}

struct BufferGrid<'a> {
    buf: &'a mut Buffer,
    bounds: Rect,
}

impl CellGrid for BufferGrid<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default().add_modifier(to_ratatui_mods(s.mods));
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    [
        (Mod::BOLD, RModifier::BOLD),
        (Mod::DIM, RModifier::DIM),
        (Mod::UNDERLINE, RModifier::UNDERLINED),
        (Mod::REVERSE, RModifier::REVERSED),
    ]
    .into_iter()
    .filter(|(ours, _)| m.contains(*ours))
    .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
}
