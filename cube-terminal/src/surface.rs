/// Terminal drawing surface: a pixel canvas mapped onto character cells
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use cube_core::{Color, Surface};
use std::io::{self, Write};
use std::time::Instant;

/// Glyph used for a lit cell
const POINT_GLYPH: char = '█';

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb { r, g, b }
}

/// Frames-per-second counter refreshed once a second
struct FpsCounter {
    last_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        let elapsed = now - self.last_sample;
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.last_sample = now;
        }
    }
}

/// A `width` x `height` pixel surface drawn onto a terminal grid.
///
/// Each cell covers a block of pixels and is lit when any rectangle touches
/// it. The last terminal row is reserved for a status line.
pub struct TerminalSurface<W: Write> {
    writer: W,
    width: u32,
    height: u32,
    cols: usize,
    rows: usize,
    cells: Vec<Color>,
    background: Color,
    fit_to_terminal: bool,
    fps: FpsCounter,
}

impl<W: Write> TerminalSurface<W> {
    /// Surface that follows the terminal size, re-read on every clear
    pub fn new(writer: W, width: u32, height: u32) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut surface = Self::with_grid(writer, width, height, cols as usize, rows as usize);
        surface.fit_to_terminal = true;
        Ok(surface)
    }

    /// Surface drawn onto a fixed grid of `cols` x `rows` terminal cells
    pub fn with_grid(writer: W, width: u32, height: u32, cols: usize, rows: usize) -> Self {
        let mut surface = Self {
            writer,
            width,
            height,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            background: Color::BLACK,
            fit_to_terminal: false,
            fps: FpsCounter::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        // Keep one row for the status line
        self.rows = rows.saturating_sub(1);
        self.cells = vec![self.background; self.cols * self.rows];
    }

    /// Color of the cell at `col`, `row`
    pub fn cell(&self, col: usize, row: usize) -> Option<Color> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Clip a pixel span `[start, start + len)` to `[0, limit)` and map it to
    /// an inclusive cell range on a grid of `cells` cells.
    fn cell_span(start: i32, len: u32, limit: u32, cells: usize) -> Option<(usize, usize)> {
        let lo = i64::from(start).max(0);
        let hi = (i64::from(start) + i64::from(len)).min(i64::from(limit));
        if lo >= hi || cells == 0 {
            return None;
        }
        let to_cell = |pixel: i64| (pixel as u64 * cells as u64 / u64::from(limit)) as usize;
        Some((to_cell(lo), to_cell(hi - 1)))
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, color: Color) -> io::Result<()> {
        self.background = color;
        if self.fit_to_terminal {
            let (cols, rows) = terminal::size()?;
            if cols as usize != self.cols || (rows as usize).saturating_sub(1) != self.rows {
                self.resize(cols as usize, rows as usize);
                self.writer
                    .queue(terminal::Clear(terminal::ClearType::All))?;
            }
        }
        self.cells.fill(color);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> io::Result<()> {
        let columns = Self::cell_span(x, width, self.width, self.cols);
        let rows = Self::cell_span(y, height, self.height, self.rows);

        if let (Some((c0, c1)), Some((r0, r1))) = (columns, rows) {
            for row in r0..=r1 {
                let start = row * self.cols;
                self.cells[start + c0..=start + c1].fill(color);
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.fps.tick();

        self.writer.queue(SetBackgroundColor(term_color(self.background)))?;
        for row in 0..self.rows {
            self.writer.queue(cursor::MoveTo(0, row as u16))?;
            let mut current = None;
            for &color in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if color == self.background {
                    self.writer.queue(Print(' '))?;
                    continue;
                }
                if current != Some(color) {
                    self.writer.queue(SetForegroundColor(term_color(color)))?;
                    current = Some(color);
                }
                self.writer.queue(Print(POINT_GLYPH))?;
            }
        }
        self.writer.queue(ResetColor)?;

        // Status line
        self.writer.queue(cursor::MoveTo(0, self.rows as u16))?;
        self.writer.queue(SetForegroundColor(TermColor::Yellow))?;
        self.writer.queue(Print(format!(
            "Point Cube | FPS: {:.1} | Q/Esc=Quit",
            self.fps.fps
        )))?;
        self.writer.queue(ResetColor)?;

        self.writer.flush()
    }
}
