/// Rendering layer: all terminal output lives here.
///
/// Draw commands are painted onto an off-screen canvas that maps the game's
/// pixel space onto terminal cells. Each cell shows two vertical pixels
/// using the upper-half block, so the picture has twice the row resolution
/// of the terminal. Text occupies whole cells on top of the pixels.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use arcade_loop::entities::{Rect, Rgb, Rgba};
use arcade_loop::render::{Anchor, DrawCommand};

const BLACK: Rgb = Rgb(0, 0, 0);
const UPPER_HALF: char = '\u{2580}';

fn term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

fn blend(c: Rgb, tint: Rgba) -> Rgb {
    let a = tint.3 as u32;
    let mix = |base: u8, over: u8| ((base as u32 * (255 - a) + over as u32 * a) / 255) as u8;
    Rgb(mix(c.0, tint.0), mix(c.1, tint.1), mix(c.2, tint.2))
}

// ── Canvas ────────────────────────────────────────────────────────────────────

struct Canvas {
    cols: usize,
    rows: usize,
    /// `cols` × `rows * 2` pixels.
    px: Vec<Rgb>,
    /// One optional glyph per cell.
    text: Vec<Option<(char, Rgb)>>,
    /// World → pixel scale.
    sx: f32,
    sy: f32,
}

impl Canvas {
    fn new(cols: u16, rows: u16, world: (i32, i32)) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cols,
            rows,
            px: vec![BLACK; cols * rows * 2],
            text: vec![None; cols * rows],
            sx: cols as f32 / world.0.max(1) as f32,
            sy: (rows * 2) as f32 / world.1.max(1) as f32,
        }
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows * 2 {
            self.px[y as usize * self.cols + x as usize] = c;
        }
    }

    fn paint(&mut self, cmds: &[DrawCommand]) {
        for cmd in cmds {
            match cmd {
                DrawCommand::Rect { rect, color } => self.fill_rect(rect, *color),
                DrawCommand::Circle { x, y, radius, color } => {
                    self.fill_circle(*x, *y, *radius, *color)
                }
                DrawCommand::Text { text, x, y, anchor, color } => {
                    self.put_text(text, *x, *y, *anchor, *color)
                }
                DrawCommand::Overlay { tint } => self.tint(*tint),
            }
        }
    }

    fn fill_rect(&mut self, rect: &Rect, c: Rgb) {
        let x0 = (rect.left() as f32 * self.sx).round() as i32;
        let y0 = (rect.top() as f32 * self.sy).round() as i32;
        // Anything on screen stays at least one pixel big
        let x1 = ((rect.right() as f32 * self.sx).round() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() as f32 * self.sy).round() as i32).max(y0 + 1);
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, c);
            }
        }
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, c: Rgb) {
        let cx = x as f32 * self.sx;
        let cy = y as f32 * self.sy;
        let rx = radius as f32 * self.sx;
        let ry = radius as f32 * self.sy;
        self.set(cx as i32, cy as i32, c);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for py in (cy - ry).floor() as i32..=(cy + ry).ceil() as i32 {
            for px in (cx - rx).floor() as i32..=(cx + rx).ceil() as i32 {
                let nx = (px as f32 + 0.5 - cx) / rx;
                let ny = (py as f32 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set(px, py, c);
                }
            }
        }
    }

    fn put_text(&mut self, text: &str, x: i32, y: i32, anchor: Anchor, c: Rgb) {
        let len = text.chars().count() as i32;
        let row = (y as f32 * self.sy / 2.0).round() as i32;
        let mut col = (x as f32 * self.sx).round() as i32;
        if anchor == Anchor::Center {
            col -= len / 2;
        }
        if row < 0 || row as usize >= self.rows {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cc = col + i as i32;
            if cc >= 0 && (cc as usize) < self.cols {
                self.text[row as usize * self.cols + cc as usize] = Some((ch, c));
            }
        }
    }

    fn tint(&mut self, tint: Rgba) {
        for p in &mut self.px {
            *p = blend(*p, tint);
        }
        for (_, c) in self.text.iter_mut().flatten() {
            *c = blend(*c, tint);
        }
    }

    fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let top = self.px[row * 2 * self.cols + col];
                let bot = self.px[(row * 2 + 1) * self.cols + col];
                match self.text[row * self.cols + col] {
                    Some((ch, fg)) => {
                        out.queue(style::SetForegroundColor(term_color(fg)))?;
                        out.queue(style::SetBackgroundColor(term_color(top)))?;
                        out.queue(Print(ch))?;
                    }
                    None => {
                        out.queue(style::SetForegroundColor(term_color(top)))?;
                        out.queue(style::SetBackgroundColor(term_color(bot)))?;
                        out.queue(Print(UPPER_HALF))?;
                    }
                }
            }
        }
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame at the current terminal size.
pub fn render<W: Write>(out: &mut W, cmds: &[DrawCommand], world: (i32, i32)) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols, rows, world);
    canvas.paint(cmds);
    canvas.flush(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}
