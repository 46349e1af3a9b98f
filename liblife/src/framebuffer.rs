use crate::{board::GameBoard, color::Color};

pub const RGB_BYTES: usize = 3;
pub const RGBA_BYTES: usize = 4;

/// Row-major pixel grid matching the display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Sets one pixel; coordinates outside the buffer are ignored.
    pub fn point(&mut self, x: usize, y: usize, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for row in y.min(y_end)..y_end {
            let row_start = row * self.width;
            self.pixels[row_start + x.min(x_end)..row_start + x_end].fill(color);
        }
    }

    /// Repaints the whole buffer from `board`: background everywhere, foreground over live cells.
    ///
    /// When the board and buffer sizes match, cell (x, y) is pixel (x, y). Otherwise cell x covers
    /// the pixel columns `x * W / bw .. max((x + 1) * W / bw, x * W / bw + 1)`, rows likewise, so
    /// upscaling draws blocks and downscaling lights a pixel when any cell landing on it is alive.
    pub fn render(&mut self, board: &GameBoard, foreground: Color, background: Color) {
        self.clear(background);

        let same_size = board.width() == self.width && board.height() == self.height;

        for (pos, tile) in board.enumerate_tiles() {
            if !tile.is_alive() {
                continue;
            }

            if same_size {
                self.point(pos.x, pos.y, foreground);
            } else {
                let (x_start, x_end) = scaled_span(pos.x, board.width(), self.width);
                let (y_start, y_end) = scaled_span(pos.y, board.height(), self.height);
                self.fill_rect(x_start, y_start, x_end - x_start, y_end - y_start, foreground);
            }
        }
    }

    /// Flat RGB bytes, row-major, 3 bytes per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * RGB_BYTES);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb());
        }
        bytes
    }

    /// Copies the buffer into an RGBA8 surface of the same dimensions.
    ///
    /// Only `min(target.len() / 4, pixel count)` pixels are written.
    pub fn write_rgba(&self, target: &mut [u8]) {
        for (chunk, color) in target.chunks_exact_mut(RGBA_BYTES).zip(&self.pixels) {
            chunk.copy_from_slice(&color.to_rgba());
        }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x + y * self.width)
    }
}

fn scaled_span(cell: usize, cells: usize, pixels: usize) -> (usize, usize) {
    let start = cell * pixels / cells;
    let end = ((cell + 1) * pixels / cells).max(start + 1);
    (start, end.min(pixels))
}
