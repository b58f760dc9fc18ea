//! Character grid with its depth buffer.

/// Character of a cell that no lit surface sample has reached.
pub const BACKGROUND: char = ' ';

/// RGB foreground colour for a character cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One rendered frame.
///
/// Characters, depths and colours are stored row-major and always have
/// `width * height` entries each. Depth holds `1/z` of the closest sample
/// written to a cell, `0.0` meaning nothing has been drawn there.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    chars: Vec<char>,
    depth: Vec<f64>,
    colors: Vec<Option<CellColor>>,
    width: u16,
    height: u16,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Frame {
    /// Create a blank frame: every cell background and infinitely far.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            chars: vec![BACKGROUND; size],
            depth: vec![0.0; size],
            colors: vec![None; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// All characters, row-major.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// All depths, row-major.
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.width as usize && row < self.height as usize {
            Some(row * self.width as usize + col)
        } else {
            None
        }
    }

    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.index(col, row).map(|i| self.chars[i])
    }

    pub fn depth_at(&self, col: usize, row: usize) -> Option<f64> {
        self.index(col, row).map(|i| self.depth[i])
    }

    pub fn color_at(&self, col: usize, row: usize) -> Option<CellColor> {
        self.index(col, row).and_then(|i| self.colors[i])
    }

    /// Depth-tested write.
    ///
    /// Stores `ch` and `ooz` only when `ooz` is strictly greater than what the
    /// cell already holds. Returns whether the cell was overwritten.
    pub fn plot(&mut self, col: usize, row: usize, ooz: f64, ch: char) -> bool {
        let Some(i) = self.index(col, row) else {
            return false;
        };
        if ooz > self.depth[i] {
            self.depth[i] = ooz;
            self.chars[i] = ch;
            true
        } else {
            false
        }
    }

    /// Overwrite the start of `row` with `text`.
    ///
    /// Writes at most `width` characters; rows outside the grid are ignored.
    /// Returns the number of cells written.
    pub fn write_text(&mut self, row: usize, text: &str, color: Option<CellColor>) -> usize {
        if row >= self.height as usize {
            return 0;
        }
        let start = row * self.width as usize;
        let mut written = 0;
        for (offset, ch) in text.chars().take(self.width as usize).enumerate() {
            self.chars[start + offset] = ch;
            self.colors[start + offset] = color;
            written += 1;
        }
        written
    }

    /// Iterate over rows as `(chars, colors)` slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (&[char], &[Option<CellColor>])> {
        let width = (self.width as usize).max(1);
        self.chars.chunks(width).zip(self.colors.chunks(width))
    }

    /// Plain text of the frame, rows joined by newlines.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        self.rows()
            .map(|(chars, _)| chars.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of cells holding something other than [`BACKGROUND`].
    pub fn lit_cells(&self) -> usize {
        self.chars.iter().filter(|&&c| c != BACKGROUND).count()
    }
}
