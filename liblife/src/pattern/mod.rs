use std::borrow::Cow;

use crate::error::LifeError;

pub mod library;

/// Immutable rectangular seed shape, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: Cow<'static, str>,
    width: usize,
    height: usize,
    cells: Cow<'static, [bool]>,
}

impl Pattern {
    pub fn new<N>(name: N, width: usize, height: usize, cells: Vec<bool>) -> Result<Self, LifeError>
    where
        N: Into<Cow<'static, str>>,
    {
        let name = name.into();
        let malformed = |reason: String| LifeError::MalformedPattern {
            name: name.to_string(),
            reason,
        };

        if width == 0 || height == 0 {
            return Err(malformed(format!("empty dimensions {width}x{height}")));
        }

        if cells.len() != width * height {
            return Err(malformed(format!(
                "expected {} cells for {width}x{height}, got {}",
                width * height,
                cells.len()
            )));
        }

        Ok(Self {
            name,
            width,
            height,
            cells: Cow::Owned(cells),
        })
    }

    /// Builds a pattern from text rows where `#` or `O` is alive and `.` is dead.
    pub fn from_rows<N>(name: N, rows: &[&str]) -> Result<Self, LifeError>
    where
        N: Into<Cow<'static, str>>,
    {
        let name = name.into();
        let width = rows.first().map_or(0, |row| row.chars().count());

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            if row.chars().count() != width {
                return Err(LifeError::MalformedPattern {
                    name: name.to_string(),
                    reason: format!("row {row:?} is not {width} cells wide"),
                });
            }

            for c in row.chars() {
                cells.push(match c {
                    '#' | 'O' => true,
                    '.' => false,
                    other => {
                        return Err(LifeError::MalformedPattern {
                            name: name.to_string(),
                            reason: format!("unexpected character {other:?}"),
                        });
                    }
                });
            }
        }

        Self::new(name, width, rows.len(), cells)
    }

    pub(crate) const fn from_static(
        name: &'static str,
        width: usize,
        height: usize,
        cells: &'static [bool],
    ) -> Self {
        assert!(cells.len() == width * height);

        Self {
            name: Cow::Borrowed(name),
            width,
            height,
            cells: Cow::Borrowed(cells),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at column `dx`, row `dy`, or `None` outside the pattern.
    pub fn cell(&self, dx: usize, dy: usize) -> Option<bool> {
        if dx >= self.width || dy >= self.height {
            return None;
        }

        Some(self.cells[dy * self.width + dx])
    }

    /// Iterates `(dx, dy, alive)` over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &alive)| (index % self.width, index / self.width, alive))
    }
}
