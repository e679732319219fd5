use anyhow::{bail, Result};

/// A one-bit mask image stored row-major.
///
/// Masks are authored as rows of `#` (set) and `.` (clear) and tinted with a
/// single colour when drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Bitmap {
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let Some(first) = rows.first() else {
            bail!("bitmap has no rows");
        };
        let width = first.chars().count();
        if width == 0 {
            bail!("bitmap rows are empty");
        }

        let mut bits = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                bail!("row {y} is {len} pixels wide, expected {width}");
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '#' => bits.push(true),
                    '.' => bits.push(false),
                    other => bail!("unexpected {other:?} at column {x} of row {y}"),
                }
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            bits,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }
}
