//! GrayGrid - 8-bit grayscale pixel grid
//!
//! The `GrayGrid` is the input container consumed by the texture
//! reductions: a rectangular buffer of 8-bit intensity samples with
//! known row and column extents, stored row-major.
//!
//! Zero-sized grids are valid. Algorithms that require a 3x3
//! neighborhood simply produce empty output for grids smaller than
//! 3x3 in either dimension; constructing such a grid is never an error.

use crate::error::{Error, Result};

/// 8-bit grayscale image grid, row-major with stride equal to width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayGrid {
    /// Create a zero-filled grid. Any dimensions are accepted,
    /// including zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rlbp_core::GrayGrid;
    ///
    /// let grid = GrayGrid::new(5, 5);
    /// assert_eq!(grid.width(), 5);
    /// assert_eq!(grid.get(2, 2), Some(0));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Create a grid from an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the intensity at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the intensity at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the intensity at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates fall
    /// outside the grid.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = val;
        Ok(())
    }

    /// One row of samples as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// The whole pixel buffer, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(feature = "image")]
impl From<&image::GrayImage> for GrayGrid {
    fn from(img: &image::GrayImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().clone(),
        }
    }
}

#[cfg(feature = "image")]
impl GrayGrid {
    /// Convert the grid into an [`image::GrayImage`].
    ///
    /// Returns `None` only if the dimensions overflow the `image`
    /// crate's buffer limits.
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        image::GrayImage::from_raw(self.width, self.height, self.data.clone())
    }
}
