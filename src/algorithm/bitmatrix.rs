use crate::io::error::{Result, allocation_failure};
use bitvec::prelude::*;
use ndarray::Array2;
use std::fmt;

/// Dense boolean grid packed at one bit per cell
///
/// Rows are stored back to back, each padded to a whole number of bytes so
/// that column `x` of row `y` lives in bit `x % 8` of byte `y * row_bytes + x / 8`.
/// Padding bits past `x_len` in a row's final byte are never touched.
#[derive(Clone, Debug)]
pub struct BitMatrix {
    bits: BitVec<u8, Lsb0>,
    y_len: usize,
    x_len: usize,
    row_bytes: usize,
}

impl BitMatrix {
    /// Bytes needed to store a `y_len` by `x_len` grid, or `None` on overflow
    pub const fn required_bytes(y_len: usize, x_len: usize) -> Option<usize> {
        y_len.checked_mul(x_len.div_ceil(8))
    }

    /// Create a zero-initialized grid
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailure`](crate::PartitionError::AllocationFailure)
    /// if the byte count overflows or the allocator refuses the request
    pub fn allocate(y_len: usize, x_len: usize) -> Result<Self> {
        let row_bytes = x_len.div_ceil(8);
        let bytes = Self::required_bytes(y_len, x_len)
            .ok_or_else(|| allocation_failure(y_len, x_len, "byte count overflows usize"))?;
        if bytes.saturating_mul(8) > BitSlice::<u8, Lsb0>::MAX_BITS {
            return Err(allocation_failure(
                y_len,
                x_len,
                "bit count exceeds addressable range",
            ));
        }

        let mut storage: Vec<u8> = Vec::new();
        storage
            .try_reserve_exact(bytes)
            .map_err(|_reserve_error| allocation_failure(y_len, x_len, "out of memory"))?;
        storage.resize(bytes, 0);

        Ok(Self {
            bits: BitVec::from_vec(storage),
            y_len,
            x_len,
            row_bytes,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.y_len
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.x_len
    }

    /// Bytes occupied by each packed row
    pub const fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    // None for out-of-range coordinates, including row padding
    const fn bit_index(&self, y: usize, x: usize) -> Option<usize> {
        if y < self.y_len && x < self.x_len {
            Some(y * self.row_bytes * 8 + x)
        } else {
            None
        }
    }

    /// Read the cell at row `y`, column `x`
    ///
    /// Coordinates outside the grid read as unset.
    pub fn get(&self, y: usize, x: usize) -> bool {
        self.bit_index(y, x)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Set the cell at row `y`, column `x`
    ///
    /// Cells are never cleared; out-of-range coordinates are ignored.
    pub fn set(&mut self, y: usize, x: usize) {
        if let Some(index) = self.bit_index(y, x) {
            self.bits.set(index, true);
        }
    }

    /// Set every cell of row `y`
    pub fn fill_row(&mut self, y: usize) {
        for x in 0..self.x_len {
            self.set(y, x);
        }
    }

    /// Count set cells
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Materialize the grid as rows of 0/1 for diagnostic output
    pub fn dump(&self) -> Array2<u8> {
        Array2::from_shape_fn((self.y_len, self.x_len), |(y, x)| u8::from(self.get(y, x)))
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BitMatrix({}x{}, {} set)",
            self.y_len,
            self.x_len,
            self.count_ones()
        )
    }
}
