use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Flat row-major storage for a square grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    size: u8,
}

impl<T: Copy> Vec2d<T> {
    /// `rows` must already be square - the caller validates shape.
    pub(crate) fn new(rows: &[Vec<T>]) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));

        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            data.extend_from_slice(row);
        }
        Vec2d {
            data,
            size: size as u8,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn size(&self) -> u8 {
        self.size
    }

    pub(crate) fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.size.into())
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // leading newline per row - kept for compatibility with prior output
        for row in self.iter_rows() {
            write!(f, "\n")?;
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.r) * usize::from(self.size) + usize::from(index.c);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.r) * usize::from(self.size) + usize::from(index.c);
        &mut self.data[index]
    }
}
