use crate::units::*;
use std::ops::{Add, Sub};

/// A rectangle, specified by two opposite corners.
///
/// On PDF pages (`Rect<Pt>`) the first corner is the lower-left one. On the preview
/// surface (`Rect<Px>`) the origin is the top-left of the page and y grows downwards,
/// so the first corner is the upper-left one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect<U = Pt> {
    pub x1: U,
    pub y1: U,
    pub x2: U,
    pub y2: U,
}

impl<U> Rect<U>
where
    U: Copy + Add<Output = U> + Sub<Output = U>,
{
    pub fn new(x1: U, y1: U, x2: U, y2: U) -> Rect<U> {
        Rect { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> U {
        self.x2 - self.x1
    }

    pub fn height(&self) -> U {
        self.y2 - self.y1
    }

    /// Shrink the rectangle by the given amount on each side (top, right, bottom, left),
    /// assuming `y1` is the top edge
    pub fn inset(&self, top: U, right: U, bottom: U, left: U) -> Rect<U> {
        Rect {
            x1: self.x1 + left,
            y1: self.y1 + top,
            x2: self.x2 - right,
            y2: self.y2 - bottom,
        }
    }

    /// Shrink the rectangle by the same amount on every side
    pub fn inset_all(&self, amount: U) -> Rect<U> {
        self.inset(amount, amount, amount, amount)
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<&Rect> for pdf_writer::Rect {
    fn from(r: &Rect) -> Self {
        (*r).into()
    }
}
