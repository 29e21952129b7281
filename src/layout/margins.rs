use crate::rect::Rect;
use crate::units::Px;

/// Space reserved on each side of a box, in the same order as CSS margins and
/// padding. Applying margins to a [Rect] yields the box's content area.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Margins of two nested boxes combined
    pub fn plus(&self, other: Margins) -> Margins {
        Margins {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }

    /// The area left inside `rect` once these margins are taken away
    pub fn apply(&self, rect: Rect<Px>) -> Rect<Px> {
        rect.inset(self.top, self.right, self.bottom, self.left)
    }
}

impl From<(Px, Px, Px, Px)> for Margins {
    fn from((top, right, bottom, left): (Px, Px, Px, Px)) -> Self {
        Margins::trbl(top, right, bottom, left)
    }
}
