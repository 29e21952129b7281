//! Units of measure used throughout the crate.
//!
//! The PDF side of the crate speaks in [Pt] (1/72 of an inch). The preview is
//! laid out in [Px], CSS pixels of an 896 pixel wide page, and font sizes are
//! expressed in [Rem], where `1rem == 16px`.

use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// Points, the native unit of PDF user space
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Mul,
    MulAssign, Div, Sum, Display, From, Into,
)]
pub struct Pt(pub f32);

/// Inches
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Mul,
    MulAssign, Div, Sum, Display, From, Into,
)]
pub struct In(pub f32);

/// CSS pixels of the preview surface
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Mul,
    MulAssign, Div, Sum, Display, From, Into,
)]
pub struct Px(pub f32);

/// Root-em font size units
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Mul,
    MulAssign, Div, Sum, Display, From, Into,
)]
pub struct Rem(pub f32);

/// Pixels per root-em on the preview surface
pub const PX_PER_REM: f32 = 16.0;

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / 72.0)
    }
}

impl From<Rem> for Px {
    fn from(value: Rem) -> Self {
        Px(value.0 * PX_PER_REM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let width: Pt = In(11.0).into();
        let height: Pt = In(8.5).into();
        assert_eq!(width, Pt(792.0));
        assert_eq!(height, Pt(612.0));
    }

    #[test]
    fn rem_converts_to_px() {
        let px: Px = Rem(2.25).into();
        assert_eq!(px, Px(36.0));
    }

    #[test]
    fn scalar_arithmetic() {
        assert_eq!(Px(10.0) * 2.0, Px(20.0));
        assert_eq!(Px(10.0) / 4.0, Px(2.5));
        assert_eq!(Px(1.0) + Px(2.0) - Px(0.5), Px(2.5));
    }
}
