/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Quantize to 8-bit RGB for raster output
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Colour::RGB { r, g, b } => [q(r), q(g), q(b)],
            Colour::Grey { g } => [q(g); 3],
        }
    }
}

/// The palette the diploma templates are drawn with
pub mod colours {
    use super::*;

    macro_rules! rgb_bytes {
        ($r:expr, $g:expr, $b:expr) => {
            Colour::RGB {
                r: $r as f32 / 255.0,
                g: $g as f32 / 255.0,
                b: $b as f32 / 255.0,
            }
        };
    }

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    pub const GRAY_300: Colour = rgb_bytes!(0xd1, 0xd5, 0xdb);
    pub const GRAY_400: Colour = rgb_bytes!(0x9c, 0xa3, 0xaf);
    pub const GRAY_500: Colour = rgb_bytes!(0x6b, 0x72, 0x80);
    pub const GRAY_600: Colour = rgb_bytes!(0x4b, 0x55, 0x63);
    pub const GRAY_700: Colour = rgb_bytes!(0x37, 0x41, 0x51);
    pub const GRAY_800: Colour = rgb_bytes!(0x1f, 0x29, 0x37);
    pub const GRAY_900: Colour = rgb_bytes!(0x11, 0x18, 0x27);

    pub const BLUE_800: Colour = rgb_bytes!(0x1e, 0x40, 0xaf);
    pub const BLUE_900: Colour = rgb_bytes!(0x1e, 0x3a, 0x8a);

    pub const YELLOW_400: Colour = rgb_bytes!(0xfa, 0xcc, 0x15);
    pub const YELLOW_500: Colour = rgb_bytes!(0xea, 0xb3, 0x08);

    pub const RED_900: Colour = rgb_bytes!(0x7f, 0x1d, 0x1d);
}
