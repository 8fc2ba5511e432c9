/// Colour of text, borders and cell fills.
///
/// Channels are in `0.0..=1.0`. A drawing driver maps each variant onto the
/// matching device colour space.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    RGB { r: f32, g: f32, b: f32 },
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    Grey { g: f32 },
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl Colour {
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// RGB colour from 8-bit channels, as table styles are usually written
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        let channel = |v: u8| v as f32 / 255.0;
        Colour::RGB {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// Colours used for table styling
pub mod colours {
    use super::Colour;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Header row fill
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.85 };
    pub const RED: Colour = Colour::RGB { r: 1.0, g: 0.0, b: 0.0 };
    pub const BLUE: Colour = Colour::RGB { r: 0.0, g: 0.0, b: 1.0 };
}
