use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// The colour as an RGB triple, expanding grey to equal components
    pub fn to_rgb(self) -> [f32; 3] {
        match self {
            Colour::RGB { r, g, b } => [r, g, b],
            Colour::Grey { g } => [g, g, g],
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

// colours travel through configuration as `[r, g, b]` on a 0-1 scale
impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rgb().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rgb = <[f32; 3]>::deserialize(deserializer)?;
        if let Some(component) = rgb.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(serde::de::Error::custom(format!(
                "colour component {component} is outside of the 0-1 range"
            )));
        }
        Ok(Colour::from(rgb))
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}
