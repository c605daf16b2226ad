use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque 8-bit RGB colour. Shapes copy one of these at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form, suitable for CSS and canvas styles.
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn css_rgba(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("colour {0:?} does not start with '#'")]
    MissingHash(String),
    #[error("colour {0:?} must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("colour {0:?} contains a non-hex digit")]
    BadDigit(String),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        match digits.len() {
            6 => Ok(Rgb::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #RGB shorthand doubles each digit
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }
}

/// A named palette entry as shown in the colour picker.
#[derive(Clone, Copy, Debug)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
}

impl Swatch {
    pub fn color(&self) -> Result<Rgb, ColorParseError> {
        self.hex.parse()
    }
}

pub const PALETTE: [Swatch; 10] = [
    Swatch { name: "Pink", hex: "#FF1493" },
    Swatch { name: "Royal Blue", hex: "#4169E1" },
    Swatch { name: "Orange Red", hex: "#FF4500" },
    Swatch { name: "Gold", hex: "#FFD700" },
    Swatch { name: "Lime Green", hex: "#32CD32" },
    Swatch { name: "Violet", hex: "#9400D3" },
    Swatch { name: "Tomato", hex: "#FF6347" },
    Swatch { name: "Cyan", hex: "#00FFFF" },
    Swatch { name: "Magenta", hex: "#FF00FF" },
    Swatch { name: "White", hex: "#FFFFFF" },
];

/// Resolve a palette index to its colour; `None` when out of range.
pub fn palette_color(index: usize) -> Option<Rgb> {
    PALETTE.get(index).and_then(|s| s.color().ok())
}
