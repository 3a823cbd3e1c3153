//! Colour type, hex parsing and the shorthand colour aliases.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShapezError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Magenta (drawn for colours that cannot be parsed).
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Outline drawn around every sub-shape (`#555`).
    pub const OUTLINE: Self = Self::rgb(0x55, 0x55, 0x55);

    /// Faint disc behind the shape, `rgba(40, 50, 65, 0.1)`.
    pub const BACKDROP: Self = Self::new(40, 50, 65, 26);

    /// Parse a hex colour string.
    ///
    /// Supports `RGB` and `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<char> = hex.chars().collect();

        match digits.as_slice() {
            [r, g, b] => {
                let r = parse_hex_digit(*r)?;
                let g = parse_hex_digit(*g)?;
                let b = parse_hex_digit(*b)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            [r1, r2, g1, g2, b1, b2] => {
                let r = parse_hex_digit(*r1)? << 4 | parse_hex_digit(*r2)?;
                let g = parse_hex_digit(*g1)? << 4 | parse_hex_digit(*g2)?;
                let b = parse_hex_digit(*b1)? << 4 | parse_hex_digit(*b2)?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(ShapezError::Render {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use RGB or RRGGBB hex digits".to_string()),
            }),
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Colour {
    type Err = ShapezError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ShapezError::Render {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Single-letter colour aliases accepted inside a colour token, e.g. `R(r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortColor {
    Red,
    Green,
    Blue,
    Purple,
    Cyan,
    Yellow,
    Uncolored,
    White,
    Black,
}

impl ShortColor {
    pub const ALL: [ShortColor; 9] = [
        ShortColor::Red,
        ShortColor::Green,
        ShortColor::Blue,
        ShortColor::Purple,
        ShortColor::Cyan,
        ShortColor::Yellow,
        ShortColor::Uncolored,
        ShortColor::White,
        ShortColor::Black,
    ];

    /// Look up an alias by its letter.
    pub fn from_alias(c: char) -> Option<Self> {
        match c {
            'r' => Some(ShortColor::Red),
            'g' => Some(ShortColor::Green),
            'b' => Some(ShortColor::Blue),
            'p' => Some(ShortColor::Purple),
            'c' => Some(ShortColor::Cyan),
            'y' => Some(ShortColor::Yellow),
            'u' => Some(ShortColor::Uncolored),
            'w' => Some(ShortColor::White),
            'k' => Some(ShortColor::Black),
            _ => None,
        }
    }

    pub const fn alias(self) -> char {
        match self {
            ShortColor::Red => 'r',
            ShortColor::Green => 'g',
            ShortColor::Blue => 'b',
            ShortColor::Purple => 'p',
            ShortColor::Cyan => 'c',
            ShortColor::Yellow => 'y',
            ShortColor::Uncolored => 'u',
            ShortColor::White => 'w',
            ShortColor::Black => 'k',
        }
    }

    /// The hex string the alias expands to (no leading `#`).
    pub const fn hex(self) -> &'static str {
        match self {
            ShortColor::Red => "ff666a",
            ShortColor::Green => "78ff66",
            ShortColor::Blue => "66a7ff",
            ShortColor::Purple => "dd66ff",
            ShortColor::Cyan => "00fcff",
            ShortColor::Yellow => "fcf52a",
            ShortColor::Uncolored => "aaa",
            ShortColor::White => "fff",
            ShortColor::Black => "000",
        }
    }
}
