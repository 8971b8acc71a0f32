//! 8-bit RGB pixel type
//!
//! Channels are stored as plain bytes. There is no alpha channel and no
//! gamma handling: the sepia mix operates directly on the encoded values.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A single pixel with 8-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, the default background of a fresh output buffer.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new pixel from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use sepia_tone::Rgb;
    /// let white = Rgb::from_bytes([255, 255, 255]);
    /// assert_eq!(white, Rgb::WHITE);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#RRGGBB` (uppercase).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Read a background color written as `#RRGGBB` or `#RGB`.
    ///
    /// The `#` is optional, digits are case-insensitive and surrounding
    /// whitespace is ignored. Each shorthand digit is doubled (`#F80` is
    /// `#FF8800`).
    ///
    /// ```
    /// use sepia_tone::Rgb;
    ///
    /// assert_eq!("#704214".parse::<Rgb>().unwrap(), Rgb::new(0x70, 0x42, 0x14));
    /// assert_eq!("f80".parse::<Rgb>().unwrap(), Rgb::new(0xFF, 0x88, 0x00));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let body = input.strip_prefix('#').unwrap_or(input);

        let mut nibbles = [0u8; 6];
        let mut count = 0;
        for found in body.chars() {
            let value = found
                .to_digit(16)
                .ok_or_else(|| ParseColorError::NotHexDigit {
                    input: input.to_string(),
                    found,
                })?;
            if let Some(slot) = nibbles.get_mut(count) {
                *slot = value as u8;
            }
            count += 1;
        }

        let [a, b, c, d, e, f] = nibbles;
        match count {
            3 => Ok(Self::new(a * 0x11, b * 0x11, c * 0x11)),
            6 => Ok(Self::new(a << 4 | b, c << 4 | d, e << 4 | f)),
            digits => Err(ParseColorError::WrongDigitCount {
                input: input.to_string(),
                digits,
            }),
        }
    }
}
