//! Target color type and its CLI/config representations.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGB color.
///
/// Serialized as a 3-element array (`[30, 64, 175]`) in JSON configs and
/// reports; parsed from `r,g,b` on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Default target color when none is configured (Tailwind blue-800).
pub const DEFAULT_TARGET: Rgb = Rgb {
    r: 30,
    g: 64,
    b: 175,
};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parses `r,g,b` with optional whitespace around each channel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels: Vec<&str> = s.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return Err(format!(
                "expected 3 comma-separated channels, got {} in {s:?}",
                channels.len()
            ));
        }
        let parse = |part: &str| {
            part.parse::<u8>()
                .map_err(|e| format!("invalid channel value {part:?}: {e}"))
        };
        Ok(Self {
            r: parse(channels[0])?,
            g: parse(channels[1])?,
            b: parse(channels[2])?,
        })
    }
}
