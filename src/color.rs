use std::fmt;
use std::str::FromStr;

use crate::consts::CHANNEL_MODULUS;

/// Error type for hex color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not a 6-digit hex color.
    #[error("Invalid hex color: {0} (expected #rrggbb)")]
    InvalidHex(String),
}

/// An RGB color with 8-bit channels. The canonical text form is a
/// lowercase 6-digit hex string prefixed with `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from raw channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels in `[r, g, b]` order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Adds `delta` to every channel independently, wrapping each result
    /// into `0..=255` with a non-negative remainder. Negative deltas wrap
    /// upward (0 - 1 becomes 255), they are never clamped.
    pub fn wrap_adjust(self, delta: i64) -> Self {
        self.adjust_channels([delta; 3])
    }

    /// Adds a separate delta to each channel, wrapping each result into
    /// `0..=255` independently.
    pub fn adjust_channels(self, deltas: [i64; 3]) -> Self {
        let [r, g, b] = self.channels();
        Self::new(
            wrap(i64::from(r) + deltas[0]),
            wrap(i64::from(g) + deltas[1]),
            wrap(i64::from(b) + deltas[2]),
        )
    }

    /// Replaces every channel with its complement (`255 - channel`).
    /// Applying it twice yields the original color.
    pub const fn invert(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Self) -> f64 {
        let a = self.channels();
        let b = other.channels();
        let sum: i64 = a
            .iter()
            .zip(b.iter())
            .map(|(&x, &y)| {
                let d = i64::from(x) - i64::from(y);
                d * d
            })
            .sum();
        (sum as f64).sqrt()
    }

    /// Permutes this color's channels into the order that sorts
    /// `reference`'s channel positions by descending value. The sort is
    /// stable, so equal reference channels keep their original position
    /// order. The result is always a permutation of `self`'s channels.
    pub fn reorder_to(self, reference: Self) -> Self {
        let own = self.channels();
        let ref_channels = reference.channels();

        let mut order: [usize; 3] = [0, 1, 2];
        order.sort_by(|&a, &b| ref_channels[b].cmp(&ref_channels[a]));

        Self::new(own[order[0]], own[order[1]], own[order[2]])
    }

    /// Moves every channel halfway toward `reference`, wrapping the result.
    /// The half-step uses floor division, so a negative difference rounds
    /// toward negative infinity (e.g. `-25` for a difference of `-49`).
    pub fn blend_toward(self, reference: Self) -> Self {
        let own = self.channels();
        let ref_channels = reference.channels();

        let mut out = [0u8; 3];
        for i in 0..3 {
            let c = i64::from(own[i]);
            let r = i64::from(ref_channels[i]);
            out[i] = wrap(c + (r - c).div_euclid(2));
        }
        Self::new(out[0], out[1], out[2])
    }
}

/// Reduces an integer into `0..=255` via the mathematical (non-negative)
/// remainder modulo 256.
#[inline]
fn wrap(value: i64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.rem_euclid(CHANNEL_MODULUS) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_owned()));
        }

        let parse_pair = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_owned()))
        };

        Ok(Self::new(
            parse_pair(0..2)?,
            parse_pair(2..4)?,
            parse_pair(4..6)?,
        ))
    }
}

impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
