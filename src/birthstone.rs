use crate::color::Color;
use crate::consts::MAX_MONTH;

/// Error type for birthstone lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BirthstoneError {
    /// Month is outside the 1..=12 range covered by the table.
    #[error("No birthstone for month {0} (expected 1-12)")]
    UnknownMonth(u8),
}

/// A calendar month's stone: its traditional name and display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthstone {
    name: &'static str,
    color: Color,
}

impl Birthstone {
    const fn new(name: &'static str, color: Color) -> Self {
        Self { name, color }
    }

    /// Returns the stone's traditional name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the stone's display color.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// One stone per calendar month, January through December. Immutable for
/// the life of the process.
pub const BIRTHSTONES: [Birthstone; 12] = [
    Birthstone::new("Garnet", Color::new(0x78, 0x12, 0x44)),
    Birthstone::new("Amethyst", Color::new(0x99, 0x66, 0xCC)),
    Birthstone::new("Aquamarine", Color::new(0x7F, 0xFF, 0xD4)),
    Birthstone::new("Diamond", Color::new(0xFF, 0xFF, 0xFF)),
    Birthstone::new("Emerald", Color::new(0x50, 0xC8, 0x78)),
    Birthstone::new("Pearl", Color::new(0xF0, 0xF8, 0xFF)),
    Birthstone::new("Ruby", Color::new(0xE0, 0x11, 0x5F)),
    Birthstone::new("Peridot", Color::new(0xE6, 0xE2, 0x00)),
    Birthstone::new("Sapphire", Color::new(0x0F, 0x52, 0xBA)),
    Birthstone::new("Opal", Color::new(0xA8, 0xC3, 0xBC)),
    Birthstone::new("Topaz", Color::new(0xFF, 0xC8, 0x7C)),
    Birthstone::new("Turquoise", Color::new(0x40, 0xE0, 0xD0)),
];

/// Looks up the stone for a 1-based month number.
///
/// Callers that already hold a validated [`crate::Month`] cannot trigger the
/// error branch, but the lookup still refuses out-of-range input rather than
/// defaulting.
///
/// # Errors
/// Returns `BirthstoneError::UnknownMonth` if `month` is not in 1..=12.
pub fn birthstone_for(month: u8) -> Result<&'static Birthstone, BirthstoneError> {
    if month == 0 || month > MAX_MONTH {
        return Err(BirthstoneError::UnknownMonth(month));
    }
    Ok(&BIRTHSTONES[month as usize - 1])
}
