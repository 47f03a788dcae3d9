//! The derivation pipeline: a fixed sequence of arithmetic transforms that
//! maps a birth date to three display colors and a birthstone name.
//!
//! The recipe is arbitrary but frozen: every step, including intermediate
//! truncation, must reproduce the same bytes for the same input. Nothing
//! here consults real astronomy.

use serde::Serialize;

use crate::birthstone::{Birthstone, BirthstoneError, birthstone_for};
use crate::color::Color;
use crate::consts::{BASE_DATE, BASE_SUN_COLOR, MOON_REFERENCE, RISING_REFERENCE};
use crate::types::days_from_civil;
use crate::{BirthDate, ParseError};

/// Error type for a pipeline run. A failed run yields no colors at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// The input did not parse as a valid calendar date.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The birthstone lookup was handed a month outside 1..=12. Parsing
    /// rules this out, but the lookup is still guarded.
    #[error(transparent)]
    Birthstone(#[from] BirthstoneError),
}

/// The four values derived from one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorProfile {
    pub sun: Color,
    pub moon: Color,
    pub rising: Color,
    pub birthstone: &'static str,
}

/// Derives the color profile for a `MM/DD/YYYY` date string.
///
/// # Errors
/// Returns `PipelineError::Parse` for unparsable or invalid dates, and
/// `PipelineError::Birthstone` if the defensive table lookup ever fails.
pub fn generate(birth_date: &str) -> Result<ColorProfile, PipelineError> {
    let date: BirthDate = birth_date.parse()?;
    generate_for(&date)
}

/// Derives the color profile for an already-parsed date.
///
/// # Errors
/// Returns `PipelineError::Birthstone` if the defensive table lookup fails
/// (unreachable for a validated `BirthDate`).
pub fn generate_for(date: &BirthDate) -> Result<ColorProfile, PipelineError> {
    let (base_year, base_month, base_day) = BASE_DATE;
    let days_diff = date.day_number() - days_from_civil(base_year, base_month, base_day);

    let stone = birthstone_for(date.month())?;

    let sun = BASE_SUN_COLOR.wrap_adjust(days_diff);

    // Distances are truncated toward zero before they become wrap deltas.
    #[allow(clippy::cast_possible_truncation)]
    let moon_shift = sun.distance(MOON_REFERENCE) as i64;
    #[allow(clippy::cast_possible_truncation)]
    let rising_shift = sun.distance(RISING_REFERENCE) as i64;

    let moon = sun.wrap_adjust(moon_shift);
    let rising = sun.wrap_adjust(-rising_shift);

    let sun = apply_birthstone_weight(sun, stone);
    let moon = apply_birthstone_weight(moon, stone);
    let rising = apply_birthstone_weight(rising, stone);

    let moon = adjust_moon_color(moon, date.year());
    let rising = rising.invert();

    Ok(ColorProfile {
        sun,
        moon,
        rising,
        birthstone: stone.name(),
    })
}

/// Reorders the color's channels to the stone's descending channel order,
/// then blends the result halfway toward the stone color.
fn apply_birthstone_weight(color: Color, stone: &Birthstone) -> Color {
    color.reorder_to(stone.color()).blend_toward(stone.color())
}

/// Shifts the moon color by digits of the birth year: zero-pad the year to
/// six decimal digits, add the first pair to red, add the last pair to
/// blue, and subtract their sum from green. The middle pair of digits is
/// never read; the recipe leaves that gap and it is kept as-is rather than
/// "fixed".
fn adjust_moon_color(color: Color, year: u16) -> Color {
    let year = i64::from(year);
    let high = year / 10_000;
    let low = year % 100;
    color.adjust_channels([high, -(high + low), low])
}
