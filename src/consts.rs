use crate::color::Color;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Field separator for the month-first date format (MM/DD/YYYY)
pub const DATE_SEPARATOR: char = '/';

/// Channel arithmetic wraps modulo 256 (non-negative remainder)
pub const CHANNEL_MODULUS: i64 = 256;

/// Sun color anchor from which every derivation starts (#5a3442)
pub const BASE_SUN_COLOR: Color = Color::new(0x5A, 0x34, 0x42);

/// Date anchor the signed day delta is measured from: (year, month, day) of July 17, 2002
pub const BASE_DATE: (u16, u8, u8) = (2002, 7, 17);

/// Mid-gray reference the moon color distance is taken against (#808080)
pub const MOON_REFERENCE: Color = Color::new(0x80, 0x80, 0x80);

/// Silver reference the rising color distance is taken against (#c0c0c0)
pub const RISING_REFERENCE: Color = Color::new(0xC0, 0xC0, 0xC0);
