//! Documented ranges of the state properties.
//!
//! The client sends whatever it's given, callers check input against these first.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

pub const HUE: RangeInclusive<u16> = 0..=360;
pub const SATURATION: RangeInclusive<u8> = 0..=100;
pub const LIGHTNESS: RangeInclusive<u8> = 0..=100;
pub const BRIGHTNESS: RangeInclusive<u8> = 0..=100;
pub const COLOR_TEMPERATURE: RangeInclusive<u16> = 1200..=6500;
pub const COLOR_CHANNEL: RangeInclusive<u8> = 0..=u8::MAX;
pub const PANEL_ID: RangeInclusive<u16> = 0..=u16::MAX;
/// Tenths of a second.
pub const TRANSITION_TIME: RangeInclusive<u16> = 0..=u16::MAX;

/// Checks `value` against `range`, naming the property in the error.
pub fn check<T>(name: &'static str, value: i64, range: &RangeInclusive<T>) -> Result<T>
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let (min, max) = ((*range.start()).into(), (*range.end()).into());
    if value < min || value > max {
        return Err(Error::out_of_range(name, value, min, max));
    }
    T::try_from(value).map_err(|_| Error::out_of_range(name, value, min, max))
}

/// Parses a decimal string and checks it against `range`.
pub fn parse<T>(name: &'static str, input: &str, range: &RangeInclusive<T>) -> Result<T>
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let value = input.trim().parse::<i64>().map_err(|_| {
        let (min, max) = ((*range.start()).into(), (*range.end()).into());
        Error::InvalidValue {
            name,
            input: input.to_string(),
            min,
            max,
        }
    })?;
    check(name, value, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds_are_inclusive() {
        assert_eq!(check("hue", 0, &HUE).unwrap(), 0);
        assert_eq!(check("hue", 360, &HUE).unwrap(), 360);
        assert_eq!(check("ct", 1200, &COLOR_TEMPERATURE).unwrap(), 1200);
        assert_eq!(check("ct", 6500, &COLOR_TEMPERATURE).unwrap(), 6500);
    }

    #[test]
    fn test_check_rejects_outside() {
        assert!(matches!(
            check("hue", 361, &HUE),
            Err(Error::OutOfRange { value: 361, .. })
        ));
        assert!(matches!(
            check("brightness", -1, &BRIGHTNESS),
            Err(Error::OutOfRange { min: 0, max: 100, .. })
        ));
        assert!(check("ct", 1199, &COLOR_TEMPERATURE).is_err());
    }

    #[test]
    fn test_check_full_width_ranges() {
        assert_eq!(check("red", 255, &COLOR_CHANNEL).unwrap(), 255);
        assert!(check("red", 256, &COLOR_CHANNEL).is_err());
        assert_eq!(check("panel", 65535, &PANEL_ID).unwrap(), 65535);
        assert!(check("transition", 65536, &TRANSITION_TIME).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("saturation", " 42 ", &SATURATION).unwrap(), 42);
        assert!(matches!(
            parse("saturation", "lots", &SATURATION),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            parse("lightness", "101", &LIGHTNESS),
            Err(Error::OutOfRange { .. })
        ));
    }
}
