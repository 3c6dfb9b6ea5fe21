use memchr::memrchr;

use crate::{Error, Result};

/// Splits `line` at the last `separator` into station name and temperature.
///
/// The temperature field must match `-?\d{1,2}\.\d`.
#[inline]
pub fn parse_record(line: &[u8], separator: u8) -> Result<(&[u8], i16)> {
    let idx = memrchr(separator, line).ok_or_else(|| Error::format(line, "no separator"))?;
    let (station, rest) = line.split_at(idx);
    let temperature =
        parse_temperature(&rest[1..]).ok_or_else(|| Error::format(line, "invalid number format"))?;
    Ok((station, temperature))
}

/// Decodes a one-decimal temperature into tenths, e.g. `b"-5.2"` to `-52`.
#[inline]
pub fn parse_temperature(data: &[u8]) -> Option<i16> {
    let (negative, digits) = match data {
        [b'-', rest @ ..] => (true, rest),
        rest => (false, rest),
    };
    let value = match *digits {
        [ones @ b'0'..=b'9', b'.', frac @ b'0'..=b'9'] => {
            i16::from(ones - b'0') * 10 + i16::from(frac - b'0')
        }
        [
            tens @ b'0'..=b'9',
            ones @ b'0'..=b'9',
            b'.',
            frac @ b'0'..=b'9',
        ] => i16::from(tens - b'0') * 100 + i16::from(ones - b'0') * 10 + i16::from(frac - b'0'),
        _ => return None,
    };
    Some(if negative { -value } else { value })
}
