//! Fixed width numeric fields of the navigation record.
//!
//! Each field spans 19 columns: one blank separator, the sign column
//! (blank or `-`), then a normalized fraction with 12 digits and a
//! two digit exponent, FORTRAN style:
//! ```text
//!  .910000000000D+02
//! -.839701388031D-03
//! ```
use crate::FormattingError;

/// Width of a numeric field, separator included
pub const FIELD_WIDTH: usize = 19;

/// Number of digits of the normalized fraction
pub const MANTISSA_DIGITS: usize = 12;

/// Formats `value` as a [FIELD_WIDTH] wide field.
pub fn format_field(value: f64) -> Result<String, FormattingError> {
    if !value.is_finite() {
        return Err(FormattingError::NonFiniteValue(value));
    }

    if value == 0.0 {
        return Ok(format!("  .{}D+00", "0".repeat(MANTISSA_DIGITS)));
    }

    // d.ddddddddddde<exp>: rounding to 12 significant digits is performed here,
    // including the carry into the exponent.
    let scientific = format!("{:.*e}", MANTISSA_DIGITS - 1, value.abs());

    let (mantissa, exponent) = scientific
        .split_once('e')
        .ok_or(FormattingError::NonFiniteValue(value))?;

    let exponent = exponent
        .parse::<i32>()
        .map_err(|_| FormattingError::NonFiniteValue(value))?;

    // 0.d... has one more unit in exponent than d.ddd
    let exponent = exponent + 1;
    if exponent.abs() > 99 {
        return Err(FormattingError::ExponentOverflow(value));
    }

    let digits = mantissa.replace('.', "");

    Ok(format!(
        " {}.{}D{}{:02}",
        if value < 0.0 { '-' } else { ' ' },
        digits,
        if exponent < 0 { '-' } else { '+' },
        exponent.abs(),
    ))
}

/// Parses a numeric field. `D`, `d`, `E` and `e` exponent markers are accepted.
/// A blank field is an omitted field, which decodes as zero.
pub fn parse_field(content: &str) -> Result<f64, std::num::ParseFloatError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(0.0);
    }
    content.replace('D', "E").replace('d', "e").parse::<f64>()
}

/// Returns the [FIELD_WIDTH] wide slice of `line` starting at `offset`,
/// truncated when the line is shorter (trailing blanks are often stripped).
/// Returns None when `offset` lies past the end of the line.
pub(crate) fn field_at(line: &str, offset: usize) -> Option<&str> {
    if offset > line.len() {
        return None;
    }
    let end = (offset + FIELD_WIDTH).min(line.len());
    line.get(offset..end)
}
