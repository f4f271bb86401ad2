//! PRN / EPOCH line timestamp, ` YY MM DD HH MM SS.S` in GPST.
use hifitime::{Epoch, HifitimeError, TimeScale, Unit};
use thiserror::Error;

#[cfg(feature = "log")]
use log::debug;

/// Two digit years below this value belong to the 21st century
pub(crate) const ROLLOVER_YEAR: i32 = 80;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("expecting \" yy mm dd hh mm ss.s\" format")]
    FormatError,
    #[error("failed to parse years from \"{0}\"")]
    YearField(String),
    #[error("failed to parse months from \"{0}\"")]
    MonthField(String),
    #[error("failed to parse days from \"{0}\"")]
    DayField(String),
    #[error("failed to parse hours from \"{0}\"")]
    HoursField(String),
    #[error("failed to parse minutes field from \"{0}\"")]
    MinutesField(String),
    #[error("failed to parse seconds field from \"{0}\"")]
    SecondsField(String),
    #[error("invalid calendar date: {0}")]
    Calendar(#[from] HifitimeError),
}

/// Resolves a two digit year: 80-99 are 1980-1999, 00-79 are 2000-2079.
pub(crate) fn resolve_two_digit_year(yy: i32) -> i32 {
    if yy < ROLLOVER_YEAR {
        yy + 100 + 1900
    } else {
        yy + 1900
    }
}

/*
 * Parses the 20 character timestamp following the PRN.
 * Each sub field is 3 columns wide (seconds: 5 columns) and
 * starts with its blank separator.
 */
pub(crate) fn parse_nav_v2(content: &str) -> Result<Epoch, ParsingError> {
    if content.len() < 20 {
        return Err(ParsingError::FormatError);
    }

    let item = content.get(0..3).ok_or(ParsingError::FormatError)?;
    let y = item
        .trim()
        .parse::<i32>()
        .map_err(|_| ParsingError::YearField(item.to_string()))?;
    let y = resolve_two_digit_year(y);

    let item = content.get(3..6).ok_or(ParsingError::FormatError)?;
    let m = item
        .trim()
        .parse::<u8>()
        .map_err(|_| ParsingError::MonthField(item.to_string()))?;

    let item = content.get(6..9).ok_or(ParsingError::FormatError)?;
    let d = item
        .trim()
        .parse::<u8>()
        .map_err(|_| ParsingError::DayField(item.to_string()))?;

    let item = content.get(9..12).ok_or(ParsingError::FormatError)?;
    let hh = item
        .trim()
        .parse::<u8>()
        .map_err(|_| ParsingError::HoursField(item.to_string()))?;

    let item = content.get(12..15).ok_or(ParsingError::FormatError)?;
    let mm = item
        .trim()
        .parse::<u8>()
        .map_err(|_| ParsingError::MinutesField(item.to_string()))?;

    let item = content.get(15..20).ok_or(ParsingError::FormatError)?;
    let secs = item
        .trim()
        .parse::<f64>()
        .map_err(|_| ParsingError::SecondsField(item.to_string()))?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(ParsingError::SecondsField(item.to_string()));
    }

    let whole = secs.trunc();
    let nanos = ((secs - whole) * 1.0E9).round().min(999_999_999.0) as u32;

    if secs >= 60.0 {
        // Real files encode "hh 59 60.0" surprisingly often:
        // build the timestamp at the minute, then add the seconds.
        #[cfg(feature = "log")]
        debug!("tolerating {} seconds in \"{}\"", secs, content);

        let epoch = Epoch::maybe_from_gregorian(y, m, d, hh, mm, 0, 0, TimeScale::GPST)?;
        Ok(epoch + whole * Unit::Second + f64::from(nanos) * Unit::Nanosecond)
    } else {
        let epoch =
            Epoch::maybe_from_gregorian(y, m, d, hh, mm, whole as u8, nanos, TimeScale::GPST)?;
        Ok(epoch)
    }
}

/// Calendar decomposition of `epoch` in GPST.
/// GPST runs 19s behind TAI, without leap seconds.
pub(crate) fn gpst_decompose(epoch: Epoch) -> (i32, u8, u8, u8, u8, u8, u32) {
    (epoch - 19.0 * Unit::Second).to_gregorian_tai()
}

/// Formats `epoch` as the 20 character ` YY MM DD HH MM SS.S` timestamp.
pub(crate) fn format_nav_v2(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, nanos) = gpst_decompose(epoch);
    let secs = f64::from(ss) + f64::from(nanos) / 1.0E9;
    format!(
        " {:02} {:>2} {:>2} {:>2} {:>2}{:>5.1}",
        y.rem_euclid(100),
        m,
        d,
        hh,
        mm,
        secs
    )
}

/// Formats `epoch` as `mm/dd/YYYY HH:MM:SS`
pub(crate) fn format_calendar(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = gpst_decompose(epoch);
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        m, d, y, hh, mm, ss
    )
}

/// Formats `epoch` as `YYYY-mm-dd HH:MM:SS.sss GPST`
pub(crate) fn format_calendar_full(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, nanos) = gpst_decompose(epoch);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03} GPST",
        y,
        m,
        d,
        hh,
        mm,
        ss,
        nanos / 1_000_000
    )
}
