//! Curve fit interval, IS-GPS-200 20.3.4.4
use crate::ConversionError;

/// Fit interval (hours) when the fit interval flag is clear
pub const NOMINAL_FIT_INTERVAL: u16 = 4;

/// Returns the curve fit interval in hours, from the
/// broadcast IODC and fit interval flag.
/// An IODC outside of 0..=1023 is considered corrupt and
/// falls back to the [NOMINAL_FIT_INTERVAL].
/// Extended fit intervals are tied to IODC ranges, an IODC
/// outside of these is reported as [ConversionError::InvalidIodc].
pub fn fit_interval_hours(iodc: i32, flag: bool) -> Result<u16, ConversionError> {
    if !(0..=1023).contains(&iodc) || !flag {
        return Ok(NOMINAL_FIT_INTERVAL);
    }
    if (iodc & 0xFF) < 240 {
        Ok(6)
    } else if (240..=247).contains(&iodc) {
        Ok(8)
    } else if (248..=255).contains(&iodc) || iodc == 496 {
        Ok(14)
    } else if (497..=503).contains(&iodc) || (1021..=1023).contains(&iodc) {
        Ok(26)
    } else if (504..=510).contains(&iodc) {
        Ok(50)
    } else if iodc == 511 || (752..=756).contains(&iodc) {
        Ok(74)
    } else if iodc == 757 {
        Ok(98)
    } else {
        Err(ConversionError::InvalidIodc(iodc as u16))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn nominal_fit_interval() {
        for iodc in [0, 91, 240, 757, 1023] {
            assert_eq!(fit_interval_hours(iodc, false), Ok(4));
        }
        // corrupt IODC
        assert_eq!(fit_interval_hours(-1, true), Ok(4));
        assert_eq!(fit_interval_hours(1024, true), Ok(4));
    }
    #[test]
    fn extended_fit_interval() {
        for (iodc, hours) in [
            (0, 6),
            (91, 6),
            (239, 6),
            (256 + 91, 6),
            (240, 8),
            (247, 8),
            (248, 14),
            (255, 14),
            (496, 14),
            (497, 26),
            (503, 26),
            (1021, 26),
            (1023, 26),
            (504, 50),
            (510, 50),
            (511, 74),
            (752, 74),
            (756, 74),
            (757, 98),
        ] {
            assert_eq!(fit_interval_hours(iodc, true), Ok(hours), "iodc={}", iodc);
        }
    }
    #[test]
    fn invalid_iodc() {
        for iodc in [1008, 760, 1016, 1020] {
            assert_eq!(
                fit_interval_hours(iodc, true),
                Err(ConversionError::InvalidIodc(iodc as u16))
            );
        }
    }
}
