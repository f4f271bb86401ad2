//! GPS week and seconds of week
use hifitime::{Duration, Epoch, TimeScale};

/// Number of seconds in one GPS week
pub const FULLWEEK: f64 = 604_800.0;

/// Half a GPS week, threshold of the week disambiguation tests
pub const HALFWEEK: f64 = 302_400.0;

const NANOSECONDS_PER_WEEK: i128 = 604_800 * 1_000_000_000;

/// Folds any seconds of week value into [0, FULLWEEK).
pub fn normalize_sow(sow: f64) -> f64 {
    let folded = sow.rem_euclid(FULLWEEK);
    // rem_euclid may round up to the modulus itself for tiny negative inputs
    if folded >= FULLWEEK {
        0.0
    } else {
        folded
    }
}

/// Origin of GPS time, 1980-01-06T00:00:00 GPST
pub fn gpst_origin() -> Epoch {
    Epoch::from_duration(Duration::ZERO, TimeScale::GPST)
}

/// Time expressed as a full GPS week counter and seconds within that week.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeekSecond {
    /// Full (not rolled over) GPS week
    pub week: i32,
    /// Seconds of week
    pub sow: f64,
}

impl std::fmt::Display for WeekSecond {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "week {} sow {:.3}", self.week, self.sow)
    }
}

impl WeekSecond {
    pub fn new(week: i32, sow: f64) -> Self {
        Self { week, sow }
    }

    /// Decomposes `epoch`, expressed in GPST.
    pub fn from_epoch(epoch: Epoch) -> Self {
        let (week, nanos) = epoch.to_time_scale(TimeScale::GPST).to_time_of_week();
        Self {
            week: week as i32,
            sow: nanos as f64 / 1.0E9,
        }
    }

    /// Converts to a GPST [Epoch]. Seconds of week are not required
    /// to lie within the week: the excess carries into the week counter.
    pub fn to_epoch(&self) -> Epoch {
        let weeks = i128::from(self.week) * NANOSECONDS_PER_WEEK;
        Epoch::from_duration(
            Duration::from_total_nanoseconds(weeks) + Duration::from_seconds(self.sow),
            TimeScale::GPST,
        )
    }

    /// Returns `self` shifted by `seconds`, with week rollover.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        let total = self.sow + seconds;
        let weeks = (total / FULLWEEK).floor();
        Self {
            week: self.week + weeks as i32,
            sow: total - weeks * FULLWEEK,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn sow_normalization() {
        for (raw, expected) in [
            (0.0, 0.0),
            (100.0, 100.0),
            (604_700.0, 604_700.0),
            (604_800.0, 0.0),
            (604_900.0, 100.0),
            (-100.0, 604_700.0),
            (-604_800.0, 0.0),
            (1_209_700.0, 100.0),
            (-604_900.0, 604_700.0),
        ] {
            assert_eq!(normalize_sow(raw), expected, "failed for {}", raw);
        }
        let tiny = normalize_sow(-1.0E-20);
        assert!((0.0..FULLWEEK).contains(&tiny));
    }
    #[test]
    fn week_second_epoch() {
        let t = Epoch::from_str("1999-09-02T17:51:44 GPST").unwrap();
        let ws = WeekSecond::from_epoch(t);
        assert_eq!(ws, WeekSecond::new(1025, 409_904.0));
        assert_eq!(ws.to_epoch(), t);

        assert_eq!(WeekSecond::from_epoch(gpst_origin()), WeekSecond::new(0, 0.0));

        // excess seconds carry into the week counter
        let ws = WeekSecond::new(1024, FULLWEEK + 409_904.0);
        assert_eq!(ws.to_epoch(), t);
    }
    #[test]
    fn week_second_shift() {
        let ws = WeekSecond::new(1000, 604_794.0);
        assert_eq!(ws.add_seconds(6.0), WeekSecond::new(1001, 0.0));
        assert_eq!(ws.add_seconds(12.0), WeekSecond::new(1001, 6.0));
        assert_eq!(ws.add_seconds(-604_794.0), WeekSecond::new(1000, 0.0));
        assert_eq!(
            WeekSecond::new(1000, 3.0).add_seconds(-6.0),
            WeekSecond::new(999, 604_797.0)
        );
        assert_eq!(ws.to_string(), "week 1000 sow 604794.000");
    }
}
