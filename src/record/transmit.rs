//! Transmission time and week disambiguation.
//!
//! BROADCAST ORBIT 5 carries the week of the orbit block (TOE week) while
//! BROADCAST ORBIT 7 carries the subframe 1 transmission time in seconds,
//! which may belong to the week before or after, or even be negative
//! (RINEX 2.11 table A4 footnote). Both are stored as written and the
//! transmission week is recovered on demand.
use hifitime::Epoch;

use crate::{
    gps_time::{normalize_sow, WeekSecond, FULLWEEK, HALFWEEK},
    record::NavigationRecord,
};

#[cfg(feature = "log")]
use log::debug;

impl NavigationRecord {
    /// Resolves the subframe 1 transmission time as full week and seconds of week.
    /// A negative transmission time belongs to the week preceding the TOE week,
    /// otherwise a half week test against TOE selects the previous, same or next week.
    pub fn transmit_week_second(&self) -> WeekSecond {
        let toe_week = i32::from(self.toe_week);
        if self.transmit_time < 0.0 {
            #[cfg(feature = "log")]
            debug!("prn {}: negative transmission time {}", self.prn, self.transmit_time);

            WeekSecond::new(toe_week - 1, normalize_sow(self.transmit_time + FULLWEEK))
        } else {
            let sow = normalize_sow(self.transmit_time);
            let diff = self.toe - sow;
            if diff < -HALFWEEK {
                WeekSecond::new(toe_week - 1, sow)
            } else if diff > HALFWEEK {
                WeekSecond::new(toe_week + 1, sow)
            } else {
                WeekSecond::new(toe_week, sow)
            }
        }
    }

    /// Subframe 1 transmission time, as [Epoch] expressed in GPST
    pub fn transmit_epoch(&self) -> Epoch {
        self.transmit_week_second().to_epoch()
    }

    /// Declares `full_week` as the transmission week: the TOE week
    /// label and transmission time are adjusted so that
    /// [Self::transmit_week_second] reports `full_week` for any
    /// transmission time within [0, FULLWEEK).
    /// A negative transmission time only assigns the week label.
    pub fn assign_transmit_week(&mut self, full_week: i32) {
        if self.transmit_time < 0.0 {
            self.toe_week = full_week as i16;
        } else {
            let diff = self.toe - self.transmit_time;
            if diff < -HALFWEEK {
                self.toe_week = (full_week + 1) as i16;
                self.transmit_time -= FULLWEEK;
            } else if diff > HALFWEEK {
                self.toe_week = (full_week - 1) as i16;
                self.transmit_time += FULLWEEK;
            } else {
                self.toe_week = full_week as i16;
            }
        }
    }

    /// Sets the subframe 1 transmission time, from `full_week` and
    /// seconds of week `sow`.
    pub fn set_transmit_time(&mut self, full_week: i32, sow: f64) {
        self.transmit_time = sow;
        self.assign_transmit_week(full_week);
    }

    /// Time of clock, as full week and seconds of week
    pub fn toc_week_second(&self) -> WeekSecond {
        WeekSecond::from_epoch(self.epoch)
    }

    /// Time of ephemeris, as full week and seconds of week.
    /// The TOE week label is used as is.
    pub fn toe_week_second(&self) -> WeekSecond {
        WeekSecond::new(i32::from(self.toe_week), self.toe)
    }

    /// Time of ephemeris, as [Epoch] expressed in GPST
    pub fn toe_epoch(&self) -> Epoch {
        self.toe_week_second().to_epoch()
    }
}
