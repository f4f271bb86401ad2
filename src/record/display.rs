//! Human readable descriptions
use crate::{
    epoch::{format_calendar, format_calendar_full},
    gps_time::WeekSecond,
    record::{NavigationRecord, ORDERED_FIELDS},
};

use std::io::Write;

impl std::fmt::Display for NavigationRecord {
    /// Compact, single line description
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "PRN: {:>2} TOE: {} TOC: {} IODE: {:>4} HOWtime: {:>6}",
            self.prn,
            format_calendar(self.toe_epoch()),
            format_calendar(self.epoch),
            self.iode as i32,
            self.transmit_week_second().sow,
        )
    }
}

impl NavigationRecord {
    /// Writes a complete description of `self`: resolved epochs
    /// first, then every value, one per line.
    pub fn dump<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let toc = WeekSecond::from_epoch(self.epoch);
        let toe = self.toe_week_second();
        let transmit = self.transmit_week_second();

        writeln!(w, "PRN: {:>2}", self.prn)?;
        writeln!(w, "TOC: {} ({})", format_calendar_full(self.epoch), toc)?;
        writeln!(w, "TOE: {} ({})", format_calendar_full(toe.to_epoch()), toe)?;
        writeln!(
            w,
            "Transmit: {} ({})",
            format_calendar_full(transmit.to_epoch()),
            transmit
        )?;

        for (name, value) in ORDERED_FIELDS.iter().zip(self.to_ordered_fields()) {
            writeln!(w, "{:>14}: {:.12E}", name, value)?;
        }
        Ok(())
    }
}
