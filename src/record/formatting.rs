//! Record formatting
use crate::{
    cursor::LineCursor,
    epoch::format_nav_v2,
    fields::format_field,
    record::{NavigationRecord, RECORD_LINES},
    version::Version,
    FormattingError,
};

use std::io::Write;

/// Formats a BROADCAST ORBIT line
fn format_orbit(values: &[f64]) -> Result<String, FormattingError> {
    let mut line = String::from("   ");
    for value in values {
        line.push_str(&format_field(*value)?);
    }
    Ok(line)
}

impl NavigationRecord {
    /// Encodes `self` as 8 text lines (without line terminations),
    /// following the `version` layout. BROADCAST ORBIT 7 only carries the
    /// fit interval for revisions 2.1 and later.
    pub fn encode(&self, version: Version) -> Result<[String; RECORD_LINES], FormattingError> {
        if !version.is_supported() {
            return Err(FormattingError::UnsupportedVersion(version));
        }
        if !(0..=99).contains(&self.prn) {
            return Err(FormattingError::PrnOutOfRange(self.prn));
        }

        let prn_epoch = format!(
            "{:>2}{}{}{}{}",
            self.prn,
            format_nav_v2(self.epoch),
            format_field(self.clock_bias)?,
            format_field(self.clock_drift)?,
            format_field(self.clock_drift_rate)?,
        );

        let orbit7 = if version.has_fit_interval() {
            format_orbit(&[self.transmit_time, self.fit_interval])?
        } else {
            format_orbit(&[self.transmit_time])?
        };

        Ok([
            prn_epoch,
            format_orbit(&[self.iode, self.crs, self.dn, self.m0])?,
            format_orbit(&[self.cuc, self.ecc, self.cus, self.sqrt_a])?,
            format_orbit(&[self.toe, self.cic, self.omega0, self.cis])?,
            format_orbit(&[self.i0, self.crc, self.w, self.omega_dot])?,
            format_orbit(&[
                self.idot,
                f64::from(self.code_flags),
                f64::from(self.toe_week),
                f64::from(self.l2p_flag),
            ])?,
            format_orbit(&[self.accuracy, f64::from(self.health), self.tgd, self.iodc])?,
            orbit7,
        ])
    }

    /// Writes `self` into `w`, one line at a time, `cursor` being the
    /// number of lines produced so far. Returns the cursor advanced past this record.
    /// Nothing is written if formatting fails.
    pub fn encode_lines<W: Write>(
        &self,
        cursor: LineCursor,
        w: &mut W,
        version: Version,
    ) -> Result<LineCursor, FormattingError> {
        let lines = self.encode(version)?;
        for line in lines.iter() {
            writeln!(w, "{}", line)?;
        }
        Ok(cursor.advance(RECORD_LINES))
    }
}
