//! GPS navigation record, as described by one 8 line RINEX V2 "N" entry.
use hifitime::Epoch;

use crate::gps_time::gpst_origin;

mod conversion;
mod display;
mod formatting;
mod parsing;
mod transmit;

/// Number of text lines of one record
pub const RECORD_LINES: usize = 8;

/// Column offsets of the numeric fields, on every line.
/// The first line only uses the last three.
pub(crate) const FIELD_OFFSETS: [usize; 4] = [3, 22, 41, 60];

/// Names of the values exported by [NavigationRecord::to_ordered_fields], in order
pub const ORDERED_FIELDS: [&str; 31] = [
    "prn",
    "transmit_sow",
    "transmit_week",
    "code_flags",
    "accuracy",
    "health",
    "l2p_flag",
    "iodc",
    "iode",
    "toc_sow",
    "af0",
    "af1",
    "af2",
    "tgd",
    "cuc",
    "cus",
    "crc",
    "crs",
    "cic",
    "cis",
    "toe",
    "m0",
    "dn",
    "ecc",
    "sqrt_a",
    "omega0",
    "i0",
    "w",
    "omega_dot",
    "idot",
    "fit_interval",
];

/// [NavigationRecord] is the in memory image of one GPS broadcast
/// ephemeris record. Values are stored the way they are broadcast,
/// in ICD units: seconds, radians, meters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationRecord {
    /// Satellite PRN number, not bound checked
    pub prn: i32,
    /// Time of clock (TOC), always expressed in [hifitime::TimeScale::GPST]
    pub epoch: Epoch,
    /// Clock bias af0 (s)
    pub clock_bias: f64,
    /// Clock drift af1 (s.s⁻¹)
    pub clock_drift: f64,
    /// Clock drift rate af2 (s.s⁻²)
    pub clock_drift_rate: f64,
    /// Issue of data, ephemeris
    pub iode: f64,
    /// Sine harmonic correction to the orbit radius (m)
    pub crs: f64,
    /// Mean motion difference (rad.s⁻¹)
    pub dn: f64,
    /// Mean anomaly at reference time (rad)
    pub m0: f64,
    /// Cosine harmonic correction to the argument of latitude (rad)
    pub cuc: f64,
    /// Eccentricity
    pub ecc: f64,
    /// Sine harmonic correction to the argument of latitude (rad)
    pub cus: f64,
    /// Square root of the semi major axis (m^1/2)
    pub sqrt_a: f64,
    /// Time of ephemeris, seconds of [Self::toe_week]
    pub toe: f64,
    /// Cosine harmonic correction to the inclination (rad)
    pub cic: f64,
    /// Longitude of ascending node at weekly epoch (rad)
    pub omega0: f64,
    /// Sine harmonic correction to the inclination (rad)
    pub cis: f64,
    /// Inclination at reference time (rad)
    pub i0: f64,
    /// Cosine harmonic correction to the orbit radius (m)
    pub crc: f64,
    /// Argument of perigee (rad)
    pub w: f64,
    /// Rate of right ascension (rad.s⁻¹)
    pub omega_dot: f64,
    /// Rate of inclination (rad.s⁻¹)
    pub idot: f64,
    /// Codes on L2 channel
    pub code_flags: i16,
    /// Full GPS week of the orbit block, as written.
    /// May differ from the transmission week, see [Self::transmit_week_second].
    pub toe_week: i16,
    /// L2 P data flag
    pub l2p_flag: i16,
    /// User range accuracy (m), not the URA index
    pub accuracy: f64,
    /// SV health word
    pub health: i16,
    /// Group delay differential (s)
    pub tgd: f64,
    /// Issue of data, clock
    pub iodc: f64,
    /// Subframe 1 transmission time, in seconds of week, stored as written.
    /// May be negative or exceed one week: see [Self::transmit_week_second].
    pub transmit_time: f64,
    /// Fit interval (hours)
    pub fit_interval: f64,
}

impl Default for NavigationRecord {
    fn default() -> Self {
        Self {
            prn: 0,
            epoch: gpst_origin(),
            clock_bias: 0.0,
            clock_drift: 0.0,
            clock_drift_rate: 0.0,
            iode: 0.0,
            crs: 0.0,
            dn: 0.0,
            m0: 0.0,
            cuc: 0.0,
            ecc: 0.0,
            cus: 0.0,
            sqrt_a: 0.0,
            toe: 0.0,
            cic: 0.0,
            omega0: 0.0,
            cis: 0.0,
            i0: 0.0,
            crc: 0.0,
            w: 0.0,
            omega_dot: 0.0,
            idot: 0.0,
            code_flags: 0,
            toe_week: 0,
            l2p_flag: 0,
            accuracy: 0.0,
            health: 0,
            tgd: 0.0,
            iodc: 0.0,
            transmit_time: 0.0,
            fit_interval: 0.0,
        }
    }
}

impl NavigationRecord {
    /// Returns SV onboard clock (bias [s], drift [s/s], drift rate [s/s]).
    pub fn sv_clock(&self) -> (f64, f64, f64) {
        (self.clock_bias, self.clock_drift, self.clock_drift_rate)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::TimeScale;
    #[test]
    fn default_record() {
        let record = NavigationRecord::default();
        assert_eq!(record.prn, 0);
        assert_eq!(record.epoch.time_scale, TimeScale::GPST);
        assert_eq!(record.epoch, gpst_origin());
        assert_eq!(record.fit_interval, 0.0);
        assert_eq!(record.transmit_time, 0.0);
        assert_eq!(record.sv_clock(), (0.0, 0.0, 0.0));
    }
    #[test]
    fn ordered_field_names() {
        assert_eq!(ORDERED_FIELDS.len(), 31);
        assert_eq!(ORDERED_FIELDS[0], "prn");
        assert_eq!(ORDERED_FIELDS[9], "toc_sow");
        assert_eq!(ORDERED_FIELDS[30], "fit_interval");
    }
}
