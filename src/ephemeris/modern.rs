//! Flattened GPS ephemeris
use gnss::prelude::{Constellation, SV};
use hifitime::{Epoch, Unit};

use crate::{
    ephemeris::{fit_interval_hours, NOMINAL_FIT_INTERVAL},
    gps_time::{gpst_origin, WeekSecond},
    ConversionError,
};

/// Two hours (s): nominal upload and clock reference period
const TWO_HOURS: f64 = 7200.0;

/// Frame duration (s)
const FRAME: f64 = 30.0;

/// [GpsEphemeris] describes one broadcast ephemeris with absolute,
/// time scale tagged, epochs. Its validity window is derived
/// from the broadcast times and the curve fit interval, see [Self::adjust_validity].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsEphemeris {
    /// Satellite
    pub sv: SV,
    /// Time of ephemeris
    pub toe: Epoch,
    /// Time of clock
    pub toc: Epoch,
    /// Clock bias (s)
    pub af0: f64,
    /// Clock drift (s.s⁻¹)
    pub af1: f64,
    /// Clock drift rate (s.s⁻²)
    pub af2: f64,
    /// Mean anomaly at reference time (rad)
    pub m0: f64,
    /// Mean motion difference (rad.s⁻¹)
    pub dn: f64,
    /// Rate of mean motion difference (rad.s⁻²)
    pub dn_dot: f64,
    /// Eccentricity
    pub ecc: f64,
    /// Semi major axis (m)
    pub a: f64,
    /// Rate of semi major axis (m.s⁻¹)
    pub a_dot: f64,
    /// Longitude of ascending node (rad)
    pub omega0: f64,
    /// Inclination (rad)
    pub i0: f64,
    /// Argument of perigee (rad)
    pub w: f64,
    /// Rate of right ascension (rad.s⁻¹)
    pub omega_dot: f64,
    /// Rate of inclination (rad.s⁻¹)
    pub idot: f64,
    pub cuc: f64,
    pub cus: f64,
    pub crc: f64,
    pub crs: f64,
    pub cic: f64,
    pub cis: f64,
    /// Set once all parameters have been assigned
    pub data_loaded: bool,
    iodc: Option<u16>,
    /// Issue of data, ephemeris
    pub iode: u16,
    /// SV health
    pub health: i16,
    /// Accuracy (m)
    pub accuracy: f64,
    /// Group delay differential (s)
    pub tgd: f64,
    /// Handover word time (seconds of week)
    pub how_sow: f64,
    /// Subframe 1 transmission time
    pub transmit_time: Epoch,
    /// Codes on L2 channel
    pub code_flags: i16,
    /// L2 P data flag
    pub l2p_data: i16,
    /// Fit interval (hours), as broadcast
    pub fit_interval: f64,
    fit_interval_flag: bool,
    fit_duration: u16,
    begin_valid: Epoch,
    end_valid: Epoch,
}

impl Default for GpsEphemeris {
    fn default() -> Self {
        Self {
            sv: SV::new(Constellation::GPS, 0),
            toe: gpst_origin(),
            toc: gpst_origin(),
            af0: 0.0,
            af1: 0.0,
            af2: 0.0,
            m0: 0.0,
            dn: 0.0,
            dn_dot: 0.0,
            ecc: 0.0,
            a: 0.0,
            a_dot: 0.0,
            omega0: 0.0,
            i0: 0.0,
            w: 0.0,
            omega_dot: 0.0,
            idot: 0.0,
            cuc: 0.0,
            cus: 0.0,
            crc: 0.0,
            crs: 0.0,
            cic: 0.0,
            cis: 0.0,
            data_loaded: false,
            iodc: None,
            iode: 0,
            health: 0,
            accuracy: 0.0,
            tgd: 0.0,
            how_sow: 0.0,
            transmit_time: gpst_origin(),
            code_flags: 0,
            l2p_data: 0,
            fit_interval: 0.0,
            fit_interval_flag: false,
            fit_duration: NOMINAL_FIT_INTERVAL,
            begin_valid: gpst_origin(),
            end_valid: gpst_origin(),
        }
    }
}

impl GpsEphemeris {
    /// Assigns the issue of data, clock.
    /// Must precede [Self::set_fit_interval_flag].
    pub fn set_iodc(&mut self, iodc: u16) {
        self.iodc = Some(iodc);
    }
    /// Issue of data, clock, if assigned
    pub fn iodc(&self) -> Option<u16> {
        self.iodc
    }
    /// Derives the fit interval flag from the fit interval (`hours`):
    /// the flag is set past the nominal 4 hours. The fit duration is then
    /// deduced from the IODC, which must have been assigned previously.
    pub fn set_fit_interval_flag(&mut self, hours: i32) -> Result<(), ConversionError> {
        let iodc = self.iodc.ok_or(ConversionError::IodcNotSet)?;
        let flag = hours > i32::from(NOMINAL_FIT_INTERVAL);
        self.fit_duration = fit_interval_hours(i32::from(iodc), flag)?;
        self.fit_interval_flag = flag;
        Ok(())
    }
    /// Fit interval flag
    pub fn fit_interval_flag(&self) -> bool {
        self.fit_interval_flag
    }
    /// Curve fit duration (hours)
    pub fn fit_duration(&self) -> u16 {
        self.fit_duration
    }
    /// Computes the validity window of this ephemeris:
    /// - it starts with its transmission: the handover word time rounded down
    /// to the frame, or to two hours when TOC lies on a two hour boundary
    /// (data set cut over, not an upload).
    /// - it ends half a fit duration past TOE rounded down to the hour.
    pub fn adjust_validity(&mut self) -> Result<(), ConversionError> {
        if !self.data_loaded {
            return Err(ConversionError::DataNotLoaded);
        }

        let toc = WeekSecond::from_epoch(self.toc);
        let xmit = WeekSecond::from_epoch(self.transmit_time);

        let begin_sow = if toc.sow.rem_euclid(TWO_HOURS) != 0.0 {
            self.how_sow - self.how_sow.rem_euclid(FRAME)
        } else {
            self.how_sow - self.how_sow.rem_euclid(TWO_HOURS)
        };
        self.begin_valid = WeekSecond::new(xmit.week, begin_sow).to_epoch();

        let toe = WeekSecond::from_epoch(self.toe);
        let toe_hour = toe.sow - toe.sow.rem_euclid(3600.0);
        self.end_valid = WeekSecond::new(toe.week, toe_hour).to_epoch()
            + f64::from(self.fit_duration) / 2.0 * Unit::Hour;
        Ok(())
    }
    /// Start of validity
    pub fn begin_valid(&self) -> Epoch {
        self.begin_valid
    }
    /// End of validity
    pub fn end_valid(&self) -> Epoch {
        self.end_valid
    }
    /// True if `t` lies within the validity window (inclusive)
    pub fn is_valid(&self, t: Epoch) -> bool {
        t >= self.begin_valid && t <= self.end_valid
    }
}
