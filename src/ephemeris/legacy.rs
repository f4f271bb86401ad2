//! Subframe oriented legacy (LNAV) ephemeris
use bitflags::bitflags;
use hifitime::Epoch;

use crate::{
    ephemeris::{accuracy_to_ura, fit_interval_hours, ura_to_accuracy},
    gps_time::{WeekSecond, HALFWEEK},
    ConversionError,
};

bitflags! {
    /// GPS Legacy 6 bit SV health word.
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct LegacyHealth: u8 {
        /// Some or all navigation data are bad
        const NavDataBad = 0x20;
        /// Signal component health code
        const Signals = 0x1F;
    }
}

impl LegacyHealth {
    /// True when the whole health word is cleared
    pub fn healthy(&self) -> bool {
        self.is_empty()
    }
    /// Returns the 5 bit signal component health code
    pub fn signal_code(&self) -> u8 {
        (*self & Self::Signals).bits()
    }
}

/// Subframe 1: clock and satellite status
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subframe1 {
    /// Handover word time (seconds of week)
    pub how_sow: f64,
    /// Full GPS week
    pub full_week: i32,
    /// Codes on L2 channel
    pub code_flags: i16,
    /// URA index
    pub ura: u8,
    /// SV health
    pub health: LegacyHealth,
    /// Issue of data, clock
    pub iodc: i16,
    /// L2 P data flag
    pub l2p_data: i16,
    /// Group delay differential (s)
    pub tgd: f64,
    /// Time of clock (seconds of week)
    pub toc: f64,
    /// Clock drift rate (s.s⁻²)
    pub af2: f64,
    /// Clock drift (s.s⁻¹)
    pub af1: f64,
    /// Clock bias (s)
    pub af0: f64,
    /// PRN number
    pub prn: i32,
}

/// Subframe 2: first half of the orbit
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subframe2 {
    /// Handover word time (seconds of week)
    pub how_sow: f64,
    /// Issue of data, ephemeris
    pub iode: i16,
    pub crs: f64,
    pub dn: f64,
    pub m0: f64,
    pub cuc: f64,
    pub ecc: f64,
    pub cus: f64,
    pub sqrt_a: f64,
    /// Time of ephemeris (seconds of week)
    pub toe: f64,
    /// Set when the curve fit interval exceeds 4 hours
    pub fit_interval_flag: bool,
}

/// Subframe 3: second half of the orbit
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subframe3 {
    /// Handover word time (seconds of week)
    pub how_sow: f64,
    pub cic: f64,
    pub omega0: f64,
    pub cis: f64,
    pub i0: f64,
    pub crc: f64,
    pub w: f64,
    pub omega_dot: f64,
    pub idot: f64,
}

/// [LegacyEphemeris] gathers the three subframes of one broadcast ephemeris,
/// each loaded separately, as they are received.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyEphemeris {
    sf1: Option<Subframe1>,
    sf2: Option<Subframe2>,
    sf3: Option<Subframe3>,
    /// Accuracy (m)
    accuracy: f64,
}

impl LegacyEphemeris {
    /// Loads subframe 1. Accuracy is deduced from its URA index,
    /// see [Self::set_accuracy] to describe it more precisely.
    pub fn set_sf1(&mut self, sf1: Subframe1) {
        self.accuracy = ura_to_accuracy(sf1.ura);
        self.sf1 = Some(sf1);
    }
    /// Loads subframe 2
    pub fn set_sf2(&mut self, sf2: Subframe2) {
        self.sf2 = Some(sf2);
    }
    /// Loads subframe 3
    pub fn set_sf3(&mut self, sf3: Subframe3) {
        self.sf3 = Some(sf3);
    }
    /// Defines accuracy in meters. The URA index of subframe 1,
    /// when loaded, is updated accordingly.
    pub fn set_accuracy(&mut self, accuracy: f64) {
        self.accuracy = accuracy;
        if let Some(sf1) = &mut self.sf1 {
            sf1.ura = accuracy_to_ura(accuracy);
        }
    }
    /// Accuracy (m)
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
    /// True once all three subframes have been loaded
    pub fn is_data_loaded(&self) -> bool {
        self.sf1.is_some() && self.sf2.is_some() && self.sf3.is_some()
    }
    pub fn sf1(&self) -> Result<&Subframe1, ConversionError> {
        self.sf1.as_ref().ok_or(ConversionError::DataNotLoaded)
    }
    pub fn sf2(&self) -> Result<&Subframe2, ConversionError> {
        self.sf2.as_ref().ok_or(ConversionError::DataNotLoaded)
    }
    pub fn sf3(&self) -> Result<&Subframe3, ConversionError> {
        self.sf3.as_ref().ok_or(ConversionError::DataNotLoaded)
    }
    /// Returns handover word time (seconds of week) of given subframe (1, 2 or 3)
    pub fn how_sow(&self, subframe: u8) -> Result<f64, ConversionError> {
        match subframe {
            1 => Ok(self.sf1()?.how_sow),
            2 => Ok(self.sf2()?.how_sow),
            3 => Ok(self.sf3()?.how_sow),
            _ => Err(ConversionError::DataNotLoaded),
        }
    }
    /// Full GPS week of subframe 1 transmission
    pub fn full_week(&self) -> Result<i32, ConversionError> {
        Ok(self.sf1()?.full_week)
    }
    /// Returns the week `sow` belongs to, `sow` lying within half
    /// a week of the subframe 1 transmission time.
    fn nearby_week(&self, sow: f64) -> Result<i32, ConversionError> {
        let sf1 = self.sf1()?;
        let diff = sow - sf1.how_sow;
        if diff < -HALFWEEK {
            Ok(sf1.full_week + 1)
        } else if diff > HALFWEEK {
            Ok(sf1.full_week - 1)
        } else {
            Ok(sf1.full_week)
        }
    }
    /// Time of clock, as [Epoch] expressed in GPST
    pub fn epoch_time(&self) -> Result<Epoch, ConversionError> {
        let toc = self.sf1()?.toc;
        let week = self.nearby_week(toc)?;
        Ok(WeekSecond::new(week, toc).to_epoch())
    }
    /// Time of ephemeris, as [Epoch] expressed in GPST
    pub fn toe_time(&self) -> Result<Epoch, ConversionError> {
        let toe = self.sf2()?.toe;
        let week = self.nearby_week(toe)?;
        Ok(WeekSecond::new(week, toe).to_epoch())
    }
    /// Curve fit interval (hours), from IODC and fit interval flag
    pub fn fit_interval_hours(&self) -> Result<u16, ConversionError> {
        let iodc = self.sf1()?.iodc;
        let flag = self.sf2()?.fit_interval_flag;
        fit_interval_hours(i32::from(iodc), flag)
    }
}
