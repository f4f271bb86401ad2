//! Conversions between [NavigationRecord] and the ephemeris representations
use gnss::prelude::{Constellation, SV};
use hifitime::TimeScale;

use crate::{
    ephemeris::{GpsEphemeris, LegacyEphemeris, LegacyHealth, Subframe1, Subframe2, Subframe3},
    gps_time::WeekSecond,
    record::NavigationRecord,
    ConversionError,
};

/// Subframe transmission period (s)
const SUBFRAME_PERIOD: f64 = 6.0;

/// Fit interval (hours) past which the legacy fit interval flag is set
const LEGACY_FIT_THRESHOLD: f64 = 4.0;

impl NavigationRecord {
    /// Converts to [LegacyEphemeris]. Subframes 2 and 3 are considered
    /// transmitted 6 and 12 seconds after subframe 1.
    pub fn to_legacy(&self) -> LegacyEphemeris {
        let how1 = self.transmit_week_second();
        let how2 = how1.add_seconds(SUBFRAME_PERIOD);
        let how3 = how2.add_seconds(SUBFRAME_PERIOD);

        let mut eph = LegacyEphemeris::default();

        // accuracy is described in meters, not as an URA index:
        // load a null index, then the actual value
        eph.set_sf1(Subframe1 {
            how_sow: how1.sow,
            full_week: how1.week,
            code_flags: self.code_flags,
            ura: 0,
            health: LegacyHealth::from_bits_retain(self.health as u8),
            iodc: self.iodc as i16,
            l2p_data: self.l2p_flag,
            tgd: self.tgd,
            toc: self.toc_week_second().sow,
            af2: self.clock_drift_rate,
            af1: self.clock_drift,
            af0: self.clock_bias,
            prn: self.prn,
        });

        eph.set_sf2(Subframe2 {
            how_sow: how2.sow,
            iode: self.iode as i16,
            crs: self.crs,
            dn: self.dn,
            m0: self.m0,
            cuc: self.cuc,
            ecc: self.ecc,
            cus: self.cus,
            sqrt_a: self.sqrt_a,
            toe: self.toe,
            fit_interval_flag: self.fit_interval > LEGACY_FIT_THRESHOLD,
        });

        eph.set_sf3(Subframe3 {
            how_sow: how3.sow,
            cic: self.cic,
            omega0: self.omega0,
            cis: self.cis,
            i0: self.i0,
            crc: self.crc,
            w: self.w,
            omega_dot: self.omega_dot,
            idot: self.idot,
        });

        eph.set_accuracy(self.accuracy);
        eph
    }

    /// Builds a [NavigationRecord] from a fully loaded [LegacyEphemeris].
    /// The fit interval is deduced from IODC and the fit interval flag.
    pub fn from_legacy(eph: &LegacyEphemeris) -> Result<Self, ConversionError> {
        let (sf1, sf2, sf3) = (eph.sf1()?, eph.sf2()?, eph.sf3()?);

        let mut record = Self {
            prn: sf1.prn,
            epoch: eph.epoch_time()?,
            clock_bias: sf1.af0,
            clock_drift: sf1.af1,
            clock_drift_rate: sf1.af2,
            iode: f64::from(sf2.iode),
            crs: sf2.crs,
            dn: sf2.dn,
            m0: sf2.m0,
            cuc: sf2.cuc,
            ecc: sf2.ecc,
            cus: sf2.cus,
            sqrt_a: sf2.sqrt_a,
            toe: sf2.toe,
            cic: sf3.cic,
            omega0: sf3.omega0,
            cis: sf3.cis,
            i0: sf3.i0,
            crc: sf3.crc,
            w: sf3.w,
            omega_dot: sf3.omega_dot,
            idot: sf3.idot,
            code_flags: sf1.code_flags,
            toe_week: 0,
            l2p_flag: sf1.l2p_data,
            accuracy: eph.accuracy(),
            health: i16::from(sf1.health.bits()),
            tgd: sf1.tgd,
            iodc: f64::from(sf1.iodc),
            transmit_time: 0.0,
            fit_interval: f64::from(eph.fit_interval_hours()?),
        };

        // TOE must be known to assign the week
        record.set_transmit_time(eph.full_week()?, sf1.how_sow);
        Ok(record)
    }

    /// Converts to [GpsEphemeris]. IODC is assigned prior deriving the fit interval flag,
    /// then the validity window is computed. Errors raised by the ephemeris are returned as is.
    /// TOE is the TOE week label plus [Self::toe] seconds, see [Self::toe_epoch].
    pub fn to_modern(&self) -> Result<GpsEphemeris, ConversionError> {
        let prn = u8::try_from(self.prn).map_err(|_| ConversionError::InvalidPrn(self.prn))?;

        let mut eph = GpsEphemeris::default();
        eph.sv = SV::new(Constellation::GPS, prn);
        eph.toe = self.toe_epoch();
        eph.toc = self.epoch.to_time_scale(TimeScale::GPST);
        eph.af0 = self.clock_bias;
        eph.af1 = self.clock_drift;
        eph.af2 = self.clock_drift_rate;
        eph.m0 = self.m0;
        eph.dn = self.dn;
        eph.dn_dot = 0.0;
        eph.ecc = self.ecc;
        eph.a = self.sqrt_a * self.sqrt_a;
        eph.a_dot = 0.0;
        eph.omega0 = self.omega0;
        eph.i0 = self.i0;
        eph.w = self.w;
        eph.omega_dot = self.omega_dot;
        eph.idot = self.idot;
        eph.cuc = self.cuc;
        eph.cus = self.cus;
        eph.crc = self.crc;
        eph.crs = self.crs;
        eph.cic = self.cic;
        eph.cis = self.cis;
        eph.data_loaded = true;
        eph.iode = self.iode as u16;
        eph.health = self.health;
        eph.accuracy = self.accuracy;
        eph.tgd = self.tgd;
        eph.how_sow = self.transmit_week_second().sow;
        eph.transmit_time = self.transmit_epoch().to_time_scale(TimeScale::GPST);
        eph.code_flags = self.code_flags;
        eph.l2p_data = self.l2p_flag;
        eph.fit_interval = self.fit_interval;

        eph.set_iodc(self.iodc as u16);
        eph.set_fit_interval_flag(self.fit_interval as i32)?;
        eph.adjust_validity()?;
        Ok(eph)
    }

    /// Builds a [NavigationRecord] from a [GpsEphemeris]
    pub fn from_modern(eph: &GpsEphemeris) -> Result<Self, ConversionError> {
        if !eph.data_loaded {
            return Err(ConversionError::DataNotLoaded);
        }
        if eph.sv.constellation != Constellation::GPS {
            return Err(ConversionError::InvalidPrn(i32::from(eph.sv.prn)));
        }

        let iodc = eph.iodc().ok_or(ConversionError::IodcNotSet)?;
        let toe = WeekSecond::from_epoch(eph.toe);
        let transmit = WeekSecond::from_epoch(eph.transmit_time);

        let mut record = Self {
            prn: i32::from(eph.sv.prn),
            epoch: eph.toc.to_time_scale(TimeScale::GPST),
            clock_bias: eph.af0,
            clock_drift: eph.af1,
            clock_drift_rate: eph.af2,
            iode: f64::from(eph.iode),
            crs: eph.crs,
            dn: eph.dn,
            m0: eph.m0,
            cuc: eph.cuc,
            ecc: eph.ecc,
            cus: eph.cus,
            sqrt_a: eph.a.sqrt(),
            toe: toe.sow,
            cic: eph.cic,
            omega0: eph.omega0,
            cis: eph.cis,
            i0: eph.i0,
            crc: eph.crc,
            w: eph.w,
            omega_dot: eph.omega_dot,
            idot: eph.idot,
            code_flags: eph.code_flags,
            toe_week: toe.week as i16,
            l2p_flag: eph.l2p_data,
            accuracy: eph.accuracy,
            health: eph.health,
            tgd: eph.tgd,
            iodc: f64::from(iodc),
            transmit_time: 0.0,
            fit_interval: eph.fit_interval,
        };

        record.set_transmit_time(transmit.week, transmit.sow);
        Ok(record)
    }

    /// Exports all values, in the order given by [crate::record::ORDERED_FIELDS]
    pub fn to_ordered_fields(&self) -> Vec<f64> {
        let transmit = self.transmit_week_second();
        vec![
            f64::from(self.prn),
            transmit.sow,
            f64::from(transmit.week),
            f64::from(self.code_flags),
            self.accuracy,
            f64::from(self.health),
            f64::from(self.l2p_flag),
            self.iodc,
            self.iode,
            self.toc_week_second().sow,
            self.clock_bias,
            self.clock_drift,
            self.clock_drift_rate,
            self.tgd,
            self.cuc,
            self.cus,
            self.crc,
            self.crs,
            self.cic,
            self.cis,
            self.toe,
            self.m0,
            self.dn,
            self.ecc,
            self.sqrt_a,
            self.omega0,
            self.i0,
            self.w,
            self.omega_dot,
            self.idot,
            self.fit_interval,
        ]
    }
}
