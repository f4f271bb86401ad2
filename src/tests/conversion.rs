#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::{assert_close, NavFile};
    use std::str::FromStr;
    #[test]
    fn legacy_round_trip() {
        for record in NavFile::load("gps_210.nav").records() {
            let eph = record.to_legacy();
            assert!(eph.is_data_loaded());
            assert_eq!(eph.epoch_time(), Ok(record.epoch));
            assert_eq!(eph.toe_time(), Ok(record.toe_epoch()));

            let converted = NavigationRecord::from_legacy(&eph).unwrap();

            // legacy fit interval is described by a flag and the IODC
            let fit_interval = if record.fit_interval > 4.0 { 6.0 } else { 4.0 };
            assert_eq!(converted.fit_interval, fit_interval, "prn {}", record.prn);

            let expected = NavigationRecord {
                fit_interval,
                ..record.clone()
            };

            // a negative transmission time is restored as well
            assert_eq!(converted, expected, "prn {}", record.prn);
        }
    }
    #[test]
    fn legacy_subframes() {
        let record = &NavFile::load("gps_210.nav").records()[2];
        let eph = record.to_legacy();

        let sf1 = eph.sf1().unwrap();
        assert_eq!(sf1.prn, 31);
        assert_eq!(sf1.how_sow, 603_018.0);
        assert_eq!(sf1.full_week, 1025);
        assert_eq!(sf1.iodc, 468);
        assert_eq!(sf1.code_flags, 1);
        assert_eq!(sf1.toc, 604_784.0);
        assert_eq!(sf1.af0, -1.75409764051E-05);
        assert_eq!(sf1.ura, 2);
        assert!(sf1.health.healthy());

        let sf2 = eph.sf2().unwrap();
        assert_eq!(sf2.how_sow, 603_024.0);
        assert_eq!(sf2.iode, 212);
        assert!(sf2.fit_interval_flag);
        assert_eq!(sf2.sqrt_a, 5.15371299553E+03);

        let sf3 = eph.sf3().unwrap();
        assert_eq!(sf3.how_sow, 603_030.0);
        assert_eq!(sf3.i0, 0.958524510312);

        assert_eq!(eph.accuracy(), 4.0);
        assert_eq!(eph.fit_interval_hours(), Ok(6));
    }
    #[test]
    fn modern_conversion() {
        let record = &NavFile::load("gps_210.nav").records()[0];
        let eph = record.to_modern().unwrap();

        assert_eq!(eph.sv, SV::new(Constellation::GPS, 6));
        assert_eq!(eph.toc.time_scale, TimeScale::GPST);
        assert_eq!(eph.transmit_time.time_scale, TimeScale::GPST);
        assert_eq!(eph.toc, record.epoch);
        assert_eq!(eph.toe, record.toe_epoch());
        assert_eq!(eph.transmit_time, record.transmit_epoch());
        assert_eq!(eph.how_sow, 406_800.0);
        assert_eq!(eph.iodc(), Some(91));
        assert_eq!(eph.iode, 91);
        assert_eq!(eph.a, record.sqrt_a * record.sqrt_a);
        assert_eq!(eph.dn_dot, 0.0);
        assert_eq!(eph.a_dot, 0.0);
        assert!(eph.data_loaded);
        assert!(!eph.fit_interval_flag());
        assert_eq!(eph.fit_duration(), 4);

        assert_eq!(
            eph.begin_valid(),
            Epoch::from_str("1999-09-02T17:00:00 GPST").unwrap()
        );
        assert_eq!(
            eph.end_valid(),
            Epoch::from_str("1999-09-02T19:00:00 GPST").unwrap()
        );
        assert!(eph.is_valid(record.epoch));
    }
    #[test]
    fn modern_round_trip() {
        for record in NavFile::load("gps_210.nav").records() {
            let eph = record.to_modern().unwrap();
            let converted = NavigationRecord::from_modern(&eph).unwrap();

            assert_close(converted.sqrt_a, record.sqrt_a, 1.0E-9, "sqrt_a");
            assert_eq!(
                converted.transmit_week_second(),
                record.transmit_week_second(),
                "prn {}",
                record.prn
            );

            let expected = NavigationRecord {
                sqrt_a: converted.sqrt_a,
                transmit_time: converted.transmit_time,
                toe_week: converted.toe_week,
                ..record.clone()
            };
            assert_eq!(converted, expected, "prn {}", record.prn);
        }
    }
    #[test]
    fn ordered_fields_export() {
        let records = NavFile::load("gps_210.nav").records();
        let fields = records[3].to_ordered_fields();
        assert_eq!(fields.len(), ORDERED_FIELDS.len());

        let value = |name: &str| {
            let index = ORDERED_FIELDS
                .iter()
                .position(|n| *n == name)
                .unwrap();
            fields[index]
        };
        assert_eq!(value("prn"), 2.0);
        assert_eq!(value("transmit_sow"), 604_782.0);
        assert_eq!(value("transmit_week"), 1303.0);
        assert_eq!(value("code_flags"), 1.0);
        assert_eq!(value("iodc"), 56.0);
        assert_eq!(value("iode"), 56.0);
        assert_eq!(value("toc_sow"), 0.0);
        assert_eq!(value("toe"), 0.0);
        assert_eq!(value("sqrt_a"), 5.15363427734E+03);
        assert_eq!(value("fit_interval"), 4.0);
    }
}
