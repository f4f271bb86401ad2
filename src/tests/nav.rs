#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::{NavFile, Utf8Buffer};
    use std::str::FromStr;
    #[test]
    fn v2_10_gps_nav() {
        let file = NavFile::load("gps_210.nav");
        assert_eq!(file.version, Version::new(2, 10));
        assert_eq!(file.cursor(), LineCursor::at(8));

        let records = file.records();
        assert_eq!(records.len(), 4);

        let prn = records.iter().map(|r| r.prn).collect::<Vec<_>>();
        assert_eq!(prn, vec![6, 13, 31, 2]);

        let epochs = records.iter().map(|r| r.epoch).collect::<Vec<_>>();
        assert_eq!(
            epochs,
            vec![
                Epoch::from_str("1999-09-02T17:51:44 GPST").unwrap(),
                Epoch::from_str("1999-09-02T19:00:00 GPST").unwrap(),
                Epoch::from_str("1999-09-04T23:59:44 GPST").unwrap(),
                Epoch::from_str("2005-01-02T00:00:00 GPST").unwrap(),
            ]
        );

        let r = &records[1];
        assert_eq!(r.code_flags, 1);
        assert_eq!(r.accuracy, 2.0);
        assert_eq!(r.tgd, -6.05359673500E-09);
        assert_eq!(r.iodc, 389.0);
        assert_eq!(r.fit_interval, 4.0);
        assert_eq!(r.idot, -7.85747015231E-12);

        // TOC and TOE agree on every record
        for r in records.iter() {
            assert_eq!(r.toe_epoch(), r.epoch, "prn {}", r.prn);
        }

        // negative transmission time: end of previous week
        let r = &records[3];
        assert_eq!(r.transmit_time, -18.0);
        assert_eq!(r.transmit_week_second(), WeekSecond::new(1303, 604_782.0));
        assert_eq!(
            r.transmit_epoch(),
            Epoch::from_str("2005-01-01T23:59:42 GPST").unwrap()
        );
    }
    #[test]
    fn v2_10_text_round_trip() {
        let file = NavFile::load("gps_210.nav");
        let mut buf = Utf8Buffer::new(4096);
        let mut cursor = file.cursor();
        for record in file.records() {
            cursor = record.encode_lines(cursor, &mut buf, file.version).unwrap();
        }
        assert_eq!(cursor, file.cursor().advance(file.body.len()));

        let content = buf.to_ascii_utf8();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), file.body.len());
        for (nth, (line, expected)) in lines.iter().zip(file.body.iter()).enumerate() {
            assert_eq!(line, expected, "line {} differs", file.header.len() + nth + 1);
        }
    }
    #[test]
    fn v2_00_gps_nav() {
        let file = NavFile::load("gps_200.nav");
        assert_eq!(file.version, Version::new(2, 0));
        assert!(!file.version.has_fit_interval());

        let records = file.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fit_interval, 0.0);
        assert_eq!(records[0].transmit_time, 406_800.0);

        let lines = records[0].encode(file.version).unwrap();
        for (line, expected) in lines.iter().zip(file.body.iter()) {
            assert_eq!(line, expected);
        }
        assert_eq!(lines[7], "     .406800000000D+06");
    }
    #[test]
    fn value_round_trip() {
        let file = NavFile::load("gps_210.nav");
        for record in file.records() {
            for version in [Version::new(2, 10), Version::new(2, 11)] {
                let lines = record.encode(version).unwrap();
                let lines: [&str; 8] = std::array::from_fn(|i| lines[i].as_str());
                assert_eq!(NavigationRecord::decode(&lines).unwrap(), record);
            }
            // fit interval is not described prior 2.1
            let lines = record.encode(Version::new(2, 0)).unwrap();
            let lines: [&str; 8] = std::array::from_fn(|i| lines[i].as_str());
            let decoded = NavigationRecord::decode(&lines).unwrap();
            assert_eq!(
                decoded,
                NavigationRecord {
                    fit_interval: 0.0,
                    ..record.clone()
                }
            );
        }
    }
    #[test]
    fn foreign_writer() {
        let canonical = NavFile::load("gps_210.nav").records();
        let file = NavFile::load("gps_211_rtklib.nav");
        assert_eq!(file.version, Version::new(2, 11));

        let records = file.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], canonical[0]);
        assert_eq!(records[1], canonical[1]);

        // reformatted to the canonical layout
        let lines = records[0].encode(Version::new(2, 10)).unwrap();
        let expected = NavFile::load("gps_210.nav");
        for (line, expected) in lines.iter().zip(expected.body.iter()) {
            assert_eq!(line, expected);
        }
    }
    #[test]
    fn truncated_file() {
        let file = NavFile::load("gps_210.nav");
        let body = &file.body[..12];
        let mut lines = body.iter();

        let (_, cursor) = NavigationRecord::decode_lines(file.cursor(), &mut lines).unwrap();
        assert_eq!(cursor, LineCursor::at(16));

        let e = NavigationRecord::decode_lines(cursor, &mut lines).unwrap_err();
        assert_eq!(e.line_number, 21);
        assert!(matches!(e.kind, ParsingError::MissingLine));
    }
    #[test]
    fn leap_second_epoch() {
        let file = NavFile::load("gps_210.nav");
        let mut body = file.body[..8].to_vec();
        body[0].replace_range(2..22, " 99  9  2 17 50 60.0");

        let (record, _) =
            NavigationRecord::decode_lines(LineCursor::new(), &mut body.iter()).unwrap();
        assert_eq!(
            record.epoch,
            Epoch::from_str("1999-09-02T17:51:00 GPST").unwrap()
        );
        // canonical timestamp is produced
        let lines = record.encode(file.version).unwrap();
        assert_eq!(&lines[0][..22], " 6 99  9  2 17 51  0.0");
    }
}
