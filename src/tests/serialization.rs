#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::NavFile;
    #[test]
    fn record_serdes() {
        for record in NavFile::load("gps_210.nav").records() {
            let content = serde_json::to_string(&record).unwrap();
            let parsed: NavigationRecord = serde_json::from_str(&content).unwrap();
            assert_eq!(parsed, record);
        }
    }
    #[test]
    fn legacy_serdes() {
        let records = NavFile::load("gps_210.nav").records();
        let eph = records[2].to_legacy();
        let content = serde_json::to_string(&eph).unwrap();
        let parsed: LegacyEphemeris = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, eph);
        assert!(parsed.is_data_loaded());

        let empty = LegacyEphemeris::default();
        let content = serde_json::to_string(&empty).unwrap();
        let parsed: LegacyEphemeris = serde_json::from_str(&content).unwrap();
        assert!(!parsed.is_data_loaded());
    }
    #[test]
    fn modern_serdes() {
        let records = NavFile::load("gps_210.nav").records();
        let eph = records[1].to_modern().unwrap();
        let content = serde_json::to_string(&eph).unwrap();
        let parsed: GpsEphemeris = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, eph);
        assert_eq!(parsed.iodc(), Some(389));
        assert_eq!(parsed.begin_valid(), eph.begin_valid());
    }
    #[test]
    fn version_serdes() {
        let version = Version::new(2, 10);
        let content = serde_json::to_string(&version).unwrap();
        let parsed: Version = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, version);
    }
}
