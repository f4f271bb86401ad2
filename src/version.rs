//! `RINEX` revision description
use thiserror::Error;

/// Revision produced by default
pub const DEFAULT_VERSION: Version = Version { major: 2, minor: 11 };

/// First revision carrying the fit interval in BROADCAST ORBIT 7
pub const FIT_INTERVAL_VERSION: Version = Version { major: 2, minor: 1 };

/// Version is used to describe RINEX standards revisions.
/// It governs the optional content of the navigation record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParsingError {
    #[error("failed to parse version")]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error("invalid version \"{0}\"")]
    InvalidFormat(String),
}

impl Default for Version {
    fn default() -> Self {
        DEFAULT_VERSION
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl From<Version> for (u8, u8) {
    fn from(v: Version) -> Self {
        (v.major, v.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('.') {
            Some((major, minor)) => {
                if minor.contains('.') {
                    return Err(ParsingError::InvalidFormat(s.to_string()));
                }
                Ok(Self {
                    major: major.parse::<u8>()?,
                    minor: minor.parse::<u8>()?,
                })
            },
            None => Ok(Self {
                major: s.parse::<u8>()?,
                minor: 0,
            }),
        }
    }
}

impl Version {
    /// Builds a new `Version` object
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
    /// Returns true if this revision follows the 8 line
    /// GPS navigation record layout handled by this crate.
    pub fn is_supported(&self) -> bool {
        self.major > 0 && self.major < 3
    }
    /// Returns true if BROADCAST ORBIT 7 carries the fit interval.
    /// Minor numbers compare as written: "2.10" and "2.11" are past "2.1".
    pub fn has_fit_interval(&self) -> bool {
        *self >= FIT_INTERVAL_VERSION
    }
}
