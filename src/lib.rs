#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * RINEX-GPS-NAV is part of the Geo-Rust framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/georust/rinex/graphs/contributors)
 * This framework is shipped under the Mozilla Public License 2.0.
 *
 * Documentation: https://github.com/georust/rinex
 */

extern crate gnss_rs as gnss;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod cursor;
pub mod ephemeris;
pub mod fields;
pub mod gps_time;
pub mod record;
pub mod version;

mod epoch;
mod error;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        cursor::LineCursor,
        ephemeris::{GpsEphemeris, LegacyEphemeris, LegacyHealth, Subframe1, Subframe2, Subframe3},
        error::{ConversionError, Error, FormatError, FormattingError, ParsingError},
        gps_time::{WeekSecond, FULLWEEK, HALFWEEK},
        record::{NavigationRecord, ORDERED_FIELDS, RECORD_LINES},
        version::Version,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}

pub use error::{ConversionError, Error, FormatError, FormattingError, ParsingError};
