//! GPS ephemeris representations the navigation record converts to and from.
//! Both only store broadcast parameters and their validity bookkeeping:
//! they do not propagate orbits.
mod fit;
mod legacy;
mod modern;
mod ura;

pub use fit::{fit_interval_hours, NOMINAL_FIT_INTERVAL};
pub use legacy::{LegacyEphemeris, LegacyHealth, Subframe1, Subframe2, Subframe3};
pub use modern::GpsEphemeris;
pub use ura::{accuracy_to_ura, ura_to_accuracy, URA_MAX_ACCURACY};
