use thiserror::Error;

use crate::{
    epoch::ParsingError as EpochParsingError, version::ParsingError as VersionParsingError,
    version::Version,
};

/// Errors that may rise while parsing a single record line
#[derive(Error, Debug)]
pub enum ParsingError {
    /// Column separators of the PRN / EPOCH line are not blank,
    /// or the line contains non ASCII characters.
    #[error("badly formatted line")]
    BadlyFormattedLine,
    /// PRN / EPOCH line is shorter than its mandatory preamble
    #[error("line too short ({0} characters)")]
    LineTooShort(usize),
    /// Line source ran out before 8 lines were consumed
    #[error("missing record line")]
    MissingLine,
    #[error("invalid PRN \"{0}\"")]
    PrnParsing(String),
    #[error("epoch parsing error: {0}")]
    EpochParsing(#[from] EpochParsingError),
    #[error("invalid numeric field \"{content}\" at column {offset}")]
    FieldParsing {
        offset: usize,
        content: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Record decoding failure. Decoding is atomic: when this is returned,
/// no record was produced. Carries the context of the offending line.
#[derive(Error, Debug)]
#[error("line {line_number} \"{content}\": {kind}")]
pub struct FormatError {
    /// 1-based line number, counted from the start of the line source
    pub line_number: usize,
    /// Offending line content
    pub content: String,
    #[source]
    pub kind: ParsingError,
}

impl FormatError {
    pub(crate) fn new(line_number: usize, content: &str, kind: ParsingError) -> Self {
        Self {
            line_number,
            content: content.to_string(),
            kind,
        }
    }
}

/// Errors that may rise in Formatting process
#[derive(Error, Debug)]
pub enum FormattingError {
    #[error("can't format non finite value {0}")]
    NonFiniteValue(f64),
    #[error("exponent of {0:e} does not fit on two digits")]
    ExponentOverflow(f64),
    #[error("PRN {0} does not fit on two digits")]
    PrnOutOfRange(i32),
    #[error("revision {0} does not follow the V2 layout")]
    UnsupportedVersion(Version),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the ephemeris representations when
/// record derived values do not satisfy their own rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Fit interval flag derivation requires IODC to be assigned first
    #[error("iodc must be set before the fit interval flag")]
    IodcNotSet,
    /// IODC does not describe a valid extended fit interval
    #[error("invalid IODC {0} for an extended fit interval")]
    InvalidIodc(u16),
    /// Ephemeris content is incomplete
    #[error("ephemeris data not loaded")]
    DataNotLoaded,
    #[error("invalid GPS PRN {0}")]
    InvalidPrn(i32),
}

/// Crate level error
#[derive(Error, Debug)]
pub enum Error {
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("formatting error: {0}")]
    Formatting(#[from] FormattingError),
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("version error: {0}")]
    Version(#[from] VersionParsingError),
}
