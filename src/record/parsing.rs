//! Record decoding
use crate::{
    cursor::LineCursor,
    epoch::parse_nav_v2,
    fields::{field_at, parse_field},
    record::{NavigationRecord, FIELD_OFFSETS, RECORD_LINES},
    FormatError, ParsingError,
};

#[cfg(feature = "log")]
use log::error;

/// Length of the PRN / EPOCH preamble, first numeric field excluded
const PRN_EPOCH_LEN: usize = 22;

/// Parses the numeric field found at `offset`.
/// The line must extend up to `offset`, a blank field being zero.
fn parse_field_at(line: &str, offset: usize) -> Result<f64, ParsingError> {
    let content = field_at(line, offset).ok_or(ParsingError::LineTooShort(line.len()))?;
    parse_field(content).map_err(|source| ParsingError::FieldParsing {
        offset,
        content: content.to_string(),
        source,
    })
}

/// Parses an optional numeric field: zero when the line stops before `offset`
fn parse_optional_field_at(line: &str, offset: usize) -> Result<f64, ParsingError> {
    if offset > line.len() {
        Ok(0.0)
    } else {
        parse_field_at(line, offset)
    }
}

/// Parses the four numeric fields of a BROADCAST ORBIT line
fn parse_orbit(line: &str) -> Result<[f64; 4], ParsingError> {
    if !line.is_ascii() {
        return Err(ParsingError::BadlyFormattedLine);
    }
    Ok([
        parse_field_at(line, FIELD_OFFSETS[0])?,
        parse_field_at(line, FIELD_OFFSETS[1])?,
        parse_field_at(line, FIELD_OFFSETS[2])?,
        parse_field_at(line, FIELD_OFFSETS[3])?,
    ])
}

impl NavigationRecord {
    /// Decodes one record from its 8 text lines.
    /// Decoding is atomic: either all fields are decoded, or [FormatError] is returned.
    /// Line numbers reported on error are counted from the first of these lines.
    /// ```
    /// use rinex_gps_nav::prelude::*;
    /// let lines = [
    ///     " 6 99  9  2 17 51 44.0 -.839701388031D-03 -.165982783074D-10  .000000000000D+00",
    ///     "     .910000000000D+02  .934062500000D+02  .116040547840D-08  .162092304801D+00",
    ///     "     .484101474285D-05  .626740418375D-02  .652112066746D-05  .515365489006D+04",
    ///     "     .409904000000D+06 -.242143869400D-07  .329237003460D+00 -.596046447754D-07",
    ///     "     .111541663136D+01  .326593750000D+03  .206958726335D+01 -.638312302555D-08",
    ///     "     .307155651409D-09  .000000000000D+00  .102500000000D+04  .000000000000D+00",
    ///     "     .000000000000D+00  .000000000000D+00  .000000000000D+00  .910000000000D+02",
    ///     "     .406800000000D+06  .000000000000D+00",
    /// ];
    /// let record = NavigationRecord::decode(&lines)
    ///     .unwrap();
    /// assert_eq!(record.prn, 6);
    /// assert_eq!(record.toe_week, 1025);
    /// assert_eq!(record.transmit_time, 406800.0);
    /// ```
    pub fn decode(lines: &[&str; RECORD_LINES]) -> Result<Self, FormatError> {
        Self::decode_at(LineCursor::new(), lines)
    }

    /// Decodes one record from the next 8 lines of `lines`,
    /// `cursor` being the number of lines consumed before this call.
    /// Returns the record and the cursor advanced past it.
    /// Running out of lines is reported as [ParsingError::MissingLine].
    pub fn decode_lines<I, S>(
        cursor: LineCursor,
        lines: &mut I,
    ) -> Result<(Self, LineCursor), FormatError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Vec::<S>::with_capacity(RECORD_LINES);
        for nth in 0..RECORD_LINES {
            match lines.next() {
                Some(line) => buffer.push(line),
                None => {
                    let e = FormatError::new(
                        cursor.next_line_number() + nth,
                        "",
                        ParsingError::MissingLine,
                    );
                    #[cfg(feature = "log")]
                    error!("{}", e);
                    return Err(e);
                },
            }
        }

        let content: [&str; RECORD_LINES] = std::array::from_fn(|i| buffer[i].as_ref());
        let record = Self::decode_at(cursor, &content)?;
        Ok((record, cursor.advance(RECORD_LINES)))
    }

    /// Decodes 8 lines, line numbers being reported relative to `cursor`
    pub(crate) fn decode_at(
        cursor: LineCursor,
        lines: &[&str; RECORD_LINES],
    ) -> Result<Self, FormatError> {
        let mut record = Self::default();
        for (nth, line) in lines.iter().enumerate() {
            if let Err(kind) = record.decode_line(nth, line) {
                let e = FormatError::new(cursor.next_line_number() + nth, line, kind);
                #[cfg(feature = "log")]
                error!("{}", e);
                return Err(e);
            }
        }
        Ok(record)
    }

    /// Decodes the `nth` line of a record into `self`
    fn decode_line(&mut self, nth: usize, line: &str) -> Result<(), ParsingError> {
        match nth {
            0 => self.decode_prn_epoch(line),
            1 => {
                [self.iode, self.crs, self.dn, self.m0] = parse_orbit(line)?;
                Ok(())
            },
            2 => {
                [self.cuc, self.ecc, self.cus, self.sqrt_a] = parse_orbit(line)?;
                Ok(())
            },
            3 => {
                [self.toe, self.cic, self.omega0, self.cis] = parse_orbit(line)?;
                Ok(())
            },
            4 => {
                [self.i0, self.crc, self.w, self.omega_dot] = parse_orbit(line)?;
                Ok(())
            },
            5 => {
                let [idot, code_flags, toe_week, l2p_flag] = parse_orbit(line)?;
                // truncation toward zero
                self.idot = idot;
                self.code_flags = code_flags as i16;
                self.toe_week = toe_week as i16;
                self.l2p_flag = l2p_flag as i16;
                Ok(())
            },
            6 => {
                let [accuracy, health, tgd, iodc] = parse_orbit(line)?;
                self.accuracy = accuracy;
                self.health = health as i16;
                self.tgd = tgd;
                self.iodc = iodc;
                Ok(())
            },
            _ => {
                if !line.is_ascii() {
                    return Err(ParsingError::BadlyFormattedLine);
                }
                // fit interval is not described prior V2.1,
                // spare fields are not described
                self.transmit_time = parse_field_at(line, FIELD_OFFSETS[0])?;
                self.fit_interval = parse_optional_field_at(line, FIELD_OFFSETS[1])?;
                Ok(())
            },
        }
    }

    /// Decodes the PRN / EPOCH / SV CLK line
    fn decode_prn_epoch(&mut self, line: &str) -> Result<(), ParsingError> {
        if !line.is_ascii() {
            return Err(ParsingError::BadlyFormattedLine);
        }
        if line.len() < PRN_EPOCH_LEN {
            return Err(ParsingError::LineTooShort(line.len()));
        }

        // verify column separators, prior anything else
        let bytes = line.as_bytes();
        for offset in (2..=17).step_by(3) {
            if bytes[offset] != b' ' {
                return Err(ParsingError::BadlyFormattedLine);
            }
        }

        let prn = &line[0..2];
        self.prn = prn
            .trim()
            .parse::<i32>()
            .map_err(|_| ParsingError::PrnParsing(prn.to_string()))?;

        self.epoch = parse_nav_v2(&line[2..PRN_EPOCH_LEN])?;

        self.clock_bias = parse_field_at(line, FIELD_OFFSETS[1])?;
        self.clock_drift = parse_field_at(line, FIELD_OFFSETS[2])?;
        self.clock_drift_rate = parse_field_at(line, FIELD_OFFSETS[3])?;
        Ok(())
    }
}
