use std::str::FromStr;

use thiserror::Error;

use crate::core::{Timestamp, interval::Interval};

/// One record of the lighting-control stream.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    Control(ControlEvent),
    Usage(Interval),
}

/// Events that mutate the dimmer state, as opposed to querying it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlEvent {
    TurnOff { at: Timestamp },
    Delta { at: Timestamp, change: f32 },
}

#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("record {line:?} is missing its {field} field")]
    MissingField { line: String, field: &'static str },

    #[error("record {line:?} carries an unparseable {field} field")]
    UnparseableField { line: String, field: &'static str },
}

impl Event {
    /// Parse a single input record.
    ///
    /// Returns [`None`] for a well-formed line with an unrecognized keyword:
    /// those are skipped rather than failing the run. Fields past the ones
    /// the keyword calls for are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, MalformedRecord> {
        let mut fields = Fields { line, iterator: line.split(' ') };
        let at = fields.parse_next("timestamp")?;
        match fields.next("keyword")? {
            "TurnOff" => Ok(Some(Self::Control(ControlEvent::TurnOff { at }))),
            "Delta" => {
                let change = fields.parse_next("delta")?;
                Ok(Some(Self::Control(ControlEvent::Delta { at, change })))
            }
            "Usage" => {
                let start = fields.parse_next("start timestamp")?;
                let end = fields.parse_next("end timestamp")?;
                Ok(Some(Self::Usage(Interval::new(start, end))))
            }
            _ => Ok(None),
        }
    }
}

/// Cursor over the space-separated fields of one record.
struct Fields<'a> {
    line: &'a str,
    iterator: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, MalformedRecord> {
        self.iterator
            .next()
            .ok_or_else(|| MalformedRecord::MissingField { line: self.line.to_owned(), field })
    }

    fn parse_next<T: FromStr>(&mut self, field: &'static str) -> Result<T, MalformedRecord> {
        self.next(field)?
            .parse()
            .map_err(|_| MalformedRecord::UnparseableField { line: self.line.to_owned(), field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turn_off() {
        let event = Event::parse("123456789 TurnOff").unwrap();
        assert_eq!(event, Some(Event::Control(ControlEvent::TurnOff { at: 123_456_789 })));
    }

    #[test]
    fn test_parse_delta() {
        let event = Event::parse("1544210163 Delta -0.25").unwrap();
        assert_eq!(
            event,
            Some(Event::Control(ControlEvent::Delta { at: 1_544_210_163, change: -0.25 })),
        );
    }

    #[test]
    fn test_parse_usage() {
        let event = Event::parse("1544206562 Usage 1544206562 1544213763").unwrap();
        assert_eq!(event, Some(Event::Usage(Interval::new(1_544_206_562, 1_544_213_763))));
    }

    #[test]
    fn test_unrecognized_keyword_is_skipped() {
        assert_eq!(Event::parse("123456789 Dim 0.5").unwrap(), None);
    }

    #[test]
    fn test_surplus_fields_are_ignored() {
        let event = Event::parse("42 TurnOff and then some").unwrap();
        assert_eq!(event, Some(Event::Control(ControlEvent::TurnOff { at: 42 })));
    }

    #[test]
    fn test_non_numeric_timestamp() {
        let error = Event::parse("Invalid Input").unwrap_err();
        assert!(matches!(error, MalformedRecord::UnparseableField { field: "timestamp", .. }));
    }

    #[test]
    fn test_missing_keyword() {
        let error = Event::parse("123456789").unwrap_err();
        assert!(matches!(error, MalformedRecord::MissingField { field: "keyword", .. }));
    }

    #[test]
    fn test_missing_delta() {
        let error = Event::parse("123456789 Delta").unwrap_err();
        assert!(matches!(error, MalformedRecord::MissingField { field: "delta", .. }));
    }

    #[test]
    fn test_non_numeric_delta() {
        let error = Event::parse("123456789 Delta much").unwrap_err();
        assert!(matches!(error, MalformedRecord::UnparseableField { field: "delta", .. }));
    }
}
