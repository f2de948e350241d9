#![cfg(feature = "std")]

use std::{
    io::{self, ErrorKind, Read},
    path::Path,
};

use cassette::avec::{Error, Record};
use csv::ReaderBuilder;

#[test]
fn decode_slice_synthetic_ride() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    validator.validate(cassette::avec::decode_slice(&data));
}

#[test]
fn decode_reader_synthetic_ride() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    validator.validate(cassette::avec::decode_reader(file));
}

#[test]
fn decode_reader_synthetic_ride_stops_early() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let file = std::fs::File::open(PATH).unwrap();
    let mut records = cassette::avec::decode_reader(file);

    let first = records.next().unwrap().unwrap();
    assert!(matches!(first, Record::Definition(_)));
    assert_eq!(records.remaining(), Some(74 - 15));
}

#[test]
fn decode_reader_retries_interrupted_reads() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    validator.validate(cassette::avec::decode_reader(Stutter::new(file)));
}

#[test]
fn decode_reader_error() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let data = std::fs::read(PATH).unwrap();
    let reader = io::Cursor::new(&data[..20]).chain(Unplugged);
    let mut records = cassette::avec::decode_reader(reader);

    let err = records.find_map(Result::err).unwrap();
    assert!(matches!(&err, Error::Io(err) if err.kind() == ErrorKind::Other));
    assert!(records.next().is_none());
}

#[test]
fn decode_reader_truncated_mid_record() {
    const PATH: &str = "fixtures/synthetic-ride.fit";
    let data = std::fs::read(PATH).unwrap();
    let mut records = cassette::avec::decode_reader(io::Cursor::new(&data[..85]));

    let err = records.find_map(Result::err).unwrap();
    assert!(matches!(
        err,
        Error::TruncatedInput {
            offset: 85,
            expected: 1,
            available: 0
        }
    ));
    assert!(records.next().is_none());
}

/// A reader handing out one byte at a time, interrupted before every read.
struct Stutter<R> {
    r: R,
    interrupt: bool,
}

impl<R> Stutter<R> {
    fn new(r: R) -> Self {
        Self { r, interrupt: true }
    }
}

impl<R: Read> Read for Stutter<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if !self.interrupt {
            return Err(ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(1);
        self.r.read(&mut buf[..n])
    }
}

struct Unplugged;

impl Read for Unplugged {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device unplugged"))
    }
}

struct Validator(Vec<Vec<String>>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(expected)
    }

    fn validate<'c>(&mut self, records: impl Iterator<Item = Result<Record<'c>, Error>>) {
        for record in records {
            let Record::Data(data) = record.unwrap() else {
                continue;
            };

            let mut row = self.0.remove(0);
            assert_eq!(row.remove(0), data.global_message_number.to_string());

            for field in &data.fields {
                assert_eq!(row.remove(0), field.field_number.to_string());
                assert_eq!(row.remove(0), field.value.to_string());
            }

            assert!(row.is_empty());
        }

        assert!(self.0.is_empty());
    }
}
