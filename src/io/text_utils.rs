// Copyright @yucwang 2026

use crate::core::histogram::Histogram;
use crate::core::word::RegisterWord;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[derive(Debug)]
pub enum TextIoError {
    Io(std::io::Error),
    Parse { line: usize, text: String },
}

impl From<std::io::Error> for TextIoError {
    fn from(err: std::io::Error) -> Self {
        TextIoError::Io(err)
    }
}

impl fmt::Display for TextIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextIoError::Io(err) => write!(f, "io error: {}", err),
            TextIoError::Parse { line, text } => {
                write!(f, "parse error at line {}: {:?} is not an unsigned integer", line, text)
            }
        }
    }
}

impl std::error::Error for TextIoError {}

/// Writes one decimal value per line. Returns the number of values written.
pub fn write_sequence<W, I, Wr>(writer: &mut Wr, values: I) -> Result<u64, TextIoError>
where
    W: RegisterWord,
    I: IntoIterator<Item = W>,
    Wr: Write,
{
    let mut written = 0u64;
    for value in values {
        writeln!(writer, "{}", value)?;
        written += 1;
    }
    Ok(written)
}

/// Writes `<value> <count>` lines in increasing value order, ready for gnuplot.
pub fn write_histogram<W: RegisterWord, Wr: Write>(writer: &mut Wr,
                                                   histogram: &Histogram<W>) -> Result<(), TextIoError> {
    for (value, count) in histogram.iter() {
        writeln!(writer, "{} {}", value, count)?;
    }
    Ok(())
}

pub fn write_sequence_to_file<W, I, P>(values: I, file_path: P) -> Result<u64, TextIoError>
where
    W: RegisterWord,
    I: IntoIterator<Item = W>,
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();
    log::info!("Starting writing sequence: {}.", file_path.display());

    let mut writer = BufWriter::new(File::create(file_path)?);
    let written = write_sequence(&mut writer, values)?;
    writer.flush()?;
    Ok(written)
}

pub fn write_histogram_to_file<W: RegisterWord, P: AsRef<Path>>(histogram: &Histogram<W>,
                                                                file_path: P) -> Result<(), TextIoError> {
    let file_path = file_path.as_ref();
    log::info!("Starting writing histogram with {} buckets: {}.", histogram.len(), file_path.display());

    let mut writer = BufWriter::new(File::create(file_path)?);
    write_histogram(&mut writer, histogram)?;
    writer.flush()?;
    Ok(())
}

/// Reads a sequence written by [`write_sequence`]. Blank lines are skipped.
pub fn read_sequence<R: Read>(reader: R) -> Result<Vec<u128>, TextIoError> {
    let mut values = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<u128>().map_err(|_| TextIoError::Parse {
            line: index + 1,
            text: trimmed.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

pub fn read_sequence_from_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<u128>, TextIoError> {
    let file_path = file_path.as_ref();
    log::info!("Starting reading sequence from: {}.", file_path.display());

    let values = read_sequence(File::open(file_path)?)?;
    log::info!("Sequence loaded, {} values.", values.len());
    Ok(values)
}
