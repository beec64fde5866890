// src/convert/mod.rs

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::{
    fs::{self, File},
    path::Path,
    time::Instant,
};
use tracing::info;

pub mod error;
pub mod utils;

pub use error::ConvertError;
use utils::flatten_newlines;

/// Read the CSV file at `input` and write it as TSV to `output`, replacing
/// every newline embedded in a field with a single space.
///
/// Records stream through one at a time; quoted fields may contain commas,
/// doubled quotes, and newlines. Output records are joined with tabs and
/// terminated with a lone LF on every platform. Returns the number of
/// records written.
///
/// The output is written to `<output>.tmp` and renamed into place on
/// success, so a failed run never truncates an existing output file.
#[tracing::instrument(level = "info", skip(input, output), fields(input = %input.as_ref().display()))]
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<u64, ConvertError> {
    let input = input.as_ref();
    let output = output.as_ref();
    let start = Instant::now();

    let tmp_path = output.with_extension("tmp");
    let records = match convert_to_tmp(input, &tmp_path) {
        Ok(records) => records,
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
    };

    if let Err(source) = fs::rename(&tmp_path, output) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ConvertError::Io {
            path: output.to_path_buf(),
            source,
        });
    }

    info!(records, elapsed = ?start.elapsed(), "wrote {}", output.display());
    Ok(records)
}

/// Stream records from `input` into the temporary file, returning the count.
fn convert_to_tmp(input: &Path, tmp_path: &Path) -> Result<u64, ConvertError> {
    let src = File::open(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let dst = File::create(tmp_path).map_err(|source| ConvertError::Io {
        path: tmp_path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(src);

    // No quoting on the way out: TSV has no standard escaping, so embedded
    // tabs pass through as-is. Terminator is a lone LF regardless of platform.
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(dst);

    let mut records = 0u64;
    for result in rdr.records() {
        let record = result.map_err(|err| ConvertError::from_csv(input, err))?;
        wtr.write_record(record.iter().map(flatten_newlines))
            .map_err(|err| ConvertError::from_csv(tmp_path, err))?;
        records += 1;
    }

    wtr.flush().map_err(|source| ConvertError::Io {
        path: tmp_path.to_path_buf(),
        source,
    })?;

    Ok(records)
}
