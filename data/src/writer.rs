//! Append writer for reviews submitted through the form.
//!
//! Rows are written in the column order of the file's existing header, so a
//! file whose columns were reordered upstream stays consistent. Appends are
//! serialized within the process; nothing guards against another process
//! writing the same file.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use time::{Date, OffsetDateTime};

use crate::error::{Result, ReviewError};
use crate::record::{Column, NewReview, NewReviewRow};

static APPEND_LOCK: Mutex<()> = Mutex::new(());

/// Append `review` to the CSV at `path`, dated `date_posted`.
///
/// A missing, empty or blank file is seeded with the canonical header first.
/// A header lacking any of [`Column::REQUIRED`] is rejected before anything is
/// written, since the loader could not read the row back.
pub fn append_review(
    path: impl AsRef<Path>,
    review: NewReview,
    date_posted: Date,
) -> Result<NewReviewRow> {
    let path = path.as_ref();
    let _guard = APPEND_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let row = review.into_row(date_posted);
    let existing = read_header(path)?;

    let mut options = OpenOptions::new();
    match &existing {
        Existing::Header { .. } => options.append(true),
        Existing::Missing => options.create(true).append(true),
        Existing::Blank => options.write(true).truncate(true),
    };
    let mut file = options
        .open(path)
        .map_err(|err| ReviewError::io(path, err))?;

    let (columns, write_header) = match existing {
        Existing::Header {
            columns,
            ends_with_newline,
        } => {
            if !ends_with_newline {
                file.write_all(b"\n")
                    .map_err(|err| ReviewError::io(path, err))?;
            }
            (columns, false)
        }
        Existing::Missing | Existing::Blank => {
            (Column::ALL.into_iter().map(Some).collect(), true)
        }
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    if write_header {
        writer.write_record(Column::ALL.iter().map(|column| column.name()))?;
    }

    let cells: Vec<String> = columns
        .iter()
        .map(|column| column.map(|c| row.field(c)).unwrap_or_default())
        .collect();
    writer.write_record(&cells)?;
    writer.flush().map_err(|err| ReviewError::io(path, err))?;

    tracing::info!(
        path = %path.display(),
        title = %row.title,
        rating = row.rating,
        "appended review"
    );
    Ok(row)
}

/// Today's date in the local timezone, or UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

enum Existing {
    Missing,
    /// Present but holding nothing but whitespace.
    Blank,
    Header {
        /// One entry per header cell; `None` for columns outside the schema.
        columns: Vec<Option<Column>>,
        ends_with_newline: bool,
    },
}

fn read_header(path: &Path) -> Result<Existing> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Existing::Missing),
        Err(err) => return Err(ReviewError::io(path, err)),
    };

    let len = file
        .metadata()
        .map_err(|err| ReviewError::io(path, err))?
        .len();
    if len == 0 {
        return Ok(Existing::Blank);
    }

    let ends_with_newline =
        last_byte(&mut file).map_err(|err| ReviewError::io(path, err))? == b'\n';
    file.seek(SeekFrom::Start(0))
        .map_err(|err| ReviewError::io(path, err))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = reader.headers()?.clone();

    if headers.iter().all(|cell| cell.trim().is_empty()) {
        let content = fs::read(path).map_err(|err| ReviewError::io(path, err))?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Existing::Blank);
        }
    }

    let columns: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();
    if let Some(missing) = Column::REQUIRED
        .iter()
        .find(|required| !columns.contains(&Some(**required)))
    {
        return Err(ReviewError::MissingColumn(missing.name()));
    }

    Ok(Existing::Header {
        columns,
        ends_with_newline,
    })
}

fn last_byte(file: &mut File) -> std::io::Result<u8> {
    let mut buf = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut buf)?;
    Ok(buf[0])
}
