// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use atelier_app::{ColumnSource, Entity, EntityKind, Record};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{} records cannot be exported", .0.label())]
    Unsupported(EntityKind),

    #[error("create export file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("write export: {0}")]
    Csv(#[from] csv::Error),

    #[error("format created date: {0}")]
    Format(#[from] time::error::Format),
}

/// Writes a header row and one row per record. Fields containing commas,
/// quotes or newlines are quoted.
pub fn write_csv<E: Entity, W: Write>(records: &[Record<E>], writer: W) -> Result<(), ExportError> {
    if E::EXPORT_COLUMNS.is_empty() {
        return Err(ExportError::Unsupported(E::KIND));
    }
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(E::EXPORT_COLUMNS.iter().map(|column| column.header))?;
    for record in records {
        let mut row = Vec::with_capacity(E::EXPORT_COLUMNS.len());
        for column in E::EXPORT_COLUMNS {
            let cell = match column.source {
                ColumnSource::CreatedOn => record.created_on.format(DATE_FORMAT)?,
                ColumnSource::Field(name) => record
                    .data
                    .field(name)
                    .map(|value| value.display())
                    .unwrap_or_default(),
            };
            row.push(cell);
        }
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

pub fn to_csv_string<E: Entity>(records: &[Record<E>]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the entity's export file into `dir`, replacing any previous one.
pub fn export_to_dir<E: Entity>(records: &[Record<E>], dir: &Path) -> Result<PathBuf, ExportError> {
    let Some(file_name) = E::KIND.export_file_name() else {
        return Err(ExportError::Unsupported(E::KIND));
    };
    let path = dir.join(file_name);
    let file = File::create(&path).map_err(|source| ExportError::Create {
        path: path.clone(),
        source,
    })?;
    write_csv(records, file)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "wrote export");
    Ok(path)
}
