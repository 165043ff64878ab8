use crate::schedule::schedule_error::ScheduleError;
use csv::{ReaderBuilder, Trim};
use kdam::tqdm;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use zip::ZipArchive;

pub const STOPS_TABLE: &str = "stops.txt";
pub const ROUTES_TABLE: &str = "routes.txt";
pub const TRIPS_TABLE: &str = "trips.txt";
pub const STOP_TIMES_TABLE: &str = "stop_times.txt";

/// location of the GTFS tables for a run, either an unzipped feed directory
/// or the original .zip archive.
#[derive(Debug, Clone)]
pub enum GtfsSource {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl GtfsSource {
    pub fn new(path: &Path) -> Result<GtfsSource, ScheduleError> {
        if path.is_dir() {
            Ok(GtfsSource::Directory(path.to_path_buf()))
        } else if path.is_file() && path.extension().is_some_and(|e| e == "zip") {
            Ok(GtfsSource::Archive(path.to_path_buf()))
        } else {
            Err(ScheduleError::Read(
                path.to_path_buf(),
                String::from("expected a GTFS directory or a .zip archive"),
            ))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            GtfsSource::Directory(p) => p,
            GtfsSource::Archive(p) => p,
        }
    }

    /// reads every row of one GTFS table, such as `trips.txt`.
    pub fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, ScheduleError> {
        let rows = match self {
            GtfsSource::Directory(dir) => {
                let filepath = dir.join(table);
                if !filepath.is_file() {
                    return Err(ScheduleError::MissingTable(
                        dir.to_path_buf(),
                        table.to_string(),
                    ));
                }
                let file = File::open(&filepath)
                    .map_err(|e| ScheduleError::Read(filepath.clone(), e.to_string()))?;
                deserialize_rows(file, table)?
            }
            GtfsSource::Archive(zip_path) => {
                let file = File::open(zip_path)
                    .map_err(|e| ScheduleError::Read(zip_path.to_path_buf(), e.to_string()))?;
                let mut archive = ZipArchive::new(file)
                    .map_err(|e| ScheduleError::Read(zip_path.to_path_buf(), e.to_string()))?;
                let entry_name = find_archive_entry(&archive, zip_path, table)?;
                let file_in_zip = archive
                    .by_name(&entry_name)
                    .map_err(|e| ScheduleError::Read(zip_path.to_path_buf(), e.to_string()))?;
                deserialize_rows(file_in_zip, table)?
            }
        };
        log::info!("read {} rows from {}", rows.len(), table);
        Ok(rows)
    }
}

/// locates a table inside a GTFS archive by file name. feeds are sometimes
/// zipped with an enclosing folder, so only the last path component is compared.
fn find_archive_entry<R: Read + std::io::Seek>(
    archive: &ZipArchive<R>,
    zip_path: &Path,
    table: &str,
) -> Result<String, ScheduleError> {
    let matches: Vec<String> = archive
        .file_names()
        .filter(|name| {
            Path::new(name)
                .file_name()
                .is_some_and(|file_name| file_name == table)
        })
        .map(String::from)
        .collect();
    match matches.as_slice() {
        [] => Err(ScheduleError::MissingTable(
            zip_path.to_path_buf(),
            table.to_string(),
        )),
        [name] => Ok(name.clone()),
        _ => Err(ScheduleError::DuplicateTable(
            zip_path.to_path_buf(),
            table.to_string(),
        )),
    }
}

fn deserialize_rows<R: Read, T: DeserializeOwned>(
    reader: R,
    table: &str,
) -> Result<Vec<T>, ScheduleError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let row_iter = tqdm!(rdr.deserialize::<T>(), desc = format!("reading {table}"));
    row_iter
        .map(|r| r.map_err(|e| ScheduleError::Csv(table.to_string(), e)))
        .collect::<Result<Vec<_>, _>>()
}
