//! Reader for BEAM-DIMAP (`.dim`) XML headers as written by Sentinel Toolbox/SNAP.
//!
//! The header carries an abstracted-metadata block nested under
//! `Dataset_Sources/MDElem[@name="metadata"]/MDElem[@name="Abstracted_Metadata"]`,
//! where each scalar lives in an `MDATTR` element keyed by its `name` attribute.
//! Only the handful of attributes needed for catalog indexing are extracted here.
use chrono::{NaiveDate, NaiveDateTime};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors encountered when reading DIMAP headers
#[derive(Debug, Error)]
pub enum DimapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Abstracted_Metadata block not found in DIMAP header")]
    MetadataNotFound,
    #[error("Missing attribute `{0}` in DIMAP metadata")]
    MissingField(&'static str),
    #[error("Unparseable timestamp: {0}")]
    DateParse(String),
}

/// Acquisition metadata extracted from the abstracted-metadata block
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractedMetadata {
    /// Scene/product identifier (`PRODUCT`)
    pub scene_name: String,
    /// Mission name (`MISSION`) with hyphens normalized to underscores
    pub platform: String,
    /// First-line acquisition timestamp (`first_line_time`)
    pub first_line_time: NaiveDateTime,
    /// Last-line acquisition timestamp (`last_line_time`)
    pub last_line_time: NaiveDateTime,
}

/// Normalize a mission/platform name for catalog use ("SENTINEL-1" -> "SENTINEL_1").
/// Idempotent: a name without hyphens passes through unchanged.
pub fn normalize_platform(name: &str) -> String {
    name.replace('-', "_")
}

/// Timestamp formats accepted from DIMAP headers. SNAP writes the
/// `DD-MON-YYYY` form; the ISO variants show up in reprocessed products.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%d-%b-%Y %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a free-text DIMAP timestamp into a `NaiveDateTime`.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, DimapError> {
    let trimmed = text.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    // Bare dates get midnight
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    Err(DimapError::DateParse(trimmed.to_string()))
}

fn name_attr(e: &BytesStart) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == b"name")
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

impl AbstractedMetadata {
    /// Parse the abstracted-metadata block out of a `.dim` header file.
    ///
    /// Walks the XML as a stream, tracking the chain of `MDElem` names under
    /// `Dataset_Sources`, and reads only the direct-child `MDATTR` values of
    /// the `metadata/Abstracted_Metadata` block.
    pub fn from_dim_header<P: AsRef<Path>>(path: P) -> Result<Self, DimapError> {
        let path = path.as_ref();
        info!("Parsing DIMAP header: {:?}", path);
        // Open the file explicitly so access failures carry the Io variant
        // rather than being folded into a generic XML error
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        reader.trim_text(true);
        let mut buf = Vec::new();

        let mut in_dataset_sources = false;
        let mut mdelem_stack: Vec<String> = Vec::new();
        let mut saw_abstracted = false;
        let mut current_field: Option<&'static str> = None;

        let mut product: Option<String> = None;
        let mut mission: Option<String> = None;
        let mut first_line: Option<String> = None;
        let mut last_line: Option<String> = None;

        let at_target = |in_sources: bool, stack: &[String]| {
            in_sources
                && stack.len() == 2
                && stack[0] == "metadata"
                && stack[1] == "Abstracted_Metadata"
        };

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    match tag.as_str() {
                        "Dataset_Sources" => in_dataset_sources = true,
                        "MDElem" if in_dataset_sources => {
                            mdelem_stack.push(name_attr(e).unwrap_or_default());
                            if at_target(in_dataset_sources, &mdelem_stack) {
                                saw_abstracted = true;
                            }
                        }
                        "MDATTR" if at_target(in_dataset_sources, &mdelem_stack) => {
                            current_field = match name_attr(e).as_deref() {
                                Some("PRODUCT") => Some("PRODUCT"),
                                Some("MISSION") => Some("MISSION"),
                                Some("first_line_time") => Some("first_line_time"),
                                Some("last_line_time") => Some("last_line_time"),
                                _ => None,
                            };
                        }
                        _ => {}
                    }
                }
                Event::End(ref e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    match tag.as_str() {
                        "Dataset_Sources" => in_dataset_sources = false,
                        "MDElem" if in_dataset_sources => {
                            mdelem_stack.pop();
                        }
                        "MDATTR" => current_field = None,
                        _ => {}
                    }
                }
                Event::Text(e) => {
                    if let Some(field) = current_field {
                        let txt = e.unescape().unwrap_or_default().to_string();
                        match field {
                            "PRODUCT" => product = Some(txt),
                            "MISSION" => mission = Some(txt),
                            "first_line_time" => first_line = Some(txt),
                            "last_line_time" => last_line = Some(txt),
                            _ => {}
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !saw_abstracted {
            return Err(DimapError::MetadataNotFound);
        }

        let scene_name = product.ok_or(DimapError::MissingField("PRODUCT"))?;
        let mission = mission.ok_or(DimapError::MissingField("MISSION"))?;
        let first_line = first_line.ok_or(DimapError::MissingField("first_line_time"))?;
        let last_line = last_line.ok_or(DimapError::MissingField("last_line_time"))?;

        Ok(AbstractedMetadata {
            scene_name,
            platform: normalize_platform(&mission),
            first_line_time: parse_timestamp(&first_line)?,
            last_line_time: parse_timestamp(&last_line)?,
        })
    }
}
