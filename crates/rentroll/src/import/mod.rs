mod normalizer;
mod record;

pub use record::UnitRecord;

use crate::occupancy::UnitLeaseInfo;
use record::RentRollRow;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RentRollImportError {
    #[error("failed to read rent roll: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rent roll CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads unit rows from a rent-roll CSV export.
pub struct RentRollImporter;

impl RentRollImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<UnitLeaseInfo>, RentRollImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<UnitLeaseInfo>, RentRollImportError> {
        let records = Self::records_from_reader(reader)?;
        let units: Vec<UnitLeaseInfo> = records
            .into_iter()
            .map(UnitRecord::into_lease_info)
            .collect();
        debug!(units = units.len(), "rent roll imported");
        Ok(units)
    }

    /// Raw rows before date parsing, as the data layer would hand them over.
    pub fn records_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<UnitRecord>, RentRollImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<RentRollRow>() {
            let record = row?.into_record();
            if record.unit_id.is_empty() {
                continue;
            }
            records.push(record);
        }

        Ok(records)
    }
}
