use super::ParamLoadError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AtomRecord {
    pub name: String,
    pub radius: f64,
    pub scale_factor: f64,
}

/// Per-atom radii and OBC scale factors, in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AtomTable {
    pub names: Vec<String>,
    pub radii: Vec<f64>,
    pub scale_factors: Vec<f64>,
}

impl AtomTable {
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn push(&mut self, record: AtomRecord) {
        self.names.push(record.name);
        self.radii.push(record.radius);
        self.scale_factors.push(record.scale_factor);
    }

    pub fn read_from_path(path: &Path) -> Result<Self, ParamLoadError> {
        debug!("Loading per-atom OBC parameters from {:?}", path);
        let reader = csv::Reader::from_path(path).map_err(|e| ParamLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::collect(reader).map_err(|e| ParamLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self, csv::Error> {
        Self::collect(csv::Reader::from_reader(reader))
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let mut table = Self::default();
        for result in reader.deserialize::<AtomRecord>() {
            table.push(result?);
        }
        Ok(table)
    }
}

impl FromIterator<AtomRecord> for AtomTable {
    fn from_iter<I: IntoIterator<Item = AtomRecord>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_from_keeps_file_order() {
        let csv = "name,radius,scale_factor\nN,0.155,0.79\nCA,0.17,0.72\nH,0.12,0.85\n";
        let table = AtomTable::read_from(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.names, vec!["N", "CA", "H"]);
        assert_eq!(table.radii, vec![0.155, 0.17, 0.12]);
        assert_eq!(table.scale_factors, vec![0.79, 0.72, 0.85]);
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let table = AtomTable::read_from("name,radius,scale_factor\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_radius_is_an_error() {
        let csv = "name,radius,scale_factor\nN,big,0.79\n";
        assert!(AtomTable::read_from(csv.as_bytes()).is_err());
    }

    #[test]
    fn read_from_path_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = AtomTable::read_from_path(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(ParamLoadError::Csv { .. })));
    }

    #[test]
    fn read_from_path_fails_for_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.csv");
        fs::write(&path, "name,radius,scale_factor\nN,0.155\n").unwrap();
        let result = AtomTable::read_from_path(&path);
        assert!(matches!(result, Err(ParamLoadError::Csv { .. })));
    }

    #[test]
    fn collects_from_records() {
        let table: AtomTable = vec![AtomRecord {
            name: "O".to_string(),
            radius: 0.15,
            scale_factor: 0.85,
        }]
        .into_iter()
        .collect();
        assert_eq!(table.radii, vec![0.15]);
    }
}
