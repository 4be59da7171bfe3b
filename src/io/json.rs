//! JSON serialization for results and scratch databases

use std::fs;
use std::path::Path;

use crate::error::EstrnResult;
use crate::odb::{ResultsDatabase, ScratchDatabase};

impl ResultsDatabase {
    /// Parse a database from JSON text
    pub fn from_json_str(json: &str) -> EstrnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a database from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> EstrnResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> EstrnResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to a file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> EstrnResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

impl ScratchDatabase {
    /// Pretty-printed JSON
    pub fn to_json_string(&self) -> EstrnResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to a file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> EstrnResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EstrnError;
    use crate::odb::ResultsDatabase;

    #[test]
    fn reads_minimal_database() {
        let json = r#"{
            "name": "plate",
            "steps": [{
                "name": "Load",
                "frames": [{
                    "frame_id": 0,
                    "increment_number": 0,
                    "frame_value": 1.0,
                    "field_outputs": {
                        "NE": {
                            "name": "NE",
                            "position": "element",
                            "components": [
                                {"label": "NE11", "entities": [1], "values": [0.01]}
                            ]
                        }
                    }
                }]
            }]
        }"#;
        let db = ResultsDatabase::from_json_str(json).unwrap();
        assert_eq!(db.frame_count(), 1);
        let back = ResultsDatabase::from_json_str(&db.to_json_string().unwrap()).unwrap();
        assert_eq!(back, db);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ResultsDatabase::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, EstrnError::SerializationError(_)));
    }
}
