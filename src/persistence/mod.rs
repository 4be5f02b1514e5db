//! JSON save/load for settings and high scores
//!
//! Features:
//! - Missing file reads as `None` rather than an error
//! - Writes go to a `.tmp` sibling first and are renamed into place

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;

/// Read and parse `path`; `Ok(None)` if it does not exist
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Serialize to `path` via a temporary file
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        value: u32,
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("meteor-dodge-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_none() {
        let loaded: Option<Sample> = load_json(&scratch("missing.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("sample.json");
        save_json(&path, &Sample { value: 7 }).unwrap();
        let loaded: Option<Sample> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(Sample { value: 7 }));
        assert!(!tmp_path(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let path = scratch("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let loaded: Result<Option<Sample>> = load_json(&path);
        assert!(matches!(loaded, Err(crate::Error::Json(_))));
        let _ = fs::remove_file(&path);
    }
}
