use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

pub trait Preferences {
    fn get_string(&self, key: &str, default: &str) -> String;

    fn set_string(&mut self, key: &str, value: &str);
}

#[derive(Debug)]
pub enum PreferencesError {
    Io(io::Error),
    Json(serde_json::Error),
    NotAnObject(PathBuf),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::Io(e) => write!(f, "preferences i/o error: {}", e),
            PreferencesError::Json(e) => write!(f, "preferences are not valid json: {}", e),
            PreferencesError::NotAnObject(path) => {
                write!(f, "preferences file {} is not a json object", path.display())
            }
        }
    }
}

impl std::error::Error for PreferencesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferencesError::Io(e) => Some(e),
            PreferencesError::Json(e) => Some(e),
            PreferencesError::NotAnObject(_) => None,
        }
    }
}

impl From<io::Error> for PreferencesError {
    fn from(e: io::Error) -> Self {
        PreferencesError::Io(e)
    }
}

impl From<serde_json::Error> for PreferencesError {
    fn from(e: serde_json::Error) -> Self {
        PreferencesError::Json(e)
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> MemoryPreferences {
        MemoryPreferences {
            values: HashMap::new(),
        }
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(value) => value.clone(),
            None => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

// Flat json object on disk, non-string values read as absent
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonPreferences {
    // A missing file gives an empty store
    pub fn load(path: impl AsRef<Path>) -> Result<JsonPreferences, PreferencesError> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Value>(&text)? {
                Value::Object(map) => map,
                _ => return Err(PreferencesError::NotAnObject(path)),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No preferences at {}, starting empty", path.display());
                Map::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(JsonPreferences { path, values })
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        debug!("Preferences written to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Preferences for JsonPreferences {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
    }
}
