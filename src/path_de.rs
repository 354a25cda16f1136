use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Deserialize with JSON-path context in error messages, so a bad node deep in
/// a project document points at where it sits (`children[3].type.types[1]`).
pub fn from_value_with_path<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, LoadError> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| LoadError::Json {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| LoadError::Json {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}
