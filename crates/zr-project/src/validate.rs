//! Manifest validation logic.
//!
//! Catches what can be seen from the file alone. Cross-declaration
//! conflicts such as duplicate zones are reported by the registry.

use crate::schema::Manifest;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty field: {field} in zone #{index}")]
    EmptyField { field: &'static str, index: usize },

    #[error("Manifest declares no zones")]
    NoZones,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_manifest(manifest: &Manifest) -> Result<(), ValidationError> {
    if manifest.version == 0 || manifest.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: manifest.version,
        });
    }
    if manifest.zones.is_empty() {
        return Err(ValidationError::NoZones);
    }

    for (index, zone) in manifest.zones.iter().enumerate() {
        for (field, value) in [
            ("building", &zone.building),
            ("zone", &zone.zone),
            ("weather", &zone.weather),
            ("schema", &zone.schema),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField { field, index });
            }
        }
    }
    Ok(())
}
