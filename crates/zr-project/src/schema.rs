//! Manifest schema definitions.

use serde::{Deserialize, Serialize};
use zr_core::Verbosity;
use zr_registry::ZoneDeclaration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
}

/// One zone declaration as written in a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDef {
    /// Model file of the building the zone belongs to.
    pub building: String,
    pub zone: String,
    pub weather: String,
    pub schema: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub archive: String,
    #[serde(default)]
    pub verbosity: Verbosity,
}

impl ZoneDef {
    pub fn declaration(&self) -> ZoneDeclaration<'_> {
        ZoneDeclaration::new(&self.building, &self.weather, &self.schema, &self.zone)
            .with_archive_path(&self.archive)
            .with_verbosity(self.verbosity)
    }
}
