//! Building instance record.

use zr_core::{BuildingId, ZoneId};

use crate::error::{RegistryError, RegistryResult};
use crate::factory::InstanceHandle;
use crate::zone::Zone;

/// One shared simulation instance and the zones assigned to it.
///
/// Zones are append-only and owned exclusively by this record.
#[derive(Debug, Clone)]
pub struct Building {
    id: BuildingId,
    source_name: String,
    weather_file: String,
    schema_file: String,
    archive_path: Option<String>,
    instance: InstanceHandle,
    zones: Vec<Zone>,
}

impl Building {
    pub(crate) fn new(
        id: BuildingId,
        source_name: String,
        weather_file: String,
        schema_file: String,
        archive_path: Option<String>,
        instance: InstanceHandle,
        zones: Vec<Zone>,
    ) -> Self {
        debug_assert!(zones.iter().all(|z| z.building() == id));
        Self {
            id,
            source_name,
            weather_file,
            schema_file,
            archive_path: archive_path.filter(|p| !p.is_empty()),
            instance,
            zones,
        }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn weather_file(&self) -> &str {
        &self.weather_file
    }

    pub fn schema_file(&self) -> &str {
        &self.schema_file
    }

    /// Pre-built package this instance is pinned to, if any.
    pub fn archive_path(&self) -> Option<&str> {
        self.archive_path.as_deref()
    }

    pub fn instance(&self) -> InstanceHandle {
        self.instance
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Zone names in declaration order.
    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(Zone::name)
    }

    pub fn contains_zone(&self, name: &str) -> bool {
        self.zone_names().any(|z| z == name)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.as_usize())
    }

    pub fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(id.as_usize())
    }

    pub fn find_zone(&self, name: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .position(|z| z.name() == name)
            .and_then(ZoneId::try_from_usize)
    }

    /// Check that a zone named `zone_name`, declaring `archive_path`, may
    /// join this building. Does not modify the record.
    pub fn check_admission(&self, zone_name: &str, archive_path: &str) -> RegistryResult<()> {
        if self.contains_zone(zone_name) {
            return Err(RegistryError::DuplicateZone {
                zone: zone_name.to_string(),
                building: self.source_name.clone(),
            });
        }
        if !archive_path.is_empty() && self.archive_path() != Some(archive_path) {
            return Err(RegistryError::ConflictingArchivePath {
                requested: archive_path.to_string(),
                pinned: self.archive_path.clone().unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Id the next pushed zone will receive, after reserving room for it.
    pub(crate) fn reserve_zone(&mut self) -> RegistryResult<ZoneId> {
        let id = ZoneId::try_from_usize(self.zones.len())
            .ok_or(RegistryError::IdSpaceExhausted { what: "zones" })?;
        self.zones
            .try_reserve(1)
            .map_err(RegistryError::oom("building zones"))?;
        Ok(id)
    }

    /// Append a zone. Call [`Building::reserve_zone`] first.
    pub(crate) fn push_zone(&mut self, zone: Zone) {
        debug_assert_eq!(zone.building(), self.id);
        self.zones.push(zone);
    }
}
