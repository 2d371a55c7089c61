//! Instance registry and zone registration.

use core::fmt;

use zr_core::{BuildingId, Verbosity, ZoneId};

use crate::building::Building;
use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{RegistryError, RegistryResult};
use crate::factory::{InstanceFactory, InstanceRequest};
use crate::zone::Zone;

/// One zone as declared by the modeling front end.
///
/// All strings are borrowed; the registry stores its own copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneDeclaration<'a> {
    pub source_name: &'a str,
    pub weather_file: &'a str,
    pub schema_file: &'a str,
    pub zone_name: &'a str,
    /// Pre-built package path; empty when not pinned.
    pub archive_path: &'a str,
    pub verbosity: Verbosity,
}

impl<'a> ZoneDeclaration<'a> {
    pub fn new(
        source_name: &'a str,
        weather_file: &'a str,
        schema_file: &'a str,
        zone_name: &'a str,
    ) -> Self {
        Self {
            source_name,
            weather_file,
            schema_file,
            zone_name,
            archive_path: "",
            verbosity: Verbosity::default(),
        }
    }

    pub fn with_archive_path(mut self, archive_path: &'a str) -> Self {
        self.archive_path = archive_path;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn instance_request(&self) -> InstanceRequest<'a> {
        InstanceRequest {
            source_name: self.source_name,
            weather_file: self.weather_file,
            schema_file: self.schema_file,
            zone_name: self.zone_name,
            archive_path: self.archive_path,
        }
    }
}

/// Identifies a registered zone: its building and its position there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneHandle {
    pub building: BuildingId,
    pub zone: ZoneId,
}

impl fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.building, self.zone)
    }
}

/// All building instances known to the model, in creation order.
///
/// The registry grows only. Registration takes `&mut self`, so a single
/// writer is enforced by the borrow checker; sharing it across threads
/// requires putting the whole registry behind one lock
/// (e.g. `Mutex<InstanceRegistry>`), never locking buildings individually.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    buildings: Vec<Building>,
    diagnostics: Diagnostics,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of building instances.
    pub fn count(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// The `index`-th building in creation order.
    pub fn by_index(&self, index: usize) -> Option<&Building> {
        self.buildings.get(index)
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(id.as_usize())
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn find_by_source_name(&self, source_name: &str) -> Option<BuildingId> {
        self.buildings
            .iter()
            .find(|b| b.source_name() == source_name)
            .map(Building::id)
    }

    pub fn zone(&self, handle: ZoneHandle) -> Option<&Zone> {
        self.building(handle.building)?.zone(handle.zone)
    }

    pub fn zone_mut(&mut self, handle: ZoneHandle) -> Option<&mut Zone> {
        self.buildings
            .get_mut(handle.building.as_usize())?
            .zone_mut(handle.zone)
    }

    /// Every zone of every building, buildings in creation order.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.buildings.iter().flat_map(|b| b.zones().iter())
    }

    /// Highest verbosity requested so far; `None` before the first zone.
    pub fn global_verbosity(&self) -> Option<Verbosity> {
        self.diagnostics.verbosity()
    }

    pub fn warnings(&self) -> &[Warning] {
        self.diagnostics.warnings()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Register one zone declaration.
    ///
    /// Joins the building whose source name matches, or asks `factory` for
    /// a new instance when none does. On error the registry, including its
    /// verbosity and warnings, is left untouched.
    pub fn register_zone<F>(
        &mut self,
        factory: &mut F,
        decl: &ZoneDeclaration<'_>,
    ) -> RegistryResult<ZoneHandle>
    where
        F: InstanceFactory + ?Sized,
    {
        let (verbosity, warning) = self.diagnostics.reconcile(decl.verbosity);
        let name = owned_copy(decl.zone_name, "zone name")?;

        let handle = match self.find_by_source_name(decl.source_name) {
            Some(building) => self.attach_zone(building, name, decl)?,
            None => self.create_building(factory, name, decl, verbosity)?,
        };

        self.diagnostics.commit(verbosity, warning);
        self.diagnostics.write_log(
            Verbosity::Verbose,
            format_args!(
                "Registered zone {} in {} as {}.",
                decl.zone_name, decl.source_name, handle
            ),
        );
        Ok(handle)
    }

    fn attach_zone(
        &mut self,
        building: BuildingId,
        name: String,
        decl: &ZoneDeclaration<'_>,
    ) -> RegistryResult<ZoneHandle> {
        let record = &mut self.buildings[building.as_usize()];
        record.check_admission(decl.zone_name, decl.archive_path)?;
        let zone = record.reserve_zone()?;
        record.push_zone(Zone::new(name, building));
        Ok(ZoneHandle { building, zone })
    }

    fn create_building<F>(
        &mut self,
        factory: &mut F,
        name: String,
        decl: &ZoneDeclaration<'_>,
        verbosity: Verbosity,
    ) -> RegistryResult<ZoneHandle>
    where
        F: InstanceFactory + ?Sized,
    {
        let building = BuildingId::try_from_usize(self.buildings.len())
            .ok_or(RegistryError::IdSpaceExhausted { what: "buildings" })?;
        self.buildings
            .try_reserve(1)
            .map_err(RegistryError::oom("instance registry"))?;
        let source_name = owned_copy(decl.source_name, "building source name")?;
        let weather_file = owned_copy(decl.weather_file, "weather file name")?;
        let schema_file = owned_copy(decl.schema_file, "schema file name")?;
        let archive_path = owned_copy(decl.archive_path, "archive path")?;
        let mut zones = Vec::new();
        zones
            .try_reserve(1)
            .map_err(RegistryError::oom("building zones"))?;
        zones.push(Zone::new(name, building));

        // Not committed yet; gate on the verbosity this call will leave behind.
        self.diagnostics.write_log_at(
            verbosity,
            Verbosity::Info,
            format_args!(
                "Creating simulation instance for {} (first zone {}).",
                decl.source_name, decl.zone_name
            ),
        );
        let instance = factory
            .create_instance(&decl.instance_request())
            .map_err(|source| RegistryError::InstanceCreation {
                building: decl.source_name.to_string(),
                source,
            })?;

        let record = Building::new(
            building,
            source_name,
            weather_file,
            schema_file,
            Some(archive_path),
            instance,
            zones,
        );
        let zone = ZoneId::FIRST;
        self.append(record)?;
        Ok(ZoneHandle { building, zone })
    }

    /// Add a building at the end of the registry.
    fn append(&mut self, building: Building) -> RegistryResult<BuildingId> {
        debug_assert!(self.find_by_source_name(building.source_name()).is_none());
        self.buildings
            .try_reserve(1)
            .map_err(RegistryError::oom("instance registry"))?;
        let id = building.id();
        self.buildings.push(building);
        Ok(id)
    }
}

fn owned_copy(s: &str, what: &'static str) -> RegistryResult<String> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(RegistryError::oom(what))?;
    owned.push_str(s);
    Ok(owned)
}
