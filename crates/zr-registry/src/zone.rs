//! Thermal zone record.

use zr_core::BuildingId;

use crate::channels::{ChannelKind, ChannelTable};

/// One thermal zone assigned to a building instance.
///
/// The owning [`crate::Building`] holds the record; `building` is only a
/// back-reference into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    building: BuildingId,
    parameter_outputs: ChannelTable,
    inputs: ChannelTable,
    outputs: ChannelTable,
    instantiated: bool,
    initialized: bool,
}

impl Zone {
    /// Create a zone with unresolved channel tables and cleared lifecycle flags.
    pub(crate) fn new(name: String, building: BuildingId) -> Self {
        let parameter_outputs = ChannelTable::for_zone(ChannelKind::ParameterOutput, &name);
        let inputs = ChannelTable::for_zone(ChannelKind::Input, &name);
        let outputs = ChannelTable::for_zone(ChannelKind::Output, &name);
        Self {
            name,
            building,
            parameter_outputs,
            inputs,
            outputs,
            instantiated: false,
            initialized: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn building(&self) -> BuildingId {
        self.building
    }

    pub fn parameter_outputs(&self) -> &ChannelTable {
        &self.parameter_outputs
    }

    pub fn inputs(&self) -> &ChannelTable {
        &self.inputs
    }

    pub fn outputs(&self) -> &ChannelTable {
        &self.outputs
    }

    pub fn channels(&self, kind: ChannelKind) -> &ChannelTable {
        match kind {
            ChannelKind::ParameterOutput => &self.parameter_outputs,
            ChannelKind::Input => &self.inputs,
            ChannelKind::Output => &self.outputs,
        }
    }

    /// Mutable table access for value-reference binding.
    pub fn channels_mut(&mut self, kind: ChannelKind) -> &mut ChannelTable {
        match kind {
            ChannelKind::ParameterOutput => &mut self.parameter_outputs,
            ChannelKind::Input => &mut self.inputs,
            ChannelKind::Output => &mut self.outputs,
        }
    }

    /// All qualified names, parameter outputs first, then inputs, then outputs.
    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.parameter_outputs
            .qualified_names()
            .chain(self.inputs.qualified_names())
            .chain(self.outputs.qualified_names())
    }

    pub fn is_instantiated(&self) -> bool {
        self.instantiated
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mark_instantiated(&mut self) {
        self.instantiated = true;
    }

    /// Initialization implies instantiation.
    pub fn mark_initialized(&mut self) {
        self.instantiated = true;
        self.initialized = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ValueReference;
    use zr_core::Id;

    #[test]
    fn new_zone_has_fixed_tables_and_cleared_flags() {
        let zone = Zone::new("Core_ZN".into(), Id::from_index(2).unwrap());
        assert_eq!(zone.name(), "Core_ZN");
        assert_eq!(zone.building().index(), 2);
        assert_eq!(zone.parameter_outputs().len(), 3);
        assert_eq!(zone.inputs().len(), 5);
        assert_eq!(zone.outputs().len(), 4);
        assert!(!zone.is_instantiated());
        assert!(!zone.is_initialized());
    }

    #[test]
    fn qualified_names_cover_all_tables() {
        let zone = Zone::new("Z".into(), Id::from_index(0).unwrap());
        let names: Vec<&str> = zone.qualified_names().collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "Z_V");
        assert_eq!(names[3], "Z_T");
        assert_eq!(names[11], "Z_QPeo_flow");
    }

    #[test]
    fn lifecycle_flags() {
        let mut zone = Zone::new("Z".into(), Id::from_index(0).unwrap());
        zone.mark_instantiated();
        assert!(zone.is_instantiated());
        assert!(!zone.is_initialized());
        zone.mark_initialized();
        assert!(zone.is_initialized());
    }

    #[test]
    fn channels_mut_binds_through_zone() {
        let mut zone = Zone::new("Z".into(), Id::from_index(0).unwrap());
        zone.channels_mut(ChannelKind::Output)
            .bind(0, ValueReference(7))
            .unwrap();
        assert_eq!(
            zone.channels(ChannelKind::Output).channels()[0].value_ref,
            Some(ValueReference(7))
        );
    }
}
