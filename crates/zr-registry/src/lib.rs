//! zr-registry: building instances and the thermal zones assigned to them.
//!
//! Provides:
//! - Zone and building records with their per-zone channel tables
//! - The instance registry and the zone registration algorithm
//! - The factory seam through which new simulation instances are created
//!
//! # Example
//!
//! ```
//! use zr_core::Verbosity;
//! use zr_registry::{InstanceRegistry, SequentialFactory, ZoneDeclaration};
//!
//! let mut registry = InstanceRegistry::new();
//! let mut factory = SequentialFactory::new();
//!
//! let decl = ZoneDeclaration::new("office.idf", "chicago.mos", "Energy+.idd", "Core_ZN")
//!     .with_verbosity(Verbosity::Warning);
//! let handle = registry.register_zone(&mut factory, &decl).unwrap();
//!
//! assert_eq!(registry.count(), 1);
//! assert_eq!(registry.zone(handle).unwrap().name(), "Core_ZN");
//! ```

pub mod building;
pub mod channels;
pub mod diagnostics;
pub mod error;
pub mod factory;
pub mod registry;
pub mod zone;

pub use building::Building;
pub use channels::{
    Channel, ChannelKind, ChannelTable, INPUTS, OUTPUTS, PARAMETER_OUTPUTS, ValueReference,
    derive_channel_names,
};
pub use diagnostics::{Diagnostics, Warning};
pub use error::{RegistryError, RegistryResult};
pub use factory::{
    FactoryError, InstanceFactory, InstanceHandle, InstanceRequest, SequentialFactory,
};
pub use registry::{InstanceRegistry, ZoneDeclaration, ZoneHandle};
pub use zone::Zone;
