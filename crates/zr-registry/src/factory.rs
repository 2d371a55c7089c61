//! Seam through which new simulation instances are created.

use core::fmt;
use std::path::PathBuf;

/// Opaque handle to a created simulation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u64);

impl fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance#{}", self.0)
    }
}

/// Identifiers for the instance to create, borrowed from the declaration
/// of the first zone that references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceRequest<'a> {
    pub source_name: &'a str,
    pub weather_file: &'a str,
    pub schema_file: &'a str,
    pub zone_name: &'a str,
    pub archive_path: &'a str,
}

#[derive(thiserror::Error, Debug)]
pub enum FactoryError {
    #[error("Missing input file: {path}")]
    MissingFile { path: PathBuf },

    #[error("Instance rejected: {reason}")]
    Rejected { reason: String },
}

/// Creates the simulation instance backing a building.
///
/// Called at most once per distinct source name, from inside
/// [`crate::InstanceRegistry::register_zone`].
pub trait InstanceFactory {
    fn create_instance(
        &mut self,
        request: &InstanceRequest<'_>,
    ) -> Result<InstanceHandle, FactoryError>;
}

impl<F> InstanceFactory for F
where
    F: FnMut(&InstanceRequest<'_>) -> Result<InstanceHandle, FactoryError>,
{
    fn create_instance(
        &mut self,
        request: &InstanceRequest<'_>,
    ) -> Result<InstanceHandle, FactoryError> {
        self(request)
    }
}

/// Hands out sequential handles without starting anything.
///
/// Used for dry runs: records the source names it was asked to build.
#[derive(Debug, Default)]
pub struct SequentialFactory {
    next: u64,
    created: Vec<String>,
}

impl SequentialFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source names in creation order.
    pub fn created(&self) -> &[String] {
        &self.created
    }
}

impl InstanceFactory for SequentialFactory {
    fn create_instance(
        &mut self,
        request: &InstanceRequest<'_>,
    ) -> Result<InstanceHandle, FactoryError> {
        let handle = InstanceHandle(self.next);
        self.next += 1;
        self.created.push(request.source_name.to_string());
        Ok(handle)
    }
}
