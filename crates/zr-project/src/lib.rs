//! zr-project: zone declaration manifests and their validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_manifest};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Manifest> {
    let content = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_yaml::from_str(&content)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

pub fn save_yaml(path: &std::path::Path, manifest: &Manifest) -> ProjectResult<()> {
    validate_manifest(manifest)?;
    let content = serde_yaml::to_string(manifest)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Manifest> {
    let content = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

pub fn save_json(path: &std::path::Path, manifest: &Manifest) -> ProjectResult<()> {
    validate_manifest(manifest)?;
    let content = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a manifest, picking the format from the file extension.
pub fn load(path: &std::path::Path) -> ProjectResult<Manifest> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
