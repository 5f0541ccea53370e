//! Scene description loading.
//!
//! A scene description is a JSON document holding render settings and a list
//! of materials:
//!
//! ```json
//! {
//!   "settings": { "max_bounces": 8, "seed": 1 },
//!   "materials": [
//!     { "name": "light", "type": "diffuse", "albedo": [0, 0, 0], "emittance": [5, 5, 5] },
//!     { "name": "glass", "type": "dielectric", "albedo": [1, 1, 1], "ior": 1.5 }
//!   ]
//! }
//! ```
//!
//! `ior` is written the way artists think about it (interior over exterior)
//! and is inverted on load into the convention `Material` stores.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::scene::{Color, Material, MaterialKind, MaterialLibrary, RenderSettings};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Duplicate material name: {0}")]
    DuplicateMaterial(String),

    #[error("No materials found in scene description")]
    NoMaterials,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A loaded scene description.
#[derive(Clone, Debug)]
pub struct SceneDescription {
    pub settings: RenderSettings,
    pub materials: MaterialLibrary,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    settings: RenderSettings,
    #[serde(default)]
    materials: Vec<MaterialEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MaterialEntry {
    name: String,
    #[serde(rename = "type")]
    kind: MaterialKind,
    albedo: [f32; 3],
    #[serde(default)]
    emittance: [f32; 3],
    #[serde(default = "default_ior")]
    ior: f32,
}

fn default_ior() -> f32 {
    1.0
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene description: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Load a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let file: SceneFile = serde_json::from_str(text)?;

    if file.materials.is_empty() {
        return Err(LoadError::NoMaterials);
    }

    let mut seen = HashSet::new();
    let mut materials = MaterialLibrary::new();
    for entry in file.materials {
        if !seen.insert(entry.name.clone()) {
            return Err(LoadError::DuplicateMaterial(entry.name));
        }
        materials.add(build_material(entry)?);
    }

    log::info!(
        "Loaded {} materials (max_bounces={}, seed={})",
        materials.len(),
        file.settings.max_bounces,
        file.settings.seed
    );

    Ok(SceneDescription {
        settings: file.settings,
        materials,
    })
}

fn build_material(entry: MaterialEntry) -> LoadResult<Material> {
    let invalid = |reason: &str| LoadError::InvalidMaterial {
        name: entry.name.clone(),
        reason: reason.to_string(),
    };

    if entry.name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !entry.ior.is_finite() || entry.ior <= 0.0 {
        return Err(invalid("ior must be a positive finite number"));
    }
    if !is_valid_color(entry.albedo) {
        return Err(invalid("albedo components must be finite and non-negative"));
    }
    if !is_valid_color(entry.emittance) {
        return Err(invalid("emittance components must be finite and non-negative"));
    }

    let index_of_refraction = 1.0 / entry.ior;
    if entry.kind == MaterialKind::Dielectric {
        log::debug!(
            "Material {}: ior {} stored as exterior/interior {}",
            entry.name,
            entry.ior,
            index_of_refraction
        );
    }

    Ok(Material {
        kind: entry.kind,
        albedo: Color::from_array(entry.albedo),
        emittance: Color::from_array(entry.emittance),
        index_of_refraction,
        name: entry.name,
    })
}

fn is_valid_color(c: [f32; 3]) -> bool {
    c.iter().all(|v| v.is_finite() && *v >= 0.0)
}
