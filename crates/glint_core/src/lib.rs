//! Glint Core - Material model and scene description for the Glint shader.
//!
//! This crate provides:
//!
//! - **Material types**: `MaterialKind`, `Material`, `MaterialLibrary`
//! - **Render settings**: bounce budget and seed shared by a render
//! - **Scene description**: JSON loading with validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} materials, {} bounces",
//!     scene.materials.len(),
//!     scene.settings.max_bounces);
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult, SceneDescription};
pub use scene::{Color, Material, MaterialId, MaterialKind, MaterialLibrary, RenderSettings};
