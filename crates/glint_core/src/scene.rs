//! Material and render setting types.
//!
//! Materials are built once when a scene is loaded and are read-only from
//! then on. Shading workers borrow them from a `MaterialLibrary`.

use glint_math::Vec3;
use serde::Deserialize;

/// Color type alias (linear RGB)
pub type Color = Vec3;

/// The scattering model a surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Lambertian reflection, sampled with a cosine-weighted hemisphere
    Diffuse,
    /// Perfect specular reflection
    Mirror,
    /// Smooth glass-like interface that reflects or refracts
    Dielectric,
}

/// A surface material.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Material name (unique within a library)
    pub name: String,

    /// Scattering model
    pub kind: MaterialKind,

    /// Reflectance/transmittance factor applied to throughput on every bounce
    pub albedo: Color,

    /// Emitted radiance (zero for non-emitters)
    pub emittance: Color,

    /// Exterior index over interior index.
    ///
    /// Scene files give the interior over exterior ratio; the loader inverts
    /// it so shading can use this value directly for rays arriving from
    /// outside.
    pub index_of_refraction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: MaterialKind::Diffuse,
            albedo: Color::new(0.5, 0.5, 0.5), // Grey default
            emittance: Color::ZERO,
            index_of_refraction: 1.0,
        }
    }
}

impl Material {
    /// Create a diffuse material.
    pub fn diffuse(name: impl Into<String>, albedo: Color) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Diffuse,
            albedo,
            ..Default::default()
        }
    }

    /// Create a mirror material. `albedo` tints every reflection.
    pub fn mirror(name: impl Into<String>, albedo: Color) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Mirror,
            albedo,
            ..Default::default()
        }
    }

    /// Create a dielectric material.
    ///
    /// - `interior_ior`: interior index over exterior index (1.5 = glass in air);
    ///   must be positive and finite
    pub fn dielectric(name: impl Into<String>, albedo: Color, interior_ior: f32) -> Self {
        debug_assert!(
            interior_ior.is_finite() && interior_ior > 0.0,
            "dielectric ior must be positive and finite, got {}",
            interior_ior
        );
        Self {
            name: name.into(),
            kind: MaterialKind::Dielectric,
            albedo,
            index_of_refraction: 1.0 / interior_ior,
            ..Default::default()
        }
    }

    /// Builder method to set emittance.
    pub fn with_emittance(mut self, emittance: Color) -> Self {
        self.emittance = emittance;
        self
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emittance.max_element() > 0.0
    }
}

/// Index of a material inside a `MaterialLibrary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// An ordered, immutable-after-load set of materials.
#[derive(Clone, Debug, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
}

impl MaterialLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material and return its id.
    pub fn add(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    /// Look up a material by id.
    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Find a material by name.
    pub fn find(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .iter()
            .position(|m| m.name == name)
            .map(|i| MaterialId(i as u32))
    }

    /// Get the number of materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over `(id, material)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.materials
            .iter()
            .enumerate()
            .map(|(i, m)| (MaterialId(i as u32), m))
    }
}

/// Settings shared by every path of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Bounce budget each path starts with
    pub max_bounces: u32,
    /// Base seed mixed into every per-path random stream
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_bounces: 8,
            seed: 0,
        }
    }
}
