//! Example: furnace test for the shading pass.
//!
//! Traces paths from the center of a closed unit sphere lined with a single
//! emissive material and compares the mean radiance against the closed-form
//! answer. Diffuse and mirror linings must match it exactly; a dielectric
//! lining lets refracted paths escape and lands below it.
//!
//! Run with: cargo run --example furnace -- [scene.json] [material-name]

use std::env;

use anyhow::{anyhow, Context};
use glint_core::{load_scene, Color, Material, MaterialId, MaterialLibrary, RenderSettings};
use glint_math::{Ray, Vec3};
use glint_shading::{path_rng, shade_segments, PathSegment, SurfaceHit};
use rand::Rng;

const PATH_COUNT: u32 = 100_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (settings, materials, id) = match args.get(1) {
        Some(path) => {
            let scene = load_scene(path).with_context(|| format!("failed to load {}", path))?;
            let id = match args.get(2) {
                Some(name) => scene
                    .materials
                    .find(name)
                    .ok_or_else(|| anyhow!("no material named {}", name))?,
                None => MaterialId(0),
            };
            (scene.settings, scene.materials, id)
        }
        None => {
            let mut materials = MaterialLibrary::new();
            let id = materials.add(
                Material::diffuse("furnace", Color::splat(0.75)).with_emittance(Color::ONE),
            );
            (RenderSettings::default(), materials, id)
        }
    };

    let material = materials
        .get(id)
        .ok_or_else(|| anyhow!("material {:?} missing", id))?;
    println!(
        "Furnace: {} ({:?}), {} paths, {} bounces",
        material.name, material.kind, PATH_COUNT, settings.max_bounces
    );

    let start = std::time::Instant::now();
    let mut paths = camera_paths(&settings);

    for depth in 0..settings.max_bounces {
        let hits: Vec<Option<SurfaceHit>> = paths
            .iter()
            .map(|p| {
                if p.is_terminated() {
                    None
                } else {
                    hit_inside_unit_sphere(&p.ray, id)
                }
            })
            .collect();
        let stats = shade_segments(&mut paths, &hits, &materials, 0, depth, &settings);
        if stats.scattered == 0 {
            break;
        }
    }

    let mean = paths.iter().map(|p| p.radiance).sum::<Vec3>() / PATH_COUNT as f32;
    let expected = closed_form(material, settings.max_bounces);

    println!("Traced in {:?}", start.elapsed());
    println!("Estimate: {:.5} {:.5} {:.5}", mean.x, mean.y, mean.z);
    println!("Expected: {:.5} {:.5} {:.5}", expected.x, expected.y, expected.z);

    Ok(())
}

/// Paths leaving the sphere's center in uniformly random directions.
fn camera_paths(settings: &RenderSettings) -> Vec<PathSegment> {
    (0..PATH_COUNT)
        .map(|i| {
            let mut rng = path_rng(settings.seed, 0, i, u32::MAX);
            let z: f32 = rng.gen_range(-1.0..1.0);
            let phi: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = (1.0 - z * z).sqrt();
            let dir = Vec3::new(r * phi.cos(), r * phi.sin(), z);
            PathSegment::new(Ray::new(Vec3::ZERO, dir), i, settings.max_bounces)
        })
        .collect()
}

/// Radiance after `bounces` bounces when every bounce hits the lining.
fn closed_form(material: &Material, bounces: u32) -> Color {
    let mut total = Color::ZERO;
    let mut weight = Color::ONE;
    for _ in 0..bounces {
        total += weight * material.emittance;
        weight *= material.albedo;
    }
    total
}

fn hit_inside_unit_sphere(ray: &Ray, material: MaterialId) -> Option<SurfaceHit> {
    let c = ray.origin.length_squared() - 1.0;
    // Rays refracted out of the lining start just outside it and escape
    if c > 0.0 {
        return None;
    }

    let b = ray.origin.dot(ray.direction);
    let t = -b + (b * b - c).sqrt();

    let position = ray.at(t);
    Some(SurfaceHit {
        t,
        position,
        normal: -position.normalize(),
        outside: false,
        material,
    })
}
