use noise::{NoiseFn, Perlin};

const HEIGHT_OFFSET: f64 = 28.0;

/// Surface height accessor consumed by structure placement. Must be valid for
/// the whole expanded region before placement runs; the Perlin-backed
/// implementation below is defined everywhere, and tests substitute closures.
pub trait SurfaceHeight {
    fn height_at(&self, world_x: i32, world_z: i32) -> f32;
}

impl<F> SurfaceHeight for F
where
    F: Fn(i32, i32) -> f32,
{
    fn height_at(&self, world_x: i32, world_z: i32) -> f32 {
        self(world_x, world_z)
    }
}

#[derive(Clone)]
pub struct TerrainField {
    terrain: Perlin,
}

impl TerrainField {
    pub fn new(seed: u64) -> Self {
        Self {
            terrain: Perlin::new(seed as u32),
        }
    }
}

impl SurfaceHeight for TerrainField {
    fn height_at(&self, world_x: i32, world_z: i32) -> f32 {
        let wx = world_x as f64;
        let wz = world_z as f64;

        let coarse = self.terrain.get([wx * 0.008, wz * 0.008]);
        let detail = self.terrain.get([wx * 0.032 + 101.3, wz * 0.032 - 73.7]) * 0.35;

        (coarse * 22.0 + detail * 10.0 + HEIGHT_OFFSET) as f32
    }
}
