use tracing::debug;

use crate::block::{BlockId, BlockRegistry};
use crate::chunk::ChunkData;
use crate::coords::{join_world, ChunkPos, LocalPos, CHUNK_SIZE};
use crate::placement::PortalPlanner;
use crate::rasterize::{PortalRasterizer, PortalSpawn};
use crate::region::Region3;
use crate::terrain::{SurfaceHeight, TerrainField};

const BEDSTONE_LEVEL: i32 = -64;
const SEA_LEVEL: i32 = 22;

#[derive(Debug, Clone)]
pub struct WorldGenerator {
    pub seed: u64,
}

impl WorldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic per `(seed, pos)`; safe to call from worker threads.
    /// Portal spawn requests are returned alongside the chunk so the caller
    /// can queue them for the tick thread.
    pub fn generate_chunk(
        &self,
        pos: ChunkPos,
        registry: &BlockRegistry,
    ) -> (ChunkData, Vec<PortalSpawn>) {
        let mut chunk = ChunkData::new_empty();
        let terrain = TerrainField::new(self.seed);

        let air = BlockId::AIR;
        let bedstone = registry.get_by_name("bedstone").unwrap_or(air);
        let granite = registry.get_by_name("granite").unwrap_or(air);
        let loam = registry.get_by_name("loam").unwrap_or(air);
        let verdant_turf = registry.get_by_name("verdant_turf").unwrap_or(air);
        let dune_sand = registry.get_by_name("dune_sand").unwrap_or(air);
        let still_water = registry.get_by_name("still_water").unwrap_or(air);

        // column heights first, then layer fill
        let mut surface_heights = [[0i32; CHUNK_SIZE]; CHUNK_SIZE];
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let anchor = join_world(
                    pos,
                    LocalPos {
                        x: x as u8,
                        y: 0,
                        z: z as u8,
                    },
                );
                surface_heights[z][x] = terrain.height_at(anchor.x, anchor.z).round() as i32;
            }
        }

        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let surface_y = surface_heights[z][x];

                for y in 0..CHUNK_SIZE {
                    let world_y = pos.y * CHUNK_SIZE as i32 + y as i32;

                    let block = if world_y <= BEDSTONE_LEVEL {
                        bedstone
                    } else if world_y < surface_y {
                        if world_y >= surface_y - 3 {
                            loam
                        } else {
                            granite
                        }
                    } else if world_y == surface_y {
                        if world_y <= SEA_LEVEL {
                            dune_sand
                        } else {
                            verdant_turf
                        }
                    } else if world_y <= SEA_LEVEL {
                        still_water
                    } else {
                        air
                    };

                    chunk.set(
                        LocalPos {
                            x: x as u8,
                            y: y as u8,
                            z: z as u8,
                        },
                        block,
                    );
                }
            }
        }

        // portal structures last so they carve through terrain and water
        let planner = PortalPlanner::new(self.seed);
        let facet = planner.plan(Region3::chunk_bounds(pos), &terrain);
        let rasterizer = PortalRasterizer::new(registry);

        let mut spawns = Vec::new();
        rasterizer.carve(&mut chunk, pos, &facet, &mut spawns);
        if !facet.is_empty() {
            debug!(
                "chunk {pos:?}: carved {} portal marker(s), {} spawn request(s)",
                facet.len(),
                spawns.len()
            );
        }

        (chunk, spawns)
    }
}

#[cfg(test)]
mod tests {
    use super::WorldGenerator;
    use crate::block::register_default_blocks;
    use crate::coords::{split_world, ChunkPos};
    use crate::region::Region3;

    #[test]
    fn generation_is_deterministic() {
        let registry = register_default_blocks();
        let generator = WorldGenerator::new(0xC0FFEE);
        let pos = ChunkPos::new(3, 0, -2);

        let (chunk_a, spawns_a) = generator.generate_chunk(pos, &registry);
        let (chunk_b, spawns_b) = generator.generate_chunk(pos, &registry);

        assert_eq!(chunk_a.blocks.as_slice(), chunk_b.blocks.as_slice());
        assert_eq!(spawns_a, spawns_b);
    }

    #[test]
    fn some_surface_chunk_carries_a_carved_portal() {
        let registry = register_default_blocks();
        let field = registry.get_by_name("portal_field").unwrap();
        let generator = WorldGenerator::new(0xC0FFEE);

        // surface sits around y=28, so the y=0 chunk row holds it; portals
        // are rare, so scan a patch of chunks for the first hit
        let mut found = false;
        'search: for cz in 0..16 {
            for cx in 0..16 {
                let pos = ChunkPos::new(cx, 0, cz);
                let (chunk, spawns) = generator.generate_chunk(pos, &registry);

                let bounds = Region3::chunk_bounds(pos);
                for spawn in &spawns {
                    assert!(bounds.contains(spawn.location));
                    assert_eq!(spawn.destination, spawn.location.as_vec3());
                    assert_eq!(chunk.get(split_world(spawn.location).1), field);
                }

                if !spawns.is_empty() {
                    found = true;
                    break 'search;
                }
            }
        }

        assert!(found, "no portal found in a 16x16 chunk patch");
    }
}
