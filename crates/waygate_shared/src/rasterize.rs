use glam::{IVec3, Vec3};

use crate::block::{BlockId, BlockRegistry};
use crate::chunk::ChunkData;
use crate::coords::{split_world, ChunkPos};
use crate::facet::PortalFacet;
use crate::region::Region3;

/// Queued intent to materialize a live portal for one interior voxel,
/// consumed exactly once by the simulation tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PortalSpawn {
    pub location: IVec3,
    pub destination: Vec3,
}

/// Default destination policy: every interior voxel teleports to its own
/// absolute position.
pub fn self_destination(pos: IVec3) -> Vec3 {
    pos.as_vec3()
}

/// Carves portal markers into chunks: a hollow wall shell around a solid
/// portal-field plane, one extent unit above the marker so the structure sits
/// on the surface. The destination policy is injected, so paired or
/// externally-mapped portals are a different closure, not a different
/// rasterizer.
pub struct PortalRasterizer<F = fn(IVec3) -> Vec3>
where
    F: Fn(IVec3) -> Vec3,
{
    frame: BlockId,
    field: BlockId,
    destination: F,
}

impl PortalRasterizer {
    pub fn new(registry: &BlockRegistry) -> Self {
        let air = BlockId::AIR;
        Self {
            frame: registry.get_by_name("stone_brick").unwrap_or(air),
            field: registry.get_by_name("portal_field").unwrap_or(air),
            destination: self_destination,
        }
    }
}

impl<F> PortalRasterizer<F>
where
    F: Fn(IVec3) -> Vec3,
{
    pub fn with_destination_policy(frame: BlockId, field: BlockId, destination: F) -> Self {
        Self {
            frame,
            field,
            destination,
        }
    }

    /// Carves every marker in `facet` that touches the chunk at `chunk_pos`.
    /// Voxels outside the chunk's real bounds are skipped; clipping across a
    /// chunk boundary is expected, the neighbor pass carves the rest. One
    /// `PortalSpawn` is pushed per interior voxel; repeated carves re-emit the
    /// same location, which the registry resolves by overwrite.
    pub fn carve(
        &self,
        chunk: &mut ChunkData,
        chunk_pos: ChunkPos,
        facet: &PortalFacet,
        spawns: &mut Vec<PortalSpawn>,
    ) {
        let bounds = Region3::chunk_bounds(chunk_pos);

        for (marker, portal) in facet.world_entries() {
            let center = marker + IVec3::new(0, portal.extent.y, 0);
            let walls = Region3::from_center_extents(center, portal.extent);
            let inside = Region3::from_center_extents(
                center,
                (portal.extent - IVec3::new(1, 1, 0)).max(IVec3::ZERO),
            );

            for voxel in &walls {
                if !bounds.contains(voxel) {
                    continue;
                }

                let (_, local) = split_world(voxel);
                if inside.contains(voxel) {
                    chunk.set(local, self.field);
                    spawns.push(PortalSpawn {
                        location: voxel,
                        destination: (self.destination)(voxel),
                    });
                } else {
                    chunk.set(local, self.frame);
                }
            }
        }
    }
}
