use glam::IVec3;

use crate::facet::{Portal, PortalFacet};
use crate::noise_field::WhiteNoise;
use crate::region::Region3;
use crate::terrain::SurfaceHeight;

/// Fraction of surface positions that qualify is roughly
/// `(1 - PLACEMENT_THRESHOLD) / 2`; portals are meant to be rare landmarks.
pub const PLACEMENT_THRESHOLD: f32 = 0.9993;

/// Border sampled around each chunk region so a structure anchored just
/// outside the chunk still carves its overlapping voxels into it. Must cover
/// the largest possible structure.
pub const FACET_BORDER: i32 = 8;

pub const MIN_PORTAL_EXTENT: i32 = 2;
pub const MAX_PORTAL_EXTENT: i32 = 4;

pub struct PortalPlanner {
    noise: WhiteNoise,
    threshold: f32,
}

impl PortalPlanner {
    pub fn new(seed: u64) -> Self {
        Self::with_threshold(seed, PLACEMENT_THRESHOLD)
    }

    pub fn with_threshold(seed: u64, threshold: f32) -> Self {
        Self {
            noise: WhiteNoise::new(seed),
            threshold,
        }
    }

    /// Decides where portal structures exist within `chunk_region`. Scans the
    /// border-expanded region in `Region3::iter` order and anchors a portal at
    /// the first position that sits on the terrain surface, wins the noise
    /// roll, and fits entirely inside the expanded region; then stops. At most
    /// one marker per region, first found wins.
    pub fn plan(&self, chunk_region: Region3, heights: &impl SurfaceHeight) -> PortalFacet {
        let mut facet = PortalFacet::new(chunk_region, FACET_BORDER);
        let world_region = facet.world_region();

        for pos in &world_region {
            let surface = heights.height_at(pos.x, pos.z);
            if pos.y != surface.round() as i32 {
                continue;
            }

            if self.noise.sample(pos.x, pos.y, pos.z) <= self.threshold {
                continue;
            }

            let portal = Portal::new(self.roll_extent(pos));
            if !Self::structure_fits(pos, &portal, world_region) {
                continue;
            }

            facet.set_world(pos, portal);
            break;
        }

        facet
    }

    /// Half-extents in MIN..=MAX, derived from an independent noise sample so
    /// sizes stay seed-deterministic.
    fn roll_extent(&self, pos: IVec3) -> IVec3 {
        let roll = self.noise.sample(pos.x, pos.y.wrapping_add(7919), pos.z);
        let unit = (f64::from(roll) + 1.0) * 0.5;
        let span = (MAX_PORTAL_EXTENT - MIN_PORTAL_EXTENT + 1) as f64;
        let extent =
            (MIN_PORTAL_EXTENT + (unit * span) as i32).clamp(MIN_PORTAL_EXTENT, MAX_PORTAL_EXTENT);
        IVec3::new(extent, extent, 0)
    }

    /// The carved wall region (raised by one extent unit so the structure
    /// sits on the surface) must lie fully inside the expanded region.
    fn structure_fits(anchor: IVec3, portal: &Portal, world_region: Region3) -> bool {
        let center = anchor + IVec3::new(0, portal.extent.y, 0);
        let walls = Region3::from_center_extents(center, portal.extent);
        world_region.contains(walls.min) && world_region.contains(walls.max)
    }
}
