use glam::IVec3;

use crate::facet::PortalFacet;

/// Read-only projection of a facet for external map renderers: the
/// `(center, extent)` pair of every marker in the generated region, plus the
/// top-down "is this coordinate inside a portal's footprint" query. Cannot
/// reach back into placement state.
pub struct PortalOverlay {
    footprints: Vec<(IVec3, IVec3)>,
}

impl PortalOverlay {
    pub fn from_facet(facet: &PortalFacet) -> Self {
        let mut footprints: Vec<(IVec3, IVec3)> = facet
            .world_entries()
            .map(|(center, portal)| (center, portal.extent))
            .collect();
        footprints.sort_by_key(|(center, _)| (center.y, center.z, center.x));
        Self { footprints }
    }

    pub fn footprints(&self) -> &[(IVec3, IVec3)] {
        &self.footprints
    }

    /// Top-down hit test; the structure plane is x/y, so the map footprint
    /// spans `extent.x` along x and `extent.y` along z.
    pub fn covers(&self, world_x: i32, world_z: i32) -> bool {
        self.footprints.iter().any(|(center, extent)| {
            world_x >= center.x - extent.x
                && world_x <= center.x + extent.x
                && world_z >= center.z - extent.y
                && world_z <= center.z + extent.y
        })
    }
}
