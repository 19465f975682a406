use std::collections::HashMap;

use glam::IVec3;

use crate::region::Region3;

/// Abstract, not-yet-carved record of a portal structure's size around its
/// surface anchor point. Half-extents; the structure is planar, so z is 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Portal {
    pub extent: IVec3,
}

impl Portal {
    pub fn new(extent: IVec3) -> Self {
        Self { extent }
    }
}

/// Sparse portal markers for one chunk-generation pass, covering the chunk
/// plus a safety border so structures near chunk edges are not truncated.
/// Built once by the planner and read-only afterwards.
pub struct PortalFacet {
    region: Region3,
    entries: HashMap<IVec3, Portal>,
}

impl PortalFacet {
    pub fn new(chunk_region: Region3, border: i32) -> Self {
        Self {
            region: chunk_region.expand(border),
            entries: HashMap::new(),
        }
    }

    /// Chunk region plus border, in world coordinates.
    pub fn world_region(&self) -> Region3 {
        self.region
    }

    pub fn set_world(&mut self, pos: IVec3, portal: Portal) {
        assert!(
            self.region.contains(pos),
            "portal marker {pos} outside facet region {:?}",
            self.region
        );
        self.entries.insert(pos, portal);
    }

    pub fn get_world(&self, pos: IVec3) -> Option<&Portal> {
        self.entries.get(&pos)
    }

    /// Lookup by offset from the region minimum instead of absolute world
    /// coordinates.
    pub fn get_relative(&self, offset: IVec3) -> Option<&Portal> {
        self.entries.get(&(self.region.min + offset))
    }

    pub fn world_entries(&self) -> impl Iterator<Item = (IVec3, &Portal)> {
        self.entries.iter().map(|(pos, portal)| (*pos, portal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
