use glam::IVec3;

use crate::coords::{ChunkPos, CHUNK_SIZE};

/// Inclusive axis-aligned integer box. Iteration order is fixed (x fastest,
/// then z, then y, all ascending); structure placement scans regions in this
/// order and takes the first qualifying position, so changing it would change
/// generated worlds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region3 {
    pub min: IVec3,
    pub max: IVec3,
}

impl Region3 {
    pub fn from_min_max(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Box spanning `center - extents ..= center + extents` on each axis.
    pub fn from_center_extents(center: IVec3, extents: IVec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// The real bounds of one chunk in world coordinates.
    pub fn chunk_bounds(chunk_pos: ChunkPos) -> Self {
        let base = chunk_pos.base();
        Self {
            min: base,
            max: base + IVec3::splat(CHUNK_SIZE as i32 - 1),
        }
    }

    pub fn expand(self, border: i32) -> Self {
        Self {
            min: self.min - IVec3::splat(border),
            max: self.max + IVec3::splat(border),
        }
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn iter(&self) -> RegionIter {
        RegionIter {
            region: *self,
            next: self.min,
            done: self.is_empty(),
        }
    }
}

impl IntoIterator for &Region3 {
    type Item = IVec3;
    type IntoIter = RegionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RegionIter {
    region: Region3,
    next: IVec3,
    done: bool,
}

impl Iterator for RegionIter {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        if self.done {
            return None;
        }

        let current = self.next;

        self.next.x += 1;
        if self.next.x > self.region.max.x {
            self.next.x = self.region.min.x;
            self.next.z += 1;
            if self.next.z > self.region.max.z {
                self.next.z = self.region.min.z;
                self.next.y += 1;
                if self.next.y > self.region.max.y {
                    self.done = true;
                }
            }
        }

        Some(current)
    }
}
