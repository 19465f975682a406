use glam::IVec3;
use serde::{Deserialize, Serialize};

pub const CHUNK_SIZE: usize = 32;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// World position of this chunk's minimum corner.
    pub fn base(self) -> IVec3 {
        let size = CHUNK_SIZE as i32;
        IVec3::new(self.x * size, self.y * size, self.z * size)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalPos {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

fn div_rem_floor(value: i32, divisor: i32) -> (i32, i32) {
    let mut q = value / divisor;
    let mut r = value % divisor;
    if r < 0 {
        q -= 1;
        r += divisor;
    }
    (q, r)
}

pub fn split_world(world_pos: IVec3) -> (ChunkPos, LocalPos) {
    let size = CHUNK_SIZE as i32;

    let (chunk_x, local_x) = div_rem_floor(world_pos.x, size);
    let (chunk_y, local_y) = div_rem_floor(world_pos.y, size);
    let (chunk_z, local_z) = div_rem_floor(world_pos.z, size);

    (
        ChunkPos::new(chunk_x, chunk_y, chunk_z),
        LocalPos {
            x: local_x as u8,
            y: local_y as u8,
            z: local_z as u8,
        },
    )
}

pub fn join_world(chunk_pos: ChunkPos, local: LocalPos) -> IVec3 {
    chunk_pos.base() + IVec3::new(i32::from(local.x), i32::from(local.y), i32::from(local.z))
}

/// Dense index into a chunk's block array: x fastest, then z, then y.
pub fn local_index(local: LocalPos) -> usize {
    usize::from(local.x)
        + usize::from(local.z) * CHUNK_SIZE
        + usize::from(local.y) * CHUNK_SIZE * CHUNK_SIZE
}

pub fn local_from_index(index: usize) -> LocalPos {
    assert!(index < CHUNK_VOLUME, "chunk index out of bounds: {index}");

    let y = index / (CHUNK_SIZE * CHUNK_SIZE);
    let rem = index % (CHUNK_SIZE * CHUNK_SIZE);

    LocalPos {
        x: (rem % CHUNK_SIZE) as u8,
        y: y as u8,
        z: (rem / CHUNK_SIZE) as u8,
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec3;

    use super::{
        join_world, local_from_index, local_index, split_world, ChunkPos, LocalPos, CHUNK_SIZE,
    };

    #[test]
    fn split_world_floors_negative_coordinates() {
        let (chunk, local) = split_world(IVec3::new(-1, 0, 33));
        assert_eq!(chunk, ChunkPos::new(-1, 0, 1));
        assert_eq!(
            local,
            LocalPos {
                x: (CHUNK_SIZE - 1) as u8,
                y: 0,
                z: 1,
            }
        );
    }

    #[test]
    fn split_and_join_round_trip() {
        for world in [
            IVec3::new(0, 0, 0),
            IVec3::new(-33, 95, 66),
            IVec3::new(8, 64, 8),
            IVec3::new(-1, -1, -1),
        ] {
            let (chunk, local) = split_world(world);
            assert_eq!(join_world(chunk, local), world);
        }
    }

    #[test]
    fn local_index_round_trips() {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    let local = LocalPos {
                        x: x as u8,
                        y: y as u8,
                        z: z as u8,
                    };
                    assert_eq!(local_from_index(local_index(local)), local);
                }
            }
        }
    }
}
