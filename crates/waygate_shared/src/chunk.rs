use crate::block::BlockId;
use crate::coords::{local_index, LocalPos, CHUNK_VOLUME};

#[derive(Clone, Debug)]
pub struct ChunkData {
    pub blocks: Box<[BlockId; CHUNK_VOLUME]>,
}

impl ChunkData {
    pub fn new_empty() -> Self {
        Self {
            blocks: Box::new([BlockId::AIR; CHUNK_VOLUME]),
        }
    }

    pub fn get(&self, local: LocalPos) -> BlockId {
        self.blocks[local_index(local)]
    }

    /// Returns the block previously stored at `local`.
    pub fn set(&mut self, local: LocalPos, block: BlockId) -> BlockId {
        let index = local_index(local);
        let previous = self.blocks[index];
        self.blocks[index] = block;
        previous
    }
}

impl Default for ChunkData {
    fn default() -> Self {
        Self::new_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ChunkData;
    use crate::block::BlockId;
    use crate::coords::LocalPos;

    #[test]
    fn set_returns_previous_block() {
        let mut chunk = ChunkData::new_empty();
        let pos = LocalPos { x: 3, y: 7, z: 11 };

        assert_eq!(chunk.get(pos), BlockId::AIR);
        assert_eq!(chunk.set(pos, BlockId(2)), BlockId::AIR);
        assert_eq!(chunk.set(pos, BlockId(5)), BlockId(2));
        assert_eq!(chunk.get(pos), BlockId(5));
    }
}
