use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use glam::IVec3;
use tracing::debug;

use waygate_core::jobs::JobPool;
use waygate_core::queue::{work_queue, QueueConsumer, QueueProducer};
use waygate_shared::block::{register_default_blocks, BlockId, BlockRegistry};
use waygate_shared::chunk::ChunkData;
use waygate_shared::coords::{split_world, ChunkPos};
use waygate_shared::rasterize::PortalSpawn;
use waygate_shared::worldgen::WorldGenerator;

struct GeneratedChunk {
    pos: ChunkPos,
    data: ChunkData,
}

/// Chunk cache fed by worker-thread generation. Workers push finished chunks
/// through one queue and portal spawn requests through another; both are
/// drained on the tick thread.
pub struct SimWorld {
    loaded_chunks: HashMap<ChunkPos, ChunkData>,
    pending: HashSet<ChunkPos>,
    generator: WorldGenerator,
    registry: Arc<BlockRegistry>,
    jobs: JobPool,
    finished_tx: QueueProducer<GeneratedChunk>,
    finished_rx: QueueConsumer<GeneratedChunk>,
    spawn_tx: QueueProducer<PortalSpawn>,
}

impl SimWorld {
    pub fn new(seed: u64, spawn_tx: QueueProducer<PortalSpawn>) -> Self {
        let (finished_tx, finished_rx) = work_queue();
        Self {
            loaded_chunks: HashMap::new(),
            pending: HashSet::new(),
            generator: WorldGenerator::new(seed),
            registry: Arc::new(register_default_blocks()),
            jobs: JobPool::default(),
            finished_tx,
            finished_rx,
            spawn_tx,
        }
    }

    pub fn world_seed(&self) -> u64 {
        self.generator.seed
    }

    pub fn is_loaded(&self, pos: ChunkPos) -> bool {
        self.loaded_chunks.contains_key(&pos)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_chunks.len()
    }

    pub fn get_block(&self, world_pos: IVec3) -> Option<BlockId> {
        let (chunk_pos, local) = split_world(world_pos);
        self.loaded_chunks.get(&chunk_pos).map(|c| c.get(local))
    }

    /// Queues generation of the chunk if it is neither loaded nor in flight.
    pub fn request_chunk(&mut self, pos: ChunkPos) {
        if self.loaded_chunks.contains_key(&pos) || !self.pending.insert(pos) {
            return;
        }

        let generator = self.generator.clone();
        let registry = self.registry.clone();
        let finished_tx = self.finished_tx.clone();
        let spawn_tx = self.spawn_tx.clone();

        self.jobs.spawn(move || {
            let (data, spawns) = generator.generate_chunk(pos, &registry);
            for spawn in spawns {
                spawn_tx.push(spawn);
            }
            finished_tx.push(GeneratedChunk { pos, data });
        });
    }

    /// Requests the chunks surrounding a world position (one chunk of
    /// vertical slack, `radius` chunks horizontally).
    pub fn request_around(&mut self, world_pos: IVec3, radius: i32) {
        let (center, _) = split_world(world_pos);
        for dy in -1..=1 {
            for dz in -radius..=radius {
                for dx in -radius..=radius {
                    self.request_chunk(ChunkPos::new(
                        center.x + dx,
                        center.y + dy,
                        center.z + dz,
                    ));
                }
            }
        }
    }

    /// Moves finished chunks into the cache; returns how many arrived.
    pub fn absorb_finished(&mut self) -> usize {
        let mut absorbed = 0;
        for generated in self.finished_rx.drain() {
            self.pending.remove(&generated.pos);
            self.loaded_chunks.insert(generated.pos, generated.data);
            absorbed += 1;
        }
        if absorbed > 0 {
            debug!("absorbed {absorbed} generated chunk(s)");
        }
        absorbed
    }
}
