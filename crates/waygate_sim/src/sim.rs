use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::{IVec3, Vec3};
use tracing::{debug, info, warn};

use waygate_core::queue::{work_queue, QueueConsumer, QueueProducer};
use waygate_shared::component::PortalComponent;
use waygate_shared::rasterize::PortalSpawn;

use crate::character::{voxel_of, Character, CharacterId};
use crate::commands::Command;
use crate::registry::PortalRegistry;
use crate::teleport::TeleportDispatcher;
use crate::world::SimWorld;

const CHUNK_LOAD_RADIUS: i32 = 1;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub seed: u64,
    pub tps: u32,
}

pub struct Simulation {
    config: SimConfig,
    world: SimWorld,
    registry: PortalRegistry,
    dispatcher: TeleportDispatcher,
    characters: HashMap<CharacterId, Character>,
    components: HashMap<IVec3, PortalComponent>,
    spawn_tx: QueueProducer<PortalSpawn>,
    spawn_rx: QueueConsumer<PortalSpawn>,
    next_character_id: CharacterId,
    tick: u64,
    running: Arc<AtomicBool>,
    command_rx: Receiver<Command>,
}

impl Simulation {
    pub fn new(config: SimConfig, running: Arc<AtomicBool>, command_rx: Receiver<Command>) -> Self {
        let (spawn_tx, spawn_rx) = work_queue();
        Self {
            world: SimWorld::new(config.seed, spawn_tx.clone()),
            registry: PortalRegistry::new(),
            dispatcher: TeleportDispatcher::new(),
            characters: HashMap::new(),
            components: HashMap::new(),
            spawn_tx,
            spawn_rx,
            next_character_id: 1,
            tick: 0,
            config,
            running,
            command_rx,
        }
    }

    pub fn run(&mut self) {
        info!(
            "Starting waygate simulation (seed: {:#x}, {} tps)",
            self.world.world_seed(),
            self.config.tps
        );
        let tick_duration = Duration::from_millis(1000 / u64::from(self.config.tps.max(1)));

        while self.running.load(Ordering::SeqCst) {
            let tick_start = Instant::now();

            self.handle_console_commands();
            if !self.running.load(Ordering::SeqCst) {
                break;
            }

            self.tick_once();

            let elapsed = tick_start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            }
        }

        info!(
            "Simulation stopping after {} tick(s); dropping {} portal(s)",
            self.tick,
            self.registry.len()
        );
        self.registry.clear();
        self.components.clear();
    }

    /// One discrete simulation step: absorb finished generation, materialize
    /// queued portals, collect voxel entries, flush teleports.
    pub fn tick_once(&mut self) {
        self.world.absorb_finished();
        self.materialize_generated_portals();

        for character in self.characters.values_mut() {
            self.world
                .request_around(voxel_of(character.position), CHUNK_LOAD_RADIUS);
            if let Some(voxel) = character.poll_entered_voxel() {
                self.dispatcher
                    .observe_enter(character.id, voxel, &self.registry);
            }
        }

        self.dispatcher.flush(&mut self.characters);
        self.tick += 1;
    }

    /// Drains the generation-side queue once per tick. Each request becomes a
    /// live component and a registry entry the moment it is taken, so a
    /// request queued mid-drain by a worker is simply picked up next tick.
    fn materialize_generated_portals(&mut self) {
        for spawn in self.spawn_rx.drain() {
            let component = PortalComponent::new(spawn.location, spawn.destination);
            self.registry.on_activate(&component);
            self.components.insert(spawn.location, component);
            debug!(
                "materialized portal at {:?} -> {:?}",
                spawn.location, spawn.destination
            );
        }
    }

    fn handle_console_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.execute_command(command);
        }
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::Noop => {}
            Command::Stop => {
                info!("Shutdown requested via console /stop");
                self.running.store(false, Ordering::SeqCst);
            }
            Command::List => self.log_character_list(),
            Command::Portals => self.log_portal_list(),
            Command::Say(message) => info!("[CONSOLE] /say {message}"),
            Command::SpawnCharacter { name, x, y, z } => {
                let id = self.next_character_id;
                self.next_character_id += 1;

                let position = Vec3::new(x, y, z);
                self.characters
                    .insert(id, Character::new(id, name.clone(), position));
                self.world.request_around(voxel_of(position), CHUNK_LOAD_RADIUS);
                info!("[CONSOLE] spawned character {name} (id {id}) at {position}");
            }
            Command::SpawnPortal {
                x,
                y,
                z,
                dx,
                dy,
                dz,
            } => {
                // goes through the same deferred queue as generated portals
                self.spawn_tx.push(PortalSpawn {
                    location: IVec3::new(x, y, z),
                    destination: Vec3::new(dx, dy, dz),
                });
                info!("[CONSOLE] queued portal at [{x}, {y}, {z}]");
            }
            Command::Teleport { character, x, y, z } => {
                match self.resolve_character_target(&character) {
                    Ok(id) => {
                        if let Some(target) = self.characters.get_mut(&id) {
                            target.position = Vec3::new(x, y, z);
                            info!(
                                "[CONSOLE] moved {} (id {id}) to [{x}, {y}, {z}]",
                                target.name
                            );
                        }
                    }
                    Err(err) => warn!("[CONSOLE] /tp failed: {err}"),
                }
            }
            Command::Help => self.log_help(),
            Command::InvalidUsage(message) => warn!("[CONSOLE] {message}"),
            Command::Unknown(input) => {
                warn!("[CONSOLE] unknown command '{input}' (try /help)")
            }
        }
    }

    fn resolve_character_target(&self, target: &str) -> Result<CharacterId, String> {
        if let Ok(id) = target.parse::<CharacterId>() {
            if self.characters.contains_key(&id) {
                return Ok(id);
            }
            return Err(format!("character id {id} does not exist"));
        }

        let mut matches = self
            .characters
            .iter()
            .filter(|(_, character)| character.name.eq_ignore_ascii_case(target))
            .map(|(id, _)| *id);

        let Some(first_match) = matches.next() else {
            return Err(format!("character '{target}' does not exist"));
        };

        if matches.next().is_some() {
            return Err(format!(
                "multiple characters match '{target}', use /list and address by id"
            ));
        }

        Ok(first_match)
    }

    fn log_character_list(&self) {
        if self.characters.is_empty() {
            info!("[CONSOLE] no characters");
            return;
        }

        let mut characters: Vec<&Character> = self.characters.values().collect();
        characters.sort_by_key(|character| character.id);
        info!("[CONSOLE] characters ({}):", characters.len());
        for character in characters {
            info!(
                "[CONSOLE] - {} (id: {}) at {}",
                character.name, character.id, character.position
            );
        }
    }

    fn log_portal_list(&self) {
        if self.registry.is_empty() {
            info!("[CONSOLE] no registered portals");
            return;
        }

        let mut portals: Vec<(IVec3, Vec3)> = self.registry.iter().collect();
        portals.sort_by_key(|(loc, _)| (loc.y, loc.z, loc.x));
        info!(
            "[CONSOLE] registered portals ({}), world loaded chunks: {}",
            portals.len(),
            self.world.loaded_count()
        );
        for (location, destination) in portals {
            info!("[CONSOLE] - {location:?} -> {destination:?}");
        }
    }

    fn log_help(&self) {
        info!("[CONSOLE] Available commands:");
        info!("[CONSOLE]   /help");
        info!("[CONSOLE]   /list");
        info!("[CONSOLE]   /portals");
        info!("[CONSOLE]   /say <message>");
        info!("[CONSOLE]   /spawnchar <name> <x> <y> <z>");
        info!("[CONSOLE]   /spawnportal <x> <y> <z> <destX> <destY> <destZ>");
        info!("[CONSOLE]   /tp <character|id> <x> <y> <z>");
        info!("[CONSOLE]   /stop");
    }
}
