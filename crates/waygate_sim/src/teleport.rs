use std::collections::HashMap;

use glam::IVec3;
use glam::Vec3;
use tracing::debug;

use crate::character::{Character, CharacterId};
use crate::registry::PortalRegistry;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TeleportRequest {
    pub character: CharacterId,
    pub destination: Vec3,
}

/// Collects teleport requests as characters step into registered portal
/// voxels during a tick and applies them exactly once at the end of it.
/// The request list is owned by the tick thread; no locking.
#[derive(Default)]
pub struct TeleportDispatcher {
    requests: Vec<TeleportRequest>,
}

impl TeleportDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every entered-voxel signal. A voxel without a registered
    /// portal produces no request; repeated entries by the same character in
    /// one tick all append (applying the same destination twice is harmless).
    pub fn observe_enter(
        &mut self,
        character: CharacterId,
        voxel: IVec3,
        registry: &PortalRegistry,
    ) -> bool {
        let Some(destination) = registry.lookup(voxel) else {
            return false;
        };

        self.requests.push(TeleportRequest {
            character,
            destination,
        });
        true
    }

    pub fn pending(&self) -> usize {
        self.requests.len()
    }

    /// Once per tick: relocate every requested character in collection order,
    /// then clear the list unconditionally so nothing is re-applied next tick.
    pub fn flush(&mut self, characters: &mut HashMap<CharacterId, Character>) -> usize {
        let mut applied = 0;
        for request in &self.requests {
            // a character despawned mid-tick simply drops with the list
            if let Some(character) = characters.get_mut(&request.character) {
                character.relocate(request.destination);
                applied += 1;
                debug!(
                    "teleported {} to {:?}",
                    character.name, request.destination
                );
            }
        }

        self.requests.clear();
        applied
    }
}
