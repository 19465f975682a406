use glam::{IVec3, Vec3};

pub type CharacterId = u64;

#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub position: Vec3,
    occupied: IVec3,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            occupied: voxel_of(position),
        }
    }

    pub fn occupied_voxel(&self) -> IVec3 {
        self.occupied
    }

    /// Entering-a-voxel signal: reports the newly occupied voxel once when
    /// the position has crossed a block boundary since the last poll.
    pub fn poll_entered_voxel(&mut self) -> Option<IVec3> {
        let voxel = voxel_of(self.position);
        if voxel == self.occupied {
            return None;
        }
        self.occupied = voxel;
        Some(voxel)
    }

    /// The one outward command this system issues. Marks the destination
    /// voxel as already occupied so the arrival itself is not an entry signal.
    pub fn relocate(&mut self, destination: Vec3) {
        self.position = destination;
        self.occupied = voxel_of(destination);
    }
}

pub fn voxel_of(position: Vec3) -> IVec3 {
    position.floor().as_ivec3()
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};

    use super::Character;

    #[test]
    fn entry_signal_fires_once_per_voxel_crossing() {
        let mut character = Character::new(1, "wanderer", Vec3::new(8.2, 64.0, 8.7));
        assert_eq!(character.occupied_voxel(), IVec3::new(8, 64, 8));

        // movement inside the same voxel is silent
        character.position = Vec3::new(8.9, 64.3, 8.1);
        assert_eq!(character.poll_entered_voxel(), None);

        character.position = Vec3::new(9.1, 64.3, 8.1);
        assert_eq!(character.poll_entered_voxel(), Some(IVec3::new(9, 64, 8)));
        assert_eq!(character.poll_entered_voxel(), None);
    }

    #[test]
    fn relocation_does_not_count_as_an_entry() {
        let mut character = Character::new(2, "traveler", Vec3::ZERO);
        character.relocate(Vec3::new(100.0, 30.0, -5.0));

        assert_eq!(character.position, Vec3::new(100.0, 30.0, -5.0));
        assert_eq!(character.poll_entered_voxel(), None);
        assert_eq!(character.occupied_voxel(), IVec3::new(100, 30, -5));
    }

    #[test]
    fn negative_positions_floor_toward_negative_infinity() {
        let character = Character::new(3, "edge", Vec3::new(-0.5, -1.2, 0.9));
        assert_eq!(character.occupied_voxel(), IVec3::new(-1, -2, 0));
    }
}
