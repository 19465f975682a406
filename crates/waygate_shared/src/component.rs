use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Serializable record of one live portal voxel. The host entity storage
/// treats `location` and `destination` as opaque fields; activation and
/// deactivation of this record drive the runtime registry.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalComponent {
    pub location: IVec3,
    pub destination: Vec3,
}

impl PortalComponent {
    pub fn new(location: IVec3, destination: Vec3) -> Self {
        Self {
            location,
            destination,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};

    use super::PortalComponent;

    #[test]
    fn component_survives_host_storage_serialization() {
        let component = PortalComponent::new(IVec3::new(8, 64, 8), Vec3::new(8.0, 64.0, 8.0));

        let encoded = bincode::serialize(&component).expect("serialize component");
        let decoded: PortalComponent =
            bincode::deserialize(&encoded).expect("deserialize component");

        assert_eq!(decoded, component);
    }
}
