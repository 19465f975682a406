use std::collections::HashMap;

use glam::{IVec3, Vec3};
use waygate_shared::component::PortalComponent;

/// Authoritative map of portal voxel -> teleport destination. Owned by the
/// tick thread; all registration happens synchronously there, either from
/// drained generation requests or from component activation.
#[derive(Default)]
pub struct PortalRegistry {
    portals: HashMap<IVec3, Vec3>,
}

impl PortalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; re-registering the same location is how re-carved
    /// voxels refresh their destination.
    pub fn register(&mut self, location: IVec3, destination: Vec3) {
        self.portals.insert(location, destination);
    }

    /// Removing an unknown location is a no-op, not a fault.
    pub fn deregister(&mut self, location: IVec3) {
        self.portals.remove(&location);
    }

    pub fn lookup(&self, location: IVec3) -> Option<Vec3> {
        self.portals.get(&location).copied()
    }

    pub fn on_activate(&mut self, component: &PortalComponent) {
        self.register(component.location, component.destination);
    }

    pub fn on_deactivate(&mut self, component: &PortalComponent) {
        self.deregister(component.location);
    }

    pub fn clear(&mut self) {
        self.portals.clear();
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec3, Vec3)> + '_ {
        self.portals.iter().map(|(loc, dest)| (*loc, *dest))
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};
    use waygate_shared::component::PortalComponent;

    use super::PortalRegistry;

    #[test]
    fn register_overwrites_and_lookup_reports_absence() {
        let mut registry = PortalRegistry::new();
        let loc = IVec3::new(8, 64, 8);

        assert_eq!(registry.lookup(loc), None);

        registry.register(loc, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(registry.lookup(loc), Some(Vec3::new(1.0, 2.0, 3.0)));

        // last write wins, no duplicate records
        registry.register(loc, Vec3::new(9.0, 9.0, 9.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(loc), Some(Vec3::new(9.0, 9.0, 9.0)));
    }

    #[test]
    fn deregistering_missing_portals_is_a_no_op() {
        let mut registry = PortalRegistry::new();
        registry.deregister(IVec3::new(0, 0, 0));
        assert!(registry.is_empty());

        registry.register(IVec3::new(1, 1, 1), Vec3::ONE);
        registry.deregister(IVec3::new(1, 1, 1));
        registry.deregister(IVec3::new(1, 1, 1));
        assert!(registry.is_empty());
    }

    #[test]
    fn component_lifecycle_drives_the_registry() {
        let mut registry = PortalRegistry::new();
        let component = PortalComponent::new(IVec3::new(4, 30, -2), Vec3::new(4.0, 30.0, -2.0));

        registry.on_activate(&component);
        assert_eq!(registry.lookup(component.location), Some(component.destination));

        registry.on_deactivate(&component);
        assert_eq!(registry.lookup(component.location), None);
    }

    #[test]
    fn clear_empties_everything_on_shutdown() {
        let mut registry = PortalRegistry::new();
        for i in 0..10 {
            registry.register(IVec3::splat(i), Vec3::splat(i as f32));
        }
        registry.clear();
        assert!(registry.is_empty());
    }
}
