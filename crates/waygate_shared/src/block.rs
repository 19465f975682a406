use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

#[repr(transparent)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Pod,
    Zeroable,
)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: Self = Self(0);
}

#[derive(Clone, Debug)]
pub struct BlockProperties {
    pub name: String,
    pub solid: bool,
    pub transparent: bool,
    pub hardness: f32,
    pub light_level: u8,
}

#[derive(Default)]
pub struct BlockRegistry {
    properties: Vec<BlockProperties>,
    by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, properties: BlockProperties) -> BlockId {
        let id = BlockId(self.properties.len() as u16);
        self.by_name.insert(properties.name.clone(), id);
        self.properties.push(properties);
        id
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockProperties> {
        self.properties.get(usize::from(id.0))
    }

    pub fn get_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

pub fn register_default_blocks() -> BlockRegistry {
    fn block(name: &str, solid: bool, transparent: bool, hardness: f32) -> BlockProperties {
        block_with_light(name, solid, transparent, hardness, 0)
    }

    fn block_with_light(
        name: &str,
        solid: bool,
        transparent: bool,
        hardness: f32,
        light_level: u8,
    ) -> BlockProperties {
        BlockProperties {
            name: name.to_string(),
            solid,
            transparent,
            hardness,
            light_level,
        }
    }

    let mut registry = BlockRegistry::new();

    let defaults = [
        block("air", false, true, 0.0),
        block("bedstone", true, false, 1000.0),
        block("granite", true, false, 4.0),
        block("loam", true, false, 1.2),
        block("verdant_turf", true, false, 0.8),
        block("dune_sand", true, false, 0.6),
        block("still_water", false, true, 0.0),
        block("rubblestone", true, false, 3.0),
        // portal structures: stone_brick walls around a glowing portal_field
        block("stone_brick", true, false, 5.0),
        block_with_light("portal_field", false, true, 0.0, 12),
    ];

    for properties in defaults {
        registry.register(properties);
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::{register_default_blocks, BlockId};

    #[test]
    fn default_registry_resolves_portal_blocks() {
        let registry = register_default_blocks();

        assert_eq!(registry.get_by_name("air"), Some(BlockId::AIR));

        let frame = registry.get_by_name("stone_brick").expect("frame block");
        let field = registry.get_by_name("portal_field").expect("field block");
        assert_ne!(frame, field);

        let field_props = registry.get(field).expect("field properties");
        assert!(!field_props.solid);
        assert!(field_props.light_level > 0);
    }

    #[test]
    fn unknown_names_are_absent_not_errors() {
        let registry = register_default_blocks();
        assert_eq!(registry.get_by_name("unobtainium"), None);
    }
}
