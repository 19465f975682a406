pub mod block;
pub mod chunk;
pub mod component;
pub mod coords;
pub mod facet;
pub mod noise_field;
pub mod overlay;
pub mod placement;
pub mod rasterize;
pub mod region;
pub mod terrain;
pub mod worldgen;
