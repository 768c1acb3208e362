pub mod engine;
pub mod merge;
pub mod network;
pub mod segment;

pub use engine::{LineGeometry, PlanarGeometry};
pub use network::Network;
pub use segment::{Bounds, Segment};
