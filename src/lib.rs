pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{GeopruneError, Result};
pub use geometry::{LineGeometry, Network, PlanarGeometry, Segment};
pub use operations::filter::{
    DeadEndPruner, DisjointRemover, OxbowResolver, PruneMode, PruneReport, RingRemover,
};
pub use operations::simplify::{SimplifyConfig, SimplifyReport, Simplifier};
pub use operations::{prune_dead_ends, remove_disjoint, remove_oxbows, remove_rings, simplify};
pub use topology::EndpointIndex;
