pub mod endpoint_index;

pub use endpoint_index::EndpointIndex;
