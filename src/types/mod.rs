//! All data types for the undigraph library.

pub mod error;
pub mod outcome;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use outcome::EdgeOutcome;
pub use vertex::{Vertex, VertexId};
