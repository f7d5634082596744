pub mod directed;
pub mod generators;
pub mod masked;
pub mod reversed;
pub mod traits;

pub use directed::DirectedMultigraph;
pub use masked::MaskSubgraph;
pub use reversed::EdgeReversed;
pub use traits::{EdgeId, Graph};
