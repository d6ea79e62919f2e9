//! Resources: serializable data, shared pairs, and the factory seam that
//! turns data into live instances.

mod list;
mod pair;
mod types;

pub use list::ResourceList;
pub use pair::ResourcePair;
pub use types::*;
