mod resolve;

pub use resolve::{bundle_search_roots, data_dir, user_bundle_dir};
