pub mod test_cache;

pub use test_cache::{FsTestCache, TestCache};
