pub mod decode;
pub mod query;
pub mod stats;
