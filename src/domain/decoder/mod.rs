pub mod engine;
pub mod patterns;
pub mod rules;
pub mod summary;

pub use engine::decode;
