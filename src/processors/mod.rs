// batch-resizer/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod resizer;

pub use batch::BatchProcessor;
pub use compressor::Compressor;
pub use loader::Loader;
pub use resizer::Resizer;
