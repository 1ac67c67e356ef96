//! Utility helpers shared by the commitment engine.

pub mod parallel;

pub use parallel::{
    map_indexed, parallelism_enabled, preferred_chunk_size, set_parallelism, ParallelismGuard,
};
