// src/lib.rs

//! USAJobs feed importer library

pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod storage;
