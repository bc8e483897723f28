mod client;
mod dataset;
pub mod signing;

pub use client::{CosClient, DatasetSource};
pub use dataset::Dataset;
