pub mod batch;
pub mod posts;
