pub mod config;
pub mod enumerate;
pub mod render;
pub mod workflow;
pub mod writer;
