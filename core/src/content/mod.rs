pub mod catalog;
pub mod details;
pub mod model;
