pub mod bucket;
pub mod context;
pub mod profile;
mod render;
