pub mod error;
pub mod model;
pub mod html;
pub mod render;
pub mod config;
pub mod load;
pub mod cli;
