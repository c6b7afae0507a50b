//! Application-level route handlers

pub mod assets;

pub use assets::static_files;
