//! Infrastructure layer - concrete implementations of the domain seams

pub mod logging;
pub mod migrations;
pub mod user;
