//! CLI module for the user service
//!
//! Provides subcommands for running the HTTP server and managing the
//! database schema.

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Service - CRUD API for user accounts
#[derive(Parser)]
#[command(name = "user-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations
    Migrate,
}
