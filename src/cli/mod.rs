//! CLI module for the user registration service
//!
//! - `serve`: run the HTTP server
//! - `token`: mint a bearer token for an account

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

/// User Registration API - create and update accounts over HTTP
#[derive(Parser)]
#[command(name = "user-registration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print a bearer token for an account id
    Token(token::TokenArgs),
}
