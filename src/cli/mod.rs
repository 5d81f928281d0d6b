//! CLI module
//!
//! - `serve`: run the HTTP API
//! - `decode`: print a stored license value as JSON
//! - `hash-token`: print the digest to put in `auth.tokens[].token_sha256`

pub mod decode;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::infrastructure::auth::hash_token;

/// License administration API
#[derive(Parser)]
#[command(name = "license-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Decode a Base64 license value
    Decode(decode::DecodeArgs),

    /// Print the SHA-256 digest of a token
    HashToken {
        /// Token secret
        token: String,
    },
}

pub fn print_token_hash(token: &str) {
    println!("{}", hash_token(token));
}
