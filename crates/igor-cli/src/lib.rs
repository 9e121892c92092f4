#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Command-line client for igor remote machine management.
//!
//! Layout:
//! - `cli.rs`: argument parsing and command dispatch
//! - `commands/`: IPMI handlers grouped by resource family
//! - `client.rs`: shared HTTP client, credentials, and errors
//! - `endpoint.rs`: request path resolution
//! - `value.rs` / `output.rs`: response model and renderers
//! - `prompt.rs`: interactive prompting and confirmations
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod endpoint;
pub(crate) mod output;
pub(crate) mod prompt;
pub(crate) mod value;

pub use cli::run;
