//! Operations CLI for MediCost
//!
//! Prices visits and inspects configuration from the terminal, using the
//! same pricing tables and validation as the HTTP server.
//!
//! # Example Usage
//!
//! ```bash
//! # Single estimate
//! medicost estimate --age 45 --insurance private --department Surgery --procedure major-surgery
//! medicost estimate --age 8 --insurance medicaid --department Pediatrics --procedure consultation --json
//!
//! # Supported values and full cost grid
//! medicost catalog
//! medicost matrix --age 70 --insurance medicare
//!
//! # Configuration
//! medicost config check --config production.yaml
//! ```

pub mod cli;
pub mod commands;

pub use cli::*;
