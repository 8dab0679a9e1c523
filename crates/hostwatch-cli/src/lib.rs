//! # hostwatch-cli
//!
//! Command-line front end for hostwatch.
//!
//! ## Features
//!
//! - **Account scan**: hidden accounts and unexpected administrators
//! - **Process scan**: impersonated names, malicious keywords, risky
//!   locations, duplicate swarms
//! - **Startup scan**: registry run keys and startup folders
//! - **Educational mode**: `--explain` describes what a scan checks
//! - **Multiple output formats**: Pretty text, JSON, YAML, CSV

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
