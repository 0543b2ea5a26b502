//! Configuration module for Krawler
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, and command-line flags
//! override whatever the file sets.
//!
//! # Example
//!
//! ```no_run
//! use krawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("krawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
