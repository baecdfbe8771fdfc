//! Shared types, error model, and configuration for metaparser.
//!
//! This crate is the foundation depended on by all other metaparser crates.
//! It provides:
//! - [`MetaparserError`] and [`FetchError`], the error model
//! - Domain types ([`Metadata`] and its records)
//! - Configuration ([`AppConfig`], [`FetchConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_MAX_BODY_BYTES, FetchConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{FetchError, MetaparserError, Result};
pub use types::{
    Album, Article, Audio, Book, Favicon, Image, Metadata, Music, Profile, Song, Twitter,
    TwitterApp, TwitterPlayer, Video, VideoActor,
};
