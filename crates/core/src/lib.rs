//! cmdsheet core library
//!
//! This crate synthesizes shell commands for a catalog of everyday tools. Each
//! tool family declares a schema of options; a user fills in an
//! [`OptionModel`](option_model::OptionModel), the family's flag composer turns
//! it into ordered tokens, and the renderer joins them into one copyable line.
//!
//! # Key Features
//!
//! - **Tool Families**: tar, gzip/bzip2, ss/netstat, ip/ifconfig, grep/find,
//!   top/htop, ssh-keygen, crontab and git
//! - **Option Models**: Typed choice, toggle and text fields with defaults
//! - **Recent History**: A short deduplicated list of rendered commands
//! - **Sessions**: The edit, render, copy and record loop a front end drives
//! - **Configuration Management**: Per-family option defaults and file paths
//!
//! # Examples
//!
//! ```
//! use cmdsheet_core::families::{render_model, Family};
//! use cmdsheet_core::option_model::OptionModel;
//!
//! let mut model = OptionModel::new(Family::Archive);
//! model.set("archive", "a.tar.gz");
//! model.set("targets", "src/");
//! assert_eq!(render_model(&model), "tar cvzf a.tar.gz src/");
//! ```

pub mod config;
pub mod error;
pub mod families;
pub mod file_handling;
pub mod history;
pub mod option_defaults;
pub mod option_model;
pub mod rendering;
pub mod session;
