//! Library components of the `errgen` command-line tool.

#![allow(missing_docs)]

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
