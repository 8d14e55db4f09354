//! CLI commands.

pub mod download;
pub mod init;
pub mod list;
pub mod serve;
