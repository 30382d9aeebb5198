//! The `kecal` command-line front end.

pub mod cli;
