//! style-check: command-line front end for the style-guide engine

pub mod cli;
pub mod commands;
pub mod io;
