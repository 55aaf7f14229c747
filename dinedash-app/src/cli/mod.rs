//! CLI module - the `dinedash` command line front end
//!
//! Account, browsing, cart and checkout, tracking, restaurant dashboard
//! and admin commands, plus `open` for app paths.

pub mod args;

pub use args::{Cli, Commands};
