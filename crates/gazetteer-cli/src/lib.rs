//! Library half of `gazetteer-cli`.
//!
//! Everything useful lives in the `gazetteer` binary; see `src/main.rs` for
//! the subcommands. Programs that want the data itself should depend on
//! `gazetteer-core`.
