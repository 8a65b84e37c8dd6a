//! tvraster (workspace facade crate).
//!
//! Re-exports the raster engine and its companions under one name; the
//! implementation lives in dedicated crates under `crates/`.

pub use tvraster_core as core;
pub use tvraster_term as term;
pub use tvraster_types as types;
