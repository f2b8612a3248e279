//! Saturn terminal client — library target.
//!
//! All application logic lives in the module files; this target makes them
//! reachable from the integration tests in `tests/`.

pub mod backend;
pub mod chat;
pub mod constants;
pub mod render;
