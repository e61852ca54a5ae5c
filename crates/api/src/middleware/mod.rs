//! Request guards.
//!
//! - [`local_only::LocalAuthoring`] -- Admits requests only in development mode.

pub mod local_only;
