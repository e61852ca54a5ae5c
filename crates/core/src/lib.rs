//! Domain types and pure logic for the portfolio project store.
//!
//! Nothing in this crate touches the filesystem. Persistence lives in
//! `folio-db`; HTTP concerns live in `folio-api`.

pub mod collection;
pub mod error;
pub mod ordering;
pub mod project;
pub mod requests;
pub mod types;
