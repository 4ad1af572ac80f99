//! Domain core for the DSAR service.
//!
//! Holds the shared id/timestamp types, the error taxonomy, and the
//! document-generation collaborator interface. No I/O and no web types
//! live here; persistence and HTTP concerns belong to `dsar-db` and
//! `dsar-api`.

pub mod document;
pub mod error;
pub mod types;
