//! # Acadsync Core
//!
//! Domain layer for the acadsync academic-administration service: shared
//! models, the error taxonomy, and the lab batch scheduler together with
//! the collaborator traits it depends on (`StudentDirectory`, `Clock`).
//!
//! This crate is transport- and storage-agnostic; the `db` and `api`
//! crates plug concrete collaborators into the seams defined here.

pub mod clock;
pub mod directory;
pub mod errors;
pub mod models;
pub mod scheduler;
