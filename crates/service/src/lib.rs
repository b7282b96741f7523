//! Service layer providing business-oriented CRUD operations on top of models.
//! - The repository hides the storage shape behind predicate-based querying.
//! - The service façade decouples consumers from the repository, so a
//!   different backend can be swapped in behind the same four operations.

pub mod datasource;
pub mod errors;
pub mod movie;
