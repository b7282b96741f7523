//! Data models shared by the repository, service and HTTP layers.

pub mod movie;
