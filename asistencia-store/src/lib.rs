//! Data-store layer for the asistencia service.
//!
//! This crate provides:
//! - the `StoreBackend` trait over the queries the service needs
//! - `SupabaseStore`, the PostgREST client for the hosted store
//! - `MemoryStore`, an in-process backend for tests
//! - the operations the HTTP layer calls (`ops`)

pub mod backend;
pub mod config;
pub mod memory;
pub mod ops;
pub mod supabase;

pub use backend::StoreBackend;
pub use config::StoreConfig;
pub use memory::MemoryStore;
pub use supabase::SupabaseStore;
