//! Application services
//!
//! Browser-backed implementations of the core's persistence seams.

mod session_store;

pub use session_store::LocalStorageSessionStore;
