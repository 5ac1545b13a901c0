pub mod data;
pub mod routes;
pub mod sync;

pub use routes::mount_countries;
pub use sync::{SyncOptions, SyncReport, run};
