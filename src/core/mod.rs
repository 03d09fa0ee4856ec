//! Core modules for Tapvote

pub mod aggregate;
pub mod api;
pub mod gate;
pub mod kiosk;
pub mod mapper;
pub mod report;
pub mod session;
pub mod store;

pub use aggregate::{compute_matrix, compute_totals};
pub use api::{create_router, run_server};
pub use gate::{AdminGate, GateConfig};
pub use kiosk::Kiosk;
pub use mapper::{category_of, rating_of};
pub use report::{matrix_table, recent_list, session_report};
pub use session::SessionTally;
pub use store::{FeedbackStore, FileStorage, MemoryStorage, Storage, StorageError, StoreError};
