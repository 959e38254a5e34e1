//! The API layer, containing web handlers and routing.

pub mod handlers;
pub mod router;

pub use handlers::{ApiDoc, TransactionsQuery, parse_limit};
pub use router::create_router;
