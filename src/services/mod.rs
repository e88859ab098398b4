pub mod cart_service;
pub mod search_service;
pub mod session_service;

// Re-export commonly used functions
pub use cart_service::{cart_from_jar, write_cart};
pub use search_service::{forward_search, SearchKind};
pub use session_service::{random_session_id, random_visitor_id};
