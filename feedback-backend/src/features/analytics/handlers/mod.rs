pub mod analytics;
pub mod system;

pub use analytics::analytics_router;
pub use system::system_router;
