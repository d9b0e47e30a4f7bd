pub mod account;
pub mod analytics;
pub mod assignments;
pub mod session;

pub use account::AccountService;
pub use analytics::AnalyticsService;
pub use assignments::AssignmentService;
pub use session::SessionMonitor;
