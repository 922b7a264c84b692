//! HTTP API handlers for riskdesk

pub mod export;
pub mod health;
pub mod summary;
pub mod transactions;
pub mod ui;
pub mod upload;

pub use export::export_routes;
pub use health::health_routes;
pub use summary::summary_routes;
pub use transactions::transaction_routes;
pub use ui::ui_routes;
pub use upload::upload_routes;
