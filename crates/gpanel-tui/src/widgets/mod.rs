//! Custom widget components

mod brand_manager;
mod confirm_dialog;
mod controls;
mod dashboard;
mod footer;
mod header;
mod keys;
mod learning;
mod led;
mod logs;
pub mod modal_overlay;
mod prompt;
mod sidebar;
mod system;
mod toasts;

pub use brand_manager::BrandManager;
pub use confirm_dialog::ConfirmDialog;
pub use controls::AcControls;
pub use dashboard::Dashboard;
pub use footer::Footer;
pub use header::MainHeader;
pub use keys::KeyList;
pub use learning::Learning;
pub use led::LedRing;
pub use logs::LogView;
pub use prompt::Prompt;
pub use sidebar::Sidebar;
pub use system::SystemPanel;
pub use toasts::Toasts;
