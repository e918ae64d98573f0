//! UI Components
//!
//! One module per screen or reusable widget.

pub mod activities_upload;
pub mod confirm_dialog;
pub mod content_generator;
pub mod destination_form;
pub mod destination_manager;
pub mod email_preview;
pub mod enquiries_manager;
pub mod error_panel;
pub mod events_manager;
pub mod package_form;
pub mod package_manager;
pub mod pagination;
pub mod price_calculator;
pub mod quote_monitoring;
pub mod quote_search;
pub mod toast;
pub mod version_history;

pub use activities_upload::ActivitiesUpload;
pub use content_generator::ContentGenerator;
pub use destination_manager::DestinationManager;
pub use enquiries_manager::EnquiriesManager;
pub use events_manager::EventsManager;
pub use package_manager::PackageManager;
pub use quote_monitoring::QuoteMonitoring;
pub use quote_search::QuoteSearch;
pub use toast::ToastHost;
