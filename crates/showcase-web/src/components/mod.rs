mod icon;
pub mod service_section;
mod viewport;

pub use icon::Icon;
pub use service_section::ServiceSection;
pub use viewport::use_scrolled_into_view;
