mod home;

pub use home::{HomePage, list_services};
