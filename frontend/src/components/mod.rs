pub mod dashboard;
pub mod layout;
pub mod upload;
pub mod workbench;
