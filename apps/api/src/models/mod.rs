pub mod catalog;
pub mod resume;
pub mod roles;
