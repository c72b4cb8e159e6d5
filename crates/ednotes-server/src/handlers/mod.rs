pub mod articles;
pub mod categories;
pub mod navigation;
pub mod projects;
