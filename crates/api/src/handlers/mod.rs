pub mod authoring;
pub mod projects;
