pub mod add;
pub mod file;
pub mod show;
