pub mod colors;
pub mod show;
