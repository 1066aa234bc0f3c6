pub mod card;
pub mod error;
