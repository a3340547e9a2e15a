pub mod card;
pub mod money;
