pub mod money;
pub mod validation;
