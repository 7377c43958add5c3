pub mod json;
pub mod share;
