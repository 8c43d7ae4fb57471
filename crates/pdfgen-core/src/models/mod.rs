pub mod request;
pub mod substitution;
