pub mod rename;
pub mod validate;
