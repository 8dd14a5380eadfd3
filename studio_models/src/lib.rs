pub mod contact;
pub mod content;
pub mod i18n;
mod macros;
