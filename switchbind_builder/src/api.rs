mod capture;
mod catalog;
mod core;
mod field;

pub use self::core::*;
pub use capture::*;
pub use catalog::*;
pub use field::*;
