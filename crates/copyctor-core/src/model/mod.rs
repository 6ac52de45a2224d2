mod class;
mod field;
mod types;

pub use self::class::*;
pub use self::field::*;
pub use self::types::*;
