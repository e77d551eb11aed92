pub mod identity;
pub mod status;

pub use identity::*;
pub use status::*;
