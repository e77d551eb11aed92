pub mod errors;
pub mod identity;
pub mod mode;
pub mod status;

pub use errors::*;
pub use identity::*;
pub use mode::*;
pub use status::*;
