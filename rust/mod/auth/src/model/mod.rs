mod permission;
mod session;

pub use permission::*;
pub use session::*;
