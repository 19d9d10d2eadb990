mod cursor;
mod status;

pub use cursor::*;
pub use status::*;
