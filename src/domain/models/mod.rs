mod errors;
mod options;
mod script;
mod session_cookie;

pub use errors::*;
pub use options::*;
pub use script::*;
pub use session_cookie::*;
