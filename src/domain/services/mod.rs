mod deploy;

pub use deploy::*;
