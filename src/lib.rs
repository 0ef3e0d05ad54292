#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use domain::models::DeployError;
pub use domain::models::DeployOptions;
pub use domain::models::Roll20Options;
pub use domain::models::ScriptId;
pub use domain::models::SessionCookie;
pub use domain::services::DeployService;
pub use infrastructure::roll20::find_script;
pub use infrastructure::roll20::Roll20Client;
