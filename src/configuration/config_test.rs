use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());
}

#[tokio::test]
async fn it_loads_config_from_args() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "roll20-deploy",
        "-u",
        "user@example.com",
        "-p",
        "hunter2",
        "-c",
        "1234",
        "-n",
        "MyScript",
        "script.js",
    ])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Username), "user@example.com");
    assert_eq!(Config::get(ConfigKey::Password), "hunter2");
    assert_eq!(Config::get(ConfigKey::Campaign), "1234");
    assert_eq!(Config::get(ConfigKey::ScriptName), "MyScript");

    return Ok(());
}
