#[cfg(test)]
#[path = "deploy_test.rs"]
mod tests;

use crate::domain::models::DeployError;
use crate::domain::models::DeployOptions;
use crate::infrastructure::roll20::find_script;
use crate::infrastructure::roll20::Roll20Client;

pub struct DeployService {}

impl DeployService {
    /// Deploys `code` as a campaign API script, updating the script named in
    /// `options` or creating it when the campaign has none by that name.
    /// Stages run strictly in sequence and the first failure aborts the run.
    pub async fn deploy(code: &str, options: &DeployOptions) -> Result<(), DeployError> {
        return DeployService::deploy_with_client(&Roll20Client::default(), code, options).await;
    }

    /// Same as [`DeployService::deploy`], against a caller-supplied client.
    pub async fn deploy_with_client(
        client: &Roll20Client,
        code: &str,
        options: &DeployOptions,
    ) -> Result<(), DeployError> {
        let cookie = client
            .login(&options.roll20.username, &options.roll20.password)
            .await?;
        let html = client
            .scripts_page(&cookie, &options.roll20.campaign)
            .await?;
        let script_id = find_script(&html, &options.name)?;
        client
            .save_script(
                code,
                &options.roll20.campaign,
                &script_id,
                &cookie,
                &options.name,
            )
            .await?;

        tracing::info!(name = %options.name, "Deployed script to Roll20!");
        return Ok(());
    }
}
