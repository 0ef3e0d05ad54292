/// Account and campaign settings for a deployment.
#[derive(Clone, Debug)]
pub struct Roll20Options {
    pub username: String,
    pub password: String,
    pub campaign: String,
}

/// Options accepted by [`crate::domain::services::DeployService::deploy`].
/// The script name doubles as the lookup key for an existing script and as
/// the label for a newly created one.
#[derive(Clone, Debug)]
pub struct DeployOptions {
    pub name: String,
    pub roll20: Roll20Options,
}
