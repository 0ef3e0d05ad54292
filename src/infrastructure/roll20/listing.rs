#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;

use scraper::Html;
use scraper::Selector;

use crate::domain::models::DeployError;
use crate::domain::models::ScriptId;

const ID_PREFIX: &str = "script-";

/// Looks up the script named `name` in the campaign's script management page.
/// Script entries carry the name in a `data-scriptname` attribute and their
/// identifier in an `id` attribute prefixed with `script-`. When no entry
/// matches, [`ScriptId::New`] is returned so the save endpoint creates one.
pub fn find_script(html: &str, name: &str) -> Result<ScriptId, DeployError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("[data-scriptname]")
        .map_err(|err| return DeployError::Parse(err.to_string()))?;

    let node = document
        .select(&selector)
        .find(|element| return element.value().attr("data-scriptname") == Some(name));

    let element = match node {
        Some(element) => element,
        None => {
            tracing::info!(name, "No existing Roll20 campaign script found");
            return Ok(ScriptId::New);
        }
    };

    let id = element.value().attr("id").unwrap_or_default();
    let script_id = match id.strip_prefix(ID_PREFIX) {
        Some(script_id) => script_id,
        None => {
            return Err(DeployError::Parse(format!(
                "script entry '{name}' has unexpected id '{id}'"
            )));
        }
    };

    tracing::info!(name, script_id, "Existing Roll20 campaign script found");
    return Ok(ScriptId::Existing(script_id.to_string()));
}
