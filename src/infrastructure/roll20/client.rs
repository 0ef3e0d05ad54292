#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use reqwest::header;
use reqwest::redirect;
use reqwest::StatusCode;

use crate::domain::models::DeployError;
use crate::domain::models::ScriptId;
use crate::domain::models::SessionCookie;

const DEFAULT_BASE_URL: &str = "https://app.roll20.net";

/// Reduces one `Set-Cookie` header to its leading `name=value` pair,
/// discarding attributes such as `Domain`, `Path`, and `Expires`. Headers
/// without a pair are dropped entirely.
fn cookie_pair(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    if !pair.contains('=') {
        return None;
    }

    return Some(pair.to_string());
}

/// Collapses duplicate cookie names down to a single entry each. Roll20 sets
/// some cookies twice with different path scopes; within a group of
/// duplicates the lexicographically greatest entry wins (not first, not
/// last), and surviving entries keep first-appearance order.
fn consolidate_cookies(pairs: Vec<String>) -> String {
    let mut kept: Vec<(String, String)> = vec![];

    for pair in pairs {
        let name = pair.split('=').next().unwrap_or_default().to_string();
        if let Some(entry) = kept.iter_mut().find(|e| return e.0 == name) {
            if pair > entry.1 {
                entry.1 = pair;
            }
        } else {
            kept.push((name, pair));
        }
    }

    return kept
        .iter()
        .map(|e| return e.1.clone())
        .collect::<Vec<String>>()
        .join("; ");
}

/// Thin client for the three Roll20 endpoints a deployment touches: session
/// creation, the campaign script listing, and the script save form.
pub struct Roll20Client {
    url: String,
}

impl Default for Roll20Client {
    fn default() -> Roll20Client {
        return Roll20Client {
            url: DEFAULT_BASE_URL.to_string(),
        };
    }
}

impl Roll20Client {
    /// Points the client at a different host. Mostly useful for tests.
    pub fn with_url(url: String) -> Roll20Client {
        return Roll20Client { url };
    }

    fn home_url(&self) -> String {
        return format!("{url}/home/", url = self.url);
    }

    /// Exchanges credentials for a session cookie. Roll20 signals a
    /// successful login with a 303 redirect to the home page, not a 2xx; any
    /// other status/location combination means the credentials were rejected.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SessionCookie, DeployError> {
        tracing::info!("Authenticating with Roll20.net");

        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        let res = client
            .post(format!("{url}/sessions/create", url = self.url))
            .form(&[("email", username), ("password", password)])
            .send()
            .await?;

        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| return value.to_str().ok())
            .unwrap_or_default();

        if res.status() != StatusCode::SEE_OTHER || location != self.home_url() {
            tracing::error!(status = res.status().as_u16(), location, "Login rejected");
            return Err(DeployError::Authentication);
        }

        let pairs = res
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| return value.to_str().ok())
            .filter_map(cookie_pair)
            .collect::<Vec<String>>();

        return Ok(SessionCookie::new(consolidate_cookies(pairs)));
    }

    /// Fetches the campaign's script management page. The body is returned
    /// as-is without interpreting the status code, so an error page comes
    /// back as the listing body.
    pub async fn scripts_page(
        &self,
        cookie: &SessionCookie,
        campaign: &str,
    ) -> Result<String, DeployError> {
        tracing::info!(campaign, "Loading existing Roll20 campaign scripts");

        let res = reqwest::Client::new()
            .get(format!("{url}/campaigns/scripts/{campaign}", url = self.url))
            .header(header::COOKIE, cookie.as_str())
            .send()
            .await?;

        return Ok(res.text().await?);
    }

    /// Uploads the script body through the save form. With [`ScriptId::New`]
    /// the service creates the script and assigns an id we never learn. The
    /// response body is returned unvalidated.
    pub async fn save_script(
        &self,
        code: &str,
        campaign: &str,
        script_id: &ScriptId,
        cookie: &SessionCookie,
        name: &str,
    ) -> Result<String, DeployError> {
        tracing::info!(%script_id, name, "Deploying script");

        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .text("content", code.to_string());

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/campaigns/save_script/{campaign}/{script_id}",
                url = self.url
            ))
            .header(header::COOKIE, cookie.as_str())
            .multipart(form)
            .send()
            .await?;

        return Ok(res.text().await?);
    }
}
