use anyhow::{Context, Result};

use crate::submission::FormSubmission;

fn http() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent("splitticket")
        .build()
        .context("build http client")
}

/// Posts the fields as an ordinary urlencoded form. Returns the HTTP status.
pub fn post_submission(url: &str, submission: &FormSubmission) -> Result<u16> {
    let resp = http()?
        .post(url)
        .form(&submission.pairs())
        .send()
        .with_context(|| format!("submit form to {}", url))?
        .error_for_status()
        .context("submit form status")?;
    Ok(resp.status().as_u16())
}
