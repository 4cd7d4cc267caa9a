use std::path::Path;

use splitticket::form::SplitForm;
use splitticket::model::FormConfig;
use splitticket::remote::post_submission;
use splitticket::store::read_form_state;
use splitticket::submission::FormSubmission;

use super::*;

/// Config of the enclosing split form directory; defaults outside of one.
fn current_config() -> Result<FormConfig> {
    match discover_store() {
        Ok(store) => store.read_config(),
        Err(_) => Ok(FormConfig::default()),
    }
}

pub(super) fn handle_prepare_command(
    state_path: &Path,
    json: bool,
    post: Option<String>,
) -> Result<()> {
    let cfg = current_config()?;
    let state = read_form_state(state_path)?;
    let form = SplitForm::from_state(&cfg, &state)
        .with_context(|| format!("load form state {}", state_path.display()))?;
    let submission = form.prepare_submission();
    let post_url = post.or(cfg.submit_url);
    emit_submission(&submission, json, post_url.as_deref())
}

pub(crate) fn emit_submission(
    submission: &FormSubmission,
    json: bool,
    post_url: Option<&str>,
) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(submission).context("serialize submission json")?
        );
    } else {
        for line in submission.lines() {
            println!("{}", line);
        }
    }

    if let Some(url) = post_url {
        let status = post_submission(url, submission)?;
        eprintln!("Submitted to {} ({})", url, status);
    }
    Ok(())
}
