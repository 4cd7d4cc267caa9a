use super::*;

impl App {
    /// Names the fields, saves the form state as a draft and ends the
    /// session. The draft is best-effort; failing to write it still submits.
    pub(in crate::tui_shell) fn submit(&mut self) {
        let submission = self.form.prepare_submission();

        let saved = match (&self.store, self.form.ticket) {
            (Some(store), Some(ticket)) => Some(store.write_draft(ticket, &self.form.to_state())),
            _ => None,
        };
        let draft = match saved {
            Some(Ok(path)) => Some(path),
            Some(Err(err)) => {
                self.push_error(format!("save form state: {:#}", err));
                None
            }
            None => None,
        };

        self.trace_submit(&submission);
        self.push_output(vec![format!("submitted {} fields", submission.fields.len())]);
        self.outcome = Some(TuiOutcome::Submitted {
            submission,
            draft,
            submit_url: self.submit_url.clone(),
        });
        self.quit = true;
    }
}
