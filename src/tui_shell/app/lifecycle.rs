use super::*;

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let cwd = std::env::current_dir().context("get current dir")?;
        let store = LocalStore::discover(&cwd)?;
        let config = store.read_config()?;
        let board = store.read_board()?;

        let form = SplitForm::new(&config, &board, opts.ticket);
        let mut app = App::new(form, board);
        app.store = Some(store);
        app.submit_url = config.submit_url;
        app.dev_warnings = opts.dev_warnings;
        app.enable_trace(opts.trace);

        match app.board.ticket(opts.ticket) {
            Some(t) => {
                let msg = format!("splitting #{}: {}", t.id, t.summary);
                app.push_output(vec![msg]);
            }
            None => app.push_error(format!("#{} is not on the board", opts.ticket)),
        }
        app.report_structure_warnings();
        Ok(app)
    }

    /// Always traced; shown only with `--dev-warnings`.
    pub(in crate::tui_shell) fn report_structure_warnings(&mut self) {
        for warning in self.form.structure_warnings() {
            self.trace_warning(&warning);
            if self.dev_warnings {
                self.push_error(format!("dev: {}", warning));
            }
        }
    }
}
