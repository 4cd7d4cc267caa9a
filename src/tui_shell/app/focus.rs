use super::*;

/// A focusable control on the form screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Action(usize),
    Existing,
    TogglePanel,
    SplitOption(usize),
    Summary(usize),
    Milestone(usize),
    Component(usize),
    RemoveRow(usize),
    AddRow,
    Submit,
}

impl Focus {
    pub(in crate::tui_shell) fn is_text(self) -> bool {
        matches!(self, Focus::Existing | Focus::Summary(_))
    }
}

/// Controls in tab order. Split controls only take focus while shown, and
/// ticket checkboxes only while the list is open.
pub(in crate::tui_shell) fn focus_order(form: &SplitForm) -> Vec<Focus> {
    let mut out = (0..form.actions.actions().len())
        .map(Focus::Action)
        .collect::<Vec<_>>();

    if form.actions.split_controls_visible() {
        out.push(Focus::Existing);
        out.push(Focus::TogglePanel);
        if form.selection.panel_open() {
            out.extend((0..form.selection.options().len()).map(Focus::SplitOption));
        }
        for i in 0..form.rows.len() {
            out.push(Focus::Summary(i));
            out.push(Focus::Milestone(i));
            out.push(Focus::Component(i));
            out.push(Focus::RemoveRow(i));
        }
        out.push(Focus::AddRow);
    }

    out.push(Focus::Submit);
    out
}

impl App {
    fn focus_position(&self, order: &[Focus]) -> Option<usize> {
        order.iter().position(|f| *f == self.focus)
    }

    pub(in crate::tui_shell) fn focus_next(&mut self) {
        let order = focus_order(&self.form);
        let next = match self.focus_position(&order) {
            Some(i) => (i + 1) % order.len(),
            None => 0,
        };
        self.focus = order[next];
    }

    pub(in crate::tui_shell) fn focus_prev(&mut self) {
        let order = focus_order(&self.form);
        let prev = match self.focus_position(&order) {
            Some(0) | None => order.len() - 1,
            Some(i) => i - 1,
        };
        self.focus = order[prev];
    }

    /// Moves focus to a nearby control when the focused one went away (row
    /// removed, panel closed, split controls hidden).
    pub(in crate::tui_shell) fn normalize_focus(&mut self) {
        let order = focus_order(&self.form);
        if order.contains(&self.focus) {
            return;
        }
        let fallback = match self.focus {
            Focus::SplitOption(_) => Focus::TogglePanel,
            Focus::Summary(i) | Focus::Milestone(i) | Focus::Component(i) | Focus::RemoveRow(i) => {
                let last = self.form.rows.len().saturating_sub(1);
                Focus::RemoveRow(i.min(last))
            }
            _ => Focus::Submit,
        };
        self.focus = if order.contains(&fallback) {
            fallback
        } else {
            Focus::Submit
        };
    }
}
