    use super::*;
    use crate::model::{MilestoneRecord, SplitRecord, TicketRecord};

    fn ticket(id: u64, milestone: &str, component: &str) -> TicketRecord {
        TicketRecord {
            id: TicketId(id),
            summary: format!("ticket {}", id),
            milestone: milestone.to_string(),
            component: component.to_string(),
            status: "new".to_string(),
        }
    }

    fn board() -> Board {
        Board {
            version: 1,
            milestones: vec![
                MilestoneRecord {
                    name: "m1".to_string(),
                    completed: false,
                },
                MilestoneRecord {
                    name: "old".to_string(),
                    completed: true,
                },
                MilestoneRecord {
                    name: "m2".to_string(),
                    completed: false,
                },
            ],
            components: vec!["core".to_string(), "ui".to_string()],
            tickets: vec![
                ticket(1, "m1", "core"),
                ticket(3, "m1", "ui"),
                ticket(5, "m2", "core"),
                ticket(7, "m1", "core"),
                ticket(8, "old", "core"),
            ],
            splits: vec![SplitRecord {
                ticket: TicketId(1),
                split_to: TicketId(7),
                split_at: 0,
            }],
        }
    }

    fn config() -> FormConfig {
        FormConfig::default()
    }

    #[test]
    fn new_form_uses_active_milestones_and_placeholders() {
        let form = SplitForm::new(&config(), &board(), TicketId(1));
        let first = &form.rows.rows()[0];
        assert_eq!(first.milestone.options(), ["", "m1", "m2"]);
        assert_eq!(first.component.options(), ["", "core", "ui"]);

        let ids = form
            .selection
            .options()
            .iter()
            .map(|o| o.id().get())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![7, 3, 5]);
        assert_eq!(form.actions.selected(), Some("leave"));
        assert!(!form.actions.split_controls_visible());
    }

    #[test]
    fn events_drive_visibility_selection_and_rows() {
        let mut form = SplitForm::new(&config(), &board(), TicketId(1));

        let out = form.apply(&FormEvent::SelectAction {
            name: "split".to_string(),
        });
        assert_eq!(
            out,
            FormOutcome::ActionSelected {
                split_controls_visible: true
            }
        );

        form.selection.text_mut().set("3, 7".to_string());
        assert_eq!(
            form.apply(&FormEvent::TogglePanel),
            FormOutcome::PanelOpened { checked: 2 }
        );
        assert_eq!(
            form.apply(&FormEvent::ToggleOption { index: 2 }),
            FormOutcome::OptionToggled {
                id: TicketId(5),
                checked: true
            }
        );
        assert_eq!(form.selection.existing(), "7, 3, 5");
        assert_eq!(
            form.apply(&FormEvent::ToggleOption { index: 9 }),
            FormOutcome::Unchanged
        );

        assert_eq!(form.apply(&FormEvent::AddRow), FormOutcome::RowAdded { index: 1 });
        assert_eq!(
            form.apply(&FormEvent::RemoveRow { index: 0 }),
            FormOutcome::RowRemoved { index: 0 }
        );
        assert_eq!(
            form.apply(&FormEvent::RemoveRow { index: 0 }),
            FormOutcome::RowCleared { index: 0 }
        );
        assert_eq!(form.rows.len(), 1);

        let out = form.apply(&FormEvent::SelectAction {
            name: "resolve".to_string(),
        });
        assert_eq!(
            out,
            FormOutcome::ActionSelected {
                split_controls_visible: false
            }
        );
    }

    #[test]
    fn state_round_trip_keeps_rows_and_text() {
        let mut form = SplitForm::new(&config(), &board(), TicketId(1));
        form.apply(&FormEvent::SelectAction {
            name: "split".to_string(),
        });
        form.selection.text_mut().set("3".to_string());
        form.apply(&FormEvent::AddRow);
        {
            let row = form.rows.get_mut(1).unwrap();
            row.summary.set("follow-up".to_string());
            row.milestone.select(2);
        }

        let state = form.to_state();
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows[1].milestone, 2);

        let restored = SplitForm::from_state(&config(), &state).unwrap();
        assert_eq!(restored.prepare_submission(), form.prepare_submission());
        assert!(restored.selection.options().is_empty());
    }

    #[test]
    fn from_state_rejects_unknown_action_and_bad_index() {
        let state = FormState {
            action: Some("explode".to_string()),
            ..FormState::default()
        };
        assert!(SplitForm::from_state(&config(), &state).is_err());

        let state = FormState {
            action: Some("split".to_string()),
            milestones: vec!["".to_string(), "m1".to_string()],
            components: vec!["".to_string()],
            rows: vec![RowState {
                summary: "x".to_string(),
                milestone: 4,
                component: 0,
            }],
            ..FormState::default()
        };
        let err = SplitForm::from_state(&config(), &state).unwrap_err();
        assert!(format!("{:#}", err).contains("milestone index 4"));
    }

    #[test]
    fn from_state_with_no_rows_gets_one_default_row() {
        let state = FormState {
            milestones: vec!["".to_string(), "m1".to_string()],
            ..FormState::default()
        };
        let form = SplitForm::from_state(&config(), &state).unwrap();
        assert_eq!(form.rows.len(), 1);
        assert!(form.rows.rows()[0].is_default());
    }

    #[test]
    fn missing_structure_is_reported_but_inert() {
        let cfg = FormConfig {
            actions: vec!["leave".to_string()],
            ..FormConfig::default()
        };
        let mut form = SplitForm::new(&cfg, &Board::empty(), TicketId(1));
        let warnings = form.structure_warnings();
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains(SPLIT_ACTION_ID));

        assert_eq!(form.apply(&FormEvent::TogglePanel), FormOutcome::PanelOpened { checked: 0 });
        assert_eq!(
            form.apply(&FormEvent::ToggleOption { index: 0 }),
            FormOutcome::Unchanged
        );
        assert_eq!(
            form.apply(&FormEvent::SelectAction {
                name: "split".to_string()
            }),
            FormOutcome::Unchanged
        );
    }
