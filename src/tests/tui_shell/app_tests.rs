    use super::*;
    use crate::model::{FormConfig, MilestoneRecord, TicketId, TicketRecord};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn board() -> Board {
        let ticket = |id: u64| TicketRecord {
            id: TicketId(id),
            summary: format!("ticket {}", id),
            milestone: "m1".to_string(),
            component: "core".to_string(),
            status: "new".to_string(),
        };
        Board {
            version: 1,
            milestones: vec![MilestoneRecord {
                name: "m1".to_string(),
                completed: false,
            }],
            components: vec!["core".to_string()],
            tickets: vec![ticket(1), ticket(2), ticket(3)],
            splits: Vec::new(),
        }
    }

    fn app() -> App {
        let board = board();
        let form = SplitForm::new(&FormConfig::default(), &board, TicketId(1));
        App::new(form, board)
    }

    fn split_app() -> App {
        let mut app = app();
        app.focus = Focus::Action(3);
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        app
    }

    #[test]
    fn hidden_split_controls_take_no_focus() {
        let app = app();
        assert_eq!(
            focus_order(&app.form),
            vec![
                Focus::Action(0),
                Focus::Action(1),
                Focus::Action(2),
                Focus::Action(3),
                Focus::Submit
            ]
        );
    }

    #[test]
    fn selecting_split_reveals_controls() {
        let app = split_app();
        assert!(app.form.actions.split_controls_visible());
        let order = focus_order(&app.form);
        assert!(order.contains(&Focus::Existing));
        assert!(order.contains(&Focus::Summary(0)));
        assert!(!order.contains(&Focus::SplitOption(0)));
        assert_eq!(order.last(), Some(&Focus::Submit));
    }

    #[test]
    fn toggle_panel_then_check_options_updates_text() {
        let mut app = split_app();
        app.focus = Focus::TogglePanel;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.form.selection.panel_open());

        event_loop::handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::SplitOption(0));
        event_loop::handle_key(&mut app, key(KeyCode::Char(' ')));
        event_loop::handle_key(&mut app, key(KeyCode::Down));
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.selection.existing(), "2, 3");

        app.focus = Focus::TogglePanel;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.form.selection.panel_open());
        assert_eq!(app.form.selection.existing(), "2, 3");
    }

    #[test]
    fn typing_edits_focused_text_field() {
        let mut app = split_app();
        app.focus = Focus::Existing;
        for c in "4, 5".chars() {
            event_loop::handle_key(&mut app, key(KeyCode::Char(c)));
        }
        event_loop::handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.form.selection.existing(), "4, ");
        assert!(!app.quit);
    }

    #[test]
    fn add_and_remove_rows_move_focus() {
        let mut app = split_app();
        app.focus = Focus::AddRow;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.rows.len(), 2);
        assert_eq!(app.focus, Focus::Summary(1));

        app.focus = Focus::RemoveRow(1);
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.rows.len(), 1);
        assert_eq!(app.focus, Focus::RemoveRow(0));
    }

    #[test]
    fn choice_keys_cycle_select_options() {
        let mut app = split_app();
        app.focus = Focus::Milestone(0);
        event_loop::handle_key(&mut app, key(KeyCode::Right));
        event_loop::handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.form.rows.rows()[0].milestone.selected_value(), "m1");
        event_loop::handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.form.rows.rows()[0].milestone.selected_index(), 0);
    }

    #[test]
    fn hiding_split_controls_moves_focus_off_them() {
        let mut app = split_app();
        app.focus = Focus::Summary(0);
        app.apply_form_event(FormEvent::SelectAction {
            name: "leave".to_string(),
        });
        assert_eq!(app.focus, Focus::Submit);
    }

    #[test]
    fn submit_without_store_ends_session_with_fields() {
        let mut app = split_app();
        app.focus = Focus::Submit;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.quit);
        match app.outcome.as_ref() {
            Some(TuiOutcome::Submitted {
                submission, draft, ..
            }) => {
                assert_eq!(submission.get("action"), Some("split"));
                assert!(draft.is_none());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn escape_cancels() {
        let mut app = app();
        event_loop::handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.quit);
        assert_eq!(app.outcome, Some(TuiOutcome::Cancelled));
    }

    #[test]
    fn draft_write_failure_still_submits() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::init(dir.path(), false).unwrap();
        let drafts = store.root().join("drafts");
        std::fs::remove_dir_all(&drafts).unwrap();
        std::fs::write(&drafts, b"not a directory").unwrap();

        let mut app = split_app();
        app.store = Some(store);
        app.submit_url = Some("http://localhost:9/ticket/1".to_string());
        app.focus = Focus::Submit;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.quit);
        match app.outcome.as_ref() {
            Some(TuiOutcome::Submitted {
                submission,
                draft,
                submit_url,
            }) => {
                assert_eq!(submission.get("action"), Some("split"));
                assert!(draft.is_none());
                assert_eq!(submit_url.as_deref(), Some("http://localhost:9/ticket/1"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        let last = app.last_result.as_ref().unwrap();
        assert_eq!(last.kind, EntryKind::Output);
    }

    #[test]
    fn draft_is_saved_next_to_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::init(dir.path(), false).unwrap();
        let expected = store.draft_path(TicketId(1));

        let mut app = split_app();
        app.store = Some(store);
        app.focus = Focus::Submit;
        event_loop::handle_key(&mut app, key(KeyCode::Enter));

        match app.outcome.as_ref() {
            Some(TuiOutcome::Submitted { draft, .. }) => {
                assert_eq!(draft.as_deref(), Some(expected.as_path()));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(expected.is_file());
    }
