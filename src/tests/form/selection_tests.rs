    use super::*;

    fn ticket(id: u64) -> TicketRecord {
        TicketRecord {
            id: TicketId(id),
            summary: format!("ticket {}", id),
            milestone: "m1".to_string(),
            component: String::new(),
            status: "new".to_string(),
        }
    }

    fn selection(ids: &[u64], text: &str) -> SplitSelection {
        SplitSelection::new(ids.iter().copied().map(ticket).collect(), text)
    }

    fn checked(sel: &SplitSelection) -> Vec<u64> {
        sel.checked_ids().into_iter().map(|id| id.get()).collect()
    }

    #[test]
    fn opening_panel_checks_ids_found_in_text() {
        let mut sel = selection(&[3, 5, 7], "3, 7");
        assert!(sel.toggle_panel());
        assert_eq!(checked(&sel), vec![3, 7]);
        assert_eq!(sel.toggle_label(), TOGGLE_LABEL_HIDE);
    }

    #[test]
    fn opening_panel_with_empty_text_checks_nothing() {
        let mut sel = selection(&[3, 5, 7], "");
        sel.open_panel();
        assert!(checked(&sel).is_empty());
        assert_eq!(parse_existing(""), vec![""]);
    }

    #[test]
    fn tokens_must_match_exactly() {
        let mut sel = selection(&[3, 5, 7], "3,7, 5 ");
        sel.open_panel();
        assert!(checked(&sel).is_empty());
    }

    #[test]
    fn toggles_rewrite_text_in_list_order() {
        let mut sel = selection(&[9, 2, 4], "");
        sel.open_panel();

        assert_eq!(sel.toggle_option(2), Some(true));
        assert_eq!(sel.existing(), "4");
        assert_eq!(sel.toggle_option(0), Some(true));
        assert_eq!(sel.existing(), "9, 4");
        assert_eq!(sel.toggle_option(1), Some(true));
        assert_eq!(sel.existing(), "9, 2, 4");
        assert_eq!(sel.toggle_option(0), Some(false));
        assert_eq!(sel.existing(), "2, 4");

        assert_eq!(sel.toggle_option(5), None);
        assert_eq!(sel.existing(), "2, 4");
    }

    #[test]
    fn closing_panel_keeps_text_and_alternates_label() {
        let mut sel = selection(&[3, 5], "");
        sel.open_panel();
        sel.toggle_option(1);
        sel.text_mut().set("3".to_string());

        assert!(!sel.toggle_panel());
        assert_eq!(sel.toggle_label(), TOGGLE_LABEL_CHOOSE);
        assert_eq!(sel.existing(), "3");
        // Checkboxes are only reconciled on the next open.
        assert_eq!(checked(&sel), vec![5]);

        assert!(sel.toggle_panel());
        assert_eq!(checked(&sel), vec![3]);
    }

    #[test]
    fn join_uses_comma_space() {
        assert_eq!(join_existing(&[TicketId(1), TicketId(20)]), "1, 20");
        assert_eq!(join_existing(&[]), "");
    }
