    use super::*;

    fn group(default_action: Option<&str>, visible: bool) -> ActionGroup {
        ActionGroup::new(
            vec!["leave".into(), "resolve".into(), "split".into()],
            default_action,
            visible,
        )
    }

    #[test]
    fn selecting_split_shows_controls_and_others_hide_them() {
        let mut g = group(Some("leave"), false);
        assert!(g.select("split"));
        assert!(g.split_controls_visible());
        assert_eq!(g.selected(), Some("split"));

        assert!(g.select("resolve"));
        assert!(!g.split_controls_visible());
    }

    #[test]
    fn initial_visibility_is_taken_as_configured() {
        let g = group(Some("split"), false);
        assert_eq!(g.selected(), Some("split"));
        assert!(!g.split_controls_visible());

        let g = group(Some("leave"), true);
        assert!(g.split_controls_visible());
    }

    #[test]
    fn reselecting_or_unknown_action_changes_nothing() {
        let mut g = group(Some("leave"), true);
        assert!(!g.select("leave"));
        assert!(g.split_controls_visible());

        assert!(!g.select("duplicate"));
        assert!(!g.select_index(7));
        assert_eq!(g.selected(), Some("leave"));
    }

    #[test]
    fn action_ids_use_prefix() {
        assert_eq!(action_id("split"), SPLIT_ACTION_ID);
        assert!(group(None, false).has_split_action());
        let g = ActionGroup::new(vec!["leave".into()], None, false);
        assert!(!g.has_split_action());
        assert_eq!(g.selected(), None);
    }
