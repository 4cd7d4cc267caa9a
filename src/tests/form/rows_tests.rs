    use super::*;

    fn template() -> NewTicketRow {
        NewTicketRow::new(
            vec!["".into(), "m1".into(), "m2".into()],
            vec!["".into(), "core".into(), "ui".into()],
        )
    }

    #[test]
    fn add_clones_first_row_with_defaults() {
        let mut rows = RowList::new(template());
        {
            let first = rows.get_mut(0).unwrap();
            first.summary.set("filled".to_string());
            first.milestone.select(2);
            first.component.select(1);
        }

        assert_eq!(rows.add(), 1);
        let added = rows.get(1).unwrap();
        assert!(added.is_default());
        assert_eq!(added.milestone.options(), template().milestone.options());
        assert_eq!(rows.get(0).unwrap().summary.as_str(), "filled");
    }

    #[test]
    fn add_then_remove_returns_to_one_row() {
        let mut rows = RowList::new(template());
        let before = rows.clone();
        let idx = rows.add();
        assert_eq!(rows.remove(idx), RemoveOutcome::Removed);
        assert_eq!(rows, before);
    }

    #[test]
    fn removing_only_row_clears_it() {
        let mut rows = RowList::new(template());
        rows.get_mut(0).unwrap().summary.set("x".to_string());
        rows.get_mut(0).unwrap().component.select(2);

        assert_eq!(rows.remove(0), RemoveOutcome::Cleared);
        assert_eq!(rows.len(), 1);
        assert!(rows.get(0).unwrap().is_default());
    }

    #[test]
    fn removing_missing_row_is_a_no_op() {
        let mut rows = RowList::new(template());
        rows.add();
        assert_eq!(rows.remove(5), RemoveOutcome::Missing);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn removing_middle_row_shifts_later_rows() {
        let mut rows = RowList::new(template());
        rows.add();
        rows.add();
        rows.get_mut(2).unwrap().summary.set("third".to_string());

        assert_eq!(rows.remove(1), RemoveOutcome::Removed);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.get(1).unwrap().summary.as_str(), "third");
    }

    #[test]
    fn from_rows_never_yields_an_empty_list() {
        let rows = RowList::from_rows(Vec::new(), template());
        assert_eq!(rows.len(), 1);
        assert!(!rows.is_empty());
    }
