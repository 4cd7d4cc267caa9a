    use super::*;

    #[test]
    fn insert_and_backspace_follow_the_cursor() {
        let mut f = TextField::with_value("13");
        assert_eq!(f.cursor(), 2);

        f.move_left();
        f.insert_char('2');
        assert_eq!(f.as_str(), "123");
        assert_eq!(f.cursor(), 2);

        f.backspace();
        assert_eq!(f.as_str(), "13");
        f.move_home();
        f.backspace();
        assert_eq!(f.as_str(), "13");
        f.delete();
        assert_eq!(f.as_str(), "3");
    }

    #[test]
    fn cursor_counts_chars_not_bytes() {
        let mut f = TextField::with_value("é1");
        assert_eq!(f.cursor(), 2);
        f.move_left();
        f.backspace();
        assert_eq!(f.as_str(), "1");
        f.move_end();
        f.move_right();
        assert_eq!(f.cursor(), 1);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut f = TextField::with_value("abc");
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
    }
