#[cfg(test)]
pub mod text_tests {
    use chrono::NaiveDate;

    use newsdesk::common::text::*;

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv("rust, web ,  , actix,"),
            vec!["rust".to_string(), "web".to_string(), "actix".to_string()]
        );
    }

    #[test]
    fn test_split_csv_empty_input() {
        assert!(split_csv("").is_empty());
        assert!(split_csv("  ,  , ").is_empty());
    }

    #[test]
    fn test_split_lines_one_entry_per_line() {
        assert_eq!(
            split_lines("Maintain studio equipment\n\n  Run rehearsals  \r\n"),
            vec![
                "Maintain studio equipment".to_string(),
                "Run rehearsals".to_string()
            ]
        );
    }

    #[test]
    fn test_contains_ci_is_case_insensitive() {
        assert!(contains_ci("Election Night Special", "night"));
        assert!(contains_ci("Election Night Special", "ELECTION"));
        assert!(!contains_ci("Election Night Special", "weather"));
    }

    #[test]
    fn test_contains_ci_empty_needle_matches_everything() {
        assert!(contains_ci("anything", ""));
        assert!(contains_ci("", ""));
    }

    #[test]
    fn test_parse_money_lenient() {
        assert_eq!(parse_money("90000"), Some(90_000));
        assert_eq!(parse_money("  42 "), Some(42));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("   "), None);
        assert_eq!(parse_money("12.50"), None);
        assert_eq!(parse_money("lots"), None);
    }

    #[test]
    fn test_parse_date_iso_only() {
        assert_eq!(
            parse_date("2026-08-01"),
            NaiveDate::from_ymd_opt(2026, 8, 1)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("01/08/2026"), None);
    }

    #[test]
    fn test_tally_tags_counts_and_orders() {
        let lists: Vec<Vec<String>> = vec![
            vec!["sports".to_string(), "india".to_string()],
            vec!["india".to_string()],
            vec!["india".to_string(), "cricket".to_string()],
        ];

        let tallied = tally_tags(lists.iter().map(|l| l.as_slice()));

        assert_eq!(
            tallied,
            vec![
                ("india".to_string(), 3),
                ("cricket".to_string(), 1),
                ("sports".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_tally_tags_empty() {
        let lists: Vec<Vec<String>> = Vec::new();
        assert!(tally_tags(lists.iter().map(|l| l.as_slice())).is_empty());
    }
}
