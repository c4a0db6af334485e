//! Tests for header recognition, the fragment fallback and field splitting

#[cfg(test)]
mod tests {
    use lifetile::PatternError;
    use lifetile::rle::header::{Header, parse_fields, parse_header};

    // Tests a standard single-line header preceded by comments
    // Verified by starting the pattern text at the header start
    #[test]
    fn test_parse_single_line_header() {
        let document = "#N Glider\n#C A small spaceship\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";

        let (header, pattern) = parse_header(document).unwrap();

        assert_eq!(
            header,
            Header {
                width: 3,
                height: 3,
                rule: "B3/S23".to_string(),
            }
        );
        assert_eq!(pattern, "bo$2bo$3o!");
    }

    // Tests the header without spaces around separators
    #[test]
    fn test_parse_compact_header() {
        let (header, pattern) = parse_header("x=2,y=1,rule=B3/S23\n2o!").unwrap();

        assert_eq!(header.width, 2);
        assert_eq!(header.height, 1);
        assert_eq!(pattern, "2o!");
    }

    // Tests that keyword and B/S letters are case-insensitive and the rule is kept verbatim
    // Verified by making the header expression case-sensitive
    #[test]
    fn test_parse_header_case_insensitive_rule() {
        let (header, pattern) = parse_header("x = 2, y = 1, RULE = b36/s23\noo!").unwrap();

        assert_eq!(header.rule, "b36/s23");
        assert_eq!(pattern, "oo!");
    }

    // Tests that a header without commas is recovered by the fragment search
    // Verified by disabling the fallback branch
    #[test]
    fn test_parse_header_fallback_without_commas() {
        let (header, pattern) = parse_header("x = 3 y = 2 rule = B3/S23\n3o!").unwrap();

        assert_eq!(header.width, 3);
        assert_eq!(header.height, 2);
        assert_eq!(header.rule, "B3/S23");
        assert_eq!(pattern, "3o!");
    }

    // Tests that fallback fragments may appear in any order after the width
    // Verified by taking the pattern start from the rule fragment only
    #[test]
    fn test_parse_header_fallback_any_order() {
        let (header, pattern) = parse_header("x = 4\nrule = B3/S23\ny = 2\n4o$4o!").unwrap();

        assert_eq!(header.width, 4);
        assert_eq!(header.height, 2);
        assert_eq!(pattern, "4o$4o!");
    }

    // Tests error when no width declaration exists
    #[test]
    fn test_parse_header_missing() {
        let result = parse_header("#C no header here\nbo$2bo$3o!");

        assert!(matches!(result, Err(PatternError::MissingHeader)));
    }

    // Tests error when a width exists but height and rule cannot be found
    #[test]
    fn test_parse_header_invalid() {
        let result = parse_header("x = 3\n3o!");

        assert!(matches!(result, Err(PatternError::InvalidHeader { .. })));
    }

    // Tests error when the declared width overflows usize
    #[test]
    fn test_parse_header_dimension_overflow() {
        let result = parse_header("x = 99999999999999999999999, y = 1, rule = B3/S23\n!");

        assert!(matches!(result, Err(PatternError::InvalidHeader { .. })));
    }

    // Tests an empty pattern declared with zero dimensions
    #[test]
    fn test_parse_header_empty_pattern() {
        let (header, pattern) = parse_header("x = 0, y = 0, rule = B3/S23\n!").unwrap();

        assert_eq!((header.width, header.height), (0, 0));
        assert_eq!(pattern, "!");
    }

    // Tests field splitting skips pieces without '=' and trims whitespace
    // Verified by treating '=' as required
    #[test]
    fn test_parse_fields_skips_bare_pieces() {
        let fields = parse_fields(" x = 3 , junk,y= 2 ,rule=B3/S23=extra");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("x").map(String::as_str), Some("3"));
        assert_eq!(fields.get("y").map(String::as_str), Some("2"));
        assert_eq!(fields.get("rule").map(String::as_str), Some("B3/S23=extra"));
    }

    // Tests header construction rejects a missing key
    #[test]
    fn test_header_from_fields_missing_rule() {
        let fields = parse_fields("x = 1, y = 1");

        assert!(Header::from_fields(&fields).is_err());
    }

    // Tests error when each dimension fits but the grid cannot be allocated
    // Verified by decoding the parsed header
    #[test]
    fn test_parse_header_area_overflow() {
        let result = parse_header("x = 4294967296, y = 4294967296, rule = B3/S23\no!");

        assert!(matches!(result, Err(PatternError::InvalidHeader { .. })));
    }
}
