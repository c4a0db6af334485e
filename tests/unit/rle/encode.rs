//! Tests for canonical pattern text encoding

#[cfg(test)]
mod tests {
    use lifetile::rle::decode::decode;
    use lifetile::rle::encode::encode;
    use lifetile::spatial::grid::Grid;

    fn picture(text: &str) -> Grid {
        text.parse().unwrap()
    }

    // Tests encoding a glider
    #[test]
    fn test_encode_glider() {
        assert_eq!(encode(&picture(".o.\n..o\nooo")), "bo$2bo$3o!");
    }

    // Tests that single-cell runs omit the count
    // Verified by always writing the count
    #[test]
    fn test_encode_omits_count_of_one() {
        let text = encode(&picture("o.o\n.o."));

        assert_eq!(text, "obo$bo!");
        assert!(!text.contains('1'));
    }

    // Tests that trailing dead cells are never written
    // Verified by skipping the trailing-dead trim
    #[test]
    fn test_encode_strips_trailing_dead() {
        assert_eq!(encode(&picture("oo..\n....")), "2o!");
        assert!(!encode(&picture("o...\no...")).contains("b$"));
    }

    // Tests that consecutive empty rows collapse into one counted separator
    // Verified by emitting one '$' per empty row
    #[test]
    fn test_encode_coalesces_empty_rows() {
        assert_eq!(encode(&picture("o\n.\n.\no")), "o$2$o!");
    }

    // Tests that a single empty row between live rows needs no count
    #[test]
    fn test_encode_single_empty_row() {
        assert_eq!(encode(&picture("o\n.\no")), "o$$o!");
    }

    // Tests leading empty rows are kept and trailing ones dropped
    #[test]
    fn test_encode_leading_and_trailing_empty_rows() {
        assert_eq!(encode(&picture("..\n.o\n..\n..")), "$bo!");
    }

    // Tests the empty grid and an all-dead grid both encode to the bare terminator
    #[test]
    fn test_encode_empty_and_dead() {
        assert_eq!(encode(&Grid::empty()), "!");
        assert_eq!(encode(&Grid::new(3, 2)), "!");
    }

    // Tests that decoding encoded text reproduces the grid exactly
    // Verified by dropping the coalesced empty-row count
    #[test]
    fn test_encode_decode_reproduces_grid() {
        let grids = [
            picture(".o.\n..o\nooo"),
            picture("....\n.oo.\n....\n....\n.oo.\n...."),
            picture("ooooooooooooo\n.............\no.o.o.o.o.o.o"),
            Grid::new(4, 3),
            Grid::empty(),
        ];

        for grid in &grids {
            let text = encode(grid);
            assert_eq!(&decode(&text, grid.width(), grid.height()), grid, "{text}");
        }
    }

    // Tests that re-encoding arbitrary text is canonical rather than byte-identical
    #[test]
    fn test_encode_is_not_identity_on_input_text() {
        let original = "1o$1o!";
        let grid = decode(original, 1, 2);
        let canonical = encode(&grid);

        assert_ne!(canonical, original);
        assert_eq!(canonical, "o$o!");
        assert_eq!(encode(&decode(&canonical, 1, 2)), canonical);
    }
}
