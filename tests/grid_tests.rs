use rand::rngs::SmallRng;
use rand::SeedableRng;
use wordsearch::{Cell, Grid, GridError, OccupancyMask, Orientation};

fn snapshot(grid: &Grid) -> (Vec<Vec<char>>, Vec<OccupancyMask>) {
    let masks = Orientation::ALL.iter().map(|&o| grid.mask(o).clone()).collect();
    (grid.render(), masks)
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(4).unwrap();
    assert_eq!(grid.size(), 4);
    assert_eq!(grid.empty_count(), 16);
    for o in Orientation::ALL {
        assert!(grid.mask(o).is_empty());
    }
    assert_eq!(grid.cell(3, 3), Some(Cell::Empty));
    assert_eq!(grid.cell(4, 0), None);
}

#[test]
fn test_zero_size_is_rejected() {
    assert_eq!(Grid::new(0).unwrap_err(), GridError::InvalidSize(0));
}

#[test]
fn test_put_cat_horizontally() {
    let mut grid = Grid::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let placement = grid.try_put(&mut rng, "cat", Orientation::Horizontal).unwrap();

    let (row, col) = placement.origin();
    assert!(col <= 2);
    let h = grid.mask(Orientation::Horizontal);
    assert_eq!(h.count_ones(), 3);
    for (i, letter) in "CAT".chars().enumerate() {
        assert_eq!(grid.cell(row, col + i), Some(Cell::Letter(letter)));
        assert!(h.get(row, col + i).unwrap());
    }
    assert!(grid.mask(Orientation::Vertical).is_empty());
    assert!(grid.mask(Orientation::DiagonalDownRight).is_empty());
    assert!(grid.mask(Orientation::DiagonalDownLeft).is_empty());
    assert_eq!(grid.empty_count(), 22);
}

#[test]
fn test_word_too_long_fails_everywhere() {
    let mut grid = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let before = snapshot(&grid);
    for o in Orientation::ALL {
        assert!(!grid.put(&mut rng, "ELEPHANT", o));
    }
    assert_eq!(snapshot(&grid), before);
}

#[test]
fn test_candidates_are_row_major() {
    let grid = Grid::new(5).unwrap();
    let h = grid.candidates("CAT", Orientation::Horizontal);
    assert_eq!(h.len(), 15);
    assert_eq!(h.first(), Some(&(0, 0)));
    assert_eq!(h.last(), Some(&(4, 2)));

    let dl = grid.candidates("CAT", Orientation::DiagonalDownLeft);
    assert_eq!(dl.len(), 9);
    assert_eq!(dl.first(), Some(&(0, 2)));
    assert_eq!(dl.last(), Some(&(2, 4)));
}

#[test]
fn test_cross_at_shared_letter() {
    let mut grid = Grid::new(5).unwrap();
    assert!(grid.place_at("CAT", (0, 0), Orientation::Horizontal));
    assert!(grid.place_at("CAR", (0, 0), Orientation::Vertical));
    assert_eq!(grid.cell(0, 0), Some(Cell::Letter('C')));
    assert!(grid.mask(Orientation::Horizontal).get(0, 0).unwrap());
    assert!(grid.mask(Orientation::Vertical).get(0, 0).unwrap());
    assert_eq!(grid.cell(2, 0), Some(Cell::Letter('R')));
}

#[test]
fn test_mismatched_crossing_is_not_a_candidate() {
    let mut grid = Grid::new(5).unwrap();
    assert!(grid.place_at("CAT", (0, 0), Orientation::Horizontal));
    let before = snapshot(&grid);
    assert!(!grid.place_at("XAR", (0, 0), Orientation::Vertical));
    assert_eq!(snapshot(&grid), before);

    let candidates = grid.candidates("XAR", Orientation::Vertical);
    assert!(!candidates.contains(&(0, 0)));
    assert!(!candidates.contains(&(0, 1)));
    assert!(candidates.contains(&(1, 0)));

    let mut rng = SmallRng::seed_from_u64(3);
    let p = grid.try_put(&mut rng, "XAR", Orientation::Vertical).unwrap();
    assert!(candidates.contains(&p.origin()));
}

#[test]
fn test_same_orientation_never_overlaps() {
    let mut grid = Grid::new(4).unwrap();
    assert!(grid.place_at("AAA", (0, 0), Orientation::Horizontal));
    // letters agree but the cells are already claimed horizontally
    assert!(!grid.place_at("AAA", (0, 1), Orientation::Horizontal));
    assert!(grid.candidates("AA", Orientation::Horizontal).iter().all(|&(r, _)| r != 0));
    // the same cells may still be crossed along another orientation
    assert!(grid.place_at("AAA", (0, 1), Orientation::Vertical));
}

#[test]
fn test_normalization_applies_to_put() {
    let mut grid = Grid::new(6).unwrap();
    // ICECREAM is longer than the grid once the space is stripped
    assert!(!grid.place_at("ice cream\n", (0, 0), Orientation::DiagonalDownRight));
    assert!(grid.place_at("ice\r\n", (0, 0), Orientation::DiagonalDownRight));
    assert_eq!(grid.cell(2, 2), Some(Cell::Letter('E')));
}

#[test]
fn test_unplaceable_words_are_refused() {
    let mut grid = Grid::new(5).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    assert!(!grid.put(&mut rng, "", Orientation::Horizontal));
    assert!(!grid.put(&mut rng, "  ", Orientation::Horizontal));
    assert!(!grid.put(&mut rng, "C3PO", Orientation::Horizontal));
    assert_eq!(grid.empty_count(), 25);
}

#[test]
fn test_fill_keeps_words_and_leaves_no_empty_cells() {
    let mut grid = Grid::new(6).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let p = grid.try_put(&mut rng, "RUST", Orientation::DiagonalDownLeft).unwrap();
    let masks_before = snapshot(&grid).1;

    grid.fill_empty_cells(&mut rng);
    assert!(grid.is_filled());
    assert_eq!(grid.empty_count(), 0);
    assert!(grid.letters().iter().all(|c| c.is_ascii_uppercase()));
    let read: String = p
        .cells()
        .flatten()
        .map(|(r, c)| grid.cell(r, c).unwrap().letter().unwrap())
        .collect();
    assert_eq!(read, "RUST");
    assert_eq!(snapshot(&grid).1, masks_before);

    // second fill is a no-op
    let rendered = grid.render();
    grid.fill_empty_cells(&mut rng);
    assert_eq!(grid.render(), rendered);
}

#[test]
fn test_put_after_fill_crosses_filler_letters() {
    let mut grid = Grid::new(1).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);
    grid.fill_empty_cells(&mut rng);
    let filler = grid.cell(0, 0).unwrap().letter().unwrap();
    assert!(grid.mask(Orientation::Horizontal).is_empty());

    // a different letter cannot overwrite the filler
    let other = if filler == 'Z' { 'A' } else { 'Z' };
    let before = snapshot(&grid);
    assert!(!grid.put(&mut rng, &other.to_string(), Orientation::Horizontal));
    assert_eq!(snapshot(&grid), before);

    // a matching letter lands on it and claims the cell
    assert!(grid.put(&mut rng, &filler.to_string(), Orientation::Horizontal));
    assert_eq!(grid.cell(0, 0), Some(Cell::Letter(filler)));
    assert!(grid.mask(Orientation::Horizontal).get(0, 0).unwrap());
}

#[test]
fn test_placement_order_matters() {
    // XYZ first on the top row leaves no column that reads AYB.
    let mut first = Grid::new(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(first.place_at("XYZ", (0, 0), Orientation::Horizontal));
    assert!(!first.put(&mut rng, "AYB", Orientation::Vertical));

    // The other order fits both, crossing at the shared Y.
    let mut second = Grid::new(3).unwrap();
    assert!(second.place_at("AYB", (0, 1), Orientation::Vertical));
    assert_eq!(second.candidates("XYZ", Orientation::Horizontal), vec![(1, 0)]);
    assert!(second.put(&mut rng, "XYZ", Orientation::Horizontal));
}

#[test]
fn test_same_seed_same_layout() {
    let words = ["ALPHA", "BRAVO", "CHARLIE", "DELTA"];
    let build = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(9).unwrap();
        for (i, w) in words.iter().enumerate() {
            grid.put(&mut rng, w, Orientation::ALL[i % 4]);
        }
        grid.fill_empty_cells(&mut rng);
        grid.render()
    };
    assert_eq!(build(2024), build(2024));
}

#[test]
fn test_display_matches_render() {
    let mut grid = Grid::new(3).unwrap();
    assert!(grid.place_at("ABC", (1, 0), Orientation::Horizontal));
    assert_eq!(grid.to_string(), ". . .\nA B C\n. . .");
}
