use rand::Rng;
use sortmat::prelude::*;

/// 10x10 matrix filled row-major with 1..=100.
fn hundred() -> Matrix {
    let mut m = Matrix::new(10, 10);
    let mut k = 1;
    for i in 0..10 {
        for j in 0..10 {
            m.set(i, j, k).unwrap();
            k += 1;
        }
    }
    m
}

/// Random sorted matrix: each cell is the larger of its upper and left
/// neighbours plus a small step, so duplicates are common.
fn random_sorted(rng: &mut impl Rng, rows: usize, cols: usize) -> Matrix {
    let mut cells: Vec<Vec<Value>> = vec![vec![0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            let up = if i > 0 { cells[i - 1][j] } else { -20 };
            let left = if j > 0 { cells[i][j - 1] } else { -20 };
            cells[i][j] = up.max(left) + rng.random_range(0..3);
        }
    }
    Matrix::from_rows(&cells)
}

#[test]
fn test_concrete_scenario() {
    let m = hundred();
    assert!(m.is_sorted());

    assert_eq!(contains_linear(&m, 57), SearchResult::Found { row: 5, col: 6 });
    assert_eq!(contains_bs(&m, 271), SearchResult::NotFound);
    assert_eq!(
        contains_experimental(&m, 0, 0, 10, 10, 57),
        Ok(SearchResult::Found { row: 5, col: 6 })
    );
    assert_eq!(contains_bs(&m, 57), SearchResult::Found { row: 5, col: 6 });
    assert_eq!(contains_linear(&m, 271), SearchResult::NotFound);
    assert_eq!(
        contains_experimental(&m, 0, 0, 10, 10, 271),
        Ok(SearchResult::NotFound)
    );
}

#[test]
fn test_new_is_zeroed() {
    let m = Matrix::new(3, 4);
    assert_eq!(m.dimensions(), (3, 4));
    for i in 0..3 {
        assert_eq!(m.row(i).unwrap(), &[0, 0, 0, 0]);
    }

    let n = NestedMatrix::new(3, 4);
    assert_eq!(n.dimensions(), (3, 4));
    assert_eq!(n.get(2, 3), Ok(0));
}

#[test]
fn test_bounds_checking() {
    let mut m = hundred();

    assert_eq!(m.get(9, 9), Ok(100));
    assert!(m.set(9, 9, 101).is_ok());
    assert_eq!(m.get(9, 9), Ok(101));

    assert_eq!(
        m.get(10, 0),
        Err(OutOfBounds::Cell {
            row: 10,
            col: 0,
            rows: 10,
            cols: 10
        })
    );
    assert!(m.get(0, 10).is_err());
    assert!(m.set(10, 0, 1).is_err());
    assert!(m.set(0, 10, 1).is_err());
    assert_eq!(m.row(10), Err(OutOfBounds::Row { row: 10, rows: 10 }));

    // A failed set leaves the matrix untouched.
    let before = m.clone();
    assert!(m.set(3, 10, -1).is_err());
    assert_eq!(m, before);
}

#[test]
fn test_bounds_checking_nested() {
    let mut m = NestedMatrix::from(hundred());

    assert_eq!(m.get(9, 9), Ok(100));
    assert!(m.set(9, 9, 0).is_ok());
    assert!(m.get(10, 0).is_err());
    assert!(m.get(0, 10).is_err());
    assert!(m.set(10, 0, 1).is_err());
    assert!(m.set(0, 10, 1).is_err());
    assert_eq!(m.row(10), Err(OutOfBounds::Row { row: 10, rows: 10 }));

    // A failed set leaves the matrix untouched.
    let before = m.clone();
    assert!(m.set(3, 10, -1).is_err());
    assert!(m.set(10, 3, -1).is_err());
    assert_eq!(m, before);
}

#[test]
#[should_panic(expected = "overflow usize")]
fn test_new_rejects_overflowing_dimensions() {
    // Must fail while building, not on the first read.
    let _ = Matrix::new(2, usize::MAX / 2 + 1);
}

#[test]
#[should_panic(expected = "overflow usize")]
fn test_from_fn_rejects_overflowing_dimensions() {
    let _ = Matrix::from_fn(usize::MAX / 2 + 1, 2, |_, _| 0);
}

#[test]
fn test_from_rows_pads_short_rows() {
    let nested = vec![vec![1, 2], vec![3], vec![], vec![4, 5, 6]];

    let m = Matrix::from_rows(&nested);
    assert_eq!(m.dimensions(), (4, 3));
    assert_eq!(m.row(0).unwrap(), &[1, 2, 0]);
    assert_eq!(m.row(1).unwrap(), &[3, 0, 0]);
    assert_eq!(m.row(2).unwrap(), &[0, 0, 0]);
    assert_eq!(m.row(3).unwrap(), &[4, 5, 6]);

    let n = NestedMatrix::from_rows(&nested);
    assert_eq!(n.dimensions(), (4, 3));
    assert_eq!(Matrix::from(n), m);
}

#[test]
fn test_degenerate_matrices() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let m = Matrix::new(rows, cols);
        assert!(m.is_empty());
        for target in [-1, 0, 1] {
            assert_eq!(contains_linear(&m, target), SearchResult::NotFound);
            assert_eq!(contains_bs(&m, target), SearchResult::NotFound);
            assert_eq!(
                contains_experimental(&m, 0, 0, rows as isize, cols as isize, target),
                Ok(SearchResult::NotFound)
            );
        }
    }

    // Empty nested rows give a matrix with rows but no columns.
    let m = Matrix::from_rows(&[vec![], vec![]]);
    assert_eq!(m.dimensions(), (2, 0));
    assert_eq!(contains_bs(&m, 0), SearchResult::NotFound);
}

#[test]
fn test_single_cell() {
    let m = Matrix::from_rows(&[vec![42]]);
    for strategy in Strategy::ALL {
        assert_eq!(
            strategy.search(&m, 42),
            Ok(SearchResult::Found { row: 0, col: 0 }),
            "{strategy}"
        );
        assert_eq!(strategy.search(&m, 41), Ok(SearchResult::NotFound), "{strategy}");
    }
}

#[test]
fn test_binary_search() {
    assert_eq!(binary_search(&[], 1), None);
    assert_eq!(binary_search(&[1], 1), Some(0));
    assert_eq!(binary_search(&[1], 0), None);

    let values = [2, 4, 6, 8, 10, 12];
    for (i, v) in values.iter().enumerate() {
        assert_eq!(binary_search(&values, *v), Some(i));
        assert_eq!(binary_search(&values, *v + 1), None);
    }
    assert_eq!(binary_search(&values, 1), None);

    // Any index of a duplicate is acceptable.
    let dups = [1, 3, 3, 3, 3, 5];
    let i = binary_search(&dups, 3).unwrap();
    assert_eq!(dups[i], 3);
}

#[test]
fn test_bs_reports_lowest_row() {
    let m = Matrix::from_rows(&[vec![1, 2, 5], vec![2, 5, 6], vec![5, 6, 7]]);
    assert_eq!(contains_bs(&m, 5), SearchResult::Found { row: 0, col: 2 });
    assert_eq!(contains_bs(&m, 6), SearchResult::Found { row: 1, col: 2 });
}

#[test]
fn test_completeness_every_value() {
    let m = hundred();
    for v in 1..=100 {
        let expected = SearchResult::Found {
            row: ((v - 1) / 10) as usize,
            col: ((v - 1) % 10) as usize,
        };
        for strategy in Strategy::ALL {
            assert_eq!(strategy.search(&m, v), Ok(expected), "{strategy} for {v}");
        }
    }
}

#[test]
fn test_fuzz_agreement() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let rows = rng.random_range(0..12);
        let cols = rng.random_range(0..12);
        let m = random_sorted(&mut rng, rows, cols);
        assert!(m.is_sorted());

        for target in -25..60 {
            let results: Vec<SearchResult> = Strategy::ALL
                .iter()
                .map(|s| s.search(&m, target).unwrap())
                .collect();

            let found = results[0].is_found();
            for result in &results {
                assert_eq!(result.is_found(), found, "{rows}x{cols} target {target}");
                if let Some((row, col)) = result.position() {
                    assert_eq!(m.get(row, col), Ok(target));
                }
            }
        }

        // Every stored value is found by every strategy.
        for i in 0..rows {
            for j in 0..cols {
                let v = m.get(i, j).unwrap();
                for strategy in Strategy::ALL {
                    assert!(strategy.search(&m, v).unwrap().is_found());
                }
            }
        }
    }
}

#[test]
fn test_backings_agree() {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let rows = rng.random_range(1..20);
        let cols = rng.random_range(1..20);
        let flat = random_sorted(&mut rng, rows, cols);
        let nested = NestedMatrix::from(flat.clone());
        assert!(nested.is_sorted());

        for target in -25..80 {
            for strategy in Strategy::ALL {
                assert_eq!(strategy.search(&flat, target), strategy.search(&nested, target));
            }
        }
    }
}

#[test]
fn test_unsorted_input_does_not_panic() {
    let m = Matrix::from_rows(&[vec![9, 1, 5], vec![0, 7, 3], vec![8, 2, 6]]);
    assert!(!m.is_sorted());

    for target in -1..11 {
        for strategy in Strategy::ALL {
            // The answer may be wrong, but it must not be a wrong position.
            if let Some((row, col)) = strategy.search(&m, target).unwrap().position() {
                assert_eq!(m.get(row, col), Ok(target));
            }
        }
    }
}

#[test]
fn test_display() {
    let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 50, 600]]);
    assert_eq!(m.to_string(), "  1   2   3 \n  4  50 600 ");
    assert_eq!(NestedMatrix::from(m.clone()).to_string(), m.to_string());

    assert_eq!(Matrix::new(0, 0).to_string(), "");
}
