use std::cmp::Ordering;
use tiebreak::prelude::*;

#[test]
fn test_sort_ascending() {
    let mut data = vec![3, 1, 2];
    ordered().sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_sort_descending() {
    let mut data = vec![3, 1, 2];
    ordered().reverse().sort(&mut data);
    assert_eq!(data, vec![3, 2, 1]);
}

#[test]
fn test_reverse_swaps_operands() {
    let cmp = ordered::<i32>();
    let rev = cmp.reverse();

    assert_eq!(cmp.compare(&1, &2), Ordering::Less);
    assert_eq!(rev.compare(&1, &2), Ordering::Greater);
    assert_eq!(rev.compare(&2, &1), Ordering::Less);
    assert_eq!(rev.compare(&1, &1), Ordering::Equal);
}

#[test]
fn test_on_extracts_key() {
    #[derive(Debug, PartialEq)]
    struct Item {
        k: i32,
    }

    let mut items = vec![Item { k: 2 }, Item { k: 1 }];
    on(|x: &Item| x.k).sort(&mut items);
    assert_eq!(items, vec![Item { k: 1 }, Item { k: 2 }]);
}

#[test]
fn test_map_compares_through_transform() {
    // Numeric comparator lifted over string length.
    let by_len = ordered::<usize>().map(|s: &&str| s.len());

    assert_eq!(by_len.compare(&"fig", &"banana"), Ordering::Less);
    assert_eq!(by_len.compare(&"pear", &"plum"), Ordering::Equal);

    let mut words = vec!["banana", "fig", "pear"];
    by_len.sort(&mut words);
    assert_eq!(words, vec!["fig", "pear", "banana"]);
}

#[test]
fn test_append_pushes_matches_to_end() {
    let mut data = vec![Some(1), None, Some(2)];
    ordered().append(|x: &Option<i32>| x.is_none()).sort(&mut data);
    assert_eq!(data, vec![Some(1), Some(2), None]);
}

#[test]
fn test_append_tie_break_table() {
    let cmp = ordered::<i32>().append(|x: &i32| *x < 0);

    // Both match: default ordering within the group.
    assert_eq!(cmp.compare(&-2, &-1), Ordering::Less);
    // a matches, b does not: a sorts after b.
    assert_eq!(cmp.compare(&-1, &5), Ordering::Greater);
    // b matches, a does not: a sorts before b.
    assert_eq!(cmp.compare(&5, &-1), Ordering::Less);
    // Neither matches: original comparator.
    assert_eq!(cmp.compare(&3, &7), Ordering::Less);
}

#[test]
fn test_append_by_custom_handler() {
    // Negatives last, and ordered among themselves by absolute value.
    let cmp = ordered::<i32>().append_by(|x: &i32| *x < 0, |a, b| a.abs().cmp(&b.abs()));

    let mut data = vec![-5, 3, -1, 2];
    cmp.sort(&mut data);
    assert_eq!(data, vec![2, 3, -1, -5]);
}

#[test]
fn test_prepend_tie_break_table() {
    let cmp = ordered::<i32>().prepend(|x: &i32| *x < 0);

    assert_eq!(cmp.compare(&-2, &-1), Ordering::Less);
    assert_eq!(cmp.compare(&-1, &5), Ordering::Less);
    assert_eq!(cmp.compare(&5, &-1), Ordering::Greater);
    assert_eq!(cmp.compare(&3, &7), Ordering::Less);
}

#[test]
fn test_prepend_pulls_matches_to_front() {
    let mut data = vec![4, 7, 2, 9];
    ordered().prepend(|x: &i32| x % 2 == 0).sort(&mut data);
    assert_eq!(data, vec![2, 4, 7, 9]);
}

#[test]
fn test_then_breaks_ties_only() {
    #[derive(Debug, PartialEq)]
    struct Pair {
        a: i32,
        b: i32,
    }

    let cmp = on(|x: &Pair| x.a).then(on(|x: &Pair| x.b).as_fn());

    let mut pairs = vec![Pair { a: 1, b: 2 }, Pair { a: 1, b: 1 }];
    cmp.sort(&mut pairs);
    assert_eq!(pairs, vec![Pair { a: 1, b: 1 }, Pair { a: 1, b: 2 }]);

    // A decided primary result is never overridden by the handler.
    let primary = on(|x: &Pair| x.a);
    let sabotaged = primary.then(|_: &Pair, _: &Pair| Ordering::Greater);
    assert_eq!(
        sabotaged.compare(&Pair { a: 0, b: 9 }, &Pair { a: 1, b: 0 }),
        Ordering::Less,
    );
}

#[test]
fn test_then_chains_indefinitely() {
    type Triple = (u8, u8, u8);

    let cmp = on(|t: &Triple| t.0)
        .then(on(|t: &Triple| t.1).as_fn())
        .then(on(|t: &Triple| t.2).as_fn());

    let mut data = vec![(1, 1, 2), (1, 0, 9), (0, 9, 9), (1, 1, 1)];
    cmp.sort(&mut data);
    assert_eq!(data, vec![(0, 9, 9), (1, 0, 9), (1, 1, 1), (1, 1, 2)]);
}

#[test]
fn test_then_ordered_default_tie_break() {
    // Everything ties under the constant comparator, so the default
    // ordering decides.
    let cmp = Comparator::new(|_: &i32, _: &i32| Ordering::Equal).then_ordered();

    let mut data = vec![3, 1, 2];
    cmp.sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);
}

#[test]
fn test_default_compare_incomparable_is_equal() {
    assert_eq!(default_compare(&f64::NAN, &1.0), Ordering::Equal);
    assert_eq!(default_compare(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(default_compare(&1.0, &2.0), Ordering::Less);
}

#[test]
fn test_locale_collation_plugs_in() {
    let caseless = |a: &str, b: &str| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());

    let mut names = vec![
        "banana".to_string(),
        "Apple".to_string(),
        "cherry".to_string(),
    ];
    locale(caseless).sort(&mut names);
    assert_eq!(names, vec!["Apple", "banana", "cherry"]);

    // Also usable over &str collections.
    let mut refs = vec!["b", "A", "C"];
    locale(caseless).sort(&mut refs);
    assert_eq!(refs, vec!["A", "b", "C"]);
}

#[test]
fn test_locale_derivations_compose() {
    let caseless = |a: &str, b: &str| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());

    let mut names = vec!["b", "A", "C"];
    locale(caseless).reverse().sort(&mut names);
    assert_eq!(names, vec!["C", "b", "A"]);
}

#[test]
fn test_custom_base_function() {
    let by_abs = Comparator::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));

    let mut data = vec![-3, 1, 2];
    by_abs.sort(&mut data);
    assert_eq!(data, vec![1, 2, -3]);
}

#[test]
fn test_sources_survive_derivation() {
    let base = ordered::<i32>();
    let rev = base.reverse();
    let appended = base.append(|x: &i32| *x == 0);

    // Deriving never changes the source.
    assert_eq!(base.compare(&1, &2), Ordering::Less);
    assert_eq!(rev.compare(&1, &2), Ordering::Greater);
    assert_eq!(appended.compare(&0, &2), Ordering::Greater);
}

#[test]
fn test_clone_is_same_ordering() {
    let cmp = ordered::<i32>().reverse();
    let cloned = cmp.clone();
    assert_eq!(cloned.compare(&1, &2), cmp.compare(&1, &2));
}

#[test]
fn test_as_fn_with_std_sort() {
    let cmp = ordered::<i32>().reverse();

    let mut data = vec![3, 1, 2];
    data.sort_by(cmp.as_fn());
    assert_eq!(data, vec![3, 2, 1]);
}

#[test]
fn test_max_min() {
    let by_len = on(|w: &&str| w.len());

    assert_eq!(by_len.max(&"fig", &"banana"), &"banana");
    assert_eq!(by_len.min(&"fig", &"banana"), &"fig");
    // Ties prefer the first argument.
    assert_eq!(by_len.max(&"plum", &"pear"), &"plum");
    assert_eq!(by_len.min(&"plum", &"pear"), &"plum");
}

#[test]
fn test_shared_across_threads() {
    let cmp = ordered::<i32>().reverse();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cmp = cmp.clone();
            std::thread::spawn(move || {
                let mut data = vec![3, 1, 2];
                cmp.sort(&mut data);
                data
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![3, 2, 1]);
    }
}

#[test]
fn test_fuzz_matches_std_sort() {
    use rand::Rng;

    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let count = rng.random_range(0..100);
        let input: Vec<i32> = (0..count).map(|_| rng.random()).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut actual = input.clone();
        ordered().sort(&mut actual);
        assert_eq!(actual, expected);

        expected.reverse();
        ordered().reverse().sort(&mut actual);
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_fuzz_keyed_matches_sort_by_key() {
    use rand::Rng;

    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let count = rng.random_range(0..100);
        let input: Vec<(u8, i32)> = (0..count)
            .map(|_| (rng.random_range(0..4), rng.random()))
            .collect();

        // Stable sorts agree on equal keys, so tie handling is covered too.
        let mut expected = input.clone();
        expected.sort_by_key(|p| p.0);

        let mut actual = input.clone();
        on(|p: &(u8, i32)| p.0).sort(&mut actual);
        assert_eq!(actual, expected);
    }
}
