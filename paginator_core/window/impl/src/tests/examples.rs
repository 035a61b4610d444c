use paginator_models::window::PageToken::Page;
use pretty_assertions::assert_eq;

use super::{all_pages, ellipses, numbers, render, E};
use crate::generate_page_window;

#[test]
fn fits_exactly() {
    for current_page in 1..=7 {
        assert_eq!(generate_page_window(current_page, 7, 7), all_pages(7));
    }
}

#[test]
fn first_page() {
    let result = generate_page_window(1, 10, 7);
    assert_eq!(
        result,
        [Page(1), Page(2), Page(3), Page(4), Page(5), E, Page(10)]
    );
}

#[test]
fn middle_page() {
    let result = generate_page_window(5, 10, 7);
    assert_eq!(result, [Page(1), E, Page(4), Page(5), Page(6), E, Page(10)]);
}

#[test]
fn last_page() {
    let result = generate_page_window(10, 10, 7);
    assert_eq!(
        result,
        [Page(1), E, Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn middle_of_twenty() {
    let result = generate_page_window(10, 20, 7);

    assert_eq!(result.first(), Some(&Page(1)));
    assert_eq!(result.last(), Some(&Page(20)));
    assert_eq!(ellipses(&result), 2);
    assert_eq!(numbers(&result).iter().filter(|&&n| n == 10).count(), 1);
    assert!(numbers(&result).len() - 2 <= 7 - 4);
    assert_eq!(render(&result), "1 … 9 10 11 … 20");
}

#[test]
fn walk_through_ten_pages() {
    let expected = [
        "1 2 3 4 5 … 10",
        "1 2 3 4 5 … 10",
        "1 2 3 4 5 … 10",
        "1 … 3 4 5 … 10",
        "1 … 4 5 6 … 10",
        "1 … 5 6 7 … 10",
        "1 … 6 7 8 … 10",
        "1 … 6 7 8 9 10",
        "1 … 6 7 8 9 10",
        "1 … 6 7 8 9 10",
    ];
    for (current_page, expected) in (1..).zip(expected) {
        assert_eq!(render(&generate_page_window(current_page, 10, 7)), expected);
    }
}

#[test]
fn smallest_window() {
    assert_eq!(render(&generate_page_window(1, 6, 5)), "1 2 3 … 6");
    assert_eq!(render(&generate_page_window(2, 6, 5)), "1 2 3 … 6");
    assert_eq!(render(&generate_page_window(3, 6, 5)), "1 … 3 … 6");
    assert_eq!(render(&generate_page_window(4, 6, 5)), "1 … 4 … 6");
    assert_eq!(render(&generate_page_window(5, 6, 5)), "1 … 4 5 6");
    assert_eq!(render(&generate_page_window(50, 100, 5)), "1 … 50 … 100");
}

#[test]
fn start_of_list_only_moves_window_end() {
    assert_eq!(render(&generate_page_window(4, 12, 9)), "1 2 3 4 5 6 7 … 12");
    assert_eq!(render(&generate_page_window(5, 12, 9)), "1 … 3 4 5 6 7 … 12");
    assert_eq!(render(&generate_page_window(6, 12, 9)), "1 … 4 5 6 7 8 … 12");
}

#[test]
fn even_window() {
    assert_eq!(render(&generate_page_window(2, 12, 8)), "1 2 3 4 5 6 … 12");
    assert_eq!(render(&generate_page_window(6, 12, 8)), "1 … 5 6 7 … 12");
    assert_eq!(render(&generate_page_window(11, 12, 8)), "1 … 7 8 9 10 11 12");
}

#[test]
fn wide_window() {
    assert_eq!(
        render(&generate_page_window(50, 100, 11)),
        "1 … 47 48 49 50 51 52 53 … 100"
    );
}

#[test]
fn degenerate_totals() {
    assert!(generate_page_window(1, 0, 7).is_empty());
    assert!(generate_page_window(1, -3, 7).is_empty());
    assert_eq!(generate_page_window(1, 1, 7), [Page(1)]);
    assert_eq!(generate_page_window(1, 2, 7), [Page(1), Page(2)]);
}

#[test]
fn out_of_range_current_page() {
    assert_eq!(generate_page_window(0, 10, 7), generate_page_window(1, 10, 7));
    assert_eq!(generate_page_window(-5, 10, 7), generate_page_window(1, 10, 7));
    assert_eq!(generate_page_window(11, 10, 7), generate_page_window(10, 10, 7));
    assert_eq!(
        generate_page_window(i64::MAX, 10, 7),
        generate_page_window(10, 10, 7)
    );
}

#[test]
fn huge_totals_with_degenerate_max_visible() {
    let last = i64::MAX as u64;

    assert_eq!(
        generate_page_window(1, i64::MAX, 4),
        [Page(1), Page(2), Page(3), E, Page(last)]
    );
    assert_eq!(
        generate_page_window(i64::MAX, i64::MAX, i64::MIN),
        [Page(1), E, Page(last - 2), Page(last - 1), Page(last)]
    );

    let result = generate_page_window(1, i64::MAX, i64::MAX);
    assert_eq!(result.len(), 99);
    assert_eq!(result.first(), Some(&Page(1)));
    assert_eq!(result.last(), Some(&Page(last)));
    assert_eq!(ellipses(&result), 1);
}

#[test]
fn max_visible_is_capped() {
    assert_eq!(generate_page_window(1, 99, i64::MAX), all_pages(99));
    assert_eq!(generate_page_window(1, 99, 4), all_pages(99));
    assert_eq!(generate_page_window(1, 100, 4).len(), 5);

    let result = generate_page_window(75, 150, 120);
    assert_eq!(result.len(), 99);
    assert_eq!(ellipses(&result), 2);
}

#[test]
fn small_max_visible_shows_all_pages() {
    for max_visible in [i64::MIN, -1, 0, 1, 4] {
        assert_eq!(generate_page_window(3, 9, max_visible), all_pages(9));
    }
}
