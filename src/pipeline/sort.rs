// src/pipeline/sort.rs

use crate::domain::{Listing, SortDirection};

/// Orders a subset by price, then re-orders by posting date.
///
/// Both passes are stable, so the later key wins: rows end up ordered by
/// `time_posted`, and price order only survives among rows posted the same day.
pub fn sort<'a>(
    mut rows: Vec<&'a Listing>,
    price_order: SortDirection,
    time_order: SortDirection,
) -> Vec<&'a Listing> {
    rows.sort_by(|a, b| price_order.orient(a.price.total_cmp(&b.price)));
    rows.sort_by(|a, b| time_order.orient(a.time_posted.cmp(&b.time_posted)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::listing;

    fn table() -> Vec<Listing> {
        vec![
            listing(0, "WA", "Seattle", "Honda", 300.0, 1.0, 2015, "2021-01-01"),
            listing(1, "WA", "Seattle", "Honda", 100.0, 1.0, 2015, "2021-06-01"),
            listing(2, "WA", "Seattle", "Honda", 200.0, 1.0, 2015, "2021-01-01"),
            listing(3, "WA", "Seattle", "Honda", 100.0, 1.0, 2015, "2021-01-01"),
            listing(4, "WA", "Seattle", "Honda", 500.0, 1.0, 2015, "2021-06-01"),
        ]
    }

    fn ids(rows: &[&Listing]) -> Vec<usize> {
        rows.iter().map(|l| l.id).collect()
    }

    #[test]
    fn time_dominates_price() {
        let table = table();
        let rows = sort(
            table.iter().collect(),
            SortDirection::Ascending,
            SortDirection::Descending,
        );

        // Newest day first; cheapest first within each day.
        assert_eq!(ids(&rows), vec![1, 4, 3, 2, 0]);
    }

    #[test]
    fn both_directions_descending() {
        let table = table();
        let rows = sort(
            table.iter().collect(),
            SortDirection::Descending,
            SortDirection::Descending,
        );

        assert_eq!(ids(&rows), vec![4, 1, 0, 2, 3]);
    }

    #[test]
    fn full_ties_keep_incoming_order() {
        let table = vec![
            listing(7, "WA", "Seattle", "Honda", 100.0, 1.0, 2015, "2021-01-01"),
            listing(3, "WA", "Seattle", "Ford", 100.0, 1.0, 2015, "2021-01-01"),
            listing(5, "WA", "Seattle", "Kia", 100.0, 1.0, 2015, "2021-01-01"),
        ];

        for price in [SortDirection::Ascending, SortDirection::Descending] {
            for time in [SortDirection::Ascending, SortDirection::Descending] {
                let rows = sort(table.iter().collect(), price, time);
                assert_eq!(ids(&rows), vec![7, 3, 5]);
            }
        }
    }

    #[test]
    fn result_is_ordered_by_time_then_price() {
        let table = table();
        let rows = sort(
            table.iter().collect(),
            SortDirection::Descending,
            SortDirection::Ascending,
        );

        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.time_posted <= b.time_posted);
            if a.time_posted == b.time_posted {
                assert!(a.price >= b.price);
            }
        }
    }
}
