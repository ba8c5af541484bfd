//! **routekit-sort** — in-place sorting utilities.
//!
//! A single entry point, [`bubble_sort`], independent of the rest of the
//! workspace.

/// Sort a slice in place, ascending, using bubble sort.
///
/// Each pass compares adjacent pairs and swaps them when out of order,
/// bubbling the largest remaining element to the end of the unsorted region;
/// the region shrinks by one per pass, for at most n−1 passes. Equal elements
/// are never swapped, so the sort is stable. O(n²) time, O(1) auxiliary
/// space.
///
/// An empty or single-element slice is returned unchanged.
///
/// ```
/// let mut values = [5, 3, 8, 1, 2];
/// routekit_sort::bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 5, 8]);
/// ```
pub fn bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    #[test]
    fn sorts_unordered_input() {
        let mut values = [5, 3, 8, 1, 2];
        bubble_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 5, 8]);
    }

    #[test]
    fn empty_slice_is_fine() {
        let mut values: [i32; 0] = [];
        bubble_sort(&mut values);
        assert_eq!(values, []);
    }

    #[test]
    fn single_element() {
        let mut values = [42];
        bubble_sort(&mut values);
        assert_eq!(values, [42]);
    }

    #[test]
    fn already_sorted_unchanged() {
        let mut values = [1, 2, 3, 4, 5];
        bubble_sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_sorted() {
        let mut values = [9, 7, 5, 3, 1];
        bubble_sort(&mut values);
        assert_eq!(values, [1, 3, 5, 7, 9]);
    }

    #[test]
    fn duplicate_heavy() {
        let mut values = [3, 1, 3, 1, 3, 1];
        bubble_sort(&mut values);
        assert_eq!(values, [1, 1, 1, 3, 3, 3]);
    }

    #[test]
    fn stable_for_equal_keys() {
        // Sort by key only; payloads of equal keys must keep their order.
        #[derive(Debug)]
        struct Entry(i32, &'static str);
        impl PartialEq for Entry {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Entry {}
        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Entry {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }
        let mut values = [Entry(2, "a"), Entry(1, "b"), Entry(2, "c"), Entry(1, "d")];
        bubble_sort(&mut values);
        let payloads: Vec<_> = values.iter().map(|e| e.1).collect();
        assert_eq!(payloads, ["b", "d", "a", "c"]);
    }

    #[test]
    fn random_inputs_sorted_permutation_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let len = rng.random_range(0..64usize);
            let mut values: Vec<i64> = (0..len).map(|_| rng.random_range(-100..100)).collect();
            let mut expected = values.clone();
            expected.sort();

            bubble_sort(&mut values);
            // Non-decreasing permutation of the input.
            assert_eq!(values, expected);

            // Sorting again changes nothing.
            let once = values.clone();
            bubble_sort(&mut values);
            assert_eq!(values, once);
        }
    }
}
