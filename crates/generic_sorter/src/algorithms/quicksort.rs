use crate::compare::Comparator;
use crate::view::View;

pub(crate) fn sort<T, F>(mut view: View<'_, T>, cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    // Recurse into the smaller side and keep looping on the larger one, so the
    // stack stays logarithmic even when the first-element pivot degrades.
    while view.len() > 1 {
        let split = partition(&mut view, cmp) + 1;
        let (left, right) = view.split_at(split);

        if left.len() < right.len() {
            sort(left, cmp);
            view = right;
        } else {
            sort(right, cmp);
            view = left;
        }
    }
}

/// Hoare partition around a copy of the first element.
///
/// Returns `j` such that `[0, j]` and `[j + 1, len)` are both non-empty and
/// no element of the first part ranks above any element of the second.
fn partition<T, F>(view: &mut View<'_, T>, cmp: &mut Comparator<F>) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(view.len() >= 2);

    let high = view.len() - 1;
    let pivot = view[0].clone();
    let mut i = 0usize;
    let mut j = high;

    loop {
        // Both cursors are bounded so a comparator that is not a strict weak
        // order cannot walk them off the range.
        while i < high && cmp.less_than(&view[i], &pivot) {
            i += 1;
        }
        while j > 0 && cmp.less_than(&pivot, &view[j]) {
            j -= 1;
        }

        if i >= j {
            // Only a reflexive comparator can produce `j == high` here.
            return j.min(high - 1);
        }

        view.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::natural_less;

    fn partition_vec(data: &mut Vec<i32>) -> usize {
        let mut cmp = Comparator::new(natural_less::<i32>);
        partition(&mut View::new(data.as_mut_slice()), &mut cmp)
    }

    #[test]
    fn partition_splits_around_first_element() {
        let mut data = vec![9, 5, 7, 4, 12];
        let split = partition_vec(&mut data);

        assert_eq!(split, 2);
        assert_eq!(data, [4, 5, 7, 9, 12]);
    }

    #[test]
    fn partition_never_returns_an_empty_side() {
        let cases = [
            vec![1, 1],
            vec![2, 1],
            vec![1, 2],
            vec![7; 9],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
        ];

        for case in &cases {
            let mut data = case.clone();
            let split = partition_vec(&mut data);
            assert!(split < data.len() - 1, "input={case:?} split={split}");

            let (left, right) = data.split_at(split + 1);
            let max_left = left.iter().max().copied();
            let min_right = right.iter().min().copied();
            assert!(max_left <= min_right, "input={case:?} output={data:?}");
        }
    }

    #[test]
    fn reflexive_comparator_still_shrinks() {
        let mut data = vec![5, 5, 5, 5];
        let mut cmp = Comparator::new(|a: &i32, b: &i32| a <= b);
        let split = partition(&mut View::new(data.as_mut_slice()), &mut cmp);
        assert!(split < 3);
    }
}
