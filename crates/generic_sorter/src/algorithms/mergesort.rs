use crate::compare::Comparator;
use crate::view::View;

pub(crate) fn sort<T, F>(mut view: View<'_, T>, cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = view.len();
    if len < 2 {
        return;
    }

    // Left half is `[0, mid)`, taking the extra element on odd lengths.
    let mid = len.div_ceil(2);
    {
        let (left, right) = view.reborrow().split_at(mid);
        sort(left, cmp);
        sort(right, cmp);
    }

    merge(&mut view, mid, cmp);
}

/// Merges the sorted runs `[0, mid)` and `[mid, len)` back into `view`.
///
/// Both runs are cloned into their own exactly sized buffers first, so the
/// merge only ever writes into storage it no longer reads from. On ties the
/// left run wins, which keeps the sort stable.
fn merge<T, F>(view: &mut View<'_, T>, mid: usize, cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut left = view.as_slice()[..mid].to_vec().into_iter().peekable();
    let mut right = view.as_slice()[mid..].to_vec().into_iter().peekable();

    for k in 0..view.len() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.not_greater_than(l, r),
            // One run is exhausted: drain the other.
            (Some(_), None) => true,
            (None, _) => false,
        };

        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            view[k] = value;
        }
    }
}
