use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

/// Exclusive, fixed-length handle over a contiguous run of elements.
///
/// A view never owns, grows or shrinks its storage. It is built right before a
/// sort and dropped right after, and the borrow keeps every other alias of the
/// storage out for that time.
#[derive(Debug)]
pub struct View<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> View<'a, T> {
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Writes `value` at `index` and returns the previous element.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.data[index], value)
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    /// Splits into the disjoint views `[0, mid)` and `[mid, len)`.
    #[inline]
    pub fn split_at(self, mid: usize) -> (View<'a, T>, View<'a, T>) {
        let (left, right) = self.data.split_at_mut(mid);
        (View::new(left), View::new(right))
    }

    /// Shorter-lived view over the same elements, leaving `self` usable afterwards.
    #[inline]
    pub fn reborrow(&mut self) -> View<'_, T> {
        View::new(&mut *self.data)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for View<'_, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Sources that can be sorted in place.
///
/// Implement this for a custom container to make it accepted by every sort
/// entry point.
pub trait AsView {
    type Elem;

    fn as_view(&mut self) -> View<'_, Self::Elem>;
}

impl<T> AsView for [T] {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        View::new(self)
    }
}

impl<T, const N: usize> AsView for [T; N] {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        View::new(self.as_mut_slice())
    }
}

impl<T> AsView for Vec<T> {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        View::new(self.as_mut_slice())
    }
}

impl<T> AsView for Box<[T]> {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        View::new(self)
    }
}

// Ring buffers are only logically contiguous, so they get rotated into one run first.
impl<T> AsView for VecDeque<T> {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        View::new(self.make_contiguous())
    }
}

impl<T> AsView for View<'_, T> {
    type Elem = T;

    fn as_view(&mut self) -> View<'_, T> {
        self.reborrow()
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> AsView for smallvec::SmallVec<A> {
    type Elem = A::Item;

    fn as_view(&mut self) -> View<'_, A::Item> {
        View::new(self.as_mut_slice())
    }
}
