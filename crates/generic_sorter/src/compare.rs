/// A caller-authored strict weak order, exposed under the two roles the
/// algorithms need.
///
/// `less` must be irreflexive, transitive and asymmetric. Quicksort moves its
/// cursors with [`less_than`](Self::less_than); merge sort decides ties with
/// [`not_greater_than`](Self::not_greater_than), which is derived from the same
/// predicate so the two can never disagree.
#[derive(Clone, Copy, Debug)]
pub struct Comparator<F> {
    less: F,
}

impl<F> Comparator<F> {
    #[inline]
    pub fn new(less: F) -> Self {
        Self { less }
    }

    #[inline]
    pub fn less_than<T>(&mut self, a: &T, b: &T) -> bool
    where
        T: ?Sized,
        F: FnMut(&T, &T) -> bool,
    {
        (self.less)(a, b)
    }

    /// `a` may stay in front of `b`.
    #[inline]
    pub fn not_greater_than<T>(&mut self, a: &T, b: &T) -> bool
    where
        T: ?Sized,
        F: FnMut(&T, &T) -> bool,
    {
        !(self.less)(b, a)
    }

    pub fn into_inner(self) -> F {
        self.less
    }
}

#[inline]
pub fn natural_less<T: Ord + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Lexical order of the lower-cased text, so `"WoAh"` and `"woah"` rank equal.
pub fn case_insensitive_less<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> bool {
    let a = a.as_ref().chars().flat_map(char::to_lowercase);
    let b = b.as_ref().chars().flat_map(char::to_lowercase);
    a.lt(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_derive_from_one_predicate() {
        let mut cmp = Comparator::new(|a: &i32, b: &i32| a < b);

        assert!(cmp.less_than(&1, &2));
        assert!(!cmp.less_than(&2, &2));
        assert!(!cmp.less_than(&3, &2));

        assert!(cmp.not_greater_than(&1, &2));
        assert!(cmp.not_greater_than(&2, &2));
        assert!(!cmp.not_greater_than(&3, &2));
    }

    #[test]
    fn natural_order() {
        assert!(natural_less(&'a', &'b'));
        assert!(natural_less("apple", "banana"));
        assert!(!natural_less(&7_u64, &7));
        // Upper case sorts before lower case in code point order.
        assert!(natural_less("Zebra", "apple"));
    }

    #[test]
    fn case_insensitive_ranks_case_variants_equal() {
        assert!(!case_insensitive_less("WoAh", "woah"));
        assert!(!case_insensitive_less("woah", "WoAh"));
        assert!(case_insensitive_less("apple", "WoAh"));
        assert!(!case_insensitive_less("BOGO", "banana"));
        assert!(case_insensitive_less("banana", "BOGO"));
        assert!(case_insensitive_less("Zebra".to_string().as_str(), "zebras"));
    }

    #[test]
    fn case_insensitive_strict_and_tie_roles_differ() {
        let mut cmp = Comparator::new(case_insensitive_less::<String>);
        let upper = String::from("WoAh");
        let lower = String::from("woah");

        assert!(!cmp.less_than(&upper, &lower));
        assert!(cmp.not_greater_than(&upper, &lower));
        assert!(cmp.not_greater_than(&lower, &upper));
    }

    #[test]
    fn case_insensitive_handles_non_ascii() {
        assert!(!case_insensitive_less("ÄRGER", "ärger"));
        assert!(case_insensitive_less("Ärger", "über"));
    }
}
