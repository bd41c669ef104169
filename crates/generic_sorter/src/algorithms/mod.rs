pub(crate) mod mergesort;
pub(crate) mod quicksort;
