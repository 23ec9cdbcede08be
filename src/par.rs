//! Fork-join parallel algorithms over disjoint sub-views, scheduled with [`rayon::join`].
//!
//! Every algorithm in here follows the same discipline: a range is split with
//! [`ArrayViewMut1::split_at`](ndarray::ArrayViewMut1) into two non-overlapping mutable sub-views, the
//! two halves run as sibling tasks (or inline below a per-algorithm threshold), and any combine
//! step only runs after both siblings have joined.

pub mod bitonic;
pub mod for_each;
pub mod merge;
pub mod merge_sort;
pub mod partition;
