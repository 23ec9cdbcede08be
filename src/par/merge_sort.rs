//! Divide-and-conquer parallel in-place merge sort, stable and unstable variants.

use crate::{insertion_sort::insertion_sort, par::merge::par_merge, shell_sort::shell_sort};
use ndarray::{ArrayViewMut1, Axis};

/// Views of up to this length get sorted by the stable insertion sort.
const MAX_INSERTION: usize = 32;

/// Views below this length get sorted by shell sort in the unstable variant.
const MAX_SHELL: usize = 5000;

/// Recursive halves below this length run inline instead of spawning a task.
const MAX_INLINE: usize = 10_000;

/// Sorts `v` in place using parallel merge sort.
///
/// This sort is stable and uses no auxiliary storage; the in-place merge makes it
/// *O*(*n* log² *n*) worst-case.
///
/// The view is split at the midpoint, both halves are sorted as sibling tasks (or inline below
/// [`MAX_INLINE`], so task-scheduling overhead never dominates small ranges), and after the join
/// the two sorted halves are combined by [`par_merge`]. Recursion bottoms out in the stable
/// [`insertion_sort`].
pub fn par_merge_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	if len <= MAX_INSERTION {
		insertion_sort(v, &mut |a, b| is_less(a, b));
		return;
	}

	let mid = len / 2;
	{
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		if len < MAX_INLINE {
			par_merge_sort(left, is_less);
			par_merge_sort(right, is_less);
		} else {
			rayon::join(
				|| par_merge_sort(left, is_less),
				|| par_merge_sort(right, is_less),
			);
		}
	}

	par_merge(v, mid, is_less);
}

/// Sorts `v` in place using parallel merge sort with a shell-sort base case.
///
/// Same recursion as [`par_merge_sort`], but the leaves are sorted by the unstable
/// [`shell_sort`] at a coarser threshold, so this variant does not preserve the order of equal
/// elements.
pub fn par_merge_sort_unstable<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	if len < MAX_SHELL {
		shell_sort(v, &mut |a, b| is_less(a, b));
		return;
	}

	let mid = len / 2;
	{
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		if len < MAX_INLINE {
			par_merge_sort_unstable(left, is_less);
			par_merge_sort_unstable(right, is_less);
		} else {
			rayon::join(
				|| par_merge_sort_unstable(left, is_less),
				|| par_merge_sort_unstable(right, is_less),
			);
		}
	}

	par_merge(v, mid, is_less);
}
