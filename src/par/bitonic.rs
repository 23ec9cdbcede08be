//! Data-parallel bitonic sort and merge over compare-exchange passes.
//!
//! Sorting each half of a view in opposite directions yields two opposed sorted runs, which
//! compare-exchange passes alone turn into one sorted view; that is what makes the whole family
//! data-parallel. None of these operations are stable.

use crate::shell_sort::shell_sort;
use ndarray::{ArrayViewMut1, Axis};

/// Views below this length are sorted by a sequential comparison sort honoring the direction.
const MAX_SEQUENTIAL: usize = 50_000;

/// Merges below this length recurse inline instead of spawning sibling tasks.
const MAX_INLINE: usize = 10_000;

/// Exact powers of two up to this length are merged by the iterative butterfly network.
const MAX_NETWORK: usize = 128;

/// Sorts `v` in place according to `is_less` and the direction flag.
///
/// With `ascending`, the result is non-decreasing under `is_less`, otherwise non-increasing.
/// Not stable.
///
/// The first half is sorted against the flag and the second half with it, leaving two opposed
/// sorted runs; after both halves join, one [`bitonic_merge`] finishes the sort. Below
/// [`MAX_SEQUENTIAL`] the whole view is handed to [`shell_sort`] with a direction-adjusted
/// comparator instead.
pub fn bitonic_sort<T, F>(mut v: ArrayViewMut1<'_, T>, ascending: bool, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let d = v.len();
	if d <= 1 {
		return;
	}
	if d < MAX_SEQUENTIAL {
		let mut is_before = |a: &T, b: &T| {
			if ascending {
				is_less(a, b)
			} else {
				is_less(b, a)
			}
		};
		shell_sort(v, &mut is_before);
		return;
	}

	let mid = d / 2;
	{
		let (first, second) = v.view_mut().split_at(Axis(0), mid);
		rayon::join(
			|| bitonic_sort(first, !ascending, is_less),
			|| bitonic_sort(second, ascending, is_less),
		);
	}

	bitonic_merge(v, ascending, is_less);
}

/// Sorts the view `v`, made of two opposed sorted runs, in place according to `is_less` and the
/// direction flag.
///
/// The view must consist of a run sorted *against* the requested direction followed by a run
/// sorted *with* it (for ascending output: a descending run then an ascending run), which is the
/// shape [`bitonic_sort`]'s oppositely-sorted halves produce. Let `n` be the greatest power of
/// two strictly below the length `d`: one compare-exchange pass pairs offset `i` with `i + n`
/// for `i` in `0..d - n`, after which no element of `v[..n]` may come after any element of
/// `v[n..]` under the requested direction. `v[..n]` has power-of-two length and may be any
/// cyclic rotation of opposed runs, which the power-of-two recursion tolerates; `v[n..]` is
/// again two opposed runs. The two disjoint halves then merge recursively as sibling tasks.
/// Exact powers of two up to [`MAX_NETWORK`] dispatch to the equivalent [`merge_network`].
pub fn bitonic_merge<T, F>(mut v: ArrayViewMut1<'_, T>, ascending: bool, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let d = v.len();
	if d <= 1 {
		return;
	}
	if d <= MAX_NETWORK && d.is_power_of_two() {
		merge_network(v, ascending, is_less);
		return;
	}

	let n = greatest_power_of_two_below(d);
	for i in 0..d - n {
		compare_exchange(&mut v, i, i + n, ascending, is_less);
	}

	let (first, second) = v.split_at(Axis(0), n);
	if d < MAX_INLINE {
		bitonic_merge(first, ascending, is_less);
		bitonic_merge(second, ascending, is_less);
	} else {
		rayon::join(
			|| bitonic_merge(first, ascending, is_less),
			|| bitonic_merge(second, ascending, is_less),
		);
	}
}

/// Butterfly compare-exchange network merging a bitonic view of exact power-of-two length.
///
/// The runtime re-expression of a fixed-size unrolled network: for each gap `d/2, d/4, .., 1`,
/// every element whose index has the gap bit clear is compare-exchanged with its partner one gap
/// away. Semantically interchangeable with the recursive path of [`bitonic_merge`].
fn merge_network<T, F>(mut v: ArrayViewMut1<'_, T>, ascending: bool, is_less: &F)
where
	F: Fn(&T, &T) -> bool,
{
	let d = v.len();
	debug_assert!(d.is_power_of_two());

	let mut gap = d / 2;
	while gap > 0 {
		for i in 0..d {
			if i & gap == 0 {
				compare_exchange(&mut v, i, i + gap, ascending, is_less);
			}
		}
		gap /= 2;
	}
}

/// Swaps the elements at `i` and `j` if they violate the requested direction.
fn compare_exchange<T, F>(
	v: &mut ArrayViewMut1<'_, T>,
	i: usize,
	j: usize,
	ascending: bool,
	is_less: &F,
) where
	F: Fn(&T, &T) -> bool,
{
	let out_of_order = if ascending {
		is_less(&v[j], &v[i])
	} else {
		is_less(&v[i], &v[j])
	};
	if out_of_order {
		v.swap(i, j);
	}
}

/// Returns the greatest power of two strictly less than `d`.
fn greatest_power_of_two_below(d: usize) -> usize {
	debug_assert!(d >= 2);
	let n = 1 << (usize::BITS - 1 - d.leading_zeros());
	if n == d { n >> 1 } else { n }
}
