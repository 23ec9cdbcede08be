//! Rank-based parallel in-place merge of two adjacent sorted runs.

use crate::block_swap::block_swap;
use ndarray::{s, ArrayView1, ArrayViewMut1, Axis};

/// Runs whose lengths sum up to this value are merged by the sequential rotation merge.
const MAX_SEQUENTIAL: usize = 32;

/// Merges whose total length stays below this value recurse inline instead of spawning a task.
const MAX_INLINE: usize = 10_000;

/// Merges the two adjacent sorted runs `v[..mid]` and `v[mid..]` into one sorted view, in place.
///
/// Both runs must individually be sorted by `is_less`. The merge is stable: on ties, elements of
/// the left run come first, and elements within one run keep their relative order.
///
/// The longer run contributes its median as the pivot and the pivot's rank in the other run is
/// located by binary search. Rotating the crossover region between the two rank positions leaves
/// two smaller, independent merge problems over disjoint sub-views, which recurse as sibling
/// tasks. Total work is *O*(*n* log *n*) worst-case, the price of using no auxiliary storage;
/// parallel depth is *O*(log *n*).
pub fn par_merge<T, F>(mut v: ArrayViewMut1<'_, T>, mid: usize, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	let len = v.len();
	debug_assert!(mid <= len);
	if mid == 0 || mid == len {
		return;
	}
	if len <= MAX_SEQUENTIAL {
		merge_in_place(v, mid, is_less);
		return;
	}

	let (l, r) = {
		let w = v.view();
		let (left, right) = w.split_at(Axis(0), mid);
		split_for_merge(left, right, is_less)
	};

	// Rotate the crossover region so that `left[..l]` is followed by `right[..r]`. Both
	// sub-merges below are then contiguous and do not overlap.
	block_swap(v.slice_mut(s![l..mid + r]), mid - l);

	let (first, second) = v.split_at(Axis(0), l + r);
	if len < MAX_INLINE {
		par_merge(first, l, is_less);
		par_merge(second, mid - l, is_less);
	} else {
		rayon::join(
			|| par_merge(first, l, is_less),
			|| par_merge(second, mid - l, is_less),
		);
	}
}

/// Splits two sorted runs so that they can be merged as two independent sub-merges.
///
/// Returns `(l, r)` such that every element of `left[..l]` and `right[..r]` precedes every
/// element of `left[l..]` and `right[r..]` in the merged output.
///
/// The pivot is the median of the longer run. The search direction in the other run is what
/// keeps the merge stable: for a pivot taken from `left`, the first element of `right` *not
/// less* than the pivot is located, so equal elements of `right` stay behind it; for a pivot
/// taken from `right`, the first element of `left` *greater* than the pivot is located, so
/// equal elements of `left` stay ahead of it.
fn split_for_merge<T, F>(
	left: ArrayView1<'_, T>,
	right: ArrayView1<'_, T>,
	is_less: &F,
) -> (usize, usize)
where
	F: Fn(&T, &T) -> bool,
{
	let left_len = left.len();
	let right_len = right.len();

	if left_len >= right_len {
		let left_mid = left_len / 2;

		// Find the first element in `right` that is greater than or equal to `left[left_mid]`.
		let mut a = 0;
		let mut b = right_len;
		while a < b {
			let m = a + (b - a) / 2;
			if is_less(&right[m], &left[left_mid]) {
				a = m + 1;
			} else {
				b = m;
			}
		}

		(left_mid, a)
	} else {
		let right_mid = right_len / 2;

		// Find the first element in `left` that is greater than `right[right_mid]`.
		let mut a = 0;
		let mut b = left_len;
		while a < b {
			let m = a + (b - a) / 2;
			if is_less(&right[right_mid], &left[m]) {
				b = m;
			} else {
				a = m + 1;
			}
		}

		(a, right_mid)
	}
}

/// Sequential stable in-place merge of `v[..mid]` and `v[mid..]` by single-element rotations.
///
/// Quadratic worst-case, only used below [`MAX_SEQUENTIAL`]. On ties the head of the left run is
/// consumed first.
pub(crate) fn merge_in_place<T, F>(mut v: ArrayViewMut1<'_, T>, mid: usize, is_less: &F)
where
	F: Fn(&T, &T) -> bool,
{
	let len = v.len();
	let mut a = 0;
	let mut b = mid;
	while a < b && b < len {
		if is_less(&v[b], &v[a]) {
			// The head of the right run belongs in front; rotate it into place.
			block_swap(v.slice_mut(s![a..=b]), b - a);
			b += 1;
		}
		a += 1;
	}
}

#[cfg(test)]
mod test {
	use super::{merge_in_place, par_merge, split_for_merge};
	use core::cmp::Ordering;
	use ndarray::{s, Array1, ArrayView1};
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	/// Splits `xs` at `at`, stably sorts both halves, merges them and checks the result against
	/// the stable sort of the whole sequence, element indices included.
	fn check_stable_merge(xs: Vec<u32>, at: usize) {
		let mut xs = xs
			.into_iter()
			.enumerate()
			.map(Item::from)
			.collect::<Vec<Item>>();
		let mut sorted = xs.clone();
		sorted.sort();

		xs[..at].sort();
		xs[at..].sort();
		let mut array = Array1::from_vec(xs);
		par_merge(array.view_mut(), at, &Item::lt);

		for (a, s) in array.iter().zip(&sorted) {
			assert_eq!(a.index, s.index);
			assert_eq!(a.value, s.value);
		}
	}

	#[test]
	fn split() {
		fn check(left: &[u32], right: &[u32]) {
			let left = ArrayView1::from_shape(left.len(), left).unwrap();
			let right = ArrayView1::from_shape(right.len(), right).unwrap();
			let (l, r) = split_for_merge(left, right, &|&a, &b| a < b);
			assert!(left
				.slice(s![..l])
				.iter()
				.all(|&x| right.slice(s![r..]).iter().all(|&y| x <= y)));
			assert!(right
				.slice(s![..r])
				.iter()
				.all(|&x| left.slice(s![l..]).iter().all(|&y| x < y)));
		}

		check(&[1, 2, 2, 2, 2, 3], &[1, 2, 2, 2, 2, 3]);
		check(&[1, 2, 2, 2, 2, 3], &[]);
		check(&[], &[1, 2, 2, 2, 2, 3]);

		let mut rng = rand::rng();

		for _ in 0..100 {
			let limit: u32 = rng.random_range(1..21);
			let left_len: usize = rng.random_range(0..20);
			let right_len: usize = rng.random_range(0..20);

			let mut left = (0..left_len)
				.map(|_| rng.random_range(0..limit))
				.collect::<Vec<_>>();
			let mut right = (0..right_len)
				.map(|_| rng.random_range(0..limit))
				.collect::<Vec<_>>();

			left.sort();
			right.sort();
			check(&left, &right);
		}
	}

	#[test]
	fn adjacent_runs_merged() {
		let mut v = Array1::from_vec(vec![1, 3, 5, 7, 2, 3, 6, 8]);
		par_merge(v.view_mut(), 4, &i32::lt);
		assert_eq!(v.to_vec(), vec![1, 2, 3, 3, 5, 6, 7, 8]);
	}

	#[test]
	fn ties_prefer_left_run() {
		// The `3` of the left run must end up ahead of the `3` of the right run.
		check_stable_merge(vec![1, 3, 5, 7, 2, 3, 6, 8], 4);
	}

	#[test]
	fn duplicate_pivot_keys_on_both_runs() {
		// Duplicates of the pivot key on both runs, with either run the longer one, must not
		// break the left-before-right tie order.
		for len in [40, 41, 100, 101] {
			for at in [0, 1, 8, len / 2, len - 8, len - 1, len] {
				let mut rng = rand::rng();
				let xs = (0..len).map(|_| rng.random_range(0..4)).collect::<Vec<_>>();
				check_stable_merge(xs, at);
			}
		}
	}

	#[quickcheck]
	fn stably_merged(xs: Vec<u32>, at: usize) {
		let at = if xs.is_empty() { 0 } else { at % (xs.len() + 1) };
		let xs = xs.into_iter().map(|x| x & 0x7).collect::<Vec<_>>();
		check_stable_merge(xs, at);
	}

	#[test]
	fn merged_across_task_threshold() {
		let mut rng = rand::rng();
		for len in [1000, 20_000, 50_000] {
			let at = rng.random_range(0..=len);
			let xs = (0..len)
				.map(|_| rng.random_range(0..100_u32))
				.collect::<Vec<_>>();
			check_stable_merge(xs, at);
		}
	}

	#[quickcheck]
	fn sequential_fallback_merges(xs: Vec<u8>, at: usize) {
		let at = if xs.is_empty() { 0 } else { at % (xs.len() + 1) };
		let mut xs = xs;
		xs[..at].sort();
		xs[at..].sort();
		let mut sorted = xs.clone();
		sorted.sort();
		let mut array = Array1::from_vec(xs);
		merge_in_place(array.view_mut(), at, &u8::lt);
		assert_eq!(array.to_vec(), sorted);
	}
}
