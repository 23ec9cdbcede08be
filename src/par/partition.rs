//! Stable parallel partition around a predicate, combined by block rotation.

use crate::block_swap::block_swap;
use ndarray::{s, ArrayViewMut1, Axis};

/// Views of up to this length get partitioned by the sequential [`stable_partition`].
const MAX_SEQUENTIAL: usize = 8192;

/// Recursive halves below this length run inline instead of spawning a task.
const MAX_INLINE: usize = 16_384;

/// Partitions `v` in place so that all elements satisfying `pred` precede all elements that do
/// not, and returns the boundary index.
///
/// The partition is stable: both groups keep their original relative order. The boundary equals
/// the number of predicate-true elements.
///
/// Above [`MAX_SEQUENTIAL`], the view is split at the midpoint and both halves are partitioned
/// as sibling tasks. Each half reports its local boundary; rotating the left half's false
/// suffix against the right half's true prefix with [`block_swap`] then joins the two true
/// prefixes into one, so the combine step never reorders elements within either group. Parallel
/// depth is *O*(log *n*) at *O*(*n* log *n*) total swap work.
pub fn par_partition<T, P>(mut v: ArrayViewMut1<'_, T>, pred: &P) -> usize
where
	T: Send,
	P: Fn(&T) -> bool + Sync,
{
	let len = v.len();
	if len <= MAX_SEQUENTIAL {
		return stable_partition(v, pred);
	}

	let mid = len / 2;
	let (l, r) = {
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		if len < MAX_INLINE {
			(par_partition(left, pred), par_partition(right, pred))
		} else {
			rayon::join(|| par_partition(left, pred), || par_partition(right, pred))
		}
	};

	block_swap(v.slice_mut(s![l..mid + r]), mid - l);
	l + r
}

/// Sequential stable in-place partition, the same divide-and-conquer run inline down to the
/// single-element base case. *O*(*n* log *n*) swaps, no auxiliary storage.
pub(crate) fn stable_partition<T, P>(mut v: ArrayViewMut1<'_, T>, pred: &P) -> usize
where
	P: Fn(&T) -> bool,
{
	let len = v.len();
	if len == 0 {
		return 0;
	}
	if len == 1 {
		return usize::from(pred(&v[0]));
	}

	let mid = len / 2;
	let (l, r) = {
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		(stable_partition(left, pred), stable_partition(right, pred))
	};

	block_swap(v.slice_mut(s![l..mid + r]), mid - l);
	l + r
}

#[cfg(test)]
mod test {
	use super::par_partition;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	fn check_stable_partition(xs: Vec<u32>) {
		let xs = xs.into_iter().enumerate().collect::<Vec<_>>();
		let expected = xs
			.iter()
			.filter(|(_, x)| x % 2 == 0)
			.chain(xs.iter().filter(|(_, x)| x % 2 != 0))
			.copied()
			.collect::<Vec<_>>();
		let trues = xs.iter().filter(|(_, x)| x % 2 == 0).count();

		let mut array = Array1::from_vec(xs);
		let boundary = par_partition(array.view_mut(), &|&(_, x): &(usize, u32)| x % 2 == 0);

		assert_eq!(boundary, trues);
		assert_eq!(array.to_vec(), expected);
	}

	#[test]
	fn evens_before_odds() {
		let mut v = Array1::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
		let boundary = par_partition(v.view_mut(), &|&x: &i32| x % 2 == 0);
		assert_eq!(boundary, 3);
		assert_eq!(v.to_vec(), vec![4, 2, 6, 3, 1, 1, 5, 9]);
	}

	#[quickcheck]
	fn stably_partitioned(xs: Vec<u32>) {
		check_stable_partition(xs);
	}

	#[test]
	fn stably_partitioned_across_task_threshold() {
		let mut rng = rand::rng();
		for len in [8193, 16_385, 100_000] {
			let xs = (0..len)
				.map(|_| rng.random_range(0..1000_u32))
				.collect::<Vec<_>>();
			check_stable_partition(xs);
		}
	}

	#[test]
	fn trivial_views() {
		let mut v = Array1::<u32>::from_vec(vec![]);
		assert_eq!(par_partition(v.view_mut(), &|&x: &u32| x % 2 == 0), 0);
		let mut v = Array1::from_vec(vec![7_u32]);
		assert_eq!(par_partition(v.view_mut(), &|&x: &u32| x % 2 == 0), 0);
		let mut v = Array1::from_vec(vec![8_u32]);
		assert_eq!(par_partition(v.view_mut(), &|&x: &u32| x % 2 == 0), 1);
	}

	#[test]
	fn all_true_and_all_false() {
		let mut v = Array1::from_vec((0..20_000_u32).collect::<Vec<_>>());
		assert_eq!(par_partition(v.view_mut(), &|_: &u32| true), 20_000);
		assert_eq!(par_partition(v.view_mut(), &|_: &u32| false), 0);
		assert_eq!(v.to_vec(), (0..20_000_u32).collect::<Vec<_>>());
	}
}
