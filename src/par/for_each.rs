//! Generic parallel per-element effect over a mutable view.

use ndarray::{ArrayViewMut1, Axis};

/// Halves below this length run the plain sequential loop.
const MAX_SEQUENTIAL: usize = 1024;

/// Applies `each` to every element of `v` exactly once, concurrently on disjoint elements.
///
/// No ordering between elements is guaranteed. The effect itself must be safe to invoke
/// concurrently on distinct elements; the recursion introduces no synchronization beyond the
/// join of its sibling halves.
pub fn par_for_each<T, F>(mut v: ArrayViewMut1<'_, T>, each: &F)
where
	T: Send,
	F: Fn(&mut T) + Sync,
{
	let len = v.len();
	if len <= MAX_SEQUENTIAL {
		for x in v.iter_mut() {
			each(x);
		}
		return;
	}

	let (left, right) = v.split_at(Axis(0), len / 2);
	rayon::join(|| par_for_each(left, each), || par_for_each(right, each));
}

#[cfg(test)]
mod test {
	use super::par_for_each;
	use core::sync::atomic::{AtomicUsize, Ordering::Relaxed};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn applied_to_every_element(xs: Vec<u32>) {
		let expected = xs.iter().map(|x| x.wrapping_add(1)).collect::<Vec<_>>();
		let mut array = Array1::from_vec(xs);
		par_for_each(array.view_mut(), &|x: &mut u32| *x = x.wrapping_add(1));
		assert_eq!(array.to_vec(), expected);
	}

	#[test]
	fn applied_exactly_once_across_task_threshold() {
		let calls = AtomicUsize::new(0);
		let mut array = Array1::from_vec((0..50_000_u64).collect::<Vec<_>>());
		par_for_each(array.view_mut(), &|x: &mut u64| {
			calls.fetch_add(1, Relaxed);
			*x += 1;
		});
		assert_eq!(calls.load(Relaxed), 50_000);
		assert_eq!(array.to_vec(), (1..=50_000_u64).collect::<Vec<_>>());
	}
}
