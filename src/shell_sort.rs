//! Unstable sequential shell sort, the base case of the unstable parallel sorts.

use ndarray::ArrayViewMut1;

/// Ciura's experimentally derived gap sequence.
const GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Sorts `v` using shell sort over [`GAPS`].
///
/// Each pass is a gapped insertion sort; the final pass with gap `1` is a plain insertion sort,
/// so the view ends up fully sorted. This sort is *not* stable: elements jump over `gap`-distant
/// runs, which can reorder equal elements.
pub fn shell_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for gap in GAPS {
		for i in gap..len {
			let mut j = i;
			while j >= gap && is_less(&v[j], &v[j - gap]) {
				v.swap(j - gap, j);
				j -= gap;
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::shell_sort;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		shell_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[test]
	fn sorted_beyond_greatest_gap() {
		let mut rng = rand::rng();
		let xs = (0..2000)
			.map(|_| rng.random_range(0..1000_u32))
			.collect::<Vec<_>>();
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		shell_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array.to_vec(), sorted);
	}
}
