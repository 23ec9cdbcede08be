//! Stable sequential insertion sort, the base case of the stable parallel merge sort.

use ndarray::ArrayViewMut1;

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// This sort is stable: elements are shifted only past strictly greater ones, so equal elements
/// keep their original relative order.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		let mut j = i;
		while j > 0 && is_less(&v[j], &v[j - 1]) {
			v.swap(j - 1, j);
			j -= 1;
		}
	}
}

#[cfg(test)]
mod test {
	use super::insertion_sort;
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut u32::lt);
		for i in 1..array.len() {
			assert!(array[i - 1] <= array[i]);
		}
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u8>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(|(index, value)| (value & 0x7, index))
			.collect::<Vec<_>>();
		let mut sorted = xs.clone();
		sorted.sort();
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut |a: &(u8, usize), b| a.0 < b.0);
		assert_eq!(array.to_vec(), sorted);
	}
}
