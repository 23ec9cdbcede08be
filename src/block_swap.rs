//! Gries–Mills exchange of two adjacent blocks, in place and without auxiliary storage.

use ndarray::ArrayViewMut1;

/// Exchanges the adjacent blocks `v[..mid]` and `v[mid..]` in place.
///
/// After the call, the elements of `v[mid..]` come first and the elements of `v[..mid]` follow,
/// each block keeping its original internal order. Equivalent to a left rotation by `mid` using
/// fewer than `v.len()` element swaps and no auxiliary storage.
///
/// While both blocks are non-empty, the shorter block is swapped against the facing window of the
/// longer one, which moves the shorter block into its final place and shrinks the problem by its
/// length. Either block being empty is a no-op.
pub fn block_swap<T>(mut v: ArrayViewMut1<'_, T>, mid: usize) {
	let len = v.len();
	debug_assert!(mid <= len);

	// Remaining left block is [a, b) and remaining right block is [b, c).
	let mut a = 0;
	let b = mid;
	let mut c = len;

	let mut d1 = b - a;
	let mut d2 = c - b;
	while d1 > 0 && d2 > 0 {
		if d1 < d2 {
			// Swap the whole left block against the last `d1` elements of the right block,
			// retiring the tail of the right block.
			let m = c - d1;
			for i in 0..d1 {
				v.swap(a + i, m + i);
			}
			c = m;
			d2 = c - b;
		} else {
			// Swap the first `d2` elements of the left block against the whole right block,
			// retiring the head of the left block.
			for i in 0..d2 {
				v.swap(a + i, b + i);
			}
			a += d2;
			d1 = b - a;
		}
	}
}
