//! In-place fork-join parallel sorting, merging and partitioning (e.g., stable merge sort,
//! stable partition, [bitonic sort], block swap) for non-contiguous (sub)views into
//! *n*-dimensional arrays of [`ndarray`].
//!
//! Every algorithm mutates a 1-dimensional view in place through element swaps alone, so none of
//! them allocates auxiliary element storage. Parallelism is fork-join on the [`rayon`] worker
//! pool: a view is recursively split into two disjoint mutable sub-views which run as sibling
//! tasks and are joined before any combine step (a block rotation or a merge) touches the
//! reunited range. Disjointness of concurrent tasks is enforced by
//! [`ArrayViewMut1::split_at`](ndarray::ArrayViewMut1) rather than by convention, so the algorithms
//! contain no locks and no atomics. Below per-algorithm grain thresholds, recursion runs inline
//! on the calling thread to keep task-scheduling overhead bounded.
//!
//! Rayon initializes its global pool lazily on first use and re-uses the ambient pool when
//! already running on a worker thread, so nested invocations never oversubscribe; when no worker
//! is available a task degrades to inline execution instead of failing. A panic in a
//! caller-supplied comparator or predicate propagates through the join chain and aborts the
//! top-level operation, leaving the view in an unspecified but valid permutation of its input.
//!
//! # Example
//!
//! ```
//! use ndarray_parsort::{ndarray::arr2, ParSort1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],
//!                    [ 8, 3, 2,  4,  8],
//!                    [38, 9, 3,  0,  3],
//!                    [ 4, 9, 0,  8, -1]]);
//!
//! // Mutable subview into the last column. Due to row-major memory layout,
//! // columns are non-contiguous and cannot be viewed as mutable slices.
//! let mut column = v.column_mut(4);
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Sorting is implemented directly on (sub)views, contiguous or not.
//! column.par_sort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! [bitonic sort]: https://en.wikipedia.org/wiki/Bitonic_sorter

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]

mod block_swap;
mod insertion_sort;
mod par;
mod shell_sort;

use crate::{
	block_swap::block_swap,
	insertion_sort::insertion_sort,
	par::{
		bitonic::{bitonic_merge, bitonic_sort},
		for_each::par_for_each,
		merge::par_merge,
		merge_sort::{par_merge_sort, par_merge_sort_unstable},
		partition::par_partition,
	},
	shell_sort::shell_sort,
};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place fork-join parallel sorting,
/// merging and partitioning.
///
/// Comparing methods without a suffix use the natural order of the element type; `_by` variants
/// take a comparator returning an [`Ordering`] which must form a [strict weak order] (a total
/// order satisfies this). Violating an operation's precondition (an unsorted run handed to
/// [`par_merge`](ParSort1Ext::par_merge), a comparator that is no strict weak order) yields an
/// unspecified permutation of the input, never undefined behavior.
///
/// [strict weak order]: https://en.wikipedia.org/wiki/Weak_ordering
pub trait ParSort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Exchanges the adjacent blocks `self[..mid]` and `self[mid..]` in place.
	///
	/// The right block ends up first, the left block follows, and each block keeps its internal
	/// order, using fewer than `self.len()` element swaps (Gries–Mills) and no auxiliary storage.
	/// An empty block (`mid` of `0` or `self.len()`) is a no-op.
	///
	/// # Panics
	///
	/// Panics if `mid > self.len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[1, 2, 3, 4, 5, 6, 7, 8]);
	///
	/// v.swap_blocks(3);
	/// assert!(v == arr1(&[4, 5, 6, 7, 8, 1, 2, 3]));
	/// ```
	fn swap_blocks(&mut self, mid: usize)
	where
		S: DataMut;

	/// Sorts the array in place, in parallel.
	///
	/// This sort is stable (i.e., does not reorder equal elements), allocates no auxiliary
	/// element storage, and is *O*(*n* log² *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// The array is recursively split at the midpoint; both halves are sorted as fork-join
	/// sibling tasks and then combined by the rank-based in-place parallel merge of
	/// [`par_merge`](ParSort1Ext::par_merge). Short ranges are sorted by insertion sort and
	/// recursion below a grain threshold runs inline on the calling thread. The extra
	/// logarithmic factor over a buffered merge sort is the accepted price of using no buffer.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn par_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in place with a comparator function, in parallel.
	///
	/// Stable, see [`par_sort`](ParSort1Ext::par_sort).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.par_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.par_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn par_sort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;
	/// Sorts the array in place, in parallel, without preserving the order of equal elements.
	///
	/// Same fork-join recursion as [`par_sort`](ParSort1Ext::par_sort), but ranges below the
	/// sequential threshold are sorted by shell sort, which reorders equal elements.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_sort_unstable();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn par_sort_unstable(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in place with a comparator function, in parallel, without preserving the
	/// order of equal elements.
	///
	/// See [`par_sort_unstable`](ParSort1Ext::par_sort_unstable).
	fn par_sort_unstable_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;

	/// Merges the two adjacent sorted runs `self[..mid]` and `self[mid..]` in place, in
	/// parallel.
	///
	/// Both runs must individually be sorted; afterwards the whole array is sorted. The merge is
	/// stable: on ties, elements of the left run precede elements of the right run. The rank of
	/// the longer run's median is located in the other run by binary search and the crossover
	/// region is rotated by a block swap, leaving two independent sub-merges over disjoint
	/// sub-views which recurse as sibling tasks. *O*(log *n*) parallel depth at
	/// *O*(*n* log *n*) worst-case work, with no auxiliary storage.
	///
	/// # Panics
	///
	/// Panics if `mid > self.len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[1, 3, 5, 7, 2, 3, 6, 8]);
	///
	/// v.par_merge(4);
	/// assert!(v == arr1(&[1, 2, 3, 3, 5, 6, 7, 8]));
	/// ```
	fn par_merge(&mut self, mid: usize)
	where
		A: Ord + Send,
		S: DataMut;
	/// Merges the two adjacent runs `self[..mid]` and `self[mid..]`, each sorted by the
	/// comparator, in place and in parallel.
	///
	/// See [`par_merge`](ParSort1Ext::par_merge).
	///
	/// # Panics
	///
	/// Panics if `mid > self.len()`.
	fn par_merge_by<F>(&mut self, mid: usize, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;

	/// Partitions the array in place so that all elements satisfying `pred` precede all elements
	/// that do not, in parallel, and returns the boundary index.
	///
	/// The partition is stable: both groups keep their original relative order. The boundary
	/// equals the number of elements satisfying `pred`. Each half partitions recursively as a
	/// sibling task and the halves are combined by a single block rotation, for *O*(log *n*)
	/// parallel depth without auxiliary storage.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[3, 1, 4, 1, 5, 9, 2, 6]);
	///
	/// let boundary = v.par_partition(|x| x % 2 == 0);
	/// assert_eq!(boundary, 3);
	/// assert!(v == arr1(&[4, 2, 6, 3, 1, 1, 5, 9]));
	/// ```
	fn par_partition<P>(&mut self, pred: P) -> usize
	where
		A: Send,
		P: Fn(&A) -> bool + Sync,
		S: DataMut;

	/// Sorts the array in place using parallel bitonic sort.
	///
	/// This sort is *not* stable and allocates no auxiliary storage. The two halves are sorted
	/// in opposite directions as sibling tasks, leaving two opposed sorted runs, and a parallel
	/// compare-exchange merge finishes the sort. The length does not need to be a power of two.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 3, 1, 4, 1, 5, 9, 2, 6]);
	///
	/// v.bitonic_sort();
	/// assert!(v == arr1(&[1, 1, 2, 3, 3, 4, 5, 5, 6, 9]));
	/// ```
	fn bitonic_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in place with a comparator function using parallel bitonic sort.
	///
	/// See [`bitonic_sort`](ParSort1Ext::bitonic_sort).
	fn bitonic_sort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;

	/// Sorts an array of two opposed sorted runs in place by parallel compare-exchange passes.
	///
	/// The array must consist of a run sorted *against* the requested direction followed by a
	/// run sorted *with* it — for ascending output, a descending run then an ascending run —
	/// which is the shape the oppositely-sorted halves of
	/// [`bitonic_sort`](ParSort1Ext::bitonic_sort) produce; the result is ascending or
	/// descending as requested. Exact power-of-two lengths up to a small bound dispatch to a
	/// butterfly network; all other lengths take the generalized recursive passes with identical
	/// observable behavior on this input shape. Not stable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[9, 5, 1, 3, 7]);
	/// v.bitonic_merge(true);
	/// assert!(v == arr1(&[1, 3, 5, 7, 9]));
	///
	/// v.bitonic_merge(false);
	/// assert!(v == arr1(&[9, 7, 5, 3, 1]));
	/// ```
	fn bitonic_merge(&mut self, ascending: bool)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts an array of two opposed sorted runs in place with a comparator function by parallel
	/// compare-exchange passes.
	///
	/// The array's two runs must be opposed as above, each sorted under the comparator. See
	/// [`bitonic_merge`](ParSort1Ext::bitonic_merge).
	fn bitonic_merge_by<F>(&mut self, ascending: bool, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;

	/// Sorts the array in place using sequential shell sort over Ciura's gap sequence.
	///
	/// Not stable. The sequential base case of the unstable parallel sorts, exposed for sorting
	/// small ranges without touching the worker pool.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.shell_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn shell_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place with a comparator function using sequential shell sort.
	///
	/// See [`shell_sort`](ParSort1Ext::shell_sort).
	fn shell_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array in place using sequential insertion sort.
	///
	/// Stable and *O*(*n*²) worst-case; the base case of [`par_sort`](ParSort1Ext::par_sort).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.insertion_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place with a comparator function using sequential insertion sort.
	///
	/// See [`insertion_sort`](ParSort1Ext::insertion_sort).
	fn insertion_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Applies `each` to every element exactly once, in parallel.
	///
	/// No ordering between elements is guaranteed and nothing is returned. The effect must be
	/// safe to invoke concurrently on distinct elements; no additional synchronization is
	/// introduced.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_parsort::{ndarray::arr1, ParSort1Ext};
	///
	/// let mut v = arr1(&[1, 2, 3]);
	///
	/// v.par_for_each(|x| *x *= 10);
	/// assert!(v == arr1(&[10, 20, 30]));
	/// ```
	fn par_for_each<F>(&mut self, each: F)
	where
		A: Send,
		F: Fn(&mut A) + Sync,
		S: DataMut;
}

impl<A, S> ParSort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn swap_blocks(&mut self, mid: usize)
	where
		S: DataMut,
	{
		assert!(
			mid <= self.len(),
			"swap_blocks mid {} greater than length of array {}",
			mid,
			self.len()
		);
		block_swap(self.view_mut(), mid);
	}

	#[inline]
	fn par_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		par_merge_sort(self.view_mut(), &A::lt);
	}
	#[inline]
	fn par_sort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		par_merge_sort(self.view_mut(), &|a: &A, b: &A| compare(a, b) == Less);
	}
	#[inline]
	fn par_sort_unstable(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		par_merge_sort_unstable(self.view_mut(), &A::lt);
	}
	#[inline]
	fn par_sort_unstable_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		par_merge_sort_unstable(self.view_mut(), &|a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn par_merge(&mut self, mid: usize)
	where
		A: Ord + Send,
		S: DataMut,
	{
		assert!(
			mid <= self.len(),
			"par_merge mid {} greater than length of array {}",
			mid,
			self.len()
		);
		par_merge(self.view_mut(), mid, &A::lt);
	}
	#[inline]
	fn par_merge_by<F>(&mut self, mid: usize, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		assert!(
			mid <= self.len(),
			"par_merge mid {} greater than length of array {}",
			mid,
			self.len()
		);
		par_merge(self.view_mut(), mid, &|a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn par_partition<P>(&mut self, pred: P) -> usize
	where
		A: Send,
		P: Fn(&A) -> bool + Sync,
		S: DataMut,
	{
		par_partition(self.view_mut(), &pred)
	}

	#[inline]
	fn bitonic_sort(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		bitonic_sort(self.view_mut(), true, &A::lt);
	}
	#[inline]
	fn bitonic_sort_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		bitonic_sort(self.view_mut(), true, &|a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn bitonic_merge(&mut self, ascending: bool)
	where
		A: Ord + Send,
		S: DataMut,
	{
		bitonic_merge(self.view_mut(), ascending, &A::lt);
	}
	#[inline]
	fn bitonic_merge_by<F>(&mut self, ascending: bool, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		bitonic_merge(self.view_mut(), ascending, &|a: &A, b: &A| {
			compare(a, b) == Less
		});
	}

	#[inline]
	fn shell_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		shell_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn shell_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		shell_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn insertion_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn par_for_each<F>(&mut self, each: F)
	where
		A: Send,
		F: Fn(&mut A) + Sync,
		S: DataMut,
	{
		par_for_each(self.view_mut(), &each);
	}
}
