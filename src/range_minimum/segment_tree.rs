use num_traits::Bounded;
use std::ops::Range;

/// Bottom-up segment tree answering range minimum queries under point updates.
///
/// Leaves live at `tree[size..2 * size]` where `size` is the next power of two of `len`; padding
/// leaves hold `T::max_value()` so they never win a query.
#[derive(Debug, Clone)]
pub struct MinSegmentTree<T> {
    len: usize,
    size: usize,
    tree: Vec<T>,
}

impl<T> MinSegmentTree<T>
where
    T: Ord + Copy + Bounded,
{
    pub fn new(values: &[T]) -> Self {
        let len = values.len();
        let size = len.next_power_of_two();
        let mut tree = vec![T::max_value(); 2 * size];
        tree[size..size + len].copy_from_slice(values);
        for k in (1..size).rev() {
            tree[k] = tree[2 * k].min(tree[2 * k + 1]);
        }
        Self { len, size, tree }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| self.tree[self.size + index])
    }

    // return the previous value
    pub fn update(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let mut k = self.size + index;
        let old = std::mem::replace(&mut self.tree[k], value);
        k /= 2;
        while k >= 1 {
            self.tree[k] = self.tree[2 * k].min(self.tree[2 * k + 1]);
            k /= 2;
        }
        Some(old)
    }

    /// Minimum over `range`, `None` when it is empty or reaches past the end.
    pub fn query(&self, range: Range<usize>) -> Option<T> {
        if range.start >= range.end || range.end > self.len {
            return None;
        }

        let (mut l, mut r) = (range.start + self.size, range.end + self.size);
        let mut res = T::max_value();
        while l < r {
            if l & 1 == 1 {
                res = res.min(self.tree[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                res = res.min(self.tree[r]);
            }
            l /= 2;
            r /= 2;
        }
        Some(res)
    }
}

impl<T> FromIterator<T> for MinSegmentTree<T>
where
    T: Ord + Copy + Bounded,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(&iter.into_iter().collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(0..8, Some(1))]
    #[case(0..1, Some(3))]
    #[case(2..4, Some(4))]
    #[case(6..8, Some(3))]
    #[case(2..2, None)]
    #[case(5..9, None)]
    fn queries(#[case] range: Range<usize>, #[case] expected: Option<u64>) {
        let tree = MinSegmentTree::new(&[3, 2, 4, 5, 1, 1, 5, 3]);
        assert_eq!(tree.query(range), expected);
    }

    #[test]
    fn padding_does_not_leak_into_queries() {
        let tree: MinSegmentTree<i32> = [7, 9, 8].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.query(0..3), Some(7));
        assert_eq!(tree.query(1..3), Some(8));
        assert_eq!(tree.get(3), None);
    }

    #[test]
    fn update_returns_previous_value() {
        let mut tree = MinSegmentTree::new(&[3u64, 2, 4, 5]);
        assert_eq!(tree.update(1, 6), Some(2));
        assert_eq!(tree.query(0..4), Some(3));
        assert_eq!(tree.update(3, 0), Some(5));
        assert_eq!(tree.query(0..4), Some(0));
        assert_eq!(tree.update(4, 1), None);
        assert_eq!(tree.get(1), Some(6));
    }

    #[test]
    fn empty_tree() {
        let tree = MinSegmentTree::<u64>::new(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.query(0..0), None);
        assert_eq!(tree.query(0..1), None);
    }

    #[test]
    fn agrees_with_linear_scan() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut values: Vec<i64> = (0..37).map(|_| rng.gen_range(-50..50)).collect();
        let mut tree = MinSegmentTree::new(&values);

        for _ in 0..500 {
            if rng.gen_bool(0.3) {
                let (i, x) = (rng.gen_range(0..values.len()), rng.gen_range(-50..50));
                values[i] = x;
                tree.update(i, x);
            } else {
                let l = rng.gen_range(0..values.len());
                let r = rng.gen_range(l + 1..=values.len());
                assert_eq!(tree.query(l..r), values[l..r].iter().copied().min());
            }
        }
    }
}
