//! Utility functions for the namegame crate

/// Lexicographic `k`-combinations of the indices `0..n`.
///
/// Yields exactly one empty combination when `k == 0`, and nothing when
/// `k > n`.
///
/// # Examples
///
/// ```
/// use namegame::utils::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1]);
/// assert_eq!(all[5], vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    /// Combinations of the items of `items`, in the same order.
    pub fn of<T: Clone>(items: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
        Self::new(items.len(), k)
            .map(move |indices| indices.into_iter().map(|i| items[i].clone()).collect())
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        // Rightmost position that can still move right.
        match (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

/// Element-wise `a - b`.
pub fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

/// Divergence-reduction ratio per round: `1 - with / without`, or `0` where
/// `without` is zero.
///
/// # Examples
///
/// ```
/// use namegame::utils::reduction_ratio;
///
/// assert_eq!(reduction_ratio(&[0.5, 0.3], &[1.0, 0.0]), vec![0.5, 0.0]);
/// ```
pub fn reduction_ratio(with: &[f64], without: &[f64]) -> Vec<f64> {
    with.iter()
        .zip(without)
        .map(|(&actual, &total)| {
            if total != 0.0 {
                1.0 - actual / total
            } else {
                0.0
            }
        })
        .collect()
}
