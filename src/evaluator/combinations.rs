/// Iterator over every `K`-element combination of the indices `0..N`.
///
/// Combinations are ascending index arrays generated in lexicographic order,
/// the same sequence a `K`-deep nest of `for j in (i + 1)..N` loops visits,
/// so each combination appears exactly once.
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    done: bool,
}

/// The 21 ways to pick five cards out of seven.
pub type Combinations7Choose5 = Combinations<7, 5>;

/// All C(52,5) = 2,598,960 five-card hands as deck indices.
pub type Combinations52Choose5 = Combinations<52, 5>;

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub fn new() -> Self {
        Self { indices: std::array::from_fn(|i| i), done: K > N }
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;
        if K == 0 {
            self.done = true;
            return Some(result);
        }

        // Find the rightmost index that can be incremented
        let mut i = K - 1;
        loop {
            if self.indices[i] < N - (K - i) {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}
