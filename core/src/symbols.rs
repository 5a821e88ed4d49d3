use alloc::vec::Vec;

use crate::*;

/// Ordered alphabet of distinct printable symbols that cards are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Vec<char>,
}

impl SymbolPool {
    /// Uppercase letters, then lowercase letters, then digits.
    pub fn standard() -> Self {
        Self::new(('A'..='Z').chain('a'..='z').chain('0'..='9'))
    }

    /// Builds a pool from `symbols`, keeping the first occurrence of each.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut unique = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self { symbols: unique }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// The first `pair_count` symbols, or an error when the alphabet is too small.
    pub fn take(&self, pair_count: usize) -> Result<&[char]> {
        self.symbols
            .get(..pair_count)
            .ok_or(GameError::NotEnoughSymbols {
                required: pair_count,
                available: self.symbols.len(),
            })
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pool_order() {
        let pool = SymbolPool::standard();

        assert_eq!(pool.as_slice().len(), 62);
        assert_eq!(pool.as_slice()[0], 'A');
        assert_eq!(pool.as_slice()[26], 'a');
        assert_eq!(pool.as_slice()[61], '9');
    }

    #[test]
    fn take_fails_instead_of_truncating() {
        let pool = SymbolPool::new("xyzx".chars());

        assert_eq!(pool.as_slice(), ['x', 'y', 'z']);
        assert_eq!(pool.take(2).unwrap(), ['x', 'y']);
        assert_eq!(
            pool.take(4),
            Err(GameError::NotEnoughSymbols {
                required: 4,
                available: 3
            })
        );
    }
}
