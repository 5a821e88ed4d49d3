use alloc::vec::Vec;

use super::*;

/// Deals every pair from the symbol pool onto the board in uniformly random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    pool: SymbolPool,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_pool(seed, SymbolPool::standard())
    }

    pub fn with_pool(seed: u64, pool: SymbolPool) -> Self {
        Self { seed, pool }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        let pair_count = usize::from(config.pair_count());
        let chosen = self.pool.take(pair_count).inspect_err(|err| {
            log::warn!("Cannot deal a {}x{} board: {err}", config.rows(), config.cols());
        })?;

        let mut symbols: Vec<char> = chosen
            .iter()
            .flat_map(|&symbol| [symbol, symbol])
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        shuffle(&mut symbols, &mut rng);

        log::debug!(
            "Dealt {} pairs onto a {}x{} board, seed {}",
            pair_count,
            config.rows(),
            config.cols(),
            self.seed
        );
        Board::from_symbols(config.size, &symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_appears_exactly_twice() {
        for (rows, cols) in [(1, 2), (2, 3), (4, 4), (6, 6), (4, 15)] {
            let config = GameConfig::new(rows, cols).unwrap();
            let board = RandomBoardGenerator::new(u64::from(rows) * 31 + u64::from(cols))
                .generate(config)
                .unwrap();

            let symbols = board.symbols_in_use();
            assert_eq!(symbols.len(), usize::from(config.pair_count()));
            for symbol in symbols {
                let occurrences = (0..rows)
                    .flat_map(|row| (0..cols).map(move |col| (row, col)))
                    .filter(|&coords| board[coords].symbol == symbol)
                    .count();
                assert_eq!(occurrences, 2, "symbol {symbol:?} on {rows}x{cols}");
            }
        }
    }

    #[test]
    fn uses_first_symbols_of_pool() {
        let config = GameConfig::new(2, 2).unwrap();
        let board = RandomBoardGenerator::new(3).generate(config).unwrap();

        let mut symbols = board.symbols_in_use();
        symbols.sort_unstable();
        assert_eq!(symbols, ['A', 'B']);
    }

    #[test]
    fn starts_fully_hidden() {
        let board = RandomBoardGenerator::new(11)
            .generate(GameConfig::default())
            .unwrap();

        assert_eq!(board.open_count(), 0);
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::default();

        assert_eq!(
            RandomBoardGenerator::new(99).generate(config),
            RandomBoardGenerator::new(99).generate(config)
        );
    }

    #[test]
    fn too_many_pairs_is_a_configuration_error() {
        let config = GameConfig::new(12, 12).unwrap();

        let err = RandomBoardGenerator::new(0).generate(config).unwrap_err();

        assert_eq!(
            err,
            GameError::NotEnoughSymbols {
                required: 72,
                available: 62
            }
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn custom_pool_limits_board_size() {
        let pool = SymbolPool::new("@#".chars());
        let config = GameConfig::new(2, 3).unwrap();

        assert!(
            RandomBoardGenerator::with_pool(1, pool)
                .generate(config)
                .is_err()
        );
    }
}
