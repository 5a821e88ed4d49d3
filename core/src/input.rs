use crate::*;

/// Parses a player pick of two whitespace-separated, 1-based integers into 0-based coordinates.
///
/// Bounds against a concrete board are checked by the engine; here only values that cannot be a
/// coordinate at all are turned into [`PickError::OutOfRange`].
pub fn parse_pick(line: &str) -> core::result::Result<Coord2, PickError> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(PickError::Malformed);
    };

    let row: i64 = row.parse().map_err(|_| PickError::Malformed)?;
    let col: i64 = col.parse().map_err(|_| PickError::Malformed)?;

    Ok((to_coord(row)?, to_coord(col)?))
}

fn to_coord(one_based: i64) -> core::result::Result<Coord, PickError> {
    one_based
        .checked_sub(1)
        .and_then(|zero_based| Coord::try_from(zero_based).ok())
        .ok_or(PickError::OutOfRange)
}
