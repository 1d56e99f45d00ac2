//! Twelve-tile HEALPix-like traversal helper for the CDF 9/7 spherical
//! wrapper.
//!
//! The reference source leaves the actual transform semantics over the
//! twelve-square tiling unrecoverable: its
//! `forward_rows` never performs the lifting step and `inverse` is
//! unimplemented outright. What *is* fully specified -- and faithfully
//! reproduced here -- are the traversal tables that say which tile a row
//! or column wraps into when it runs off one of a tile's four edges.
//! `forward`/`inverse` are therefore stubs that report
//! [`WaveletError::NotImplemented`] unconditionally; only the traversal
//! tables and the tile-index bounds check are load-bearing.

use super::WaveletError;

/// Number of tiles in the HEALPix-like cubed-sphere tiling.
pub const HEALPIX_TILES: usize = 12;

/// A validated tile index in `[0, 12)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileIndex(u8);

impl TileIndex {
    pub fn new(tile: i32) -> Result<Self, WaveletError> {
        if !(0..HEALPIX_TILES as i32).contains(&tile) {
            return Err(WaveletError::InvalidTileIndex { tile });
        }
        Ok(TileIndex(tile as u8))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// `type` discriminant used by the traversal tables: `Row` means the
/// neighbor is entered along one of its rows, `Col` along one of its
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Row,
    Col,
}

/// Direction of travel along the neighboring row/column: `Positive`
/// starts at index 0 and increases, `Negative` starts at `width - 1`
/// and decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

/// Result of a row/column traversal: which tile is entered, along what
/// kind of edge, at what row/column index, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    pub next_tile: TileIndex,
    pub kind: EdgeKind,
    pub index: usize,
    pub next_dir: Direction,
}

const LEFT_TILE: [u8; 12] = [4, 5, 6, 7, 11, 8, 9, 10, 11, 8, 9, 10];
const RIGHT_TILE: [u8; 12] = [1, 2, 3, 0, 0, 1, 2, 3, 5, 6, 7, 4];
const LEFT_TYPE: [EdgeKind; 12] = {
    use EdgeKind::*;
    [Row, Row, Row, Row, Row, Row, Row, Row, Col, Col, Col, Col]
};
const RIGHT_TYPE: [EdgeKind; 12] = {
    use EdgeKind::*;
    [Col, Col, Col, Col, Row, Row, Row, Row, Row, Row, Row, Row]
};

const TOP_TILE: [u8; 12] = [3, 0, 1, 2, 3, 0, 1, 2, 4, 5, 6, 7];
const BOTTOM_TILE: [u8; 12] = [5, 6, 7, 4, 8, 9, 10, 11, 9, 10, 11, 8];
const TOP_TYPE: [EdgeKind; 12] = {
    use EdgeKind::*;
    [Row, Row, Row, Row, Col, Col, Col, Col, Col, Col, Col, Col]
};
const BOTTOM_TYPE: [EdgeKind; 12] = {
    use EdgeKind::*;
    [Col, Col, Col, Col, Col, Col, Col, Col, Row, Row, Row, Row]
};

/// Follows a row of `tile` off its left (`dir = Negative`) or right
/// (`dir = Positive`) edge and reports which tile/edge it wraps into.
///
/// `row` is the row index within `tile`; `width` is the tile's side
/// length, needed to mirror the index when the traversal rotates from a
/// row into a column.
pub fn traverse_row(
    width: usize,
    tile: TileIndex,
    row: usize,
    dir: Direction,
) -> Traversal {
    let t = tile.get();
    let (next_tile, kind) = match dir {
        Direction::Negative => (LEFT_TILE[t], LEFT_TYPE[t]),
        Direction::Positive => (RIGHT_TILE[t], RIGHT_TYPE[t]),
    };
    let index = match kind {
        EdgeKind::Col => width - 1 - row,
        EdgeKind::Row => row,
    };
    Traversal {
        next_tile: TileIndex(next_tile),
        kind,
        index,
        next_dir: dir,
    }
}

/// Follows a column of `tile` off its top (`dir = Negative`) or bottom
/// (`dir = Positive`) edge; see [`traverse_row`] for the mirroring rule.
pub fn traverse_col(
    width: usize,
    tile: TileIndex,
    col: usize,
    dir: Direction,
) -> Traversal {
    let t = tile.get();
    let (next_tile, kind) = match dir {
        Direction::Negative => (TOP_TILE[t], TOP_TYPE[t]),
        Direction::Positive => (BOTTOM_TILE[t], BOTTOM_TYPE[t]),
    };
    let index = match kind {
        EdgeKind::Row => width - 1 - col,
        EdgeKind::Col => col,
    };
    Traversal {
        next_tile: TileIndex(next_tile),
        kind,
        index,
        next_dir: dir,
    }
}

/// Documented stub: the CDF 9/7 HEALPix forward transform's semantics
/// are not recoverable from the reference source (its `forward_rows`
/// never performs the lifting step). `tiles` holds the twelve
/// `width * width` tile buffers back to back. Always fails.
pub fn forward(_tiles: &mut [f64], _width: usize) -> Result<(), WaveletError> {
    Err(WaveletError::NotImplemented)
}

/// Documented stub: the reference source's `cdf97_healpix_inverse`
/// is entirely unimplemented (`return -1;`). Always fails.
pub fn inverse(_tiles: &mut [f64], _width: usize) -> Result<(), WaveletError> {
    Err(WaveletError::NotImplemented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_index_rejects_out_of_range() {
        assert_eq!(TileIndex::new(-1), Err(WaveletError::InvalidTileIndex { tile: -1 }));
        assert_eq!(TileIndex::new(12), Err(WaveletError::InvalidTileIndex { tile: 12 }));
        assert!(TileIndex::new(0).is_ok());
        assert!(TileIndex::new(11).is_ok());
    }

    #[test]
    fn traverse_row_left_right_tables_match_reference() {
        let t0 = TileIndex::new(0).unwrap();
        let left = traverse_row(8, t0, 3, Direction::Negative);
        assert_eq!(left.next_tile, TileIndex::new(4).unwrap());
        assert_eq!(left.kind, EdgeKind::Row);
        assert_eq!(left.index, 3);

        let right = traverse_row(8, t0, 3, Direction::Positive);
        assert_eq!(right.next_tile, TileIndex::new(1).unwrap());
        assert_eq!(right.kind, EdgeKind::Col);
        // Rotating row -> col mirrors the index: width - 1 - row.
        assert_eq!(right.index, 4);
    }

    #[test]
    fn traverse_col_top_bottom_tables_match_reference() {
        let t8 = TileIndex::new(8).unwrap();
        let top = traverse_col(8, t8, 2, Direction::Negative);
        assert_eq!(top.next_tile, TileIndex::new(4).unwrap());
        assert_eq!(top.kind, EdgeKind::Col);
        assert_eq!(top.index, 2);

        let bottom = traverse_col(8, t8, 2, Direction::Positive);
        assert_eq!(bottom.next_tile, TileIndex::new(9).unwrap());
        assert_eq!(bottom.kind, EdgeKind::Row);
        assert_eq!(bottom.index, 5);
    }

    #[test]
    fn forward_and_inverse_are_documented_stubs() {
        let mut tiles = [0.0f64; 12 * 8 * 8];
        assert_eq!(forward(&mut tiles, 8), Err(WaveletError::NotImplemented));
        assert_eq!(inverse(&mut tiles, 8), Err(WaveletError::NotImplemented));
    }
}
