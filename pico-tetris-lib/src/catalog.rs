//! The seven tetrominoes.
//!
//! Shapes come from the art in `build.rs`; the rotation limits are derived
//! there as well, so a shape and its limit can never disagree.

use crate::palette::{
    I_BLOCK_IDX, J_BLOCK_IDX, L_BLOCK_IDX, O_BLOCK_IDX, S_BLOCK_IDX, T_BLOCK_IDX, Z_BLOCK_IDX,
};
use crate::shape::{Offset, Shape};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PieceKind {
    I,
    J,
    L,
    Z,
    S,
    O,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
        PieceKind::T,
    ];

    pub fn wrapping_at(idx: u8) -> Self {
        Self::ALL[idx as usize % Self::ALL.len()]
    }

    pub fn color(self) -> u8 {
        match self {
            PieceKind::I => I_BLOCK_IDX,
            PieceKind::J => J_BLOCK_IDX,
            PieceKind::L => L_BLOCK_IDX,
            PieceKind::Z => Z_BLOCK_IDX,
            PieceKind::S => S_BLOCK_IDX,
            PieceKind::O => O_BLOCK_IDX,
            PieceKind::T => T_BLOCK_IDX,
        }
    }

    pub fn def(self) -> PieceDef {
        CATALOG[self as usize]
    }
}

/// Immutable catalog entry. The active piece copies `shape` and never writes back.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Quarter turns allowed before the next turn resets to `shape`.
    pub rotations: u8,
}

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.def().kind, kind);
        }
    }

    #[test]
    fn rotation_limits() {
        let limits: Vec<u8> = PieceKind::ALL.iter().map(|k| k.def().rotations).collect();
        assert_eq!(limits, [1, 3, 3, 1, 1, 0, 3]);
    }

    #[test]
    fn every_shape_has_three_distinct_offsets() {
        for kind in PieceKind::ALL {
            let cells = kind.def().shape.cells();
            for (i, a) in cells.iter().enumerate() {
                for b in &cells[i + 1..] {
                    assert_ne!(a, b, "{:?} repeats a cell", kind);
                }
            }
        }
    }

    #[test]
    fn i_piece_lies_flat() {
        let shape = PieceKind::I.def().shape;
        assert_eq!(shape.str(), "##@#\n");
        assert!(shape.offsets.contains(&Offset::new(-2, 0)));
    }

    #[test]
    fn wrapping_index() {
        assert_eq!(PieceKind::wrapping_at(0), PieceKind::I);
        assert_eq!(PieceKind::wrapping_at(6), PieceKind::T);
        assert_eq!(PieceKind::wrapping_at(7), PieceKind::I);
    }
}
