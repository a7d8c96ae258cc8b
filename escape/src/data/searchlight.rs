/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Searchlight movement scripts: (counter, direction) pairs, 0xFF
//! terminated. Directions use the facing encoding: 0 up-left, 1 up-right,
//! 2 down-right, 3 down-left.

use crate::types::{Direction, Pos8, SearchlightMovement};

pub const SEARCHLIGHT_SCRIPT_0: &[u8] = &[
    0x18, 0x01, 0x10, 0x02, 0x18, 0x03, 0x10, 0x00, 0xFF,
];

pub const SEARCHLIGHT_SCRIPT_1: &[u8] = &[
    0x14, 0x02, 0x0C, 0x01, 0x14, 0x00, 0x0C, 0x03, 0xFF,
];

pub const SEARCHLIGHT_SCRIPT_2: &[u8] = &[
    0x20, 0x01, 0x10, 0x00, 0x20, 0x03, 0x10, 0x02, 0xFF,
];

pub static SEARCHLIGHT_SCRIPTS: [&[u8]; 3] = [
    SEARCHLIGHT_SCRIPT_0,
    SEARCHLIGHT_SCRIPT_1,
    SEARCHLIGHT_SCRIPT_2,
];

/// Start-of-night searchlight state.
pub static SEARCHLIGHT_INITIAL: [SearchlightMovement; 3] = [
    SearchlightMovement {
        xy: Pos8 { x: 0x24, y: 0x52 },
        counter: 0x18,
        direction: Direction::TopRight,
        index: 0,
        script: 0,
    },
    SearchlightMovement {
        xy: Pos8 { x: 0x78, y: 0x52 },
        counter: 0x14,
        direction: Direction::BottomRight,
        index: 0,
        script: 1,
    },
    SearchlightMovement {
        xy: Pos8 { x: 0x3C, y: 0x4C },
        counter: 0x20,
        direction: Direction::TopRight,
        index: 0,
        script: 2,
    },
];
