/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The door table.
//!
//! A door is a pair of adjacent entries, one describing each side: the
//! room behind that side and the direction a character passes through
//! in. Pairs 0..=15 have one side outdoors and are the only doors the
//! outdoor door scan considers.
//!
//! Outdoor-side positions are stored doubled: exterior movement compares
//! them against the live position divided by four, and walking a route
//! towards one multiplies them by four.

use crate::types::{Direction, Door, MapPos8};

use Direction::{BottomLeft, BottomRight, TopLeft, TopRight};

pub const DOORS_LENGTH: usize = 124;

pub static DOORS: [Door; DOORS_LENGTH] = [
    Door::new(0, TopRight, MapPos8::new(210, 146, 12)), // pair 0
    Door::new(0, BottomLeft, MapPos8::new(218, 150, 12)),
    Door::new(0, TopRight, MapPos8::new(210, 154, 12)), // pair 1
    Door::new(0, BottomLeft, MapPos8::new(218, 158, 12)),
    Door::new(0, TopLeft, MapPos8::new(240, 212, 12)), // pair 2
    Door::new(0, BottomRight, MapPos8::new(244, 220, 12)),
    Door::new(0, TopLeft, MapPos8::new(176, 192, 12)), // pair 3
    Door::new(1, BottomRight, MapPos8::new(42, 60, 24)),
    Door::new(0, TopLeft, MapPos8::new(192, 192, 12)), // pair 4
    Door::new(2, BottomRight, MapPos8::new(42, 60, 24)),
    Door::new(0, TopLeft, MapPos8::new(208, 192, 12)), // pair 5
    Door::new(4, BottomRight, MapPos8::new(42, 60, 24)),
    Door::new(0, TopRight, MapPos8::new(152, 200, 12)), // pair 6
    Door::new(7, BottomLeft, MapPos8::new(60, 36, 24)),
    Door::new(0, TopRight, MapPos8::new(168, 176, 12)), // pair 7
    Door::new(8, BottomLeft, MapPos8::new(60, 36, 24)),
    Door::new(0, TopLeft, MapPos8::new(140, 168, 12)), // pair 8
    Door::new(21, BottomRight, MapPos8::new(44, 56, 24)),
    Door::new(0, TopLeft, MapPos8::new(156, 156, 12)), // pair 9
    Door::new(23, BottomRight, MapPos8::new(56, 62, 24)),
    Door::new(0, TopLeft, MapPos8::new(172, 156, 12)), // pair 10
    Door::new(25, BottomRight, MapPos8::new(56, 62, 24)),
    Door::new(0, TopRight, MapPos8::new(132, 192, 12)), // pair 11
    Door::new(24, BottomLeft, MapPos8::new(38, 32, 24)),
    Door::new(0, TopRight, MapPos8::new(220, 236, 12)), // pair 12
    Door::new(12, BottomLeft, MapPos8::new(60, 36, 24)),
    Door::new(0, TopLeft, MapPos8::new(248, 200, 12)), // pair 13
    Door::new(16, BottomRight, MapPos8::new(44, 56, 24)),
    Door::new(0, BottomRight, MapPos8::new(252, 224, 12)), // pair 14
    Door::new(0, TopLeft, MapPos8::new(244, 216, 12)),
    Door::new(0, BottomRight, MapPos8::new(128, 144, 12)), // pair 15
    Door::new(0, TopLeft, MapPos8::new(120, 136, 12)),
    Door::new(1, TopRight, MapPos8::new(62, 32, 24)), // pair 16
    Door::new(28, BottomLeft, MapPos8::new(26, 46, 24)),
    Door::new(2, TopRight, MapPos8::new(62, 32, 24)), // pair 17
    Door::new(3, BottomLeft, MapPos8::new(26, 46, 24)),
    Door::new(4, TopRight, MapPos8::new(62, 32, 24)), // pair 18
    Door::new(5, BottomLeft, MapPos8::new(26, 46, 24)),
    Door::new(7, TopRight, MapPos8::new(62, 40, 24)), // pair 19
    Door::new(8, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(8, TopRight, MapPos8::new(62, 40, 24)), // pair 20
    Door::new(9, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(8, TopLeft, MapPos8::new(40, 62, 24)), // pair 21
    Door::new(10, BottomRight, MapPos8::new(40, 26, 24)),
    Door::new(7, TopLeft, MapPos8::new(40, 62, 24)), // pair 22
    Door::new(11, BottomRight, MapPos8::new(40, 26, 24)),
    Door::new(12, TopRight, MapPos8::new(62, 40, 24)), // pair 23
    Door::new(13, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(13, TopRight, MapPos8::new(62, 40, 24)), // pair 24
    Door::new(14, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(13, TopLeft, MapPos8::new(40, 62, 24)), // pair 25
    Door::new(15, BottomRight, MapPos8::new(40, 26, 24)),
    Door::new(16, TopRight, MapPos8::new(62, 40, 24)), // pair 26
    Door::new(17, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(17, TopRight, MapPos8::new(62, 40, 24)), // pair 27
    Door::new(18, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(17, TopLeft, MapPos8::new(40, 62, 24)), // pair 28
    Door::new(19, BottomRight, MapPos8::new(40, 26, 24)),
    Door::new(21, TopRight, MapPos8::new(62, 40, 24)), // pair 29
    Door::new(20, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(21, TopLeft, MapPos8::new(40, 62, 24)), // pair 30
    Door::new(22, BottomRight, MapPos8::new(40, 26, 24)),
    Door::new(23, TopRight, MapPos8::new(62, 40, 24)), // pair 31
    Door::new(25, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(2, BottomLeft, MapPos8::new(52, 74, 0)), // pair 32
    Door::new(29, TopRight, MapPos8::new(58, 24, 0)),
    Door::new(29, TopRight, MapPos8::new(62, 36, 0)), // pair 33
    Door::new(30, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(30, TopRight, MapPos8::new(62, 36, 0)), // pair 34
    Door::new(31, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(31, TopRight, MapPos8::new(62, 36, 0)), // pair 35
    Door::new(32, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(32, TopLeft, MapPos8::new(40, 62, 0)), // pair 36
    Door::new(33, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(33, TopRight, MapPos8::new(62, 36, 0)), // pair 37
    Door::new(34, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(34, TopLeft, MapPos8::new(40, 62, 0)), // pair 38
    Door::new(35, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(35, TopRight, MapPos8::new(62, 36, 0)), // pair 39
    Door::new(36, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(36, TopRight, MapPos8::new(62, 36, 0)), // pair 40
    Door::new(37, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(37, TopLeft, MapPos8::new(40, 62, 0)), // pair 41
    Door::new(38, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(38, TopRight, MapPos8::new(62, 36, 0)), // pair 42
    Door::new(39, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(39, TopRight, MapPos8::new(62, 36, 0)), // pair 43
    Door::new(40, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(40, TopLeft, MapPos8::new(40, 62, 0)), // pair 44
    Door::new(41, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(41, TopRight, MapPos8::new(62, 36, 0)), // pair 45
    Door::new(42, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(42, TopRight, MapPos8::new(62, 36, 0)), // pair 46
    Door::new(43, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(43, TopLeft, MapPos8::new(40, 62, 0)), // pair 47
    Door::new(44, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(44, TopRight, MapPos8::new(62, 36, 0)), // pair 48
    Door::new(45, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(45, TopRight, MapPos8::new(62, 36, 0)), // pair 49
    Door::new(46, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(46, TopLeft, MapPos8::new(40, 62, 0)), // pair 50
    Door::new(47, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(47, TopRight, MapPos8::new(62, 36, 0)), // pair 51
    Door::new(48, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(48, TopRight, MapPos8::new(62, 36, 0)), // pair 52
    Door::new(49, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(49, TopLeft, MapPos8::new(40, 62, 0)), // pair 53
    Door::new(50, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(50, TopRight, MapPos8::new(62, 36, 0)), // pair 54
    Door::new(51, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(51, TopRight, MapPos8::new(62, 36, 0)), // pair 55
    Door::new(52, BottomLeft, MapPos8::new(26, 44, 0)),
    Door::new(52, TopLeft, MapPos8::new(40, 62, 0)), // pair 56
    Door::new(29, BottomRight, MapPos8::new(40, 26, 0)),
    Door::new(9, BottomLeft, MapPos8::new(52, 74, 0)), // pair 57
    Door::new(29, TopRight, MapPos8::new(58, 28, 0)),
    Door::new(50, BottomLeft, MapPos8::new(52, 74, 0)), // pair 58
    Door::new(0, TopRight, MapPos8::new(248, 120, 12)),
    Door::new(24, TopRight, MapPos8::new(62, 36, 24)), // pair 59
    Door::new(21, BottomLeft, MapPos8::new(26, 40, 24)),
    Door::new(3, BottomLeft, MapPos8::new(52, 74, 0)), // pair 60
    Door::new(34, TopRight, MapPos8::new(58, 24, 0)),
    Door::new(5, BottomLeft, MapPos8::new(52, 74, 0)), // pair 61
    Door::new(39, TopRight, MapPos8::new(58, 24, 0)),
];
