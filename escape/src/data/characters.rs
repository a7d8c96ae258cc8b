/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Start-of-game character records.
//!
//! Outdoor positions are in the scaled-down map space; interior positions
//! are full interior coordinates. A reset copies this table over the live
//! records wholesale.

use crate::types::{CharacterStruct, MapPos8, Route};

pub static CHARACTER_DEFAULTS: [CharacterStruct; 26] = [
    // The commandant starts in the offices, on his long tour.
    CharacterStruct::new(0, 7, MapPos8::new(60, 36, 24), Route::new(3, 0)),
    // Guards 1..=7 walk the perimeter, spread along the route.
    CharacterStruct::new(1, 0, MapPos8::new(70, 70, 6), Route::new(2, 0)),
    CharacterStruct::new(2, 0, MapPos8::new(82, 110, 6), Route::new(2, 1)),
    CharacterStruct::new(3, 0, MapPos8::new(94, 70, 6), Route::new(2, 2)),
    CharacterStruct::new(4, 0, MapPos8::new(106, 110, 6), Route::new(2, 3)),
    CharacterStruct::new(5, 0, MapPos8::new(118, 70, 6), Route::new(2, 4)),
    CharacterStruct::new(6, 0, MapPos8::new(130, 110, 6), Route::new(2, 5)),
    CharacterStruct::new(7, 0, MapPos8::new(142, 70, 6), Route::new(2, 6)),
    // Guards 8..=11 cover the fenced area and the main gate.
    CharacterStruct::new(8, 0, MapPos8::new(120, 108, 6), Route::new(1, 0)),
    CharacterStruct::new(9, 0, MapPos8::new(124, 112, 6), Route::new(1, 1)),
    CharacterStruct::new(10, 0, MapPos8::new(102, 75, 6), Route::new(4, 0)),
    CharacterStruct::new(11, 0, MapPos8::new(106, 77, 6), Route::new(4, 1)),
    // Guards 12..=15 take duty routes assigned by the day's events.
    CharacterStruct::new(12, 0, MapPos8::new(76, 94, 6), Route::new(0, 0)),
    CharacterStruct::new(13, 0, MapPos8::new(80, 96, 6), Route::new(0, 0)),
    CharacterStruct::new(14, 0, MapPos8::new(84, 98, 6), Route::new(0, 0)),
    CharacterStruct::new(15, 0, MapPos8::new(88, 100, 6), Route::new(0, 0)),
    // Dogs wander: two in the north window, two in the south.
    CharacterStruct::new(16, 0, MapPos8::new(156, 96, 6), Route::new(255, 0)),
    CharacterStruct::new(17, 0, MapPos8::new(160, 100, 6), Route::new(255, 0)),
    CharacterStruct::new(18, 0, MapPos8::new(86, 126, 6), Route::new(255, 24)),
    CharacterStruct::new(19, 0, MapPos8::new(90, 130, 6), Route::new(255, 24)),
    // Prisoners start in their bunks.
    CharacterStruct::new(20, 3, MapPos8::new(56, 60, 24), Route::new(0, 0)),
    CharacterStruct::new(21, 3, MapPos8::new(60, 48, 24), Route::new(0, 0)),
    CharacterStruct::new(22, 3, MapPos8::new(64, 36, 24), Route::new(0, 0)),
    CharacterStruct::new(23, 5, MapPos8::new(56, 60, 24), Route::new(0, 0)),
    CharacterStruct::new(24, 5, MapPos8::new(60, 48, 24), Route::new(0, 0)),
    CharacterStruct::new(25, 5, MapPos8::new(64, 36, 24), Route::new(0, 0)),
];
