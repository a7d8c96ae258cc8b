/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Named locations addressed by route bytes 40..=117.

use crate::types::MapPos8;

pub const LOCATIONS_LENGTH: usize = 78;

pub static LOCATIONS: [MapPos8; LOCATIONS_LENGTH] = [
    MapPos8::new(169, 107, 6), // dog wander, north compound
    MapPos8::new(162, 105, 6),
    MapPos8::new(166, 94, 6),
    MapPos8::new(171, 113, 6),
    MapPos8::new(173, 96, 6),
    MapPos8::new(150, 108, 6),
    MapPos8::new(160, 95, 6),
    MapPos8::new(167, 94, 6),
    MapPos8::new(119, 104, 6), // exercise yard
    MapPos8::new(116, 106, 6),
    MapPos8::new(119, 108, 6),
    MapPos8::new(117, 108, 6),
    MapPos8::new(121, 114, 6),
    MapPos8::new(118, 105, 6),
    MapPos8::new(124, 104, 6),
    MapPos8::new(120, 115, 6),
    MapPos8::new(70, 70, 6), // perimeter walk
    MapPos8::new(82, 110, 6),
    MapPos8::new(94, 70, 6),
    MapPos8::new(106, 110, 6),
    MapPos8::new(118, 70, 6),
    MapPos8::new(130, 110, 6),
    MapPos8::new(142, 70, 6),
    MapPos8::new(154, 110, 6),
    MapPos8::new(99, 124, 6), // dog wander, south compound
    MapPos8::new(88, 129, 6),
    MapPos8::new(86, 131, 6),
    MapPos8::new(95, 130, 6),
    MapPos8::new(102, 138, 6),
    MapPos8::new(81, 140, 6),
    MapPos8::new(102, 124, 6),
    MapPos8::new(95, 131, 6),
    MapPos8::new(88, 94, 6), // hut area
    MapPos8::new(96, 94, 6),
    MapPos8::new(104, 94, 6),
    MapPos8::new(112, 94, 6),
    MapPos8::new(88, 100, 6),
    MapPos8::new(96, 100, 6),
    MapPos8::new(104, 100, 6),
    MapPos8::new(112, 100, 6),
    MapPos8::new(114, 106, 6), // roll call
    MapPos8::new(115, 108, 6),
    MapPos8::new(116, 110, 6),
    MapPos8::new(117, 112, 6),
    MapPos8::new(118, 106, 6),
    MapPos8::new(119, 108, 6),
    MapPos8::new(120, 110, 6),
    MapPos8::new(121, 112, 6),
    MapPos8::new(30, 40, 24), // interior
    MapPos8::new(36, 40, 24),
    MapPos8::new(42, 40, 24),
    MapPos8::new(48, 40, 24),
    MapPos8::new(54, 40, 24),
    MapPos8::new(60, 40, 24),
    MapPos8::new(30, 52, 24),
    MapPos8::new(36, 52, 24),
    MapPos8::new(42, 52, 24),
    MapPos8::new(48, 52, 24),
    MapPos8::new(54, 52, 24),
    MapPos8::new(60, 52, 24),
    MapPos8::new(100, 74, 6), // main gate approach
    MapPos8::new(101, 76, 6),
    MapPos8::new(102, 78, 6),
    MapPos8::new(103, 74, 6),
    MapPos8::new(104, 76, 6),
    MapPos8::new(105, 78, 6),
    MapPos8::new(106, 74, 6),
    MapPos8::new(107, 76, 6),
    MapPos8::new(108, 78, 6),
    MapPos8::new(109, 74, 6),
    MapPos8::new(64, 90, 6), // offices
    MapPos8::new(68, 90, 6),
    MapPos8::new(72, 90, 6),
    MapPos8::new(76, 90, 6),
    MapPos8::new(64, 94, 6),
    MapPos8::new(68, 94, 6),
    MapPos8::new(72, 94, 6),
    MapPos8::new(76, 94, 6),
];
