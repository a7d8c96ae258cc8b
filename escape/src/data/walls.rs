/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Walls and fences tested by the bounds check, in scaled-down map
//! units. The last seven entries are the wire fences.

use crate::types::Wall;

pub const WALLS_LENGTH: usize = 24;

/// Index of the first fence entry.
pub const FIRST_FENCE: usize = 17;

pub static WALLS: [Wall; WALLS_LENGTH] = [
    Wall { minx: 104, maxx: 122, miny: 88, maxy: 96, minheight: 0, maxheight: 48 }, // hut 1
    Wall { minx: 128, maxx: 146, miny: 88, maxy: 96, minheight: 0, maxheight: 48 }, // hut 2
    Wall { minx: 152, maxx: 170, miny: 88, maxy: 96, minheight: 0, maxheight: 48 }, // hut 3
    Wall { minx: 56, maxx: 80, miny: 76, maxy: 92, minheight: 0, maxheight: 64 }, // offices
    Wall { minx: 64, maxx: 88, miny: 96, maxy: 110, minheight: 0, maxheight: 64 }, // mess hall
    Wall { minx: 48, maxx: 64, miny: 112, maxy: 124, minheight: 0, maxheight: 64 }, // solitary block
    Wall { minx: 136, maxx: 152, miny: 56, maxy: 68, minheight: 0, maxheight: 80 }, // water tower
    Wall { minx: 96, maxx: 120, miny: 48, maxy: 60, minheight: 0, maxheight: 64 }, // north store
    Wall { minx: 148, maxx: 168, miny: 48, maxy: 60, minheight: 0, maxheight: 64 }, // kennels
    Wall { minx: 92, maxx: 102, miny: 118, maxy: 130, minheight: 0, maxheight: 48 }, // gate house, west
    Wall { minx: 112, maxx: 122, miny: 118, maxy: 130, minheight: 0, maxheight: 48 }, // gate house, east
    Wall { minx: 160, maxx: 180, miny: 112, maxy: 126, minheight: 0, maxheight: 48 }, // yard shed
    Wall { minx: 186, maxx: 200, miny: 118, maxy: 132, minheight: 0, maxheight: 64 }, // watch tower, south
    Wall { minx: 32, maxx: 48, miny: 80, maxy: 108, minheight: 0, maxheight: 64 }, // west block
    Wall { minx: 196, maxx: 212, miny: 80, maxy: 104, minheight: 0, maxheight: 64 }, // east block
    Wall { minx: 176, maxx: 196, miny: 28, maxy: 44, minheight: 0, maxheight: 64 }, // north tower
    Wall { minx: 72, maxx: 88, miny: 40, maxy: 56, minheight: 0, maxheight: 64 }, // north west shed
    Wall { minx: 88, maxx: 208, miny: 64, maxy: 66, minheight: 16, maxheight: 32 }, // north fence
    Wall { minx: 88, maxx: 208, miny: 134, maxy: 136, minheight: 16, maxheight: 32 }, // south fence
    Wall { minx: 88, maxx: 90, miny: 64, maxy: 136, minheight: 16, maxheight: 32 }, // west fence
    Wall { minx: 206, maxx: 208, miny: 64, maxy: 136, minheight: 16, maxheight: 32 }, // east fence
    Wall { minx: 112, maxx: 160, miny: 102, maxy: 104, minheight: 16, maxheight: 32 }, // yard fence, north
    Wall { minx: 112, maxx: 114, miny: 102, maxy: 134, minheight: 16, maxheight: 32 }, // yard fence, west
    Wall { minx: 158, maxx: 160, miny: 102, maxy: 134, minheight: 16, maxheight: 32 }, // yard fence, east
];
