/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Default item locations: where each item starts, and where it returns
//! to when discovered.

use crate::types::MapPos8;

/// (room, position) per item, in item id order.
pub static ITEM_DEFAULTS: [(u8, MapPos8); 16] = [
    (0, MapPos8::new(164, 112, 6)),  // wiresnips, by the east fence
    (9, MapPos8::new(40, 36, 4)),    // shovel
    (10, MapPos8::new(36, 48, 4)),   // lockpick
    (11, MapPos8::new(36, 34, 4)),   // papers
    (14, MapPos8::new(40, 36, 4)),   // torch
    (28, MapPos8::new(42, 38, 4)),   // bribe
    (15, MapPos8::new(44, 40, 4)),   // uniform
    (19, MapPos8::new(38, 42, 4)),   // food
    (1, MapPos8::new(46, 34, 4)),    // poison
    (22, MapPos8::new(40, 44, 4)),   // red key
    (13, MapPos8::new(36, 48, 4)),   // yellow key
    (16, MapPos8::new(40, 34, 4)),   // green key
    (20, MapPos8::new(44, 38, 4)),   // red cross parcel
    (18, MapPos8::new(50, 46, 4)),   // radio
    (25, MapPos8::new(44, 54, 4)),   // purse
    (23, MapPos8::new(52, 42, 4)),   // compass
];
