/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The game-simulation core of "The Great Escape" (Denton Designs /
//! Ocean, 1986): the isometric prison-escape game, restored to playable
//! order against the [`spectrum`] host layer.
//!
//! The host drives the four entry points in order: [`setup`] wipes the
//! display and draws the frame, [`menu`] runs the title menu until the
//! player starts, [`setup2`] resets the world, then [`main_loop_iter`]
//! runs one simulation tick per call until it returns true.

pub mod animation;
pub mod collision;
pub mod constants;
pub mod data;
pub mod doors;
pub mod driver;
pub mod events;
pub mod game_loop;
pub mod input;
pub mod items;
pub mod map;
pub mod masks;
pub mod messages;
pub mod preferences;
pub mod random;
pub mod render;
pub mod rooms;
pub mod route;
pub mod searchlight;
pub mod sound;
pub mod state;
pub mod types;
pub mod vischar;

pub use game_loop::{main_loop_iter, menu, setup, setup2};
pub use state::State;
