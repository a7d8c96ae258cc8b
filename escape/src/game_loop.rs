/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! Game orchestration: the main loop, game reset, solitary, and the
//! escape evaluator.
//!
//! The original jumped back to a setjmp anchor to restart the loop on a
//! room change, on going outdoors and on reset. Here every function on
//! those paths returns an [`Interrupt`] up the chain and
//! [`main_loop_iter`] plays the anchor, dispatching on the reason.

use spectrum::screen::{
    ATTRIBUTE_BRIGHT_GREEN_OVER_BLACK, ATTRIBUTE_BRIGHT_RED_OVER_BLACK,
    ATTRIBUTE_GREEN_OVER_BLACK, ATTRIBUTE_RED_OVER_BLACK,
};
use spectrum::{Machine, Screen};

use crate::animation;
use crate::constants::*;
use crate::data::characters::CHARACTER_DEFAULTS;
use crate::doors;
use crate::driver;
use crate::events;
use crate::input;
use crate::items;
use crate::map;
use crate::messages::{self, plot_text, queue_message};
use crate::render;
use crate::rooms;
use crate::searchlight;
use crate::sound;
use crate::state::State;
use crate::types::*;
use crate::vischar;

/// Where the hero serves his time.
static SOLITARY_POS: MapPos8 = MapPos8::new(40, 38, 24);

/// Escape verdict strings.
static VERDICT_CROSS_BORDER: [&str; 5] = [
    "WELL DONE",
    "YOU HAVE ESCAPED",
    "FROM THE CAMP",
    "AND WILL CROSS THE",
    "BORDER SUCCESSFULLY",
];
static VERDICT_SHOT: [&str; 3] = ["YOU WERE SPOTTED", "IN DISGUISE AND", "SHOT AS A SPY"];
static VERDICT_LOST: [&str; 4] = [
    "YOU HAVE ESCAPED",
    "BUT WITH NO PAPERS",
    "YOU ARE SOON",
    "RECAPTURED",
];
static VERDICT_UNPREPARED: [&str; 4] = [
    "TOTALLY UNPREPARED",
    "YOU ARE SOON",
    "CAUGHT AND",
    "RETURNED TO CAMP",
];

// =============================================================================
// Reset
// =============================================================================

/// Set every mutable table back to its start-of-game row. The roomdef
/// shadow bytes are deliberately left alone: beds and benches keep the
/// state the previous game left them in until the day's events reset
/// them.
pub fn reset_game_state(state: &mut State) {
    state.ticker = 0;
    state.gametime = 0;
    state.next_event_index = 0;
    state.day_or_night_is_night = false;
    state.bell = BELL_STOP;
    state.morale = MORALE_MAX;
    state.score = [0; SCORE_DIGITS];
    state.red_flag = false;
    state.automatic_player_counter = 0;
    state.in_solitary = false;
    state.morale_exhausted = false;
    state.hero_in_bed = true;
    state.hero_in_breakfast = false;
    state.items_held = [ITEM_NONE; INVENTORY_LENGTH];
    state.bribed_character = CHARACTER_NONE;
    state.action_counter = 0;
    state.messages = crate::messages::Messages::new();

    // The hero, sealed in his bunk in hut 2 left.
    state.room_index = ROOM_2_HUT2LEFT;
    state.vischars = [Vischar::default(); VISCHARS_LENGTH];
    let def = &crate::data::sprites::SPRITES
        [vischar::sprite_base_for(CHARACTER_20_PRISONER_1) as usize];
    state.vischars[HERO_VISCHAR] = Vischar {
        character: 0,
        room: ROOM_2_HUT2LEFT,
        mi: MovableItem {
            pos: MapPos16::new(46, 46, 24),
            sprite: vischar::sprite_base_for(CHARACTER_20_PRISONER_1),
            sprite_index: 0,
        },
        width_bytes: def.width_bytes,
        height: def.height,
        ..Vischar::default()
    };
    let hero_pos = state.vischars[HERO_VISCHAR].mi.pos;
    state.vischars[HERO_VISCHAR].iso_pos = project(&hero_pos);
    state.vischars[HERO_VISCHAR].input = INPUT_KICK;
    rooms::set_roomdef(
        state,
        ROOM_2_HUT2LEFT,
        crate::data::roomdefs::ROOMDEF_2_BED,
        crate::data::roomdefs::OBJ_OCCUPIED_BED,
    );

    // Character and item tables from their defaults. Record zero is the
    // commandant; the hero exists only as vischar slot zero.
    state.character_structs = CHARACTER_DEFAULTS;
    vischar::reset_movable_items(state);
    items::reset_items(state);
    doors::reset_locked_doors(state);
    searchlight::searchlight_reset(state);

    rooms::setup_room(state);
    rooms::plot_interior_tiles(state);

    log::info!("game reset");
}

// =============================================================================
// Solitary and bribes
// =============================================================================

/// The hero is caught: everything he carries is confiscated, anything
/// he stashed outdoors is found, and he wakes up in the cell with the
/// commandant on his way.
pub fn solitary(state: &mut State) -> Flow {
    // Confiscate.
    for slot in 0..INVENTORY_LENGTH {
        let item = state.items_held[slot];
        if item != ITEM_NONE {
            items::item_discovered(state, item);
        }
    }
    // Sweep the compound for anything dropped outside.
    for item in 0..ITEM_LIMIT {
        if state.item_structs[item as usize].room() == ROOM_0_OUTDOORS {
            items::item_discovered(state, item);
        }
    }

    state.in_solitary = true;
    state.decrease_morale(35);
    queue_message(state, messages::MESSAGE_YOU_ARE_IN_SOLITARY);
    queue_message(state, messages::MESSAGE_WAIT_FOR_RELEASE);
    queue_message(state, messages::MESSAGE_MISSED_ROLL_CALL);

    // The commandant's detour ends with the hero's release.
    events::set_character_route(
        state,
        CHARACTER_0_COMMANDANT,
        Route::new(ROUTEINDEX_36_GO_TO_SOLITARY, 0),
    );

    let hero = &mut state.vischars[HERO_VISCHAR];
    hero.room = ROOM_24_SOLITARY;
    hero.mi.pos = SOLITARY_POS.widen();
    hero.route = Route::new(ROUTEINDEX_HALT, 0);
    hero.flags = VischarFlags::default();
    state.hero_in_bed = false;
    state.hero_in_breakfast = false;

    log::debug!("hero sent to solitary");
    Err(Interrupt::NewRoom)
}

/// A pursuer reaches the hero while a bribe stands: he pockets it and
/// the pack is called off.
pub fn accept_bribe(state: &mut State, pursuer: usize) {
    log::debug!(
        "character {} accepts the bribe",
        state.vischars[pursuer].character
    );
    queue_message(state, messages::MESSAGE_HE_TAKES_THE_BRIBE);
    queue_message(state, messages::MESSAGE_AND_ACTS_AS_DECOY);

    // The bribe is spent.
    for slot in state.items_held.iter_mut() {
        if *slot == ITEM_BRIBE {
            *slot = ITEM_NONE;
        }
    }
    state.item_structs[ITEM_BRIBE as usize]
        .set_room_and_flags(ITEMSTRUCT_ROOM_NONE, ItemRoomFlags::empty());
    state.bribed_character = CHARACTER_NONE;

    // Pursuers break off.
    for index in 1..VISCHARS_LENGTH {
        let vischar = &mut state.vischars[index];
        if !vischar.is_empty() && is_hostile(vischar.character) {
            vischar.flags.pursuit = Pursuit::None;
        }
    }
}

// =============================================================================
// Permitted area and escape
// =============================================================================

/// Track whether the hero is someplace he is allowed to be, flying the
/// morale flag red or green to match, and catch the moment he leaves
/// the map entirely.
fn in_permitted_area(state: &mut State, machine: &mut dyn Machine) -> Flow {
    let hero = state.hero();
    if hero.room != ROOM_0_OUTDOORS {
        state.red_flag = false;
        return Ok(());
    }

    // Off the map edge: the escape attempt is over, one way or another.
    if hero.iso_pos.x < MAP_EDGE_X || hero.iso_pos.y >= MAP_EDGE_Y {
        return escaped(state, machine);
    }

    // Between the wire and the woods is out of bounds.
    let pos = hero.mi.pos.scale_down();
    let out_of_bounds = pos.u < 92 || pos.u > 204 || pos.v < 68 || pos.v > 132;
    let night_walk = state.day_or_night_is_night && !state.hero_in_bed;

    if out_of_bounds || night_walk {
        if !state.red_flag {
            log::debug!("red flag: hero out of bounds at ({}, {})", pos.u, pos.v);
        }
        state.red_flag = true;
        driver::hostiles_pursue(state);
    } else {
        state.red_flag = false;
    }
    Ok(())
}

/// Bit mask of escape-relevant items in the inventory.
fn held_escapeitem_mask(state: &State) -> u8 {
    state
        .items_held
        .iter()
        .fold(0, |mask, &item| match item {
            ITEM_NONE => mask,
            item => mask | items::escapeitem_for(item),
        })
}

/// The hero crossed the map boundary: judge the attempt, show the
/// verdict, then start over (or worse).
fn escaped(state: &mut State, machine: &mut dyn Machine) -> Flow {
    let mask = held_escapeitem_mask(state);

    let has = |bit: u8| mask & bit != 0;
    let (verdict, succeeded): (&[&str], bool) = if has(items::ESCAPEITEM_COMPASS)
        && has(items::ESCAPEITEM_PAPERS)
    {
        (&VERDICT_CROSS_BORDER, true)
    } else if has(items::ESCAPEITEM_COMPASS) && has(items::ESCAPEITEM_PURSE) {
        (&VERDICT_CROSS_BORDER, true)
    } else if has(items::ESCAPEITEM_UNIFORM) {
        (&VERDICT_SHOT, true)
    } else if !has(items::ESCAPEITEM_COMPASS) && !has(items::ESCAPEITEM_PAPERS) && mask != 0 {
        (&VERDICT_LOST, false)
    } else if mask == 0 {
        (&VERDICT_UNPREPARED, false)
    } else {
        (&VERDICT_LOST, false)
    };

    log::info!("escape attempt: mask {mask:#06b}, verdict {:?}", verdict[0]);

    // Paint the verdict over a cleared screen and hold it a while.
    machine.screen().clear();
    for (line, text) in verdict.iter().enumerate() {
        let offset = Screen::pixel_offset(5 * 8, 48 + line * 16);
        plot_text(machine, offset, text);
    }
    machine.draw(None);
    machine.stamp();
    for _ in 0..64 {
        if machine.sleep(TICK_TSTATES) {
            return Err(Interrupt::Quit);
        }
    }

    if succeeded {
        Err(Interrupt::Reset)
    } else {
        // Recaptured: straight to the cells.
        solitary(state)
    }
}

// =============================================================================
// Odd jobs around the loop
// =============================================================================

/// Flutter the morale flag attribute: green when all is well, red when
/// the camp is looking for the hero.
fn wave_morale_flag(state: &mut State, machine: &mut dyn Machine) {
    state.flag_wave_counter = state.flag_wave_counter.wrapping_add(1);
    let bright = state.flag_wave_counter & 8 != 0;
    let attribute = match (state.red_flag, bright) {
        (false, false) => ATTRIBUTE_GREEN_OVER_BLACK,
        (false, true) => ATTRIBUTE_BRIGHT_GREEN_OVER_BLACK,
        (true, false) => ATTRIBUTE_RED_OVER_BLACK,
        (true, true) => ATTRIBUTE_BRIGHT_RED_OVER_BLACK,
    };
    machine.screen().attributes[MORALE_FLAG_ATTRIBUTES_OFFSET] = attribute;
}

/// Redraw the score digits.
fn draw_score(state: &State, machine: &mut dyn Machine) {
    for (i, digit) in state.score.iter().enumerate() {
        messages::plot_glyph(
            machine,
            SCORE_ADDRESS + i,
            char::from(b'0' + digit),
        );
    }
}

/// Hold until the break chord is released, then ask for confirmation:
/// space again confirms, any movement key cancels.
fn confirm_break(state: &mut State, machine: &mut dyn Machine) -> Flow {
    let _ = state;
    loop {
        if machine.sleep(TICK_TSTATES) {
            return Err(Interrupt::Quit);
        }
        if !input::break_key_pressed(machine) {
            break;
        }
    }
    loop {
        if machine.sleep(TICK_TSTATES) {
            return Err(Interrupt::Quit);
        }
        let space = !machine.in_port(spectrum::ports::PORT_KEYBOARD_SPACESYMSHFTMNB) & 0x01 != 0;
        if space {
            return Err(Interrupt::Reset);
        }
        let any_row_1 = !machine.in_port(spectrum::ports::PORT_KEYBOARD_12345) & 0x1F != 0;
        if any_row_1 {
            return Ok(());
        }
    }
}

// =============================================================================
// Room and map setup
// =============================================================================

/// Set up the interior the hero just walked into.
fn enter_room(state: &mut State, machine: &mut dyn Machine) -> Flow {
    let room = state.vischars[HERO_VISCHAR].room;
    debug_assert!(room != ROOM_0_OUTDOORS);
    state.room_index = room;

    // Tunnels are crawled through.
    state.vischars[HERO_VISCHAR].crawl = room >= ROOM_29_SECOND_TUNNEL_START;

    // Non-hero slots are stale in the new room.
    for index in 1..VISCHARS_LENGTH {
        if !state.vischars[index].is_empty() {
            vischar::reset_visible_character(state, index);
        }
    }

    rooms::setup_room(state);
    rooms::plot_interior_tiles(state);
    vischar::setup_movable_items(state);
    vischar::spawn_characters(state, machine)?;

    let pos = state.vischars[HERO_VISCHAR].mi.pos;
    state.vischars[HERO_VISCHAR].iso_pos = project(&pos);

    render::plot_sprites(state);
    render::zoombox(state, machine)?;
    Ok(())
}

/// Set up the exterior map around the hero.
fn enter_outdoors(state: &mut State, machine: &mut dyn Machine) -> Flow {
    state.room_index = ROOM_0_OUTDOORS;
    state.vischars[HERO_VISCHAR].crawl = false;

    for index in 1..VISCHARS_LENGTH {
        if !state.vischars[index].is_empty() {
            vischar::reset_visible_character(state, index);
        }
    }

    let pos = state.vischars[HERO_VISCHAR].mi.pos;
    state.vischars[HERO_VISCHAR].iso_pos = project(&pos);

    // Centre the camera on the hero, clamped to the map.
    let x = (state.vischars[HERO_VISCHAR].iso_pos.x / 8) as i16 - (COLUMNS / 2) as i16;
    let y = (state.vischars[HERO_VISCHAR].iso_pos.y / 8) as i16 - (ROWS / 2) as i16;
    state.map_position = Pos8 {
        x: x.clamp(0, map::MAX_MAP_X as i16) as u8,
        y: y.clamp(0, map::MAX_MAP_Y as i16) as u8,
    };

    map::plot_exterior_tiles(state);
    vischar::spawn_characters(state, machine)?;
    Ok(())
}

// =============================================================================
// The tick
// =============================================================================

/// One pass of the main loop body, in the original's order.
fn tick(state: &mut State, machine: &mut dyn Machine) -> Flow {
    // A broken man stops listening to the player.
    if state.morale == MORALE_MIN && !state.morale_exhausted {
        state.morale_exhausted = true;
        queue_message(state, messages::MESSAGE_MORALE_IS_ZERO);
    }

    if input::break_key_pressed(machine) {
        confirm_break(state, machine)?;
    }

    messages::message_display(state, machine);

    if !state.in_solitary {
        input::process_player_input(state, machine)?;
    }

    in_permitted_area(state, machine)?;

    // Restore the tile layer beneath the sprites.
    if state.room_index == ROOM_0_OUTDOORS {
        map::plot_exterior_tiles(state);
    } else {
        rooms::plot_interior_tiles(state);
    }

    driver::move_a_character(state);
    driver::automatics(state)?;
    vischar::purge_invisible_characters(state);
    vischar::spawn_characters(state, machine)?;
    items::mark_nearby_items(state);

    sound::ring_bell(state, machine);

    crate::animation::animate(state)?;

    if let Some(direction) = animation::hero_map_direction(state) {
        map::move_map(state, direction);
    }

    messages::message_display(state, machine);
    sound::ring_bell(state, machine);

    render::plot_sprites(state);
    render::copy_window_buf_to_screen(state, machine);
    draw_score(state, machine);

    sound::ring_bell(state, machine);

    if state.day_or_night_is_night {
        searchlight::nighttime(state, machine);
    }

    wave_morale_flag(state, machine);

    if state.ticker % EVENT_INTERVAL == 0 {
        events::dispatch_timed_event(state);
    }
    events::tick_clock(state);
    state.ticker += 1;

    machine.stamp();
    if machine.sleep(TICK_TSTATES) {
        return Err(Interrupt::Quit);
    }
    Ok(())
}

/// Run one main-loop iteration, playing the role of the original's
/// setjmp anchor. Returns true when the host asked to quit.
pub fn main_loop_iter(state: &mut State, machine: &mut dyn Machine) -> bool {
    match tick(state, machine) {
        Ok(()) => false,
        Err(Interrupt::Quit) => true,
        Err(Interrupt::NewRoom) => loop {
            match enter_room(state, machine) {
                Ok(()) => break false,
                Err(Interrupt::Quit) => break true,
                Err(Interrupt::NewRoom) => continue,
                Err(Interrupt::Outdoors) => match enter_outdoors(state, machine) {
                    Ok(()) => break false,
                    Err(Interrupt::Quit) => break true,
                    Err(_) => continue,
                },
                Err(Interrupt::Reset) => {
                    reset_game_state(state);
                    break false;
                }
            }
        },
        Err(Interrupt::Outdoors) => match enter_outdoors(state, machine) {
            Ok(()) => false,
            Err(Interrupt::Quit) => true,
            Err(_) => {
                reset_game_state(state);
                false
            }
        },
        Err(Interrupt::Reset) => {
            reset_game_state(state);
            false
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// First-time setup: wipe the display and draw the fixed furniture.
pub fn setup(state: &mut State, machine: &mut dyn Machine) {
    machine.screen().clear();
    plot_text(machine, Screen::pixel_offset(8 * 8, 0), "THE GREAT ESCAPE");
    plot_text(machine, SCORE_ADDRESS - 6, "SCORE");
    draw_score(state, machine);
    machine.draw(None);
}

/// Title menu: keys 1 to 4 pick the input device, ENTER starts.
/// Returns 0 to start a game, 1 if the host quit.
pub fn menu(state: &mut State, machine: &mut dyn Machine) -> i32 {
    plot_text(machine, Screen::pixel_offset(4 * 8, 64), "1 KEYBOARD");
    plot_text(machine, Screen::pixel_offset(4 * 8, 80), "2 KEMPSTON JOYSTICK");
    plot_text(machine, Screen::pixel_offset(4 * 8, 96), "3 SINCLAIR JOYSTICK");
    plot_text(machine, Screen::pixel_offset(4 * 8, 112), "4 PROTEK JOYSTICK");
    plot_text(machine, Screen::pixel_offset(4 * 8, 144), "PRESS ENTER TO START");
    machine.draw(None);

    loop {
        let row = !machine.in_port(spectrum::ports::PORT_KEYBOARD_12345);
        let chosen = if row & 0x01 != 0 {
            Some(InputDevice::Keyboard)
        } else if row & 0x02 != 0 {
            Some(InputDevice::Kempston)
        } else if row & 0x04 != 0 {
            Some(InputDevice::Sinclair)
        } else if row & 0x08 != 0 {
            Some(InputDevice::Protek)
        } else {
            None
        };
        if let Some(device) = chosen {
            if state.chosen_input_device != device {
                state.chosen_input_device = device;
                sound::play_speaker(machine, SOUND_MENU_SELECT);
            }
        }

        let enter = !machine.in_port(spectrum::ports::PORT_KEYBOARD_ENTERLKJH) & 0x01 != 0;
        if enter {
            return 0;
        }
        machine.stamp();
        if machine.sleep(TICK_TSTATES) {
            return 1;
        }
    }
}

/// In-game setup: reset the world and show the opening room.
pub fn setup2(state: &mut State, machine: &mut dyn Machine) {
    reset_game_state(state);
    render::copy_window_buf_to_screen(state, machine);
    draw_score(state, machine);
    machine.draw(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum::BufferMachine;

    fn game() -> (Box<State>, BufferMachine) {
        let mut state = State::new().unwrap();
        reset_game_state(&mut state);
        (state, BufferMachine::new())
    }

    #[test]
    fn test_reset_seals_hero_in_bed() {
        let (state, _machine) = game();
        assert_eq!(state.room_index, ROOM_2_HUT2LEFT);
        assert!(state.hero_in_bed);
        assert_eq!(state.morale, MORALE_MAX);
        assert_eq!(state.items_held, [ITEM_NONE; 2]);
        assert_eq!(state.vischars[HERO_VISCHAR].character, 0);
        // Character records match the reset table.
        assert_eq!(state.character_structs[16].route.index, ROUTEINDEX_WANDER);
    }

    #[test]
    fn test_scenario_fresh_game_first_ticks() {
        let (mut state, mut machine) = game();

        // Eight ticks into a fresh game the day has dawned: the hero is
        // routed across hut 2 and the clock reads one.
        for _ in 0..8 {
            assert!(!main_loop_iter(&mut state, &mut machine));
        }
        assert_eq!(
            state.vischars[HERO_VISCHAR].route.base_index(),
            ROUTEINDEX_42_HUT2_LEFT_TO_RIGHT
        );
        assert_eq!(state.vischars[HERO_VISCHAR].route.step, 0);
        assert_eq!(state.room_index, ROOM_2_HUT2LEFT);
        assert_eq!(state.gametime, 1);
    }

    #[test]
    fn test_solitary_confiscates_and_relocates() {
        let (mut state, _machine) = game();
        state.items_held = [ITEM_COMPASS, ITEM_NONE];
        // Leave the shovel lying outdoors.
        state.item_structs[ITEM_SHOVEL as usize]
            .set_room_and_flags(ROOM_0_OUTDOORS, ItemRoomFlags::empty());

        let morale = state.morale;
        let result = solitary(&mut state);
        assert_eq!(result, Err(Interrupt::NewRoom));

        assert_eq!(state.vischars[HERO_VISCHAR].room, ROOM_24_SOLITARY);
        assert!(state.in_solitary);
        assert_eq!(state.items_held, [ITEM_NONE; 2]);
        // Outdoor items all discovered; the shovel goes home.
        assert_ne!(state.item_structs[ITEM_SHOVEL as usize].room(), ROOM_0_OUTDOORS);
        // Three discoveries at -5 each (compass, shovel, and the
        // wiresnips lying out by the wire), plus the -35 for capture.
        assert_eq!(state.morale, morale - 35 - 15);
        // The commandant is on his way.
        assert_eq!(
            state.character_structs[0].route.base_index(),
            ROUTEINDEX_36_GO_TO_SOLITARY
        );
    }

    #[test]
    fn test_escape_verdict_with_compass_and_papers() {
        let (mut state, mut machine) = game();
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        state.items_held = [ITEM_COMPASS, ITEM_PAPERS];
        state.vischars[HERO_VISCHAR].iso_pos = Pos16 { x: 136, y: 1088 };

        let result = in_permitted_area(&mut state, &mut machine);
        assert_eq!(result, Err(Interrupt::Reset));
    }

    #[test]
    fn test_escape_verdict_unprepared_goes_to_solitary() {
        let (mut state, mut machine) = game();
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        state.items_held = [ITEM_NONE, ITEM_NONE];
        state.vischars[HERO_VISCHAR].iso_pos = Pos16 { x: 100, y: 500 };

        let result = in_permitted_area(&mut state, &mut machine);
        assert_eq!(result, Err(Interrupt::NewRoom));
        assert!(state.in_solitary);
    }

    #[test]
    fn test_red_flag_outside_compound() {
        let (mut state, mut machine) = game();
        state.room_index = ROOM_0_OUTDOORS;
        state.vischars[HERO_VISCHAR].room = ROOM_0_OUTDOORS;
        // Between the wire and the woods, but still on the map.
        state.vischars[HERO_VISCHAR].mi.pos = MapPos8::new(80, 80, 6).scale_up();
        let pos = state.vischars[HERO_VISCHAR].mi.pos;
        state.vischars[HERO_VISCHAR].iso_pos = project(&pos);

        in_permitted_area(&mut state, &mut machine).unwrap();
        assert!(state.red_flag);

        // Back inside the compound the flag goes green.
        state.vischars[HERO_VISCHAR].mi.pos = MapPos8::new(120, 100, 6).scale_up();
        let pos = state.vischars[HERO_VISCHAR].mi.pos;
        state.vischars[HERO_VISCHAR].iso_pos = project(&pos);
        in_permitted_area(&mut state, &mut machine).unwrap();
        assert!(!state.red_flag);
    }

    #[test]
    fn test_main_loop_survives_many_ticks() {
        let (mut state, mut machine) = game();
        for _ in 0..600 {
            if main_loop_iter(&mut state, &mut machine) {
                panic!("unexpected quit");
            }
        }
        // The day has moved on.
        assert!(state.gametime > 0);
    }

    #[test]
    fn test_on_screen_flag_mirrors_vischar_table() {
        let (mut state, mut machine) = game();
        for _ in 0..400 {
            main_loop_iter(&mut state, &mut machine);

            // A record claims on-screen exactly when some slot holds its
            // character, and never more than one slot does.
            for character in 1..CHARACTER_STRUCTS_LENGTH as u8 {
                let slots = (1..VISCHARS_LENGTH)
                    .filter(|&i| state.vischars[i].character == character)
                    .count();
                let on_screen = state.character_structs[character as usize].on_screen();
                assert_eq!(on_screen, slots == 1, "character {character}");
                assert!(slots <= 1, "character {character} duplicated");
            }
            // The hero never leaves slot 0.
            assert_eq!(state.vischars[HERO_VISCHAR].character, 0);
        }
    }

    #[test]
    fn test_bribe_acceptance_calls_off_pursuit() {
        let (mut state, _machine) = game();
        state.bribed_character = CHARACTER_20_PRISONER_1;
        state.items_held = [ITEM_BRIBE, ITEM_NONE];
        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].flags.pursuit = Pursuit::Pursue;

        accept_bribe(&mut state, 1);
        assert_eq!(state.bribed_character, CHARACTER_NONE);
        assert_eq!(state.items_held[0], ITEM_NONE);
        assert_eq!(state.vischars[1].flags.pursuit, Pursuit::None);
        assert!(state.messages.pending());
    }
}
