/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The character behaviour engine: pursuit modes, route walking,
//! axis-dominant movement, and the character events that fire when a
//! route runs out.

use crate::constants::*;
use crate::data::roomdefs::*;
use crate::rooms::set_roomdef;
use crate::route::{self, Target};
use crate::state::State;
use crate::types::*;

// Character event handler ids.
const EVENT_CHARACTER_BED: u8 = 0;
const EVENT_CHARACTER_SITS: u8 = 1;
const EVENT_CHARACTER_SLEEPS: u8 = 2;
const EVENT_EXIT_HUT_WANDER: u8 = 3;
const EVENT_YARD_WANDER: u8 = 4;
const EVENT_HERO_RELEASE: u8 = 5;
const EVENT_HERO_LEAVE_SOLITARY: u8 = 6;
const EVENT_HERO_SITS: u8 = 7;
const EVENT_HERO_SLEEPS: u8 = 8;

/// Route-to-event map consulted when a route runs out. Three of the
/// prisoner sits routes never fire; the original's table omitted them
/// too.
static ROUTE2EVENT: [(u8, u8); 24] = [
    (ROUTEINDEX_38_GUARD_12_BED, EVENT_CHARACTER_BED),
    (39, EVENT_CHARACTER_BED),
    (40, EVENT_CHARACTER_BED),
    (41, EVENT_CHARACTER_BED),
    (7, EVENT_CHARACTER_SLEEPS),
    (8, EVENT_CHARACTER_SLEEPS),
    (9, EVENT_CHARACTER_SLEEPS),
    (10, EVENT_CHARACTER_SLEEPS),
    (11, EVENT_CHARACTER_SLEEPS),
    (12, EVENT_CHARACTER_SLEEPS),
    (13, EVENT_CHARACTER_SLEEPS),
    (ROUTEINDEX_5_EXIT_HUT2, EVENT_EXIT_HUT_WANDER),
    (ROUTEINDEX_6_EXIT_HUT3, EVENT_EXIT_HUT_WANDER),
    (ROUTEINDEX_14_GO_TO_YARD, EVENT_YARD_WANDER),
    (15, EVENT_YARD_WANDER),
    (ROUTEINDEX_16_BREAKFAST_25, EVENT_CHARACTER_SITS),
    (17, EVENT_CHARACTER_SITS),
    (18, EVENT_CHARACTER_SITS),
    (19, EVENT_CHARACTER_SITS),
    (20, EVENT_CHARACTER_SITS),
    (ROUTEINDEX_36_GO_TO_SOLITARY, EVENT_HERO_RELEASE),
    (ROUTEINDEX_37_HERO_LEAVE_SOLITARY, EVENT_HERO_LEAVE_SOLITARY),
    (ROUTEINDEX_43_BREAKFAST_REVERSE, EVENT_HERO_SITS),
    (ROUTEINDEX_44_HUT2_RIGHT_TO_LEFT, EVENT_HERO_SLEEPS),
];

/// A character addressed either as a live vischar or as an off-screen
/// record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Holder {
    Vischar(usize),
    Struct(usize),
}

fn holder_route(state: &State, holder: Holder) -> Route {
    match holder {
        Holder::Vischar(i) => state.vischars[i].route,
        Holder::Struct(i) => state.character_structs[i].route,
    }
}

fn set_holder_route(state: &mut State, holder: Holder, route: Route) {
    match holder {
        Holder::Vischar(i) => {
            state.vischars[i].route = route;
            route::set_route(state, i);
        }
        Holder::Struct(i) => state.character_structs[i].route = route,
    }
}

fn holder_character(state: &State, holder: Holder) -> u8 {
    match holder {
        Holder::Vischar(i) => state.vischars[i].character,
        Holder::Struct(i) => state.character_structs[i].character,
    }
}

// =============================================================================
// Character events
// =============================================================================

/// Dispatch the character event for an ended route, if one is mapped.
/// Returns true if an event ran.
pub fn character_event(state: &mut State, holder: Holder) -> bool {
    let route = holder_route(state, holder);
    let Some(&(_, handler)) = ROUTE2EVENT
        .iter()
        .find(|&&(r, _)| r == route.base_index())
    else {
        return false;
    };

    match handler {
        EVENT_CHARACTER_BED => charevnt_character_bed(state, holder),
        EVENT_CHARACTER_SITS => charevnt_character_sits(state, holder),
        EVENT_CHARACTER_SLEEPS => charevnt_character_sleeps(state, holder),
        EVENT_EXIT_HUT_WANDER => {
            // Out of the hut: mill about the hut area.
            set_holder_route(state, holder, Route::new(ROUTEINDEX_WANDER, 32));
        }
        EVENT_YARD_WANDER => {
            set_holder_route(state, holder, Route::new(ROUTEINDEX_WANDER, 8));
        }
        EVENT_HERO_RELEASE => charevnt_hero_release(state),
        EVENT_HERO_LEAVE_SOLITARY => {
            set_holder_route(state, holder, Route::new(ROUTEINDEX_HALT, 0));
        }
        EVENT_HERO_SITS => charevnt_hero_sits(state),
        EVENT_HERO_SLEEPS => charevnt_hero_sleeps(state),
        _ => unreachable!("unknown character event handler {handler}"),
    }
    true
}

/// A guard reaches his bunk: off duty until morning.
fn charevnt_character_bed(state: &mut State, holder: Holder) {
    set_holder_route(state, holder, Route::new(ROUTEINDEX_HALT, 0));
}

/// A prisoner reaches a mess bench: mark it occupied and sit.
fn charevnt_character_sits(state: &mut State, holder: Holder) {
    let route = holder_route(state, holder).base_index();
    // Routes 18..=20 sit at hall 25's benches; 16/17 at hall 23's.
    match route {
        18 => set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_D, OBJ_PRISONER_SAT_MID_TABLE),
        19 => set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_E, OBJ_PRISONER_SAT_MID_TABLE),
        20 => set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_F, OBJ_PRISONER_SAT_MID_TABLE),
        _ => {}
    }
    set_holder_route(state, holder, Route::new(ROUTEINDEX_HALT, 0));
}

/// A prisoner reaches his bunk: mark the bed occupied and sleep.
fn charevnt_character_sleeps(state: &mut State, holder: Holder) {
    let character = holder_character(state, holder);
    let beds: [(u8, u8); 6] = [
        (ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_A),
        (ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_B),
        (ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_C),
        (ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_D),
        (ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_E),
        (ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_F),
    ];
    if (CHARACTER_20_PRISONER_1..=CHARACTER_25_PRISONER_6).contains(&character) {
        let (room, offset) = beds[(character - CHARACTER_20_PRISONER_1) as usize];
        set_roomdef(state, room, offset, OBJ_OCCUPIED_BED);
    }
    set_holder_route(state, holder, Route::new(ROUTEINDEX_HALT, 0));
}

/// The commandant arrives at the solitary cell: release the hero.
fn charevnt_hero_release(state: &mut State) {
    state.in_solitary = false;
    crate::messages::queue_message(state, crate::messages::MESSAGE_WAIT_FOR_RELEASE);
    // The hero walks out; the commandant resumes his rounds. His tour
    // re-enters at step two, as it always has.
    state.vischars[HERO_VISCHAR].route = Route::new(ROUTEINDEX_37_HERO_LEAVE_SOLITARY, 0);
    route::set_route(state, HERO_VISCHAR);
    for index in 1..VISCHARS_LENGTH {
        if state.vischars[index].character == CHARACTER_0_COMMANDANT {
            state.vischars[index].route = Route::new(ROUTEINDEX_3_COMMANDANT, 2);
            route::set_route(state, index);
        }
    }
    if !state.character_structs[0].on_screen() {
        state.character_structs[0].route = Route::new(ROUTEINDEX_3_COMMANDANT, 2);
    }
}

/// The hero reaches the breakfast bench.
fn charevnt_hero_sits(state: &mut State) {
    state.hero_in_breakfast = true;
    set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_G, OBJ_PRISONER_SAT_END_TABLE);
    state.vischars[HERO_VISCHAR].route = Route::new(ROUTEINDEX_HALT, 0);
}

/// The hero reaches his bunk.
fn charevnt_hero_sleeps(state: &mut State) {
    state.hero_in_bed = true;
    set_roomdef(state, ROOM_2_HUT2LEFT, ROOMDEF_2_BED, OBJ_OCCUPIED_BED);
    state.vischars[HERO_VISCHAR].route = Route::new(ROUTEINDEX_HALT, 0);
}

// =============================================================================
// Route stepping
// =============================================================================

/// The route ran out. The hero always raises a character event; guards
/// bounce back along their route; everyone else raises an event where
/// one is mapped, or bounces.
pub fn route_ended(state: &mut State, holder: Holder) {
    let character = holder_character(state, holder);

    if let Holder::Vischar(HERO_VISCHAR) = holder {
        if character_event(state, holder) {
            return;
        }
        set_holder_route(state, holder, Route::new(ROUTEINDEX_HALT, 0));
        return;
    }

    let is_patrol_guard =
        (CHARACTER_1_GUARD_1..=CHARACTER_11_GUARD_11).contains(&character);
    if !is_patrol_guard && character_event(state, holder) {
        return;
    }

    // Turn around and walk the route back.
    let mut route = holder_route(state, holder);
    route.index ^= ROUTEINDEX_REVERSED;
    route.step = step_back(&route);
    set_holder_route(state, holder, route);
}

/// First step after reversing at a route's end.
fn step_back(route: &Route) -> u8 {
    let bytes = crate::data::routes::ROUTES[route.base_index() as usize];
    if route.is_reversed() {
        // Now walking backwards from one before the terminator.
        (bytes.len() as u8).saturating_sub(2)
    } else {
        0
    }
}

/// Step a vischar's route onward and latch the next target, handling
/// the route running out.
pub fn advance_route(state: &mut State, index: usize) {
    let mut route = state.vischars[index].route;
    if route.index == ROUTEINDEX_HALT {
        return;
    }
    if route.index == ROUTEINDEX_WANDER {
        // Wandering never advances a step; a fresh random location comes
        // out of the same window.
        route::set_route(state, index);
        return;
    }

    if route.is_reversed() {
        if route.step == 0 {
            route_ended(state, Holder::Vischar(index));
            return;
        }
        route.step -= 1;
    } else {
        route.step += 1;
    }
    state.vischars[index].route = route;

    if route::set_route(state, index) == Target::Ends {
        route_ended(state, Holder::Vischar(index));
    }
}

/// The hero went through a door the contact scan found. If his route
/// was aiming at that same door, it has served its purpose.
pub fn hero_passed_through_door(state: &mut State, door_index: u8) {
    let hero = &state.vischars[HERO_VISCHAR];
    if !hero.flags.target_is_door
        || hero.route.index == ROUTEINDEX_HALT
        || hero.route.index == ROUTEINDEX_WANDER
    {
        return;
    }
    let route = hero.route;
    if let Target::Door(current, _) = route::get_target(state, &route) {
        if current & !DOOR_REVERSE == door_index & !DOOR_REVERSE {
            advance_route(state, HERO_VISCHAR);
        }
    }
}

/// The actor is standing on its target: step the route and fetch the
/// next one.
pub fn target_reached(state: &mut State, index: usize) -> Flow {
    let route = state.vischars[index].route;

    // Passing through a targeted door moves the actor to the far side.
    if state.vischars[index].flags.target_is_door {
        let target = route::get_target(state, &route);
        if let Target::Door(door_index, _) = target {
            let other = crate::doors::get_door_other_side(door_index);
            if index == HERO_VISCHAR {
                advance_route(state, index);
                state.vischars[index].room = other.room();
                state.current_door = door_index;
                return crate::doors::transition(state, &other.pos);
            }
            let vischar = &mut state.vischars[index];
            vischar.room = other.room();
            vischar.mi.pos = if other.room() == ROOM_0_OUTDOORS {
                MapPos16 {
                    u: i16::from(other.pos.u) * 4,
                    v: i16::from(other.pos.v) * 4,
                    w: i16::from(other.pos.w) * 4,
                }
            } else {
                other.pos.widen()
            };
        }
    }

    advance_route(state, index);
    Ok(())
}

// =============================================================================
// Movement
// =============================================================================

/// Scale between a target's stored units and live position units.
fn target_scale(state: &State, index: usize) -> i16 {
    let vischar = &state.vischars[index];
    if vischar.room != ROOM_0_OUTDOORS {
        1
    } else if vischar.flags.target_is_door {
        4
    } else {
        8
    }
}

/// Movement along the u axis; zero means this axis has arrived.
fn vischar_move_u(state: &mut State, index: usize) -> u8 {
    let scale = target_scale(state, index);
    let vischar = &state.vischars[index];
    let delta = vischar.mi.pos.u - i16::from(vischar.target.u) * scale;
    if delta >= 3 {
        INPUT_UP_LEFT
    } else if delta <= -3 {
        INPUT_DOWN_RIGHT
    } else {
        state.vischars[index].counter_and_flags.y_dominant = true;
        INPUT_NONE
    }
}

/// Movement along the v axis; zero means this axis has arrived.
fn vischar_move_v(state: &mut State, index: usize) -> u8 {
    let scale = target_scale(state, index);
    let vischar = &state.vischars[index];
    let delta = vischar.mi.pos.v - i16::from(vischar.target.v) * scale;
    if delta >= 3 {
        INPUT_DOWN_LEFT
    } else if delta <= -3 {
        INPUT_UP_RIGHT
    } else {
        state.vischars[index].counter_and_flags.y_dominant = false;
        INPUT_NONE
    }
}

/// Feed a movement input to the animation chooser, kicking it awake
/// when the input changes.
fn set_input(state: &mut State, index: usize, input: u8) {
    let vischar = &mut state.vischars[index];
    if vischar.input & !INPUT_KICK != input {
        vischar.input = input | INPUT_KICK;
    }
}

// =============================================================================
// Behaviour
// =============================================================================

/// Position the pursuit target: wherever the hero stands now.
fn target_hero(state: &mut State, index: usize) {
    let hero_pos = state.vischars[HERO_VISCHAR].mi.pos;
    let target = if state.vischars[index].room == ROOM_0_OUTDOORS {
        hero_pos.scale_down()
    } else {
        hero_pos.narrow()
    };
    state.vischars[index].target = target;
    state.vischars[index].flags.target_is_door = false;
}

/// Per-tick decision driver for one vischar.
pub fn character_behaviour(state: &mut State, index: usize) -> Flow {
    if state.vischars[index].is_empty() {
        return Ok(());
    }

    // Blocked actors wait out their delay counter before moving again;
    // a dog that has finished its meal keels over instead.
    if state.vischars[index].counter_and_flags.counter > 0 {
        state.vischars[index].counter_and_flags.counter -= 1;
        if state.vischars[index].counter_and_flags.counter == 0
            && state.vischars[index].flags.pursuit == Pursuit::DogFood
        {
            let vischar = &mut state.vischars[index];
            vischar.flags.pursuit = Pursuit::None;
            vischar.route = Route::new(ROUTEINDEX_HALT, 0);
            set_input(state, index, INPUT_NONE);
        }
        return Ok(());
    }

    let character = state.vischars[index].character;

    // Spontaneous mode changes.
    if index != HERO_VISCHAR && state.vischars[index].flags.pursuit == Pursuit::None {
        if is_dog(character)
            && state.item_structs[ITEM_FOOD as usize]
                .room_flags()
                .contains(ItemRoomFlags::NEARBY_7)
        {
            state.vischars[index].flags.pursuit = Pursuit::DogFood;
        } else if is_hostile(character)
            && !state.hero_is_automatic()
            && state.vischars[index].room == state.vischars[HERO_VISCHAR].room
        {
            // A guard keeps a player-steered hero company.
            state.vischars[index].flags.pursuit = Pursuit::Hassle;
        }
    }

    match state.vischars[index].flags.pursuit {
        Pursuit::None => {}
        Pursuit::Pursue => {
            target_hero(state, index);
        }
        Pursuit::Hassle => {
            if state.hero_is_automatic() {
                state.vischars[index].flags.pursuit = Pursuit::None;
                route::set_route(state, index);
            } else {
                target_hero(state, index);
            }
        }
        Pursuit::DogFood => {
            let food = &state.item_structs[ITEM_FOOD as usize];
            if food.room_flags().contains(ItemRoomFlags::NEARBY_7) {
                let pos = food.pos;
                state.vischars[index].target = pos;
                state.vischars[index].flags.target_is_door = false;
            } else {
                state.vischars[index].flags.pursuit = Pursuit::None;
                route::set_route(state, index);
            }
        }
        Pursuit::SawBribe => {
            let bribed = state.bribed_character;
            let slot = (0..VISCHARS_LENGTH)
                .find(|&i| !state.vischars[i].is_empty() && state.vischars[i].character == bribed);
            match slot {
                Some(slot) => {
                    let pos = state.vischars[slot].mi.pos;
                    let target = if state.vischars[index].room == ROOM_0_OUTDOORS {
                        pos.scale_down()
                    } else {
                        pos.narrow()
                    };
                    state.vischars[index].target = target;
                    state.vischars[index].flags.target_is_door = false;
                }
                None => {
                    state.vischars[index].flags.pursuit = Pursuit::None;
                    route::set_route(state, index);
                }
            }
        }
    }

    // A zero route stands still, except while pursuing something.
    if state.vischars[index].route.index == ROUTEINDEX_HALT
        && state.vischars[index].flags.pursuit == Pursuit::None
    {
        set_input(state, index, INPUT_NONE);
        return Ok(());
    }

    // Axis-dominant movement: finish one axis, then the other.
    let y_dominant = state.vischars[index].counter_and_flags.y_dominant;
    let input = if y_dominant {
        let input = vischar_move_v(state, index);
        if input != INPUT_NONE {
            input
        } else {
            vischar_move_u(state, index)
        }
    } else {
        let input = vischar_move_u(state, index);
        if input != INPUT_NONE {
            input
        } else {
            vischar_move_v(state, index)
        }
    };

    if input == INPUT_NONE {
        // Both axes arrived.
        if state.vischars[index].flags.pursuit == Pursuit::DogFood {
            // The dog reaches the food and stops to eat.
            let poisoned = state.item_structs[ITEM_FOOD as usize]
                .item_flags()
                .contains(ItemFlags::POISONED);
            state.vischars[index].counter_and_flags.counter =
                if poisoned { 255 } else { 32 };
            set_input(state, index, INPUT_NONE);
            return Ok(());
        }
        if state.vischars[index].flags.pursuit == Pursuit::None {
            return target_reached(state, index);
        }
        set_input(state, index, INPUT_NONE);
    } else {
        set_input(state, index, input);
    }
    Ok(())
}

/// Behaviour for every occupied slot. The hero only follows the engine
/// while under automatic control.
pub fn automatics(state: &mut State) -> Flow {
    for index in 0..VISCHARS_LENGTH {
        if index == HERO_VISCHAR && !state.hero_is_automatic() {
            continue;
        }
        character_behaviour(state, index)?;
    }
    Ok(())
}

/// Put every visible hostile on the hero's tail.
pub fn hostiles_pursue(state: &mut State) {
    for index in 1..VISCHARS_LENGTH {
        let vischar = &mut state.vischars[index];
        if !vischar.is_empty() && is_hostile(vischar.character) {
            vischar.flags.pursuit = Pursuit::Pursue;
        }
    }
}

/// Mark every visible hostile as having seen the bribe.
pub fn hostiles_saw_bribe(state: &mut State) {
    for index in 1..VISCHARS_LENGTH {
        let vischar = &mut state.vischars[index];
        if !vischar.is_empty() && is_hostile(vischar.character) {
            vischar.flags.pursuit = Pursuit::SawBribe;
        }
    }
}

// =============================================================================
// Off-screen characters
// =============================================================================

/// Advance one off-screen character a step along its route. One
/// character moves per call, round robin.
pub fn move_a_character(state: &mut State) {
    for _ in 0..CHARACTER_STRUCTS_LENGTH {
        let index = state.character_index as usize;
        state.character_index = (state.character_index + 1) % CHARACTER_STRUCTS_LENGTH as u8;
        if state.character_structs[index].on_screen() {
            continue;
        }

        let route = state.character_structs[index].route;
        if route.index == ROUTEINDEX_HALT {
            return;
        }

        match route::get_target(state, &route) {
            Target::Ends => route_ended(state, Holder::Struct(index)),
            Target::Door(door_index, pos) => {
                // Door positions for outdoor sides are doubled.
                let record = &state.character_structs[index];
                let outdoors = record.room == ROOM_0_OUTDOORS;
                let here = if outdoors {
                    MapPos8 {
                        u: record.pos.u.wrapping_mul(2),
                        v: record.pos.v.wrapping_mul(2),
                        w: record.pos.w,
                    }
                } else {
                    record.pos
                };
                if pos_close(&here, &pos) {
                    let other = crate::doors::get_door_other_side(door_index);
                    let record = &mut state.character_structs[index];
                    record.room = other.room();
                    record.pos = if other.room() == ROOM_0_OUTDOORS {
                        MapPos8 {
                            u: other.pos.u / 2,
                            v: other.pos.v / 2,
                            w: other.pos.w / 2,
                        }
                    } else {
                        other.pos
                    };
                    advance_struct_route(state, index);
                } else {
                    let toward = if outdoors {
                        MapPos8 { u: pos.u / 2, v: pos.v / 2, w: pos.w / 2 }
                    } else {
                        pos
                    };
                    step_struct_towards(state, index, &toward);
                }
            }
            Target::Location(pos) => {
                if pos_close(&state.character_structs[index].pos, &pos) {
                    advance_struct_route(state, index);
                } else {
                    step_struct_towards(state, index, &pos);
                }
            }
        }
        return;
    }
}

fn pos_close(a: &MapPos8, b: &MapPos8) -> bool {
    (i16::from(a.u) - i16::from(b.u)).abs() < 3 && (i16::from(a.v) - i16::from(b.v)).abs() < 3
}

fn step_struct_towards(state: &mut State, index: usize, target: &MapPos8) {
    let pos = &mut state.character_structs[index].pos;
    pos.u = step_coord(pos.u, target.u);
    pos.v = step_coord(pos.v, target.v);
}

fn step_coord(from: u8, to: u8) -> u8 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 2.min(to - from),
        std::cmp::Ordering::Greater => from - 2.min(from - to),
        std::cmp::Ordering::Equal => from,
    }
}

fn advance_struct_route(state: &mut State, index: usize) {
    let mut route = state.character_structs[index].route;
    if route.index == ROUTEINDEX_WANDER {
        return;
    }
    if route.is_reversed() {
        if route.step == 0 {
            route_ended(state, Holder::Struct(index));
            return;
        }
        route.step -= 1;
    } else {
        route.step += 1;
    }
    state.character_structs[index].route = route;
    if route::get_target(state, &route) == Target::Ends {
        route_ended(state, Holder::Struct(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn behaviour_state() -> Box<State> {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        state
    }

    #[test]
    fn test_halted_route_stands_still() {
        let mut state = behaviour_state();
        state.vischars[1].character = CHARACTER_20_PRISONER_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].route = Route::new(ROUTEINDEX_HALT, 0);
        let pos = state.vischars[1].mi.pos;

        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].mi.pos, pos);
        assert_eq!(state.vischars[1].input & !INPUT_KICK, INPUT_NONE);
    }

    #[test]
    fn test_movement_aims_at_target() {
        let mut state = behaviour_state();
        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].route = Route::new(2, 0);
        state.vischars[1].mi.pos = MapPos16::new(800, 800, 48);
        state.vischars[1].target = MapPos8::new(70, 100, 6);

        // u: 800 vs 70*8=560 -> positive delta, move up-left.
        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].input & !INPUT_KICK, INPUT_UP_LEFT);

        // u arrived: v takes over; 700 vs 800 moves up-right.
        state.vischars[1].mi.pos.u = 560;
        state.vischars[1].mi.pos.v = 700;
        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].input & !INPUT_KICK, INPUT_UP_RIGHT);
    }

    #[test]
    fn test_dog_food_pursuit() {
        let mut state = behaviour_state();
        // Poisoned food dropped nearby.
        let food = &mut state.item_structs[ITEM_FOOD as usize];
        food.item_and_flags = ITEM_FOOD | ItemFlags::POISONED.bits();
        food.pos = MapPos8::new(100, 100, 6);
        food.set_room_and_flags(ROOM_0_OUTDOORS, ItemRoomFlags::NEARBY_7);

        state.vischars[1].character = CHARACTER_16_GUARD_DOG_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].route = Route::new(ROUTEINDEX_WANDER, 0);
        state.vischars[1].mi.pos = MapPos16::new(900, 900, 48);

        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].flags.pursuit, Pursuit::DogFood);
        assert_eq!(state.vischars[1].target, MapPos8::new(100, 100, 6));

        // Standing on the food: the dog stalls for the long poisoned
        // count.
        state.vischars[1].mi.pos = MapPos16::new(800, 800, 48);
        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].counter_and_flags.counter, 255);

        // When the count runs out the dog drops where it stands.
        for _ in 0..255 {
            character_behaviour(&mut state, 1).unwrap();
        }
        assert_eq!(state.vischars[1].flags.pursuit, Pursuit::None);
        assert_eq!(state.vischars[1].route.index, ROUTEINDEX_HALT);
    }

    #[test]
    fn test_guard_bounces_route_at_end() {
        let mut state = behaviour_state();
        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        // Last step of the perimeter walk.
        state.vischars[1].route = Route::new(2, 7);
        route::set_route(&mut state, 1);

        // Arrive: step 8 is the terminator, so the route reverses.
        state.vischars[1].mi.pos = MapPos16 {
            u: i16::from(state.vischars[1].target.u) * 8,
            v: i16::from(state.vischars[1].target.v) * 8,
            w: 48,
        };
        target_reached(&mut state, 1).unwrap();
        assert!(state.vischars[1].route.is_reversed());
        assert_eq!(state.vischars[1].route.base_index(), 2);
    }

    #[test]
    fn test_hassle_clears_when_hero_goes_automatic() {
        let mut state = behaviour_state();
        state.vischars[1].character = CHARACTER_1_GUARD_1;
        state.vischars[1].room = ROOM_0_OUTDOORS;
        state.vischars[1].route = Route::new(2, 0);
        state.vischars[1].flags.pursuit = Pursuit::Hassle;
        state.automatic_player_counter = 0; // automatic control

        character_behaviour(&mut state, 1).unwrap();
        assert_eq!(state.vischars[1].flags.pursuit, Pursuit::None);
    }

    #[test]
    fn test_move_a_character_walks_a_struct() {
        let mut state = behaviour_state();
        // Guard 1's record is off screen, walking route 2 towards a
        // location; push him away from his waypoint first.
        state.character_index = 1;
        state.character_structs[1].pos = MapPos8::new(100, 100, 6);
        let before = state.character_structs[1].pos;
        move_a_character(&mut state);
        let after = state.character_structs[1].pos;
        assert_ne!(before, after);
        // Two units per step at most, towards the waypoint.
        assert!(after.u < before.u || after.v < before.v);
    }
}
