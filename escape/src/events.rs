/*************************************************************************

This file is part of a recreation of 'The Great Escape'
Game copyright (c) 1986 Ocean Software Ltd. and Denton Designs Ltd.

Rust port maintains original logic and behaviour.

**************************************************************************/

//! The camp timetable: fifteen timed events keyed on the day clock.

use crate::constants::*;
use crate::data::roomdefs::*;
use crate::messages::{self, queue_message};
use crate::rooms::set_roomdef;
use crate::route;
use crate::searchlight;
use crate::state::State;
use crate::types::*;

/// Timed event handler ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimedEvent {
    AnotherDayDawns,
    WakeUp,
    NewRedCrossParcel,
    GoToRollCall,
    GoToBreakfast,
    EndOfBreakfast,
    GoToExercise,
    ExerciseDone,
    GoToBed,
    TimeForBed,
    NightTime,
    SearchLight,
}

/// The timetable. Roll call happens twice in the morning and twice in
/// the evening.
static TIMED_EVENTS: [(u8, TimedEvent); 15] = [
    (0, TimedEvent::AnotherDayDawns),
    (8, TimedEvent::WakeUp),
    (12, TimedEvent::NewRedCrossParcel),
    (16, TimedEvent::GoToRollCall),
    (20, TimedEvent::GoToRollCall),
    (21, TimedEvent::GoToBreakfast),
    (36, TimedEvent::EndOfBreakfast),
    (46, TimedEvent::GoToExercise),
    (64, TimedEvent::ExerciseDone),
    (74, TimedEvent::GoToRollCall),
    (78, TimedEvent::GoToRollCall),
    (79, TimedEvent::GoToBed),
    (98, TimedEvent::TimeForBed),
    (100, TimedEvent::NightTime),
    (130, TimedEvent::SearchLight),
];

/// Advance the day clock. One clock unit passes every eight main-loop
/// ticks.
pub fn tick_clock(state: &mut State) {
    if state.ticker % 8 == 0 {
        state.gametime = (state.gametime + 1) % GAMETIME_LIMIT;
    }
}

/// Dispatch the next pending timed event once the clock reaches its
/// time. At most one event fires per call; the table is walked in
/// order, wrapping with the day.
pub fn dispatch_timed_event(state: &mut State) {
    let (time, event) = TIMED_EVENTS[state.next_event_index as usize];

    // Cyclic distance from the event's time; pending events sit within
    // one dispatch window of the clock.
    let distance = (u16::from(state.gametime) + u16::from(GAMETIME_LIMIT) - u16::from(time))
        % u16::from(GAMETIME_LIMIT);
    if distance >= 64 {
        return;
    }
    state.next_event_index = (state.next_event_index + 1) % TIMED_EVENTS.len() as u8;

    log::debug!("timed event {event:?} at clock {}", state.gametime);
    match event {
        TimedEvent::AnotherDayDawns => event_another_day_dawns(state),
        TimedEvent::WakeUp => event_wake_up(state),
        TimedEvent::NewRedCrossParcel => event_new_red_cross_parcel(state),
        TimedEvent::GoToRollCall => event_go_to_roll_call(state),
        TimedEvent::GoToBreakfast => event_go_to_breakfast(state),
        TimedEvent::EndOfBreakfast => event_end_of_breakfast(state),
        TimedEvent::GoToExercise => event_go_to_exercise(state),
        TimedEvent::ExerciseDone => event_exercise_done(state),
        TimedEvent::GoToBed => event_go_to_bed(state),
        TimedEvent::TimeForBed => event_time_for_bed(state),
        TimedEvent::NightTime => event_night_time(state),
        TimedEvent::SearchLight => event_search_light(state),
    }
}

/// Route a character wherever they are: the record, and the live slot
/// if they're on screen.
pub fn set_character_route(state: &mut State, character: u8, route: Route) {
    state.character_structs[character as usize].route = route;
    for index in 0..VISCHARS_LENGTH {
        if !state.vischars[index].is_empty() && state.vischars[index].character == character {
            state.vischars[index].route = route;
            route::set_route(state, index);
            state.vischars[index].input |= INPUT_KICK;
        }
    }
}

fn set_hero_route(state: &mut State, route: Route) {
    state.vischars[HERO_VISCHAR].route = route;
    route::set_route(state, HERO_VISCHAR);
    state.vischars[HERO_VISCHAR].input |= INPUT_KICK;
    state.hero_in_bed = false;
    state.hero_in_breakfast = false;
}

fn event_another_day_dawns(state: &mut State) {
    state.day_or_night_is_night = false;
    queue_message(state, messages::MESSAGE_ANOTHER_DAY_DAWNS);
    // The hero stirs and crosses to the day room.
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_42_HUT2_LEFT_TO_RIGHT, 0));
    }
}

pub fn event_wake_up(state: &mut State) {
    state.bell = BELL_RING_40_TIMES;
    queue_message(state, messages::MESSAGE_TIME_TO_WAKE_UP);

    // The prisoners are already up and in the day rooms.
    for character in CHARACTER_20_PRISONER_1..=CHARACTER_22_PRISONER_3 {
        state.character_structs[character as usize].room = ROOM_3_HUT2RIGHT;
    }
    for character in CHARACTER_23_PRISONER_4..=CHARACTER_25_PRISONER_6 {
        state.character_structs[character as usize].room = ROOM_5_HUT3RIGHT;
    }

    // Every bunk empties, the hero's included: seven beds in all.
    set_roomdef(state, ROOM_2_HUT2LEFT, ROOMDEF_2_BED, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_A, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_B, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_C, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_D, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_E, OBJ_EMPTY_BED_FACING_SE);
    set_roomdef(state, ROOM_5_HUT3RIGHT, ROOMDEF_5_BED_F, OBJ_EMPTY_BED_FACING_SE);
}

fn event_new_red_cross_parcel(state: &mut State) {
    // A fresh parcel arrives unless the last one is still around.
    if state.items_held.contains(&ITEM_RED_CROSS_PARCEL) {
        return;
    }
    crate::items::reset_item(state, ITEM_RED_CROSS_PARCEL);
    queue_message(state, messages::MESSAGE_RED_CROSS_PARCEL);
}

fn event_go_to_roll_call(state: &mut State) {
    queue_message(state, messages::MESSAGE_ROLL_CALL);
    set_character_route(state, CHARACTER_12_GUARD_12, Route::new(26, 0));
    set_character_route(state, CHARACTER_13_GUARD_13, Route::new(27, 0));
    set_character_route(state, CHARACTER_14_GUARD_14, Route::new(31, 0));
    set_character_route(state, CHARACTER_15_GUARD_15, Route::new(32, 0));
    set_character_route(state, CHARACTER_20_PRISONER_1, Route::new(28, 0));
    set_character_route(state, CHARACTER_21_PRISONER_2, Route::new(29, 0));
    set_character_route(state, CHARACTER_22_PRISONER_3, Route::new(30, 0));
    set_character_route(state, CHARACTER_23_PRISONER_4, Route::new(33, 0));
    set_character_route(state, CHARACTER_24_PRISONER_5, Route::new(34, 0));
    set_character_route(state, CHARACTER_25_PRISONER_6, Route::new(35, 0));
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_45_HERO_ROLL_CALL, 0));
    }
}

fn event_go_to_breakfast(state: &mut State) {
    queue_message(state, messages::MESSAGE_BREAKFAST_TIME);
    set_character_route(state, CHARACTER_12_GUARD_12, Route::new(24, 0));
    set_character_route(state, CHARACTER_13_GUARD_13, Route::new(25, 0));
    set_character_route(state, CHARACTER_20_PRISONER_1, Route::new(ROUTEINDEX_16_BREAKFAST_25, 0));
    set_character_route(state, CHARACTER_21_PRISONER_2, Route::new(17, 0));
    set_character_route(state, CHARACTER_22_PRISONER_3, Route::new(ROUTEINDEX_16_BREAKFAST_25, 0));
    set_character_route(state, CHARACTER_23_PRISONER_4, Route::new(17, 0));
    set_character_route(state, CHARACTER_24_PRISONER_5, Route::new(ROUTEINDEX_16_BREAKFAST_25, 0));
    set_character_route(state, CHARACTER_25_PRISONER_6, Route::new(17, 0));
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_43_BREAKFAST_REVERSE, 0));
    }
}

fn event_end_of_breakfast(state: &mut State) {
    // Benches empty again.
    set_roomdef(state, ROOM_23_MESS_HALL, ROOMDEF_23_BENCH_A, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_23_MESS_HALL, ROOMDEF_23_BENCH_B, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_23_MESS_HALL, ROOMDEF_23_BENCH_C, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_D, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_E, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_F, OBJ_EMPTY_BENCH);
    set_roomdef(state, ROOM_25_MESS_HALL, ROOMDEF_25_BENCH_G, OBJ_EMPTY_BENCH);
    state.hero_in_breakfast = false;

    // Walk everyone back out of the mess halls.
    set_character_route(state, CHARACTER_20_PRISONER_1, Route::new(ROUTEINDEX_16_BREAKFAST_25 | ROUTEINDEX_REVERSED, 2));
    set_character_route(state, CHARACTER_21_PRISONER_2, Route::new(17 | ROUTEINDEX_REVERSED, 2));
    set_character_route(state, CHARACTER_22_PRISONER_3, Route::new(ROUTEINDEX_16_BREAKFAST_25 | ROUTEINDEX_REVERSED, 2));
    set_character_route(state, CHARACTER_23_PRISONER_4, Route::new(17 | ROUTEINDEX_REVERSED, 2));
    set_character_route(state, CHARACTER_24_PRISONER_5, Route::new(ROUTEINDEX_16_BREAKFAST_25 | ROUTEINDEX_REVERSED, 2));
    set_character_route(state, CHARACTER_25_PRISONER_6, Route::new(17 | ROUTEINDEX_REVERSED, 2));
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_16_BREAKFAST_25 | ROUTEINDEX_REVERSED, 2));
    }
}

fn event_go_to_exercise(state: &mut State) {
    queue_message(state, messages::MESSAGE_EXERCISE_TIME);
    // The yard gate opens for the hour.
    state.locked_doors[2] &= !DOOR_LOCKED;
    for character in CHARACTER_20_PRISONER_1..=CHARACTER_25_PRISONER_6 {
        let route = if character & 1 == 0 { 14 } else { 15 };
        set_character_route(state, character, Route::new(route, 0));
    }
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_14_GO_TO_YARD, 0));
    }
}

fn event_exercise_done(state: &mut State) {
    // Back inside; the yard locks behind them.
    state.locked_doors[2] |= DOOR_LOCKED;
    for character in CHARACTER_20_PRISONER_1..=CHARACTER_25_PRISONER_6 {
        let route = if character & 1 == 0 { 14 } else { 15 };
        set_character_route(
            state,
            character,
            Route::new(route | ROUTEINDEX_REVERSED, 4),
        );
    }
    if !state.morale_exhausted {
        set_hero_route(
            state,
            Route::new(ROUTEINDEX_14_GO_TO_YARD | ROUTEINDEX_REVERSED, 4),
        );
    }
}

fn event_go_to_bed(state: &mut State) {
    for character in CHARACTER_20_PRISONER_1..=CHARACTER_22_PRISONER_3 {
        set_character_route(
            state,
            character,
            Route::new(7 + (character - CHARACTER_20_PRISONER_1), 0),
        );
    }
    for character in CHARACTER_23_PRISONER_4..=CHARACTER_25_PRISONER_6 {
        set_character_route(
            state,
            character,
            Route::new(10 + (character - CHARACTER_23_PRISONER_4), 0),
        );
    }
    if !state.morale_exhausted {
        set_hero_route(state, Route::new(ROUTEINDEX_44_HUT2_RIGHT_TO_LEFT, 0));
    }
}

fn event_time_for_bed(state: &mut State) {
    queue_message(state, messages::MESSAGE_TIME_FOR_BED);
    set_character_route(state, CHARACTER_12_GUARD_12, Route::new(ROUTEINDEX_38_GUARD_12_BED, 0));
    set_character_route(state, CHARACTER_13_GUARD_13, Route::new(39, 0));
    set_character_route(state, CHARACTER_14_GUARD_14, Route::new(40, 0));
    set_character_route(state, CHARACTER_15_GUARD_15, Route::new(41, 0));
}

fn event_night_time(state: &mut State) {
    state.day_or_night_is_night = true;
    // A hero caught outside his hut after dark raises the flag.
    if !state.hero_in_bed && state.vischars[HERO_VISCHAR].room == ROOM_0_OUTDOORS {
        state.red_flag = true;
    }
}

fn event_search_light(state: &mut State) {
    searchlight::searchlight_reset(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::get_roomdef;

    #[test]
    fn test_wake_up_event() {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);

        event_wake_up(&mut state);

        assert_eq!(state.bell, BELL_RING_40_TIMES);
        assert_eq!(state.messages.queue[0], messages::MESSAGE_TIME_TO_WAKE_UP);
        for character in 20..=22u8 {
            assert_eq!(state.character_structs[character as usize].room, ROOM_3_HUT2RIGHT);
        }
        for character in 23..=25u8 {
            assert_eq!(state.character_structs[character as usize].room, ROOM_5_HUT3RIGHT);
        }
        // All seven bunks read empty through the shadow table.
        assert_eq!(
            get_roomdef(&state, ROOM_2_HUT2LEFT, ROOMDEF_2_BED),
            OBJ_EMPTY_BED_FACING_SE
        );
        assert_eq!(
            get_roomdef(&state, ROOM_3_HUT2RIGHT, ROOMDEF_3_BED_A),
            OBJ_EMPTY_BED_FACING_SE
        );
    }

    #[test]
    fn test_clock_advances_every_eighth_tick() {
        let mut state = State::new().unwrap();
        state.gametime = 0;
        for tick in 0..16u64 {
            state.ticker = tick;
            tick_clock(&mut state);
        }
        assert_eq!(state.gametime, 2);
    }

    #[test]
    fn test_clock_wraps_at_limit() {
        let mut state = State::new().unwrap();
        state.gametime = GAMETIME_LIMIT - 1;
        state.ticker = 0;
        tick_clock(&mut state);
        assert_eq!(state.gametime, 0);
    }

    #[test]
    fn test_exercise_unlocks_the_yard() {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);
        assert!(state.locked_doors[2] & DOOR_LOCKED != 0);

        // Walk the timetable through to the exercise hour: every earlier
        // event fires once on the way.
        state.gametime = 46;
        for _ in 0..8 {
            dispatch_timed_event(&mut state);
        }
        assert!(state.locked_doors[2] & DOOR_LOCKED == 0);

        state.gametime = 64;
        dispatch_timed_event(&mut state);
        assert!(state.locked_doors[2] & DOOR_LOCKED != 0);
    }

    #[test]
    fn test_events_fire_in_table_order() {
        let mut state = State::new().unwrap();
        crate::game_loop::reset_game_state(&mut state);

        // Clock 0: the day dawns, no bell.
        dispatch_timed_event(&mut state);
        assert_eq!(state.bell, BELL_STOP);
        assert_eq!(state.next_event_index, 1);

        // Wake-up stays pending until the clock reaches eight.
        state.gametime = 4;
        dispatch_timed_event(&mut state);
        assert_eq!(state.next_event_index, 1);
        assert_eq!(state.bell, BELL_STOP);

        state.gametime = 8;
        dispatch_timed_event(&mut state);
        assert_eq!(state.next_event_index, 2);
        assert_eq!(state.bell, BELL_RING_40_TIMES);
    }
}
