//! Integration tests for the carousel's pure navigation properties
//!
//! These exercise the public state machine and offset math the way the
//! controller drives them: arbitrary next/previous sequences, full cycles,
//! and direct jumps.

use carousel_ui::CarouselError;
use carousel_ui::Direction;
use carousel_ui::components::offsets::{offset_percent, transform_value};
use carousel_ui::models::state::SlideState;

#[test]
fn test_index_stays_in_bounds_for_all_counts() -> Result<(), CarouselError> {
    for count in 1..=10 {
        let mut state = SlideState::new(count)?;
        // A lopsided sequence that crosses both wrap boundaries repeatedly
        for step in 0..200 {
            let direction = if step % 5 < 2 {
                Direction::Previous
            } else {
                Direction::Next
            };
            state.advance(direction);
            assert!(state.current() < count);
        }
    }
    Ok(())
}

#[test]
fn test_full_cycle_returns_to_start_from_every_index() -> Result<(), CarouselError> {
    for count in 1..=8 {
        let mut state = SlideState::new(count)?;
        for start in 0..count {
            state.jump_to(start)?;
            for _ in 0..count {
                state.advance(Direction::Next);
            }
            assert_eq!(state.current(), start);

            for _ in 0..count {
                state.advance(Direction::Previous);
            }
            assert_eq!(state.current(), start, "backward cycle also returns");
        }
    }
    Ok(())
}

#[test]
fn test_next_then_previous_is_identity() -> Result<(), CarouselError> {
    let mut state = SlideState::new(5)?;
    for start in 0..5 {
        state.jump_to(start)?;
        state.advance(Direction::Next);
        state.advance(Direction::Previous);
        assert_eq!(state.current(), start);
    }
    Ok(())
}

#[test]
fn test_offsets_track_distance_from_current() -> Result<(), CarouselError> {
    let mut state = SlideState::new(4)?;
    state.jump_to(1)?;

    let offsets: Vec<i64> = (0..4)
        .map(|index| offset_percent(index, state.current()))
        .collect();
    assert_eq!(offsets, vec![-100, 0, 100, 200]);
    Ok(())
}

#[test]
fn test_transform_values_after_direct_jump() -> Result<(), CarouselError> {
    // Three slides, jump to index 2
    let mut state = SlideState::new(3)?;
    state.jump_to(2)?;

    assert_eq!(
        transform_value(offset_percent(0, state.current())),
        "translateX(-200%)"
    );
    assert_eq!(
        transform_value(offset_percent(1, state.current())),
        "translateX(-100%)"
    );
    assert_eq!(
        transform_value(offset_percent(2, state.current())),
        "translateX(0%)"
    );
    Ok(())
}

#[test]
fn test_rejected_jump_leaves_state_untouched() -> Result<(), CarouselError> {
    let mut state = SlideState::new(3)?;
    state.advance(Direction::Next);

    assert!(state.jump_to(7).is_err());
    assert_eq!(state.current(), 1);
    Ok(())
}
