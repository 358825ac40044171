//! Collision detection and scoring against the pipe pool
//!
//! Pipes are tested in slot order. Only the first hit matters: the tick that
//! finds it stops simulating, so the scan stops there too.

use super::pipes::PipePool;
use super::rect::Rect;

/// Slot of the first active pipe the bird's box overlaps
pub fn first_collision(bird_box: &Rect, pool: &PipePool) -> Option<usize> {
    pool.iter_active()
        .find(|(_, pipe)| pipe.collides(bird_box))
        .map(|(index, _)| index)
}

/// Mark pipes whose center the bird has crossed.
///
/// A pipe scores at most once: only unscored pipes are tested, and the flag
/// is set on the first tick `bird_x` is past the center. Returns how many
/// pipes scored this call.
pub fn award_passes(pool: &mut PipePool, bird_x: f32) -> u32 {
    let mut scored = 0;
    for pipe in pool.slots_mut().iter_mut().filter(|p| p.active && !p.scored) {
        if bird_x > pipe.center_x() {
            pipe.scored = true;
            scored += 1;
        }
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn bird_box_at(x: f32, y: f32) -> Rect {
        Rect::centered(Vec2::new(x, y), Vec2::new(27.0, 20.0))
    }

    #[test]
    fn test_bird_in_gap_does_not_collide() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new();
        pool.spawn_with_gap(200.0, 150.0, &tuning);
        assert_eq!(first_collision(&bird_box_at(810.0, 275.0), &pool), None);
    }

    #[test]
    fn test_hits_top_and_bottom() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new();
        pool.spawn_with_gap(200.0, 150.0, &tuning);
        assert_eq!(first_collision(&bird_box_at(810.0, 195.0), &pool), Some(0));
        assert_eq!(first_collision(&bird_box_at(810.0, 345.0), &pool), Some(0));
    }

    #[test]
    fn test_first_hit_in_slot_order() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new();
        pool.spawn_with_gap(400.0, 150.0, &tuning);
        pool.spawn_with_gap(400.0, 150.0, &tuning);
        // Both pipes sit at the same x; slot 0 wins
        assert_eq!(first_collision(&bird_box_at(820.0, 100.0), &pool), Some(0));

        pool.slots_mut()[0].active = false;
        assert_eq!(first_collision(&bird_box_at(820.0, 100.0), &pool), Some(1));
    }

    #[test]
    fn test_inactive_pipes_are_ignored() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new();
        pool.spawn_with_gap(400.0, 150.0, &tuning);
        pool.clear_all();
        assert_eq!(first_collision(&bird_box_at(820.0, 100.0), &pool), None);
        assert_eq!(award_passes(&mut pool, 10_000.0), 0);
    }

    #[test]
    fn test_pass_scores_exactly_once() {
        let tuning = Tuning::default();
        let mut pool = PipePool::new();
        pool.spawn_with_gap(200.0, 150.0, &tuning);

        // Center is at 840: being on it is not past it
        assert_eq!(award_passes(&mut pool, 840.0), 0);
        assert!(!pool.get(0).unwrap().scored);

        assert_eq!(award_passes(&mut pool, 850.0), 1);
        assert!(pool.get(0).unwrap().scored);
        assert_eq!(award_passes(&mut pool, 850.0), 0);
        assert_eq!(award_passes(&mut pool, 2_000.0), 0);
    }
}
