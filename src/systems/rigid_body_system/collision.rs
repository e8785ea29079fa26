use crate::rigid_body::{RigidBody, Vec2};

/// Overlap tolerance; bodies resting flush against each other do not collide.
const CONTACT_EPSILON: f64 = 1e-6;

/// Number of bisection rounds when backing off from an obstacle.
const RESOLVE_ITERATIONS: usize = 24;

/// Would `bodies[index]` overlap another active body if centred at `pos`?
pub(super) fn collides_at(bodies: &[RigidBody], index: usize, pos: Vec2) -> bool {
    let body = &bodies[index];

    bodies.iter().enumerate().any(|(i, other)| {
        if i == index || !other.active {
            return false;
        }
        let dx = (pos.x - other.pos.x).abs();
        let dy = (pos.y - other.pos.y).abs();
        dx < body.half_width + other.half_width - CONTACT_EPSILON
            && dy < body.half_height + other.half_height - CONTACT_EPSILON
    })
}

/// Furthest point on the segment `from -> to` that `bodies[index]` can occupy.
///
/// Assumes `from` is free. Returns `from` unchanged if it is not.
pub(super) fn furthest_free(bodies: &[RigidBody], index: usize, from: Vec2, to: Vec2) -> Vec2 {
    if collides_at(bodies, index, from) {
        return from;
    }

    let mut free = 0.0f64;
    let mut blocked = 1.0f64;
    for _ in 0..RESOLVE_ITERATIONS {
        let mid = (free + blocked) * 0.5;
        let probe = from + (to - from) * mid;
        if collides_at(bodies, index, probe) {
            blocked = mid;
        } else {
            free = mid;
        }
    }

    from + (to - from) * free
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_and_box() -> Vec<RigidBody> {
        vec![
            RigidBody::new_static_rect(50.0, 100.0, 100.0, 2.0, 1),
            RigidBody::new_rect(50.0, 50.0, 10.0, 10.0, 2),
        ]
    }

    #[test]
    fn touching_is_not_colliding() {
        let bodies = floor_and_box();
        // Box bottom at 94 + 5 = 99, floor top at 99.
        assert!(!collides_at(&bodies, 1, Vec2::new(50.0, 94.0)));
        assert!(collides_at(&bodies, 1, Vec2::new(50.0, 94.5)));
    }

    #[test]
    fn backs_off_to_flush_contact() {
        let bodies = floor_and_box();
        let rest = furthest_free(&bodies, 1, Vec2::new(50.0, 90.0), Vec2::new(50.0, 110.0));
        assert!((rest.y - 94.0).abs() < 1e-3, "rest.y = {}", rest.y);
        assert_eq!(rest.x, 50.0);
    }

    #[test]
    fn inactive_bodies_are_ignored() {
        let mut bodies = floor_and_box();
        bodies[0].active = false;
        assert!(!collides_at(&bodies, 1, Vec2::new(50.0, 100.0)));
    }
}
