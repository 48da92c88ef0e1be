use cgmath::Vector2;

use crate::track::{Direction, TrackWalker};
use crate::{AnimationMode, Bounds, Sprite};

/// One of the two logo animations, advanced once per frame by the owner of
/// the render loop.
pub enum Animation {
    Bounce {
        sprite: Sprite,
        bounds: Bounds,
        paused: bool,
    },
    Track {
        walker: TrackWalker,
        half_extent: Vector2<f32>,
    },
}

impl Animation {
    pub fn bounce(sprite: Sprite, bounds: Bounds) -> Self {
        Animation::Bounce {
            sprite,
            bounds,
            paused: false,
        }
    }

    pub fn track(walker: TrackWalker, half_extent: Vector2<f32>) -> Self {
        Animation::Track {
            walker,
            half_extent,
        }
    }

    /// Stock setup used when no description file is given.
    pub fn default_for(mode: AnimationMode) -> Self {
        match mode {
            AnimationMode::Bounce => Animation::bounce(
                Sprite::new(
                    Vector2::new(0.0, 0.0),
                    Vector2::new(0.4, 0.25),
                    Vector2::new(0.1, 0.1),
                ),
                Bounds::NDC,
            ),
            AnimationMode::Track => {
                Animation::track(TrackWalker::new(0.5, 0.25), Vector2::new(0.1, 0.1))
            }
        }
    }

    pub fn advance(&mut self, delta_time: f32) {
        match self {
            Animation::Bounce {
                sprite,
                bounds,
                paused,
            } => {
                if !*paused {
                    sprite.step(delta_time, bounds);
                }
            }
            Animation::Track { walker, .. } => walker.advance(delta_time),
        }
    }

    pub fn toggle_paused(&mut self) {
        match self {
            Animation::Bounce { paused, .. } => *paused = !*paused,
            Animation::Track { walker, .. } => walker.paused = !walker.paused,
        }
    }

    pub fn position(&self) -> Vector2<f32> {
        match self {
            Animation::Bounce { sprite, .. } => sprite.position,
            Animation::Track { walker, .. } => walker.offset,
        }
    }

    pub fn half_extent(&self) -> Vector2<f32> {
        match self {
            Animation::Bounce { sprite, .. } => sprite.half_extent(),
            Animation::Track { half_extent, .. } => *half_extent,
        }
    }

    pub fn velocity(&self) -> Option<Vector2<f32>> {
        match self {
            Animation::Bounce { sprite, .. } => Some(sprite.velocity),
            Animation::Track { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Animation::Bounce { .. } => None,
            Animation::Track { walker, .. } => Some(walker.direction()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_bounce_freezes_the_sprite() {
        let mut animation = Animation::default_for(AnimationMode::Bounce);
        let before = animation.position();

        animation.toggle_paused();
        animation.advance(1.0);

        assert_eq!(animation.position(), before);

        animation.toggle_paused();
        animation.advance(1.0 / 60.0);

        assert_ne!(animation.position(), before);
    }

    #[test]
    fn track_animation_reports_direction() {
        let animation = Animation::default_for(AnimationMode::Track);

        assert_eq!(animation.direction(), Some(Direction::Right));
        assert_eq!(animation.velocity(), None);
    }
}
