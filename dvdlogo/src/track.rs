use cgmath::{Vector2, Zero};

/// Discrete travel direction of the perimeter-following animation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub fn vector(&self) -> Vector2<f32> {
        match self {
            Direction::Right => Vector2::new(1.0, 0.0),
            Direction::Up => Vector2::new(0.0, 1.0),
            Direction::Left => Vector2::new(-1.0, 0.0),
            Direction::Down => Vector2::new(0.0, -1.0),
        }
    }
}

/// Slides a sprite around the perimeter of a rectangle, one side at a time.
///
/// The walker accumulates a translation offset and changes direction when the
/// offset crosses the side threshold. The x sides run between `-threshold`
/// and `threshold`, the down side ends back at the starting height, closing
/// the circuit. Setting `paused` freezes the walker in place.
pub struct TrackWalker {
    pub offset: Vector2<f32>,
    pub paused: bool,
    direction: Direction,
    speed: f32,
    threshold: f32,
}

impl TrackWalker {
    pub fn new(speed: f32, threshold: f32) -> Self {
        Self {
            offset: Vector2::zero(),
            paused: false,
            direction: Direction::Right,
            speed,
            threshold,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn advance(&mut self, delta_time: f32) {
        if self.paused {
            return;
        }

        self.offset += self.direction.vector() * self.speed * delta_time;

        self.direction = match self.direction {
            Direction::Right if self.offset.x >= self.threshold => Direction::Up,
            Direction::Up if self.offset.y >= self.threshold => Direction::Left,
            Direction::Left if self.offset.x <= -self.threshold => Direction::Down,
            Direction::Down if self.offset.y <= 0.0 => Direction::Right,
            keep => keep,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_to_up_at_threshold() {
        let mut walker = TrackWalker::new(1.0, 0.25);

        walker.advance(0.25);

        assert_eq!(walker.direction(), Direction::Up);
        assert_eq!(walker.offset.x, 0.25);
    }

    #[test]
    fn cycle_is_closed() {
        let mut walker = TrackWalker::new(1.0, 0.25);

        let mut seen = vec![walker.direction()];

        for _ in 0..10_000 {
            walker.advance(0.01);

            if *seen.last().unwrap() != walker.direction() {
                seen.push(walker.direction());
            }
        }

        let expected = [
            Direction::Right,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ];

        assert!(seen.len() > 4);
        for (i, direction) in seen.iter().enumerate() {
            assert_eq!(*direction, expected[i % 4]);
        }
    }

    #[test]
    fn walker_stays_on_track() {
        let mut walker = TrackWalker::new(1.0, 0.25);

        for _ in 0..10_000 {
            walker.advance(0.01);

            assert!(walker.offset.x >= -0.25 - 0.011);
            assert!(walker.offset.x <= 0.25 + 0.011);
            assert!(walker.offset.y >= -0.011);
            assert!(walker.offset.y <= 0.25 + 0.011);
        }
    }

    #[test]
    fn paused_walker_does_not_move() {
        let mut walker = TrackWalker::new(1.0, 0.25);
        walker.paused = true;

        walker.advance(1.0);

        assert_eq!(walker.offset, Vector2::zero());
        assert_eq!(walker.direction(), Direction::Right);
    }

    #[test]
    fn zero_delta_keeps_state() {
        let mut walker = TrackWalker::new(1.0, 0.25);

        walker.advance(0.0);

        assert_eq!(walker.offset, Vector2::zero());
        assert_eq!(walker.direction(), Direction::Right);
    }
}
