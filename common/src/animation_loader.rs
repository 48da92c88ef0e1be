use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use cgmath::Vector2;

use serde::{Deserialize, Serialize};

use dvdlogo::animation::Animation;
use dvdlogo::track::TrackWalker;
use dvdlogo::{Bounds, Sprite};

pub struct AnimationLoader {}

impl AnimationLoader {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Animation, LoaderError> {
        let text = std::fs::read_to_string(path).map_err(LoaderError::InputError)?;

        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Animation, LoaderError> {
        let file: AnimationFile = json5::from_str(text).map_err(LoaderError::FormatError)?;

        let bounds = match file.bounds {
            Some([left, right, bottom, top]) => Bounds {
                left,
                right,
                bottom,
                top,
            },
            None => Bounds::NDC,
        };

        if bounds.left >= bounds.right || bounds.bottom >= bounds.top {
            return Err(LoaderError::Other("bounds edges are not ordered".into()));
        }

        let half_extent = Vector2::from(file.sprite.half_extent);

        if half_extent.x <= 0.0 || half_extent.y <= 0.0 {
            return Err(LoaderError::Other("half_extent must be positive".into()));
        }

        match file.mode.as_str() {
            "bounce" => {
                let sprite = Sprite::new(
                    Vector2::from(file.sprite.position),
                    Vector2::from(file.sprite.velocity),
                    half_extent,
                );

                Ok(Animation::bounce(sprite, bounds))
            }
            "track" => {
                let track = file.track.ok_or(LoaderError::KeyError("track".into()))?;

                if track.threshold <= 0.0 {
                    return Err(LoaderError::Other("track threshold must be positive".into()));
                }

                let walker = TrackWalker::new(track.speed, track.threshold);

                Ok(Animation::track(walker, half_extent))
            }
            other => {
                let msg = format!("unknown animation mode '{other}'");
                Err(LoaderError::Other(msg))
            }
        }
    }
}

#[derive(Debug)]
pub enum LoaderError {
    InputError(std::io::Error),
    FormatError(json5::Error),
    KeyError(String),
    Other(String),
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError(e) => f.write_fmt(format_args!("{e}")),
            Self::FormatError(e) => f.write_fmt(format_args!("{e}")),
            Self::KeyError(key) => f.write_fmt(format_args!("no key '{key}' found")),
            Self::Other(e) => f.write_fmt(format_args!("{e}")),
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputError(e) => Some(e),
            Self::FormatError(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AnimationFile {
    mode: String,
    sprite: SpriteStub,
    bounds: Option<[f32; 4]>,
    track: Option<TrackStub>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SpriteStub {
    position: [f32; 2],
    velocity: [f32; 2],
    half_extent: [f32; 2],
}

#[derive(Debug, Serialize, Deserialize)]
struct TrackStub {
    speed: f32,
    threshold: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bounce_description() {
        let animation = AnimationLoader::load_from_str(
            r#"{
                mode: "bounce",
                sprite: {
                    position: [0.5, -0.5],
                    velocity: [0.4, 0.25],
                    half_extent: [0.1, 0.1],
                },
                bounds: [-1.0, 1.0, -1.0, 1.0],
            }"#,
        )
        .unwrap();

        assert_eq!(animation.position(), Vector2::new(0.5, -0.5));
        assert_eq!(animation.velocity(), Some(Vector2::new(0.4, 0.25)));
        assert_eq!(animation.half_extent(), Vector2::new(0.1, 0.1));
    }

    #[test]
    fn loads_track_description() {
        let animation = AnimationLoader::load_from_str(
            r#"{
                mode: "track",
                sprite: {
                    position: [0.0, 0.0],
                    velocity: [0.0, 0.0],
                    half_extent: [0.1, 0.1],
                },
                track: { speed: 0.5, threshold: 0.25 },
            }"#,
        )
        .unwrap();

        assert_eq!(animation.position(), Vector2::new(0.0, 0.0));
        assert!(animation.direction().is_some());
    }

    #[test]
    fn track_mode_requires_track_section() {
        let result = AnimationLoader::load_from_str(
            r#"{
                mode: "track",
                sprite: {
                    position: [0.0, 0.0],
                    velocity: [0.0, 0.0],
                    half_extent: [0.1, 0.1],
                },
            }"#,
        );

        assert!(matches!(result, Err(LoaderError::KeyError(_))));
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = AnimationLoader::load_from_str(
            r#"{
                mode: "spiral",
                sprite: {
                    position: [0.0, 0.0],
                    velocity: [0.0, 0.0],
                    half_extent: [0.1, 0.1],
                },
            }"#,
        );

        assert!(matches!(result, Err(LoaderError::Other(_))));
    }

    #[test]
    fn rejects_unordered_bounds() {
        let result = AnimationLoader::load_from_str(
            r#"{
                mode: "bounce",
                sprite: {
                    position: [0.0, 0.0],
                    velocity: [0.1, 0.1],
                    half_extent: [0.1, 0.1],
                },
                bounds: [1.0, -1.0, -1.0, 1.0],
            }"#,
        );

        assert!(matches!(result, Err(LoaderError::Other(_))));
    }
}
