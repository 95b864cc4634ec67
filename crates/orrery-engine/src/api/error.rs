/// Errors raised while turning a body table into an `OrbitField`.
///
/// All of these are configuration mistakes: they are reported once at
/// startup and never during a frame.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("body `{body}` orbits `{target}`, which is not defined before it")]
    UnknownOrbitTarget { body: String, target: String },

    #[error("body `{0}` is defined more than once")]
    DuplicateBody(String),

    #[error("body `{body}` uses sprite `{sprite}`, which the manifest does not describe")]
    UnknownSprite { body: String, sprite: String },

    #[error("{count} bodies exceed the frame buffer capacity of {max}")]
    CapacityExceeded { count: usize, max: usize },

    #[error("orbit tuning `{field}` = {value} is out of range ({expected})")]
    InvalidTuning {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("sprite sheet `{sheet}` is unusable: {reason}")]
    InvalidSpriteSheet { sheet: String, reason: &'static str },

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),
}
