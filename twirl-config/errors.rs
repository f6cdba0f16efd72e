/// Possible errors from spinners configuration processing.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Refresh interval must be at least one millisecond.
    #[error("refresh interval must be at least one millisecond")]
    InvalidInterval,

    /// Animation requires at least one frame.
    #[error("animation requires at least one frame")]
    NoFrames,

    /// Animation frames cannot be empty strings.
    #[error("animation frames cannot be empty strings")]
    EmptyFrame,

    /// Color value was not recognized.
    #[error("invalid color value: {0}")]
    InvalidColor(String),

    /// Frames preset name was not recognized.
    #[error("unknown frames preset: {0}")]
    UnknownPreset(String),

    /// Cannot serialize/deserialize configuration options.
    #[error("cannot serialize/deserialize configuration options")]
    SerializationError(#[from] serde_yaml::Error),
}
