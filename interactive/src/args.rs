use clap::{Parser, ValueEnum};

use dvdlogo::AnimationMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct ArgsInteractive {
    /// Animation to play when no description file is given
    #[arg(value_enum, default_value_t = ModeArg::Bounce)]
    pub mode: ModeArg,
    /// Path to an animation description file
    #[arg(short, long)]
    pub animation: Option<PathBuf>,
    /// Path to a PNG to use as the sprite texture
    #[arg(short, long)]
    pub texture: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    Bounce,
    Track,
}

impl From<ModeArg> for AnimationMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Bounce => Self::Bounce,
            ModeArg::Track => Self::Track,
        }
    }
}
