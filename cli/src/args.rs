use clap::{Parser, ValueEnum};

use dvdlogo::AnimationMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Path to an animation description file
    #[arg()]
    pub animation: Option<PathBuf>,
    /// Animation to run when no description file is given
    #[arg(value_enum, short, long, default_value_t = ModeArg::Bounce)]
    pub mode: ModeArg,
    /// Amount of steps to simulate
    #[arg(short, long, default_value_t = 600)]
    pub steps: usize,
    /// Simulated seconds per step
    #[arg(short, long, default_value_t = 1.0 / 60.0)]
    pub delta: f32,
    /// Path to save the JSON trace to instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
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
