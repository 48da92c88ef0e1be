use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;

use serde::Serialize;

use dvdlogo::animation::Animation;

use dvdlogo_common::animation_loader::AnimationLoader;

mod args;

use args::Args;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let mut animation = match &args.animation {
        Some(path) => match AnimationLoader::load_from_path(path) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Could not read animation description: {e}");
                std::process::exit(-1);
            }
        },
        None => Animation::default_for(args.mode.into()),
    };

    let mut trace = Vec::with_capacity(args.steps);

    for step in 0..args.steps {
        animation.advance(args.delta);

        trace.push(TraceEntry {
            step,
            position: animation.position().into(),
            velocity: animation.velocity().map(Into::into),
            direction: animation.direction().map(|d| format!("{d:?}")),
        });
    }

    match &args.output {
        Some(path) => write_out(&trace, path),
        None => print_out(&trace),
    }
}

fn print_out(trace: &[TraceEntry]) {
    for entry in trace {
        let [x, y] = entry.position;

        match (&entry.velocity, &entry.direction) {
            (Some([vx, vy]), _) => {
                println!("pos {{x: {x} y: {y}}} vel {{x: {vx} y: {vy}}}");
            }
            (_, Some(direction)) => {
                println!("pos {{x: {x} y: {y}}} dir {direction}");
            }
            _ => {}
        }
    }
}

fn write_out(trace: &[TraceEntry], name: &PathBuf) {
    let file = File::create(name).unwrap();
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, trace).unwrap();
}

#[derive(Debug, Serialize)]
struct TraceEntry {
    step: usize,
    position: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    velocity: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<String>,
}
