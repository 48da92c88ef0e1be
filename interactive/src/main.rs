use clap::Parser;

use dvdlogo::animation::Animation;

use dvdlogo_common::animation_loader::AnimationLoader;

mod app;
mod args;
mod logo;

use app::App;
use args::ArgsInteractive;

fn main() {
    // clion needs help in trait annotation
    let args = <ArgsInteractive as Parser>::parse();

    let animation = match &args.animation {
        Some(path) => match AnimationLoader::load_from_path(path) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Could not read animation description: {e}");
                std::process::exit(-1);
            }
        },
        None => Animation::default_for(args.mode.into()),
    };

    let logo = match logo::load(args.texture.as_deref()) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Could not load sprite texture: {e}");
            std::process::exit(-1);
        }
    };

    let app = App::new(animation, logo).unwrap();

    app.run();
}
