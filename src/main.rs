use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod contents_json;
mod icon_gen;
mod palette;
mod render;

#[derive(Debug, Parser)]
#[clap(
    name = "gym-icon-gen",
    about = "Generate the GymTrack Pro app icon set (main, dark and tinted variants)"
)]
struct Args {
    /// Output directory. Defaults to the app's asset catalog
    /// (gymtrackpromax/Assets.xcassets/AppIcon.appiconset), resolved
    /// relative to the executable.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(args.output)
}
