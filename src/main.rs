use clap::{App, Arg};
use scriven::build;
use scriven::config::Config;
use std::path::Path;

fn main() {
    let matches = App::new("scriven")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a static blog from a directory of markdown posts")
        .arg(
            Arg::with_name("directory")
                .help("The directory containing the post sources")
                .index(1),
        )
        .get_matches();

    let directory = Path::new(matches.value_of("directory").unwrap_or("."));
    if let Err(err) = run(directory) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(directory: &Path) -> anyhow::Result<()> {
    let config = Config::from_directory(directory)?;
    build::build_site(&config)?;
    Ok(())
}
