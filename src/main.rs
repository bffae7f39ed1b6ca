use anyhow::Result;
use clap::{App, Arg};
use note_book_api::output::print::PrintOutputter;
use note_book_api::runtime::{parse_method, select_config, Runtime};
use std::io::stdout;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_log() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    init_log();

    let matches = App::new("note-book-api")
        .version(VERSION)
        .about("Sends requests to the note-book backend")
        .arg(
            Arg::with_name("MODE")
                .short("m")
                .long("mode")
                .takes_value(true)
                .help("Overrides the MODE environment variable; \"development\" selects the local backend"),
        )
        .arg(
            Arg::with_name("METHOD")
                .short("X")
                .long("method")
                .possible_values(&["GET", "POST", "PUT", "DELETE"])
                .default_value("GET"),
        )
        .arg(
            Arg::with_name("DATA")
                .short("d")
                .long("data")
                .takes_value(true)
                .help("JSON body for POST and PUT requests"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Disables certificate validation."),
        )
        .arg(
            Arg::with_name("INCLUDE")
                .short("i")
                .long("include")
                .help("Prints the response headers"),
        )
        .arg(
            Arg::with_name("PATH")
                .index(1)
                .help("Path relative to the base url; prints the base url when omitted"),
        )
        .usage("note-book-api [OPTIONS] [PATH]")
        .get_matches();

    let config = select_config(
        matches.value_of("MODE"),
        matches.is_present("ACCEPT_INVALID_CERT"),
    )?;
    let method = parse_method(matches.value_of("METHOD").unwrap_or("GET"))?;

    let mut stdout = stdout();
    let mut outputter = PrintOutputter::new(&mut stdout, matches.is_present("INCLUDE"));

    let mut runtime = Runtime::new(config, &mut outputter);
    runtime.execute(
        &method,
        matches.value_of("PATH"),
        matches.value_of("DATA"),
    )
}
