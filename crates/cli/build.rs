use std::{env, fs, path::PathBuf};

fn city_command(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name)
        .about(about)
        .arg(clap::arg!(<CITY> "City name as used on idokep.hu"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("idokep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read current conditions and forecasts from idokep.hu")
        .subcommand_required(true)
        .subcommand(city_command("current", "Current conditions"))
        .subcommand(city_command("days", "Multi-day forecast"))
        .subcommand(city_command("hours", "Hour-by-hour forecast"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (json, text)")
                .global(true)
                .default_value("json")
                .value_parser(["json", "text"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--file <PATH> "Read the page from a saved HTML file instead of fetching it")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Site root to fetch pages from")
                .global(true),
        )
        .arg(clap::arg!(--today <DATE> "Date used to place forecast columns (default: today)").global(true))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").global(true).default_value("30"))
        .arg(
            clap::Arg::new("user-agent")
                .long("user-agent")
                .value_name("UA")
                .help("Custom User-Agent for HTTP requests")
                .global(true),
        )
        .arg(clap::arg!(--compact "Single-line JSON instead of pretty printed").global(true))
        .arg(clap::arg!(--images "Include icon URLs in text output").global(true))
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "idokep", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "idokep", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "idokep", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "idokep", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
