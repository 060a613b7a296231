use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use editpath::path::{DefaultEditComparator, MinimumEditPath};
use editpath::report::LineDiff;
use editpath::strings::print_path;

#[derive(Parser, Debug)]
#[command(name = "editpath")]
#[command(about = "Minimum edit paths between files or strings")]
struct Params {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reports line differences between an expected and an actual file
    Lines(LinesParams),
    /// Prints the character edit path between two strings
    Chars(CharsParams),
}

#[derive(Args, Debug)]
struct LinesParams {
    expected: PathBuf,

    actual: PathBuf,

    /// Differences on lines matching this regular expression are not reported
    #[arg(short = 'i', long = "ignore")]
    ignore: Option<String>,

    #[arg(short = 'w', long = "ignore-whitespace", default_value_t = false)]
    ignore_whitespace: bool,

    #[arg(long = "change", default_value_t = 1)]
    change_distance: usize,

    #[arg(short = 'c', long = "collapse", default_value_t = false)]
    collapse: bool,
}

#[derive(Args, Debug)]
struct CharsParams {
    from: String,

    to: String,

    #[arg(long = "change", default_value_t = 1)]
    change_distance: usize,

    #[arg(long = "insert", default_value_t = 1)]
    insert_distance: usize,

    #[arg(long = "delete", default_value_t = 1)]
    delete_distance: usize,

    #[arg(short = 'c', long = "collapse", default_value_t = false)]
    collapse: bool,
}

fn main() -> Result<ExitCode> {
    init_logging();
    let params = Params::parse();
    log::debug!("{:?}", params);
    match params.command {
        Command::Lines(lines) => diff_lines(lines),
        Command::Chars(chars) => diff_chars(chars),
    }
}

fn init_logging() {
    if std::env::var("EDITPATH_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("EDITPATH_LOG")
            .write_style("EDITPATH_LOG_STYLE");
        env_logger::init_from_env(env);
    }
}

fn diff_lines(params: LinesParams) -> Result<ExitCode> {
    let mut diff = LineDiff::new()
        .ignore_whitespace(params.ignore_whitespace)
        .change_distance(params.change_distance)
        .collapse(params.collapse);
    if let Some(pattern) = &params.ignore {
        diff = diff.ignore(pattern)?;
    }
    let report = diff
        .diff_files(&params.expected, &params.actual)
        .with_context(|| {
            format!(
                "comparing {} with {}",
                params.expected.display(),
                params.actual.display()
            )
        })?;
    match report {
        Some(report) => {
            println!("{}", report.trim_start_matches('\n'));
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

fn diff_chars(params: CharsParams) -> Result<ExitCode> {
    let comparator = DefaultEditComparator::<char>::new().with_distances(
        params.insert_distance,
        params.delete_distance,
        params.change_distance,
    );
    let mp = MinimumEditPath::<char, _>::with_comparator(comparator);
    let mut path = mp.minimum_edit_path_str(&params.from, &params.to);
    if params.collapse {
        path = mp.collapse(path);
    }
    print!("{}", print_path(&path));
    for step in &path {
        println!("{}", step);
    }
    let distance = path.last().map_or(0, |step| step.total_distance());
    println!("distance: {}", distance);
    Ok(ExitCode::SUCCESS)
}
