//! CLI entry point for twig

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use path_clean::PathClean;
use twig::{
    OutputConfig, StreamingFormatter, StreamingWalker, WalkerConfig, load_gitignore,
    split_patterns,
};

const EXAMPLES: &str = "\
Examples:
  twig                        # Current directory
  twig /path/to/dir           # Specific directory
  twig -e node_modules,.git   # Exclude patterns

Entries are hidden when their name equals or starts with any pattern from
--exclude or from the .gitignore at the root directory. Patterns are matched
literally; wildcards are not expanded.";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a directory tree with file sizes, exclusions and .gitignore support")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude patterns, comma-separated (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERNS")]
    exclude: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Make `path` absolute and lexically normalised, without touching symlinks.
fn resolve_root(path: &Path) -> io::Result<PathBuf> {
    Ok(std::path::absolute(path)?.clean())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let root = resolve_root(&args.path).unwrap_or_else(|e| {
        eprintln!("twig: cannot resolve '{}': {}", args.path.display(), e);
        process::exit(1);
    });

    let excludes: Vec<String> = args
        .exclude
        .iter()
        .flat_map(|list| split_patterns(list))
        .collect();
    let walker = StreamingWalker::new(WalkerConfig::new(excludes, load_gitignore(&root)));
    log::debug!(
        "walking {} with excludes {:?} and root excludes {:?}",
        root.display(),
        walker.config().excludes,
        walker.config().root_excludes
    );

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        ..Default::default()
    };
    let mut formatter = StreamingFormatter::new(output_config);

    match walker.walk_streaming(&root, &mut formatter) {
        Ok(summary) => log::debug!(
            "{} directories, {} files, {} unreadable",
            summary.directories,
            summary.files,
            summary.unreadable
        ),
        // Reader went away (e.g. `twig | head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("twig: error writing output: {}", e);
            process::exit(1);
        }
    }
}
