use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be written with a single dash (`-input`).
const LONG_FLAGS: &[&str] = &["input", "watch", "outputType", "config", "verbose", "help", "version"];

#[derive(Parser, Debug)]
#[command(name = "webp-convert")]
#[command(author, version, about = "Convert WebP images to PNG or JPEG")]
pub struct Cli {
    /// Path to a single WebP file to convert once
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to a directory to watch for new WebP files
    #[arg(long = "watch", value_name = "PATH")]
    pub watch: Option<PathBuf>,

    /// Image type to output: PNG (default) or JPG
    #[arg(long = "outputType", value_name = "PNG|JPG")]
    pub output_type: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-input`/`-input=x` style flags to their `--input` form.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }

            match arg.to_str() {
                Some(s) if is_single_dash_long_flag(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
