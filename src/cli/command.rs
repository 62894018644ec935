//! The clap command definition of the `multireplace` binary.

use std::path::PathBuf;

use clap::Parser;

use super::{parse_glob_options, parse_read_options, parse_write_options};
use crate::config::{JobConfig, ReplaceArgs};
use crate::error::ReplaceError;
use crate::replace::{Needle, Replacement};

#[derive(Debug, Parser)]
#[command(
    name = "multireplace",
    version,
    about = "Replace matching parts of files or content with a replacement string",
    after_help = "Examples:\n  \
        multireplace a b -i foo.js -o foo_replaced.js\n  \
        cat foo.js | multireplace a b > foo_replaced.js\n  \
        multireplace a b --content abcd -o foo_replaced.js\n  \
        multireplace '^#' '//' -f gm -i 'src/**/*.conf' -s preserve-structure -o out"
)]
pub struct Cli {
    /// Regular expression to search for (matched verbatim with --literal)
    #[arg(required_unless_present = "config")]
    pub needle: Option<String>,

    /// Replacement string; `$1` and `${name}` refer to capture groups
    #[arg(required_unless_present = "config")]
    pub replacement: Option<String>,

    /// Regex flags used together with the needle (any of g, i, m)
    #[arg(short = 'f', long, default_value = "g")]
    pub flags: String,

    /// Treat the needle as a literal string instead of a regex
    #[arg(long)]
    pub literal: bool,

    /// Paths or glob patterns pointing to files to read and replace from
    #[arg(short = 'i', long = "input", num_args = 1..)]
    pub input: Vec<String>,

    /// Encoding name or JSON options used when reading input files
    #[arg(long = "i-read-opts", requires = "input")]
    pub read_opts: Option<String>,

    /// JSON glob options used when resolving input patterns
    #[arg(long = "i-glob-opts", requires = "input")]
    pub glob_opts: Option<String>,

    /// Content to be replaced (takes precedence over file input)
    #[arg(short = 'c', long)]
    pub content: Option<String>,

    /// Never read piped standard input
    #[arg(long = "no-stdin")]
    pub no_stdin: bool,

    /// Output generation strategy
    #[arg(
        short = 's',
        long,
        default_value = "join",
        value_parser = ["join", "flatten", "preserve-structure"]
    )]
    pub strategy: String,

    /// Output file (join) or output directory (flatten, preserve-structure)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Encoding name or JSON options used when writing output files
    #[arg(long = "o-write-opts", requires = "output")]
    pub write_opts: Option<String>,

    /// String used when joining multiple files (defaults to a newline)
    #[arg(long = "o-join-str")]
    pub join_str: Option<String>,

    /// Print the first result to standard output (default with piped input)
    #[arg(long)]
    pub stdout: bool,

    /// Use the async engine
    #[arg(long = "async")]
    pub use_async: bool,

    /// Load the run from a YAML or JSON job file instead of flags
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// A parsed command line, ready to run.
#[derive(Debug)]
pub struct Invocation {
    pub args: ReplaceArgs,
    pub stdout: bool,
    pub use_async: bool,
}

impl Cli {
    /// Whether piped standard input should be consulted for content.
    pub fn wants_stdin(&self) -> bool {
        !self.no_stdin && self.config.is_none() && self.content.is_none() && self.input.is_empty()
    }

    /// Convert the flags into `ReplaceArgs`. `stdin` is piped content, if any
    /// was read; it also turns on printing to standard output.
    pub fn into_invocation(self, stdin: Option<String>) -> Result<Invocation, ReplaceError> {
        let piped = stdin.is_some();
        let stdout = self.stdout || piped;
        let use_async = self.use_async;

        if let Some(path) = self.config.as_deref() {
            return Ok(Invocation {
                args: JobConfig::load(path)?.into_args()?,
                stdout,
                use_async,
            });
        }

        let needle = self.needle.unwrap_or_default();
        let needle = if self.literal {
            Needle::literal(needle)
        } else {
            Needle::regex(&needle, &self.flags)?
        };

        let mut args = ReplaceArgs::new(needle, Replacement::Literal(self.replacement.unwrap_or_default()))
            .with_strategy(self.strategy);
        args.content = self.content.or(stdin);
        args.input = (!self.input.is_empty()).then_some(self.input);
        args.input_read_options = self.read_opts.as_deref().map(parse_read_options).transpose()?;
        args.input_glob_options = self.glob_opts.as_deref().map(parse_glob_options).transpose()?;
        args.output = self.output;
        args.output_write_options = self
            .write_opts
            .as_deref()
            .map(parse_write_options)
            .transpose()?;
        args.output_join_string = self.join_str;

        Ok(Invocation {
            args,
            stdout,
            use_async,
        })
    }
}
