// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use log::debug;
use unescape_unicode::unescape_unicode;

/// Convert a single \uXXXX Unicode escape into its character.
#[derive(Debug, Parser)]
#[command(name = "unescape")]
struct Cli {
    /// Text containing the escape, e.g. '\u2665', 'u2665' or '2665'
    input: String,

    /// Position of the escape within INPUT; negative values mean 0
    #[arg(short, long, allow_negative_numbers = true)]
    start: Option<isize>,

    /// Print the code point as U+XXXX instead of the character
    #[arg(long)]
    code_point: bool,
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    debug!("Converting {:?} at {:?}", cli.input, cli.start);

    let Some(unescaped) = unescape_unicode(Some(cli.input.as_str()), cli.start)? else {
        return Err("no input".into());
    };

    if cli.code_point {
        Ok(format!("U+{:04X}", unescaped.code_unit()))
    } else {
        Ok(unescaped.to_string())
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
