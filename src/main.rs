use std::fs;

use clap::Parser;
use stone::run;

/// stone is a tree-walking interpreter for the Stone programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stone to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the final top-level expression once the script
    /// finishes.
    #[arg(short, long)]
    print_result: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run(&script) {
        Ok(value) => {
            if args.print_result {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
