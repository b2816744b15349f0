mod cli_utils;

use std::io::Write;

use clap::{Parser, Subcommand};

use mini_skiplist::list::{options::SkipListOptions, SkipList};

#[derive(Parser)]
struct Args {
    /// maximum number of levels the list may grow to
    #[clap(long, default_value_t = 4)]
    depth: usize,
}

#[derive(Parser)]
#[clap(name = "", no_binary_name = true)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Add {
        key: i32,
    },
    Contains {
        key: i32,
    },
    Remove {
        key: i32,
    },
    Print,
    Fill {
        lower: i32,
        upper: i32,
    },
    Clear,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut list = SkipList::new(SkipListOptions { depth: args.depth });
    loop {
        print!("$ ");
        std::io::stdout().flush()?;

        let line = match cli_utils::readline()? {
            Some(line) => line,
            None => return Ok(()),
        };
        let tokens = shlex::split(&line).unwrap_or_default();
        let parsed = Cli::try_parse_from(tokens);
        if parsed.is_err() {
            parsed.err().unwrap().print()?;
            continue;
        }
        match parsed.unwrap().command {
            Command::Add { key } => {
                if !list.insert(key) {
                    println!("Duplicates Not Allowed");
                }
            }
            Command::Contains { key } => {
                println!("{}", list.contains(key));
            }
            Command::Remove { key } => {
                if !list.remove(key) {
                    println!("{} not found", key);
                }
            }
            Command::Print => {
                print!("{}", list);
            }
            Command::Fill { lower, upper } => {
                for key in lower..=upper {
                    list.insert(key);
                }
            }
            Command::Clear => {
                list.clear();
            }
            Command::Quit => {
                return Ok(());
            }
        }
    }
}
