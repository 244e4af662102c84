use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use crate::ext::StrExt;
use crate::latin::Latinize;
use crate::locale::current_locale;
use crate::parse::ParseExt;
use crate::random::random_string;
use crate::validate::StrCheck;

#[derive(Parser)]
#[command(version = "1.0", about = "String toolkit: trim, case, check and parse text from the shell.")]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Camel case text
    Camel { text: String },

    /// Trim whitespace and newlines off both ends
    Trim { text: String },

    /// Reverse text character by character
    Reverse { text: String },

    /// Fold diacritics to plain latin letters
    Latin { text: String },

    /// Remove every space and newline
    Strip { text: String },

    /// Print each line of text on its own row
    Lines { text: String },

    /// Generate a random alphanumeric string
    Random { length: usize },

    /// Check text against a predicate. E.g. email, http, https, alpha, num, alnum, blank
    Check { kind: String, text: String },

    /// Parse text as a number or bool. E.g. int, i8, i16, i32, i64, f32, f64, bool
    Parse { kind: String, text: String },

    /// Print the current locale descriptor
    Locale,
}

pub fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Camel { text } => println!("{}", text.camel_case()),
        Commands::Trim { text } => println!("{}", text.trimmed()),
        Commands::Reverse { text } => println!("{}", text.reversed()),
        Commands::Latin { text } => println!("{}", text.latinized()),
        Commands::Strip { text } => println!("{}", text.without_spaces_and_newlines()),

        Commands::Lines { text } => {
            for line in text.split_lines() {
                println!("{}", line);
            }
        }

        Commands::Random { length } => println!("{}", random_string(length)),

        Commands::Check { kind, text } => run_check(&kind, &text),

        Commands::Parse { kind, text } => run_parse(&kind, &text),

        Commands::Locale => println!("{}", current_locale()),
    }
}

fn run_check(kind: &str, text: &str) {
    let ok = match kind {
        "email" => text.is_email(),
        "http" => text.is_http_url(),
        "https" => text.is_https_url(),
        "alpha" => text.is_alphabetic(),
        "num" => text.is_numeric(),
        "alnum" => text.is_alphanumeric(),
        "blank" => text.is_blank(),
        _ => {
            eprintln!("{}", format!("Unknown check: {}", kind).red());
            process::exit(2);
        }
    };

    crate::log!("check", "{} {:?} -> {}", kind, text, ok);

    if ok {
        println!("{}", "yes".green());
    } else {
        println!("{}", "no".red());
        process::exit(1);
    }
}

fn run_parse(kind: &str, text: &str) {
    let value = match kind {
        "int" => text.to_int().map(|v| v.to_string()),
        "i8" => text.to_i8().map(|v| v.to_string()),
        "i16" => text.to_i16().map(|v| v.to_string()),
        "i32" => text.to_i32().map(|v| v.to_string()),
        "i64" => text.to_i64().map(|v| v.to_string()),
        "f32" => text.to_f32().map(|v| v.to_string()),
        "f64" => text.to_f64().map(|v| v.to_string()),
        "bool" => text.to_bool().map(|v| v.to_string()),
        _ => {
            eprintln!("{}", format!("Unknown parse target: {}", kind).red());
            process::exit(2);
        }
    };

    match value {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{}", format!("Cannot parse {:?} as {}", text, kind).red());
            process::exit(1);
        }
    }
}
