use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use astrohex::{Color, ColorProfile, generate};

/// Derive sun, moon, and rising display colors from a birth date.
#[derive(Parser)]
#[command(name = "astrohex", version, about)]
struct Cli {
    /// Birth date in MM/DD/YYYY form; prompts on stdin when omitted
    date: Option<String>,

    /// Print the result as a JSON object instead of the text report
    #[arg(long)]
    json: bool,

    /// Skip the truecolor swatches next to each hex value
    #[arg(long)]
    no_swatches: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match cli.date {
        Some(date) => date,
        None => prompt_for_date()?,
    };

    let profile = generate(&input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        render(&profile, !cli.no_swatches);
    }
    Ok(())
}

fn prompt_for_date() -> Result<String> {
    print!("Enter your birthday (MM/DD/YYYY): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read birth date from stdin")?;
    Ok(line)
}

fn render(profile: &ColorProfile, swatches: bool) {
    println!("Birthstone: {}", profile.birthstone);
    println!("Sun color: {}", paint(profile.sun, swatches));
    println!("Moon color: {}", paint(profile.moon, swatches));
    println!("Rising color: {}", paint(profile.rising, swatches));
}

fn paint(color: Color, swatches: bool) -> String {
    if swatches {
        let [r, g, b] = color.channels();
        format!("{} {}", color, "      ".on_truecolor(r, g, b))
    } else {
        color.to_string()
    }
}
