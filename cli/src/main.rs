mod analyze;
mod config;
mod error;
mod scrape;

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use job_scraper::Source;
use reqwest::Client;

use crate::config::Settings;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Job board to scrape: dou (1) or djinni (2), asked for when missing
    #[arg(long, value_parser = parse_site)]
    site: Option<Source>,

    #[command(flatten)]
    settings: Settings,

    /// Defaults to `run`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Scrape vacancies with their descriptions, then rank the skills
    Run,
    /// Scrape vacancies with their descriptions and save them
    Scrape,
    /// Rank the skills of previously saved vacancies
    Analyze,
}

fn parse_site(s: &str) -> std::result::Result<Source, String> {
    s.parse::<Source>().map_err(|e| e.to_string())
}

/// Ask until the answer names a known job board
fn prompt_site(input: &mut impl BufRead, output: &mut impl Write) -> Result<Source> {
    loop {
        write!(
            output,
            "Would you like to parse jobs from dou.ua or from djinni.co?\nEnter 1 or 2: "
        )?;
        output.flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no job board chosen").into());
        }
        match answer.parse::<Source>() {
            Ok(site) => return Ok(site),
            Err(_) => writeln!(output, "Error. Choose another option.\n")?,
        }
    }
}

fn site_or_prompt(site: Option<Source>) -> Result<Source> {
    match site {
        Some(site) => Ok(site),
        None => prompt_site(&mut io::stdin().lock(), &mut io::stdout()),
    }
}

async fn run(args: Cli) -> Result<()> {
    let client = Client::new();
    let settings = &args.settings;
    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let catalog = analyze::catalog(&client, settings).await?;
            let site = site_or_prompt(args.site)?;
            let vacancies = scrape::scrape(&client, site, settings).await?;
            analyze::analyze(&vacancies, &catalog, settings).await?;
        }
        Commands::Scrape => {
            let site = site_or_prompt(args.site)?;
            scrape::scrape(&client, site, settings).await?;
        }
        Commands::Analyze => {
            let catalog = analyze::catalog(&client, settings).await?;
            let vacancies = persistence::load_vacancies(&settings.vacancies_file).await?;
            analyze::analyze(&vacancies, &catalog, settings).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
