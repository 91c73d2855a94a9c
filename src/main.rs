use alertdecoder::cli::commands::{Cli, Commands};
use alertdecoder::cli::render;
use alertdecoder::domain::values::action_type::ActionType;
use alertdecoder::domain::values::bias::Bias;
use alertdecoder::AlertDecoder;
use clap::Parser;
use std::io::Read;

fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("ALERTDECODER_DB").unwrap_or_else(|_| "./alertdecoder.db".into());

    let ad = match AlertDecoder::new(&db_path) {
        Ok(ad) => ad,
        Err(e) => {
            eprintln!("Error initializing alert decoder: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(ad, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(ad: AlertDecoder, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Decode {
            message,
            json,
            save,
            source,
        } => {
            let message = match message {
                Some(m) => m,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            if message.trim().is_empty() {
                eprintln!("Please paste an alert message to decode.");
                std::process::exit(1);
            }

            let record = ad.decode_message(&message, source, save)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", render::render_decoded(&record.decoded));
                if save {
                    println!("\nSaved as {}", record.id);
                }
            }
        }
        Commands::Query {
            ticker,
            bias,
            action,
            since,
            limit,
        } => {
            let bias: Option<Bias> = bias.map(|b| b.parse()).transpose().map_err(|e: String| e)?;
            let action: Option<ActionType> = action
                .map(|a| a.parse())
                .transpose()
                .map_err(|e: String| e)?;
            let since_dt = parse_date(&since)?;
            let records = ad.query(ticker, bias, action, since_dt, Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Show { id } => {
            let record = ad.get(&id)?;
            println!("{}", render::render_record(&record));
        }
        Commands::Stats => {
            let stats = ad.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Export { ticker, since } => {
            let since_dt = parse_date(&since)?;
            let records = ad.query(ticker, None, None, since_dt, None)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn parse_date(s: &Option<String>) -> Result<Option<chrono::DateTime<chrono::Utc>>, String> {
    match s {
        None => Ok(None),
        Some(s) => {
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
                return Ok(Some(dt.with_timezone(&chrono::Utc)));
            }
            if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                if let Some(dt) = date.and_hms_opt(0, 0, 0) {
                    return Ok(Some(chrono::DateTime::from_naive_utc_and_offset(
                        dt,
                        chrono::Utc,
                    )));
                }
            }
            Err(format!(
                "Invalid date format: {s}. Use YYYY-MM-DD or RFC3339"
            ))
        }
    }
}
