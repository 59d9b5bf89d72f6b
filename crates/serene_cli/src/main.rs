mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::ScanInput;
use serene_assessment::FlowTask;
use serene_core::SereneConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "serene", author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file (missing file falls back to defaults)
    #[arg(short, long, env = "SERENE_CONFIG", default_value = "serene.toml", global = true)]
    config: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full psychological scan
    Scan {
        /// Journal file, one entry per line
        #[arg(long)]
        journal: Option<PathBuf>,
        /// Thought-record file, one thought per line
        #[arg(long)]
        thoughts: Option<PathBuf>,
        /// Extra journal entry (repeatable)
        #[arg(long = "entry")]
        entries: Vec<String>,
        /// Extra thought (repeatable)
        #[arg(long = "thought")]
        thought_lines: Vec<String>,
        /// Challenge outcome as `event=outcome` (repeatable)
        #[arg(long = "challenge", value_parser = parse_challenge)]
        challenges: Vec<(String, f32)>,
        /// Seed for attention-test sampling; overrides the config
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0.0)]
        sleep_quality: f32,
        #[arg(long, default_value_t = 0.0)]
        muscle_tension: f32,
    },
    /// Redact blacklisted phrases from text
    Filter { text: String },
    /// Scan text for cognitive distortions
    Bias { text: String },
    /// Lexicon emotion balance of a journal entry
    Balance { text: String },
    /// Pick today's reward bundle
    Reward {
        #[arg(long)]
        energy: f32,
        #[arg(long)]
        stress: f32,
    },
    /// Estimate flow probability for a task
    Flow {
        #[arg(long)]
        skill: f32,
        #[arg(long)]
        challenge: f32,
        /// Minutes between feedback
        #[arg(long, default_value_t = 30.0)]
        feedback_interval: f32,
    },
    /// Feed emotion events (`text:intensity`) through the trend pipeline
    Track {
        #[arg(value_parser = parse_event, required = true)]
        events: Vec<(String, f32)>,
        #[arg(long, default_value_t = 0.0)]
        energy: f32,
        #[arg(long, default_value_t = 0.0)]
        stress: f32,
    },
    /// Physical self-care plan: sleep window, micro workouts, nutrition
    Care {
        /// Meal description (repeatable)
        #[arg(long = "meal")]
        meals: Vec<String>,
    },
}

fn parse_challenge(s: &str) -> Result<(String, f32), String> {
    split_scored(s, '=')
}

fn parse_event(s: &str) -> Result<(String, f32), String> {
    split_scored(s, ':')
}

/// Split `label<sep>number` at the last separator.
fn split_scored(s: &str, sep: char) -> Result<(String, f32), String> {
    let (label, value) = s
        .rsplit_once(sep)
        .ok_or_else(|| format!("expected `text{}number`, got '{}'", sep, s))?;
    let value: f32 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number '{}': {}", value, e))?;
    Ok((label.to_string(), value))
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = SereneConfig::load_or_default(&args.config);
    info!("Loaded config (trend window {})", config.trend.window);

    let output = match args.command {
        Command::Scan {
            journal,
            thoughts,
            entries,
            thought_lines,
            challenges,
            seed,
            sleep_quality,
            muscle_tension,
        } => {
            let mut input = ScanInput {
                challenges,
                seed,
                sleep_quality,
                muscle_tension,
                ..ScanInput::default()
            };
            if let Some(path) = journal {
                input.journal = commands::read_entries(&path)?;
            }
            input.journal.extend(entries);
            if let Some(path) = thoughts {
                input.thoughts = commands::read_entries(&path)?;
            }
            input.thoughts.extend(thought_lines);
            commands::scan(&config, input)?
        }
        Command::Filter { text } => commands::filter(&config, &text)?,
        Command::Bias { text } => commands::bias(&config, &text)?,
        Command::Balance { text } => commands::balance(&config, &text)?,
        Command::Reward { energy, stress } => commands::reward(&config, energy, stress)?,
        Command::Flow {
            skill,
            challenge,
            feedback_interval,
        } => commands::flow(
            &config,
            FlowTask {
                skill_level: skill,
                challenge_level: challenge,
                feedback_interval_minutes: feedback_interval,
            },
        )?,
        Command::Track {
            events,
            energy,
            stress,
        } => commands::track(&config, &events, energy, stress)?,
        Command::Care { meals } => commands::care(&meals)?,
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scored_uses_last_separator() {
        assert_eq!(
            parse_event("ratio 1:2 felt odd:0.4").unwrap(),
            ("ratio 1:2 felt odd".to_string(), 0.4)
        );
        assert_eq!(
            parse_challenge("项目截止日提前=0.7").unwrap(),
            ("项目截止日提前".to_string(), 0.7)
        );
    }

    #[test]
    fn test_split_scored_errors() {
        assert!(parse_event("no separator").is_err());
        assert!(parse_challenge("exam=high").is_err());
    }

    #[test]
    fn test_args_parse_scan() {
        let args = Args::try_parse_from([
            "serene",
            "scan",
            "--entry",
            "希望",
            "--challenge",
            "exam=0.8",
            "--seed",
            "3",
        ])
        .unwrap();
        match args.command {
            Command::Scan {
                entries,
                challenges,
                seed,
                ..
            } => {
                assert_eq!(entries, vec!["希望"]);
                assert_eq!(challenges, vec![("exam".to_string(), 0.8)]);
                assert_eq!(seed, Some(3));
            }
            other => panic!("Expected Scan, got {:?}", other),
        }
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
