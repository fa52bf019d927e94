#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};
use vacances::{
    dates::{dates_between, format_date_range, parse_day, DAY_FORMAT},
    io,
    model::Group,
    overlap::{best_overlap_periods, block_details, daily_availability, OverlapOptions},
};

/// CLI de recherche de dates communes (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du groupe
    #[arg(long, global = true, default_value = "group.json")]
    group: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classer les meilleurs blocs de jours communs
    Overlap {
        #[arg(long, default_value_t = 3)]
        duration: u32,
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Export JSON du classement complet (optionnel)
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Lister les jours d'une période (YYYY-MM-DD, bornes incluses)
    Days {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },

    /// Nombre de participants libres, jour par jour
    Heatmap,

    /// Qui est libre sur un bloc donné
    Block {
        /// Premier jour du bloc (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        #[arg(long, default_value_t = 3)]
        duration: u32,
    },

    /// Créer un groupe depuis un sondage CSV
    ImportPoll {
        #[arg(long)]
        csv: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Fichier de sortie (défaut : --group)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Overlap {
            duration,
            limit,
            out_json,
        } => {
            let group = io::load_group_json(&cli.group)?;
            let opts = OverlapOptions {
                duration_days: duration,
                limit,
            };
            let windows = group.overlap(opts.duration_days);
            if let Some(path) = out_json {
                io::export_windows_json(path, &windows)?;
            }
            if windows.is_empty() {
                eprintln!(
                    "No {duration}-day block fits ({} participant(s), {} → {})",
                    group.participants.len(),
                    group.start_date,
                    group.end_date
                );
                // Code 2 = aucun résultat
                2
            } else {
                for w in best_overlap_periods(&windows, opts.limit) {
                    println!(
                        "{} → {} | {}/{} | {}% | {}",
                        w.start_date.format(DAY_FORMAT),
                        w.end_date.format(DAY_FORMAT),
                        w.available_count,
                        w.total_participants,
                        w.availability_percent,
                        format_date_range(w.start_date, w.end_date)
                    );
                }
                0
            }
        }
        Commands::Days { start, end } => {
            let start = parse_day(&start)?;
            let end = parse_day(&end)?;
            for day in dates_between(start, end) {
                println!("{}", day.format(DAY_FORMAT));
            }
            0
        }
        Commands::Heatmap => {
            let group = io::load_group_json(&cli.group)?;
            for day in daily_availability(&group.participants, group.range()) {
                println!(
                    "{} | {}/{} | {}%",
                    day.date.format(DAY_FORMAT),
                    day.available_count,
                    day.total_participants,
                    day.availability_percent
                );
            }
            0
        }
        Commands::Block { start, duration } => {
            let group = io::load_group_json(&cli.group)?;
            let start = parse_day(&start)?;
            let range = group.range();
            let Some(details) = block_details(&group.participants, range, start, duration) else {
                bail!(
                    "block of {duration} day(s) from {start} does not fit in {} → {}",
                    range.start(),
                    range.end()
                );
            };
            println!("{}", format_date_range(details.start, details.end));
            for p in &details.available {
                println!("+ {}", p.name);
            }
            for (p, missing) in &details.unavailable {
                let plural = if *missing == 1 { "" } else { "s" };
                println!("- {} (missing {missing} day{plural})", p.name);
            }
            0
        }
        Commands::ImportPoll {
            csv,
            name,
            start,
            end,
            out,
        } => {
            let mut group = Group::new(name, parse_day(&start)?, parse_day(&end)?)?;
            for person in io::import_poll_csv(csv)? {
                group.add_participant(person)?;
            }
            let out = out.unwrap_or(cli.group);
            io::export_group_json(&out, &group)?;
            println!(
                "Imported {} participant(s) into {} ({})",
                group.participants.len(),
                out,
                group.id
            );
            0
        }
    };

    std::process::exit(code);
}
