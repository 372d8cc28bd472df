#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shiftplan::{
    io,
    render::{ScheduleRenderer, TextRenderer},
    scheduler::ScheduleManager,
    storage::{JsonStorage, Storage},
    Session,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Planificateur hebdomadaire d'équipes (matin / après-midi / soir)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Graine du tirage aléatoire de la passe de complément
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fichier JSON du roster (employés et préférences)
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Menu interactif (commande par défaut)
    Menu {
        /// Enregistre le roster saisi en quittant
        #[arg(long)]
        save: bool,
    },

    /// Importer des préférences depuis un CSV (`name,day,shift`)
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Générer la semaine à partir du roster, sans interaction
    Generate {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// N'affiche ni le planning ni le résumé
        #[arg(long)]
        quiet: bool,
    },
}

fn manager(seed: Option<u64>) -> ScheduleManager {
    match seed {
        Some(seed) => ScheduleManager::with_seed(seed),
        None => ScheduleManager::new(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = JsonStorage::open(&cli.roster)?;
    let mut manager = manager(cli.seed);

    let code = match cli.cmd.unwrap_or(Commands::Menu { save: false }) {
        Commands::Menu { save } => {
            if storage.path().exists() {
                manager.set_employees(storage.load()?);
            }
            let stdin = std::io::stdin();
            let mut session = Session::new(stdin.lock(), std::io::stdout(), manager);
            session.run()?;
            if save {
                storage.save(session.manager().employees())?;
            }
            0
        }
        Commands::Import { csv } => {
            let roster = io::import_preferences_csv(&csv)
                .with_context(|| format!("importing {csv}"))?;
            storage.save(&roster)?;
            println!(
                "Imported {} employee(s) into {}",
                roster.len(),
                storage.path().display()
            );
            0
        }
        Commands::Generate {
            out_json,
            out_csv,
            quiet,
        } => {
            manager.set_employees(storage.load()?);
            let report = manager.create_schedule();
            let renderer = TextRenderer;
            if report.empty_roster {
                eprintln!("No employees to schedule!");
            }
            if let Some(path) = out_json {
                io::export_schedule_json(path, manager.employees(), manager.schedule())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, manager.employees(), manager.schedule())?;
            }
            if !quiet {
                println!(
                    "{}\n\n{}",
                    renderer.render_schedule(manager.schedule(), manager.employees()),
                    renderer.render_summary(manager.schedule(), manager.employees())
                );
            }
            let understaffed = manager.understaffed().len();
            if understaffed == 0 {
                0
            } else {
                eprintln!("{understaffed} shift(s) under-staffed");
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
