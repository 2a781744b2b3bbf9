//! Learning outcomes builder.
//!
//! Usage:
//!   outcomes                      # interactive wizard
//!   outcomes generate --verb analizar --content "la Revolución Industrial" \
//!       --condition "a partir de fuentes primarias" --export txt
//!   outcomes validate "Al finalizar ..."
//!   outcomes bank show

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use outcomes_builder::bank::{BankStore, PhraseBank};
use outcomes_builder::config::Config;
use outcomes_builder::criterion::{RubricRow, normalize_verb, suggest_criterion};
use outcomes_builder::export::{ExportFormat, export};
use outcomes_builder::generator::{OutcomeParts, generate_outcome};
use outcomes_builder::i18n::Lang;
use outcomes_builder::validator::validate_outcome;
use outcomes_builder::variations::{RandomSampler, Sampler, generate_variations};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[command(name = "outcomes")]
#[command(about = "Build, validate and export learning outcome statements", long_about = None)]
struct Cli {
    /// Interface and template language (overrides config)
    #[arg(long, global = true, value_enum)]
    lang: Option<Lang>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Step-by-step terminal wizard (default)
    Wizard,
    /// Compose an outcome from flags and print it with its findings
    Generate(GenerateArgs),
    /// Check an outcome sentence; exits with status 1 when defects are found
    Validate {
        /// Sentence to check
        text: String,
    },
    /// Inspect or replace the persisted phrase bank
    Bank {
        #[command(subcommand)]
        command: BankCommands,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long)]
    verb: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    condition: String,
    /// Measurable criterion; suggested from the verb and rubric when omitted
    #[arg(long)]
    criterion: Option<String>,
    #[arg(long)]
    duration: Option<String>,
    /// Cognitive level used for variations; inferred from the verb when omitted
    #[arg(long)]
    level: Option<String>,
    /// Rubric row as NAME=WEIGHT, repeatable
    #[arg(long = "rubric")]
    rubric: Vec<RubricRow>,
    /// Also produce up to three alternative sentences
    #[arg(long)]
    variations: bool,
    #[arg(long, value_enum)]
    export: Vec<ExportFormat>,
    /// Seed for reproducible variations
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum BankCommands {
    /// Print the active bank as JSON
    Show,
    /// Print where the bank is stored
    Path,
    /// Delete the stored bank so the built-in one applies
    Reset,
    /// Replace the bank with the contents of a JSON file
    Import { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(lang) = cli.lang {
        config.app.lang = lang;
    }

    let command = cli.command.unwrap_or(Commands::Wizard);
    let writer = match &command {
        Commands::Wizard => log_file_writer(&config.data_dir()),
        _ => BoxMakeWriter::new(std::io::stderr),
    };
    init_logging(&config, writer);
    for notice in &config.notices {
        warn!("{}", notice);
    }

    match command {
        Commands::Wizard => outcomes_builder::tui::run(&config),
        Commands::Generate(args) => generate(&config, args),
        Commands::Validate { text } => {
            let findings = validate_outcome(config.app.lang, &text);
            print_findings(config.app.lang, &findings);
            if !findings.is_empty() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Bank { command } => bank(&config, command),
    }
}

fn init_logging(config: &Config, writer: BoxMakeWriter) {
    tracing_subscriber::fmt()
        .with_env_filter(config.app.log_level.as_str())
        .with_ansi(false)
        .with_writer(writer)
        .init();
}

/// The wizard owns the screen, so its logs go to `<data_dir>/outcomes.log`.
fn log_file_writer(data_dir: &Path) -> BoxMakeWriter {
    let opened = std::fs::create_dir_all(data_dir).and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(data_dir.join("outcomes.log"))
    });
    match opened {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    }
}

fn generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let lang = config.app.lang;
    let bank = BankStore::new(config.data_dir()).load();

    let criterio = match args.criterion {
        Some(c) => c,
        None => suggest_criterion(lang, &args.verb, &args.content, &args.rubric),
    };
    let parts = OutcomeParts {
        duracion: args
            .duration
            .unwrap_or_else(|| config.app.default_duration.clone()),
        verbo: args.verb,
        contenido: args.content,
        condicion: args.condition,
        criterio,
    };

    let resultado = generate_outcome(lang, &parts, None);
    println!("{}", resultado);

    let mut variaciones = Vec::new();
    if args.variations {
        let level = args
            .level
            .or_else(|| level_of(&bank, &parts.verbo))
            .unwrap_or_default();
        let mut sampler: Box<dyn Sampler> = match args.seed {
            Some(seed) => Box::new(RandomSampler::seeded(seed)),
            None => Box::new(RandomSampler::thread()),
        };
        variaciones =
            generate_variations(lang, &parts, &bank, &level, &args.rubric, sampler.as_mut());
        println!();
        println!("{}:", lang.labels().variations);
        for v in &variaciones {
            println!("- {}", v);
        }
    }

    println!();
    print_findings(lang, &validate_outcome(lang, &resultado));

    let dir = config.export_dir();
    for format in args.export {
        let path = export(format, &dir, lang, &resultado, &variaciones)?;
        println!("{} {}", lang.labels().exported, path.display());
    }
    Ok(())
}

/// First cognitive level whose verb list contains `verb`.
fn level_of(bank: &PhraseBank, verb: &str) -> Option<String> {
    let verb = normalize_verb(verb);
    bank.levels()
        .into_iter()
        .find(|level| bank.verbs_for(level).iter().any(|v| normalize_verb(v) == verb))
        .map(str::to_string)
}

fn print_findings(lang: Lang, findings: &[String]) {
    let labels = lang.labels();
    println!("{}:", labels.validation_title);
    if findings.is_empty() {
        println!("✓ {}", labels.validation_ok);
    }
    for f in findings {
        println!("• {}", f);
    }
}

fn bank(config: &Config, command: BankCommands) -> Result<()> {
    let store = BankStore::new(config.data_dir());
    match command {
        BankCommands::Show => println!("{}", store.load().to_pretty_json()),
        BankCommands::Path => println!("{}", store.path().display()),
        BankCommands::Reset => {
            store.clear()?;
            info!("Phrase bank reset to built-in default");
            println!("{}", PhraseBank::default().to_pretty_json());
        }
        BankCommands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let mut bank = store.load();
            store.save_from_text(config.app.lang, &text, &mut bank)?;
            println!("{}", config.app.lang.labels().bank_saved);
        }
    }
    Ok(())
}
