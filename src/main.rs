// SPDX-License-Identifier: PMPL-1.0-or-later

//! pangaleo: offline tooling for the PangaLeo site behaviour layer
//!
//! Inspects the English/Swahili catalog and renders page snapshots through the
//! same startup sequence the browser runs, so translations can be checked
//! without opening the site.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pangaleo_site::config::SiteConfig;
use pangaleo_site::dom::MemoryDocument;
use pangaleo_site::i18n::{language_name, native_name, Dictionary, Lang};
use pangaleo_site::site::{Environment, Site};
use pangaleo_site::storage::{save_language, FileStore, MemoryStore, PreferenceStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pangaleo")]
#[command(version)]
#[command(about = "Translation catalog and page rendering tools for the PangaLeo site")]
#[command(long_about = None)]
struct Cli {
    /// Site configuration (JSON); defaults apply when absent
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages
    Langs,

    /// Resolve one translation key
    Resolve {
        /// Translation key, e.g. nav.about
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (default: configured default language)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Report keys missing from, or unknown to, the fallback language
    Coverage,

    /// Run the page startup sequence over a JSON page snapshot
    Render {
        /// Page snapshot (JSON)
        #[arg(value_name = "PAGE")]
        page: PathBuf,

        /// Show this language instead of the stored/default one
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Preference file to read the stored language from
        #[arg(short, long)]
        prefs: Option<PathBuf>,

        /// Seed for the carousel shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Write the translated snapshot here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store a language choice in a preference file
    Select {
        #[arg(value_name = "LANG", value_enum)]
        lang: LangArg,

        /// Preference file
        #[arg(short, long, default_value = "pangaleo-prefs.json")]
        prefs: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Sw,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Sw => Lang::Sw,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let dictionary = Arc::new(Dictionary::builtin());

    match cli.command {
        Commands::Langs => {
            println!("Supported languages:");
            for &lang in Lang::all() {
                let mut roles = Vec::new();
                if lang == config.default_language {
                    roles.push("default");
                }
                if lang == dictionary.fallback() {
                    roles.push("fallback");
                }
                println!(
                    "  {}  {:<8} {:<10} {}",
                    lang.code().bold(),
                    language_name(lang),
                    native_name(lang),
                    roles.join(", ").dimmed()
                );
            }
        }

        Commands::Resolve { key, lang } => {
            let lang = lang.map(Lang::from).unwrap_or(config.default_language);
            let fallback = dictionary.fallback();
            let text = dictionary.resolve(lang, &key);
            if text.is_empty() {
                return Err(anyhow!(
                    "no translation for '{}' in {} or {}",
                    key,
                    lang,
                    fallback
                ));
            }
            if dictionary.lookup(lang, &key).is_none() {
                eprintln!("{} '{}' falls back to {}", "note:".yellow(), key, fallback);
            }
            println!("{}", text);
        }

        Commands::Coverage => {
            let fallback = dictionary.fallback();
            let total = dictionary.keys(fallback).len();
            println!("Fallback language {}: {} keys", fallback.code().bold(), total);
            let mut orphaned = false;
            for coverage in dictionary.coverage() {
                println!(
                    "\n  {} ({}): {:.1}% translated",
                    coverage.lang.code().bold(),
                    language_name(coverage.lang),
                    coverage.percent(total)
                );
                for key in &coverage.missing {
                    println!("    {} {}", "missing".yellow(), key);
                }
                for key in &coverage.orphans {
                    println!("    {} {}", "orphan".red(), key);
                }
                orphaned |= !coverage.orphans.is_empty();
            }
            if orphaned {
                return Err(anyhow!("catalog has keys unknown to {}", fallback));
            }
        }

        Commands::Render {
            page,
            lang,
            prefs,
            seed,
            output,
        } => {
            let json = std::fs::read_to_string(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let doc = MemoryDocument::from_json(&json)
                .with_context(|| format!("parsing page {}", page.display()))?;
            let store: Box<dyn PreferenceStore> = match prefs {
                Some(path) => Box::new(FileStore::new(path)),
                None => Box::new(MemoryStore::new()),
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let mut site = Site::boot(
                doc,
                store,
                dictionary,
                config,
                &Environment::default(),
                &mut rng,
            );
            if let Some(lang) = lang {
                site.show(lang.into());
            }
            let report = site.refresh();

            eprintln!("Rendered {} in {}", page.display(), report.lang.code().bold());
            eprintln!("  Text nodes:    {}", report.text);
            eprintln!("  Placeholders:  {}", report.placeholders);
            eprintln!("  Values:        {}", report.values);
            eprintln!("  Captions:      {}", report.captions);
            eprintln!("  Status lines:  {}", report.statuses);
            eprintln!("  WhatsApp links: {}", report.links);

            let (doc, _) = site.into_parts();
            let rendered = doc.to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("Snapshot saved to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Select { lang, prefs } => {
            let lang = Lang::from(lang);
            let mut store = FileStore::new(&prefs);
            if !save_language(&mut store, &config.storage_key, lang) {
                return Err(anyhow!("could not write {}", prefs.display()));
            }
            println!(
                "Stored {} ({}) in {}",
                lang.code().bold(),
                native_name(lang),
                prefs.display()
            );
        }
    }

    Ok(())
}
