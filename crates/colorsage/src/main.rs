use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use colorsage::settings::{OutputFormat, SettingsConfig};
use colorsage::{
    Analysis, Color, MAX_SUGGESTIONS, Suggestion, SuggestionTarget, analyze, evaluate_contrast,
    suggest_alternatives,
};

/// WCAG 2.1 contrast checker with accessible color suggestions.
#[derive(Debug, Parser)]
#[command(name = "colorsage", version)]
struct Cli {
    /// Print JSON instead of text (overrides the configured output)
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Contrast ratio and WCAG pass/fail for a text/background pair
    Check { text: String, background: String },

    /// Lighter and darker variants of BASE that contrast with TARGET
    Suggest {
        base: String,
        target: String,

        /// Minimum ratio a suggestion must reach (defaults to the configured target)
        #[arg(long)]
        min_contrast: Option<f64>,

        /// Maximum number of suggestions (1-6)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check a pair and suggest fixes for both colors when it fails
    Analyze {
        /// Defaults to the configured text color
        text: Option<String>,
        /// Defaults to the configured background color
        background: Option<String>,
    },

    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Print the settings file location
    Path,
    /// Write default settings, keeping an existing file unless --force
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = SettingsConfig::load();
    let output = if cli.json { OutputFormat::Json } else { settings.output };

    match cli.command {
        Command::Check { text, background } => cmd_check(&text, &background, output),
        Command::Suggest {
            base,
            target,
            min_contrast,
            limit,
        } => {
            let min_contrast = min_contrast.unwrap_or(settings.target_contrast);
            let limit = limit.unwrap_or(settings.max_suggestions);
            cmd_suggest(&base, &target, min_contrast, limit, output)
        }
        Command::Analyze { text, background } => {
            let text = text.unwrap_or_else(|| settings.text_color.to_hex());
            let background = background.unwrap_or_else(|| settings.background_color.to_hex());
            cmd_analyze(&text, &background, &settings, output)
        }
        Command::Config { action } => cmd_config(action, &settings),
    }
}

fn cmd_check(text: &str, background: &str, output: OutputFormat) -> Result<()> {
    let result = evaluate_contrast(text, background)?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let text = Color::parse(text)?;
            let background = Color::parse(background)?;
            println!("{}", result.summary(text, background));
        }
    }
    Ok(())
}

fn cmd_suggest(
    base: &str,
    target: &str,
    min_contrast: f64,
    limit: usize,
    output: OutputFormat,
) -> Result<()> {
    if !(1..=MAX_SUGGESTIONS).contains(&limit) {
        bail!("--limit must be between 1 and {MAX_SUGGESTIONS}, got {limit}");
    }
    // Reject bad input here; the library treats it as "no suggestions"
    Color::parse(base).with_context(|| format!("base color {base:?}"))?;
    Color::parse(target).with_context(|| format!("target color {target:?}"))?;

    let mut suggestions = suggest_alternatives(base, target, min_contrast);
    suggestions.truncate(limit);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&suggestions)?),
        OutputFormat::Text if suggestions.is_empty() => {
            println!("No variant of {base} reaches {min_contrast}:1 against {target}");
        }
        OutputFormat::Text => print_suggestions(&suggestions),
    }
    Ok(())
}

fn cmd_analyze(
    text: &str,
    background: &str,
    settings: &SettingsConfig,
    output: OutputFormat,
) -> Result<()> {
    let mut analysis = analyze(text, background, settings.target_contrast)?;
    if let Analysis::NeedsImprovement {
        text, background, ..
    } = &mut analysis
    {
        text.truncate(settings.max_suggestions);
        background.truncate(settings.max_suggestions);
    }

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let text = Color::parse(text)?;
    let background = Color::parse(background)?;
    println!("{}", analysis.result().summary(text, background));
    println!();

    if analysis.is_passing() {
        println!("Great contrast! This combination meets WCAG accessibility standards.");
        return Ok(());
    }

    println!(
        "Needs improvement. Accessible alternatives at {}:1 or better:",
        settings.target_contrast
    );
    for &target in SuggestionTarget::ALL {
        println!();
        println!("{}:", target.display_name());
        let suggestions = analysis.suggestions_for(target);
        if suggestions.is_empty() {
            println!("  (none found)");
        } else {
            print_suggestions(suggestions);
        }
    }
    Ok(())
}

fn cmd_config(action: ConfigAction, settings: &SettingsConfig) -> Result<()> {
    match action {
        ConfigAction::Show => println!("{}", serde_json::to_string_pretty(settings)?),
        ConfigAction::Path => {
            let path = SettingsConfig::default_path().context("no config directory on this platform")?;
            println!("{}", path.display());
        }
        ConfigAction::Init { force } => {
            let path = SettingsConfig::default_path().context("no config directory on this platform")?;
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            SettingsConfig::default().save_to(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion]) {
    for s in suggestions {
        println!(
            "  {}  {:>7}  {}",
            s.color,
            colorsage::contrast::format_ratio(s.contrast),
            s.grade().display_name()
        );
    }
}
