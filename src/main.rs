//! Fancy Forge - fancy-text generation from the command line
//!
//! Prints one page of stylized renderings for the given text. Use `--offset`
//! to load the next page.

use anyhow::Context;
use fancy_forge::{
    types::{FancyText, GenerationConfig, OutputFormat},
    Catalog, FancyGenerator, ForgeError, Result,
};
use std::env;
use std::process;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    text: Option<String>,
    offset: Option<u64>,
    limit: Option<usize>,
    format: Option<OutputFormat>,
    style: Option<String>,
    list_styles: bool,
    help: bool,
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = fancy_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args).await {
        match e.downcast_ref::<ForgeError>() {
            Some(forge) => eprintln!("{}", forge.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let cli = parse_args(args)?;

    if cli.help {
        print_help();
        return Ok(());
    }

    let generator = FancyGenerator::new();

    if cli.list_styles {
        list_styles(generator.catalog());
        return Ok(());
    }

    let mut config = GenerationConfig::from_env()?;
    if let Some(offset) = cli.offset {
        config.offset = offset;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let style_filter = match &cli.style {
        Some(name) => Some(
            generator
                .catalog()
                .style_by_name(name)
                .ok_or_else(|| ForgeError::cli(format!("unknown style '{}' (see --list-styles)", name)))?
                .name
                .clone(),
        ),
        None => None,
    };

    let text = match cli.text {
        Some(text) => text,
        None => prompt_for_text()?,
    };

    let mut results = generator
        .generate_batch_async(text, config.offset, config.limit)
        .await
        .context("generation failed")?;

    if let Some(style) = &style_filter {
        results.retain(|r| &r.style_name == style);
    }

    match config.format {
        OutputFormat::Grid => display_grid(&results, &config),
        OutputFormat::Plain => {
            for result in &results {
                println!("{}", result.text);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).map_err(ForgeError::from)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut words: Vec<&str> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--json" => cli.format = Some(OutputFormat::Json),
            "--plain" => cli.format = Some(OutputFormat::Plain),
            "--list-styles" => cli.list_styles = true,
            "--offset" => {
                let value = flag_value(&mut iter, "--offset")?;
                cli.offset = Some(value.parse().map_err(|_| {
                    ForgeError::cli(format!("--offset expects a non-negative integer, got '{}'", value))
                })?);
            }
            "--limit" => {
                let value = flag_value(&mut iter, "--limit")?;
                let limit: i64 = value.parse().map_err(|_| {
                    ForgeError::cli(format!("--limit expects an integer, got '{}'", value))
                })?;
                if limit < 0 {
                    eprintln!("⚠️  Negative limit {} treated as 0", limit);
                }
                cli.limit = Some(limit.max(0) as usize);
            }
            "--style" => {
                cli.style = Some(flag_value(&mut iter, "--style")?.to_string());
            }
            other if other.starts_with("--") => {
                return Err(ForgeError::cli(format!("unknown option '{}'", other)));
            }
            word => words.push(word),
        }
    }

    if !words.is_empty() {
        cli.text = Some(words.join(" "));
    }

    Ok(cli)
}

fn flag_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str> {
    iter.next()
        .map(|s| s.as_str())
        .ok_or_else(|| ForgeError::cli(format!("{} requires a value", flag)))
}

fn prompt_for_text() -> anyhow::Result<String> {
    let text = inquire::Text::new("✍️  Text to stylize:")
        .with_help_message("Letters and digits are restyled, everything else is kept")
        .prompt()
        .context("no input text given and the interactive prompt is unavailable")?;
    Ok(text)
}

/// Display a page of results as a numbered grid
fn display_grid(results: &[FancyText], config: &GenerationConfig) {
    if results.is_empty() {
        println!("😔 Nothing to show. Enter some text and a positive --limit.");
        return;
    }

    println!("✨ Fancy Text ({} results from #{}):", results.len(), config.offset);
    println!("═══════════════════════════════════");
    for result in results {
        println!(
            "{:>5}. [{:<22} {:<5}] {}",
            result.id,
            result.style_name,
            result.category.to_string(),
            result.text
        );
    }
    println!();

    let next = config.offset.saturating_add(config.limit as u64);
    println!("💡 More: --offset {} --limit {}", next, config.limit);
}

fn list_styles(catalog: &Catalog) {
    println!("🔤 Styles ({}):", catalog.styles().len());
    println!("═══════════════════");
    for style in catalog.styles() {
        println!(
            "{:<24} U+{:05X}  {}",
            style.name,
            style.start,
            fancy_forge::remap("Fancy Forge 123", style.start)
        );
    }
    println!();
    println!(
        "🎨 {} templates · {} decorators · {} glitch marks",
        catalog.templates().len(),
        catalog.decorators().len(),
        catalog.glitch_marks().len()
    );
}

/// Print help information
fn print_help() {
    println!("✨ Fancy Forge - fancy text generator");
    println!("═══════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    fancy-forge [OPTIONS] [TEXT...]");
    println!();
    println!("OPTIONS:");
    println!("    --offset N        First result index (default: 0)");
    println!("    --limit N         Results per page (default: 50)");
    println!("    --json            Print results as JSON");
    println!("    --plain           Print one result per line");
    println!("    --style NAME      Only keep results rendered in NAME");
    println!("    --list-styles     Show every alphabet with a preview");
    println!("    -h, --help        Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    fancy-forge \"hello world\"                 # First page");
    println!("    fancy-forge --offset 50 \"hello world\"     # Next page");
    println!("    fancy-forge --json --limit 12 gamer        # One full strategy cycle");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    FANCY_FORGE_OFFSET   Default offset");
    println!("    FANCY_FORGE_LIMIT    Default page size");
    println!("    FANCY_FORGE_FORMAT   grid, plain or json");
}
