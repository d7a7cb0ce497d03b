use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quack::api::{CmdMessage, ConfigAction, MessageLevel, QuackApi, QuackPaths, ResolveRequest};
use quack::browser::open_in_browser;
use quack::catalog::Catalog;
use quack::config::QuackConfig;
use quack::error::{QuackError, Result};
use quack::model::Bang;
use quack::policy::BlockMode;
use quack::resolver::{RedirectKind, Resolution};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuackApi<'static, quack::store::fs::FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Resolve {
            query,
            default,
            override_block,
            open,
        }) => handle_resolve(&ctx, query.join(" "), default, override_block, open),
        Some(Commands::Search { term, limit }) => {
            handle_search(&ctx, term.unwrap_or_default(), limit)
        }
        Some(Commands::Block { tag, mode }) => handle_block(&mut ctx, tag, mode),
        Some(Commands::Unblock { tag }) => handle_unblock(&mut ctx, tag),
        Some(Commands::Cycle { tag }) => handle_cycle(&mut ctx, tag),
        Some(Commands::Blocked) => handle_blocked(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => {
            print_landing(&ctx);
            Ok(())
        }
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let store = quack::store::fs::FileStore::new(data_dir.clone());
    let paths = QuackPaths { data_dir };
    let api = QuackApi::new(store, paths, Catalog::shared());
    Ok(AppContext { api })
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("QUACK_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let proj_dirs = ProjectDirs::from("sh", "quack", "quack")
        .ok_or_else(|| QuackError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_resolve(
    ctx: &AppContext,
    query: String,
    default: Option<String>,
    override_block: bool,
    open: bool,
) -> Result<()> {
    let req = ResolveRequest {
        query,
        default_override: default,
        bypass_block: override_block,
    };
    let result = ctx.api.resolve(&req)?;
    print_messages(&result.messages);

    match result.resolution {
        Some(Resolution::Redirect { url }) => {
            println!("{}", url);
            if open {
                open_in_browser(&url)?;
            }
            Ok(())
        }
        Some(Resolution::Blocked { tag, url, kind }) => {
            print_block_screen(&tag, url.as_deref(), kind);
            Ok(())
        }
        Some(Resolution::NoQuery) => {
            print_landing(ctx);
            Ok(())
        }
        Some(Resolution::Unresolvable) | None => Err(QuackError::Api(
            "No bang could resolve this query (check the default with `quack config default-bang`)"
                .to_string(),
        )),
    }
}

fn handle_search(ctx: &AppContext, term: String, limit: usize) -> Result<()> {
    let result = ctx.api.search(&term, limit)?;
    print_bangs(&result.listed_bangs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_block(ctx: &mut AppContext, tag: String, mode: String) -> Result<()> {
    let mode: BlockMode = mode.parse().map_err(QuackError::Api)?;
    let result = ctx.api.block(&tag, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unblock(ctx: &mut AppContext, tag: String) -> Result<()> {
    let result = ctx.api.unblock(&tag)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cycle(ctx: &mut AppContext, tag: String) -> Result<()> {
    let result = ctx.api.cycle(&tag)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_blocked(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.blocked()?;
    if result.blocked_entries.is_empty() {
        println!("No blocked bangs yet.");
        return Ok(());
    }
    for (tag, mode) in &result.blocked_entries {
        println!("  {}  {}", format!("!{}", tag).yellow(), mode.to_string().dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("default-bang"), None) => ConfigAction::ShowKey("default-bang".to_string()),
        (Some("default-bang"), Some(v)) => ConfigAction::SetDefaultBang(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-bang = {}", config.default_bang);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_landing(ctx: &AppContext) {
    let catalog = ctx.api.catalog();
    let config = QuackConfig::load(&ctx.api.paths().data_dir);
    let default_tag = config.effective_default(catalog);
    let default_name = catalog
        .get(default_tag)
        .map(|b| b.name.as_str())
        .unwrap_or("?");

    println!("{}", "quack — bang-shortcut resolver".bold());
    println!();
    println!(
        "  {} bangs loaded, default is {} ({})",
        catalog.len(),
        format!("!{}", default_tag).yellow(),
        default_name
    );
    println!();
    println!("  Try:  quack resolve '!gh rust cli'");
    println!("        quack resolve 'rust cli gh!'");
    println!("        quack search github");
    println!();
    println!(
        "{}",
        "  Change the default with `quack config default-bang <tag>`.".dimmed()
    );
}

fn print_block_screen(tag: &str, url: Option<&str>, kind: RedirectKind) {
    let kind_label = match kind {
        RedirectKind::Root => "root redirect",
        RedirectKind::Search => "search redirect",
    };
    println!(
        "{} {} ({})",
        "Blocked:".red().bold(),
        format!("!{}", tag).yellow(),
        kind_label
    );
    match url {
        Some(url) => {
            println!("  would have gone to {}", url.dimmed());
            println!();
            println!("  Re-run with {} to go anyway.", "--override".bold());
        }
        None => {
            println!("  no destination could be computed for this redirect");
        }
    }
    println!("  Unblock with `quack unblock {}`.", tag);
}

const TAG_COLUMN_MIN: usize = 8;

fn print_bangs(bangs: &[Bang]) {
    if bangs.is_empty() {
        return;
    }

    let tag_width = bangs
        .iter()
        .map(|b| b.tag.width() + 1)
        .max()
        .unwrap_or(0)
        .max(TAG_COLUMN_MIN);
    let name_width = bangs.iter().map(|b| b.name.width()).max().unwrap_or(0);

    for bang in bangs {
        let tag = format!("!{}", bang.tag);
        let tag_pad = tag_width.saturating_sub(tag.width());
        let name_pad = name_width.saturating_sub(bang.name.width());
        println!(
            "  {}{}  {}{}  {}",
            tag.yellow(),
            " ".repeat(tag_pad),
            bang.name,
            " ".repeat(name_pad),
            bang.domain.dimmed()
        );
    }
}
