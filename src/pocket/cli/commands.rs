use super::print::{print_full_snippets, print_languages, print_messages, print_snippet_list};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use directories::ProjectDirs;
use env_logger::{Builder, Env};
use pocket::api::{CmdResult, ConfigAction, PocketApi};
use pocket::editor::edit_code;
use pocket::error::{PocketError, Result};
use pocket::language::Language;
use pocket::model::SnippetDraft;
use pocket::store::fs_backend::FsBackend;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

pub(super) struct AppContext {
    pub(super) api: PocketApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            description,
            language,
            code,
            file,
        }) => handle_add(&mut ctx, title, description, language, code, file),
        Some(Commands::List { query }) => handle_list(&ctx, query.unwrap_or_default()),
        Some(Commands::Search { query }) => handle_list(&ctx, query),
        Some(Commands::View { refs }) => handle_view(&ctx, refs),
        Some(Commands::Delete { refs }) => handle_delete(&mut ctx, refs),
        Some(Commands::Export { refs, out }) => handle_export(&ctx, refs, out),
        Some(Commands::Copy { reference }) => handle_copy(&ctx, reference),
        Some(Commands::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Commands::Path) => {
            println!("{}", ctx.api.storage_location().display());
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell) => shell::run(&mut ctx),
        None => handle_list(&ctx, String::new()),
    }
}

fn init_logger(verbose: bool) {
    // RUST_LOG wins over -v
    let default = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os("POCKET_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "pocket", "pocket")
        .ok_or_else(|| PocketError::Api("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let backend = FsBackend::new(data_dir.clone());
    let (api, startup) = PocketApi::open(backend, data_dir)?;
    print_messages(&startup.messages);
    Ok(AppContext { api })
}

/// Maps a user-typed tag to a language, warning when it falls back to plaintext.
pub(super) fn resolve_language(tag: Option<&str>, default: Language) -> Language {
    match tag {
        None => default,
        Some(t) => Language::from_tag(t).unwrap_or_else(|| {
            eprintln!("Unknown language '{}', using {}", t, Language::default());
            Language::default()
        }),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    description: Option<String>,
    language: Option<String>,
    code: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let language = resolve_language(language.as_deref(), ctx.api.default_language());

    let code = match (code, file) {
        (Some(code), _) => code,
        (None, Some(path)) => std::fs::read_to_string(path).map_err(PocketError::Io)?,
        (None, None) => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                edit_code("", language)?
            } else {
                let mut buf = String::new();
                stdin.lock().read_to_string(&mut buf).map_err(PocketError::Io)?;
                buf
            }
        }
    };

    let draft = SnippetDraft::new(title, code)
        .with_description(description.unwrap_or_default())
        .with_language(language);

    let result = ctx.api.add_snippet(draft)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_list(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.list_snippets(&query)?;
    print_listing(&result);
    Ok(())
}

pub(super) fn print_listing(result: &CmdResult) {
    print_snippet_list(&result.listed_snippets, result.query.as_deref());
    print_messages(&result.messages);
}

fn handle_view(ctx: &AppContext, refs: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&refs)?;
    print_full_snippets(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, refs: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_snippets(&refs)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, refs: Vec<String>, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_snippets(&refs, out.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &AppContext, reference: String) -> Result<()> {
    let result = ctx.api.copy_snippet(Some(&reference))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in pocket::config::PocketConfig::KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
