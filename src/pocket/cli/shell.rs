//! Interactive session.
//!
//! Unlike one-shot commands, the session keeps a single store open, so a selection made
//! with `select` survives until it is cleared, replaced, or its snippet is deleted.

use super::commands::{print_listing, resolve_language, AppContext};
use super::print::{print_full_snippets, print_messages};
use colored::Colorize;
use pocket::api::PocketApi;
use pocket::error::{PocketError, Result};
use pocket::model::SnippetDraft;
use pocket::store::StorageBackend;
use std::io::{self, BufRead, IsTerminal, Write};

const END_OF_CODE: &str = ".";

const HELP: &str = "\
Commands:
  ls [query]        list snippets, optionally filtered
  add <title>       add a snippet (prompts for language, description and code)
  select <ref>      select a snippet and show it
  show [ref]        show the selected (or given) snippet
  clear             clear the selection
  rm <ref>...       delete snippets
  export [ref]      export the selected (or given) snippet to the export directory
  copy [ref]        copy the selected (or given) snippet's code to the clipboard
  help              show this help
  quit              leave the session
A <ref> is a list position or an id prefix.";

enum Flow {
    Continue,
    Quit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("{}", "pocket shell. Type `help` for commands.".dimmed());
    }
    run_session(&mut ctx.api, &mut stdin.lock(), interactive)
}

fn run_session<B: StorageBackend, R: BufRead>(
    api: &mut PocketApi<B>,
    input: &mut R,
    interactive: bool,
) -> Result<()> {
    loop {
        if interactive {
            prompt("pocket> ");
        }
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        match dispatch(api, line.trim(), input, interactive) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            // Errors end the command, not the session
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }
}

fn dispatch<B: StorageBackend, R: BufRead>(
    api: &mut PocketApi<B>,
    line: &str,
    input: &mut R,
    interactive: bool,
) -> Result<Flow> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();
    let first = args.first().copied();

    match cmd {
        "" => {}
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "help" | "?" => println!("{}", HELP),
        "ls" | "list" => print_listing(&api.list_snippets(rest)?),
        "add" => add(api, rest, input, interactive)?,
        "select" | "sel" => {
            let r = first.ok_or_else(|| PocketError::Api("Usage: select <ref>".to_string()))?;
            api.select_snippet(r)?;
            print_full_snippets(&api.view_snippets::<&str>(&[])?.listed_snippets);
        }
        "show" | "view" => {
            let result = api.view_snippets(&args)?;
            print_full_snippets(&result.listed_snippets);
        }
        "clear" => print_messages(&api.clear_selection()?.messages),
        "rm" | "delete" => print_messages(&api.delete_snippets(&args)?.messages),
        "export" => print_messages(&api.export_snippets(&args, None)?.messages),
        "copy" | "cp" => print_messages(&api.copy_snippet(first)?.messages),
        other => {
            return Err(PocketError::Api(format!(
                "Unknown command: {} (try `help`)",
                other
            )))
        }
    }
    Ok(Flow::Continue)
}

fn add<B: StorageBackend, R: BufRead>(
    api: &mut PocketApi<B>,
    title: &str,
    input: &mut R,
    interactive: bool,
) -> Result<()> {
    if title.is_empty() {
        return Err(PocketError::Api("Usage: add <title>".to_string()));
    }

    let default = api.default_language();
    if interactive {
        prompt(&format!("language [{}]: ", default));
    }
    let tag = read_line(input)?.unwrap_or_default();
    let tag = tag.trim();
    let language = resolve_language((!tag.is_empty()).then_some(tag), default);

    if interactive {
        prompt("description: ");
    }
    let description = read_line(input)?.unwrap_or_default();

    if interactive {
        println!(
            "{}",
            format!("code (finish with a line containing only '{}'):", END_OF_CODE).dimmed()
        );
    }
    let mut code_lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line == END_OF_CODE {
            break;
        }
        code_lines.push(line);
    }

    let draft = SnippetDraft::new(title, code_lines.join("\n"))
        .with_description(description.trim())
        .with_language(language);
    print_messages(&api.add_snippet(draft)?.messages);
    Ok(())
}

/// Reads one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).map_err(PocketError::Io)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}
