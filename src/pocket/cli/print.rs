use chrono::{DateTime, Utc};
use colored::Colorize;
use pocket::api::{CmdMessage, ListedSnippet, MessageLevel};
use pocket::language::Language;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const LANG_WIDTH: usize = 12;
const SELECTED_MARKER: &str = "▸";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

/// The list view. `query` picks which empty state is shown.
pub(super) fn print_snippet_list(rows: &[ListedSnippet], query: Option<&str>) {
    if rows.is_empty() {
        match query {
            Some(q) => println!("No snippets match your search \"{}\"", q),
            None => println!("No snippets yet. Add one with `pocket add <title>`."),
        }
        return;
    }

    println!("{}", format!("Your Snippets ({})", rows.len()).bold());
    for row in rows {
        let marker = if row.selected {
            format!("{} ", SELECTED_MARKER)
        } else {
            "  ".to_string()
        };
        let pos = format!("{}. ", row.position);
        let lang = format!("{:<width$}", row.snippet.language.as_str(), width = LANG_WIDTH);
        let time_ago = format_time_ago(row.snippet.created_at_utc());

        let title_desc = if row.snippet.description.is_empty() {
            row.snippet.title.clone()
        } else {
            format!("{} {}", row.snippet.title, single_line(&row.snippet.description))
        };

        let fixed_width = marker.width() + pos.width() + LANG_WIDTH + TIME_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&title_desc, available);
        let padding = available.saturating_sub(display.width());

        let title_len = if display.starts_with(row.snippet.title.as_str()) {
            row.snippet.title.len()
        } else {
            display.len()
        };
        let (title_part, desc_part) = display.split_at(title_len);

        println!(
            "{}{}{}{}{} {}{}",
            marker.yellow(),
            pos.yellow(),
            title_part.bold(),
            desc_part.dimmed(),
            " ".repeat(padding),
            lang.cyan(),
            time_ago.dimmed()
        );
    }
}

/// The detail view.
pub(super) fn print_full_snippets(rows: &[ListedSnippet]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let s = &row.snippet;
        println!(
            "{} {}  {}",
            format!("{}.", row.position).yellow(),
            s.title.bold(),
            format!("[{}]", s.language).cyan()
        );
        if !s.description.is_empty() {
            println!("{}", s.description.dimmed());
        }
        println!(
            "{}",
            format!(
                "{} · {}",
                s.short_id(),
                s.created_at_utc().format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
        println!("--------------------------------");
        for (n, line) in s.code.lines().enumerate() {
            println!("{} {}", format!("{:>4}", n + 1).dimmed(), line);
        }
    }
}

pub(super) fn print_languages() {
    for lang in Language::ALL {
        let ext = match lang.extension() {
            Some(ext) => format!(".{}", ext),
            None => format!(".{} (fallback)", pocket::language::FALLBACK_EXTENSION),
        };
        println!("{:<12} {:<12} {}", lang.as_str(), lang.display_name(), ext.dimmed());
    }
}

fn single_line(s: &str) -> String {
    s.chars().map(|c| if c == '\n' { ' ' } else { c }).collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
