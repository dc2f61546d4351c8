//! Commands accepted by the terminal frontend.
//!
//! Each input line is one command. Commands map one-to-one onto coordinator
//! transitions, except `options`, `help` and `quit`, which only affect the
//! terminal.

use thiserror::Error;

use companies_core::DirectoryError;
use companies_engine::DirectoryHandle;

use crate::render::render_options;

/// One row of the help listing.
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub args: &'static str,
    pub help: &'static str,
}

const fn spec(
    name: &'static str,
    aliases: &'static [&'static str],
    args: &'static str,
    help: &'static str,
) -> CommandSpec {
    CommandSpec {
        name,
        aliases,
        args,
        help,
    }
}

/// Commands with their aliases and help text, in display order.
pub const COMMANDS: &[CommandSpec] = &[
    spec("search", &["s"], "<text>", "Filter by name (empty clears)"),
    spec("location", &["loc"], "<name|all>", "Filter by location"),
    spec("industry", &["ind"], "<name|all>", "Filter by industry"),
    spec("sort", &[], "<name-asc|name-desc>", "Change sort order"),
    spec("per-page", &["pagesize"], "<n>", "Change page size"),
    spec("next", &["n"], "", "Next page"),
    spec("prev", &["p"], "", "Previous page"),
    spec("page", &[], "<n>", "Jump to page"),
    spec("first", &[], "", "First page"),
    spec("last", &[], "", "Last page"),
    spec("clear", &[], "", "Clear filters"),
    spec("options", &[], "", "List facet values, sort keys and page sizes"),
    spec("help", &["?"], "", "Show this help"),
    spec("quit", &["exit", "q"], "", "Exit"),
];

impl CommandSpec {
    /// `name, alias <args>` as shown in the help listing.
    fn usage(&self) -> String {
        let mut usage = std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .collect::<Vec<_>>()
            .join(", ");
        if !self.args.is_empty() {
            usage.push(' ');
            usage.push_str(self.args);
        }
        usage
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Location(Option<String>),
    Industry(Option<String>),
    Sort(String),
    PerPage(usize),
    Next,
    Prev,
    Page(usize),
    First,
    Last,
    Clear,
    Options,
    Help,
    Quit,
}

/// Input that could not be parsed into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// What the frontend should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; draw the current snapshot.
    Render,
    /// Print text without redrawing.
    Print(String),
    /// Leave the loop.
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "search" | "s" => Command::Search(arg.to_string()),
        "location" | "loc" => Command::Location(facet_arg(arg)),
        "industry" | "ind" => Command::Industry(facet_arg(arg)),
        "sort" => {
            if arg.is_empty() {
                return Err(CommandError::BadArgument {
                    command: "sort",
                    expected: "a sort key",
                });
            }
            Command::Sort(arg.to_string())
        }
        "per-page" | "pagesize" => Command::PerPage(number_arg(arg, "per-page")?),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "page" => Command::Page(number_arg(arg, "page")?),
        "first" => Command::First,
        "last" => Command::Last,
        "clear" => Command::Clear,
        "options" => Command::Options,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(command)
}

fn facet_arg(arg: &str) -> Option<String> {
    if arg.is_empty() || arg.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(arg.to_string())
    }
}

fn number_arg(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    arg.parse().map_err(|_| CommandError::BadArgument {
        command,
        expected: "a number",
    })
}

/// Match a facet value against the offered options, ignoring case.
///
/// Values that are not offered pass through unchanged and simply match
/// nothing.
fn canonical_facet(value: Option<String>, offered: &[String]) -> Option<String> {
    value.map(|v| {
        offered
            .iter()
            .find(|o| o.eq_ignore_ascii_case(&v))
            .cloned()
            .unwrap_or(v)
    })
}

/// Apply a command to the session.
pub fn apply_command(command: Command, handle: &DirectoryHandle) -> Result<Outcome, CommandError> {
    tracing::debug!("Applying {:?}", command);

    let result = handle.update(|c| match command {
        Command::Search(query) => c.set_query(query),
        Command::Location(location) => {
            let location = canonical_facet(location, &c.options().locations);
            c.set_location(location)
        }
        Command::Industry(industry) => {
            let industry = canonical_facet(industry, &c.options().industries);
            c.set_industry(industry)
        }
        Command::Sort(key) => c.set_sort_key_str(&key),
        Command::PerPage(size) => c.set_page_size(size),
        Command::Next => c.next_page(),
        Command::Prev => c.prev_page(),
        Command::Page(number) => c.set_page(number),
        Command::First => c.first_page(),
        Command::Last => c.last_page(),
        Command::Clear => c.clear_filters(),
        Command::Options => return Ok(Outcome::Print(render_options(c.options()))),
        Command::Help => return Ok(Outcome::Print(help_text())),
        Command::Quit => return Ok(Outcome::Quit),
    }
    .map(|()| Outcome::Render));

    Ok(result?)
}

/// Help listing for all commands.
pub fn help_text() -> String {
    let rows: Vec<(String, &str)> = COMMANDS.iter().map(|c| (c.usage(), c.help)).collect();
    let width = rows.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(usage, help)| format!("  {:width$}  {}\n", usage, help, width = width))
        .collect()
}
