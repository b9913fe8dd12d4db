use std::str::FromStr;
use thiserror::Error;

use crate::model::Recipe;
use crate::state::{RecipeBrowserState, ViewMode};
use crate::view::{render_detail, render_listing};

/// A user action entered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch to the catalog listing
    Explore,
    /// Switch to the saved listing
    Saved,
    /// Open the detail overlay for the n-th listed recipe (1-based)
    View(usize),
    /// Save the n-th recipe of the catalog listing
    Save(usize),
    /// Delete the n-th recipe of the saved listing
    Delete(usize),
    /// Close the detail overlay
    Close,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("'{0}' needs a recipe number")]
    MissingPosition(&'static str),

    #[error("Invalid recipe number: {0}")]
    InvalidPosition(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

pub const HELP: &str = "\
Commands:
  explore        show the recipe catalog
  saved          show saved recipes
  view <n>       show details of recipe n in the current list
  save <n>       save recipe n from the catalog
  delete <n>     delete recipe n from the saved list
  close          close the details
  help           show this help
  quit           exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        let command = match name.as_str() {
            "explore" | "e" => Command::Explore,
            "saved" | "s" => Command::Saved,
            "close" | "c" => Command::Close,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "view" | "v" => return position(argument, "view").map(Command::View),
            "save" => return position(argument, "save").map(Command::Save),
            "delete" | "d" => return position(argument, "delete").map(Command::Delete),
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };

        match argument {
            Some(argument) => Err(CommandError::UnexpectedArgument(argument.to_string())),
            None => Ok(command),
        }
    }
}

impl Command {
    /// Parse one raw input line.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line is reported like any unknown command. Blank lines yield `None`.
    pub fn from_input(raw: &[u8]) -> Option<Result<Command, CommandError>> {
        let line = String::from_utf8_lossy(raw);
        if line.trim().is_empty() {
            return None;
        }
        Some(line.parse())
    }

    /// Apply the command to `state` and return the text to show the user.
    ///
    /// `save` picks from the catalog and `delete` from the saved list whatever
    /// the active view; `view` picks from the active listing.
    pub fn apply(self, state: &mut RecipeBrowserState) -> String {
        match self {
            Command::Explore => {
                state.set_view(ViewMode::Explore);
                render_listing(state)
            }
            Command::Saved => {
                state.set_view(ViewMode::Saved);
                render_listing(state)
            }
            Command::View(n) => match nth(state.visible(), n) {
                Some(recipe) => {
                    state.select_for_detail(&recipe);
                    render_detail(&recipe)
                }
                None => no_such_recipe(n),
            },
            Command::Save(n) => match nth(state.catalog(), n) {
                Some(recipe) => {
                    let name = recipe.name.clone();
                    if state.save(recipe) {
                        format!("Saved {name}.\n")
                    } else {
                        format!("{name} is already saved.\n")
                    }
                }
                None => no_such_recipe(n),
            },
            Command::Delete(n) => match nth(state.saved(), n) {
                Some(recipe) => {
                    state.delete_saved(recipe.id);
                    let mut out = format!("Deleted {}.\n", recipe.name);
                    if state.view() == ViewMode::Saved {
                        out.push_str(&render_listing(state));
                    }
                    out
                }
                None => no_such_recipe(n),
            },
            Command::Close => {
                state.clear_selection();
                render_listing(state)
            }
            Command::Help => format!("{HELP}\n"),
            Command::Quit => String::new(),
        }
    }
}

fn nth(recipes: &[Recipe], n: usize) -> Option<Recipe> {
    n.checked_sub(1).and_then(|i| recipes.get(i)).cloned()
}

fn no_such_recipe(n: usize) -> String {
    format!("There is no recipe number {n} in this list.\n")
}

fn position(argument: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let argument = argument.ok_or(CommandError::MissingPosition(command))?;
    match argument.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidPosition(argument.to_string())),
    }
}
