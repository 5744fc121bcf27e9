//! The interactive menu: an ordered registry of actions and the loop that
//! dispatches operator selections to them.

use crate::{
    cli::{Session, commands},
    errors::{Error, Result},
};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Key that ends the session.
pub const EXIT_KEY: char = 'e';

/// An operator-selectable action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add a product or update one with the same name
    AddProduct,
    /// Export the store to the backup file
    Backup,
    /// Show one product by id
    ShowProduct,
    /// Page through all products
    ViewProducts,
}

impl Action {
    /// One-line description shown in the menu.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AddProduct => "Add product",
            Self::Backup => "Create a Backup CSV",
            Self::ShowProduct => "Show product Using ID Number",
            Self::ViewProducts => "View All products",
        }
    }

    /// Runs the handler for this action.
    ///
    /// # Errors
    /// Propagates store failures and [`Error::InputClosed`].
    pub async fn run<R: BufRead, W: Write>(self, session: &mut Session<'_, R, W>) -> Result<()> {
        match self {
            Self::AddProduct => commands::add_product(session).await,
            Self::Backup => commands::backup_data(session).await,
            Self::ShowProduct => commands::show_product(session).await,
            Self::ViewProducts => commands::view_products(session).await,
        }
    }
}

/// One row of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Single-letter selection key
    pub key: char,
    /// What the key runs
    pub action: Action,
}

/// What an operator's input means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    /// Leave the loop
    Exit,
    /// Run a registered action
    Run(Action),
    /// Unrecognised input
    Invalid,
}

/// Ordered mapping from key to action.
#[derive(Clone, Debug)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Builds a menu from entries, presented in the given order.
    #[must_use]
    pub const fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// The inventory menu: a, b, s, v.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            MenuEntry {
                key: 'a',
                action: Action::AddProduct,
            },
            MenuEntry {
                key: 'b',
                action: Action::Backup,
            },
            MenuEntry {
                key: 's',
                action: Action::ShowProduct,
            },
            MenuEntry {
                key: 'v',
                action: Action::ViewProducts,
            },
        ])
    }

    /// Registered entries in presentation order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Interprets raw input, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn select(&self, input: &str) -> MenuSelection {
        let normalized = input.trim().to_lowercase();
        let mut chars = normalized.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return MenuSelection::Invalid;
        };
        if key == EXIT_KEY {
            return MenuSelection::Exit;
        }
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map_or(MenuSelection::Invalid, |entry| MenuSelection::Run(entry.action))
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// # Errors
    /// Store failures inside a handler end the loop.
    pub async fn run<R: BufRead, W: Write>(&self, session: &mut Session<'_, R, W>) -> Result<()> {
        loop {
            for entry in &self.entries {
                session
                    .console
                    .say(format!("   {}) {}", entry.key, entry.action.description()))?;
            }
            session.console.say(format!("Press '{EXIT_KEY}' to exit.\n"))?;

            let input = match session.console.prompt("What do you want to do?> ") {
                Ok(input) => input,
                Err(Error::InputClosed) => return farewell(session),
                Err(e) => return Err(e),
            };

            match self.select(&input) {
                MenuSelection::Exit => return farewell(session),
                MenuSelection::Run(action) => {
                    debug!("Dispatching {action:?}");
                    session.console.clear()?;
                    match action.run(session).await {
                        Err(Error::InputClosed) => return farewell(session),
                        other => other?,
                    }
                }
                MenuSelection::Invalid => session.console.say("Please choose a valid option!")?,
            }
        }
    }
}

fn farewell<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    info!("Session ended");
    session.console.say("Thanks for using this app!")
}
