//! Interactive mode, used when no subcommand is given

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use modgen::ModgenConfig;

use super::{AddCommand, InitCommand};

const CHOICES: [&str; 2] = ["init server", "add module"];

/// Ask what to do, then run it
pub fn run(config: &ModgenConfig) -> Result<()> {
    let theme = ColorfulTheme::default();

    let selection = Select::with_theme(&theme)
        .with_prompt("What do you want to do?")
        .items(&CHOICES)
        .default(0)
        .interact()?;

    if selection == 0 {
        return InitCommand::execute(config);
    }

    let name: String = Input::with_theme(&theme)
        .with_prompt("Module name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Module name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    AddCommand::new(name.trim().to_string(), None).execute(config)
}
