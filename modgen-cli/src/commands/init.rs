//! Server bootstrap command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use modgen::ModgenConfig;
use modgen_cli_lib::{bootstrap, TemplateStore};

/// Copy the Express/Prisma server boilerplate into the project
pub struct InitCommand;

impl InitCommand {
    /// Execute the command
    pub fn execute(config: &ModgenConfig) -> Result<()> {
        let root = &config.output.root;

        println!(
            "{} {} {}",
            style("Initializing").green().bold(),
            style("server in").bold(),
            style(root.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Writing server files...");

        let report = bootstrap(root, &TemplateStore::new(config.template_dir()));
        spinner.finish_and_clear();
        let report = report.context("Failed to write server files")?;

        for path in &report.written {
            println!("  {} {}", style("✓").green(), style(path.display()).dim());
        }
        for path in &report.skipped {
            println!(
                "  {} {} {}",
                style("-").yellow(),
                style(path.display()).dim(),
                style("(exists)").yellow()
            );
        }

        println!();
        println!(
            "{}",
            style(format!(
                "✓ {} files written, {} skipped",
                report.written.len(),
                report.skipped.len()
            ))
            .green()
            .bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Install dependencies:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("npm i express express-async-errors cors cookie-parser jsonwebtoken bcryptjs pino pino-pretty @prisma/client").cyan()
        );
        println!();
        println!("  {} Generate the Prisma client:", style("2.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style("npx prisma generate --schema src/database/schema.prisma").cyan()
        );
        println!();
        println!("  {} Add your first module:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("modgen add user").cyan());

        Ok(())
    }
}
