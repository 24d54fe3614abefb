pub mod args;

use colored::Colorize;

use crate::core::catalog::{Catalog, RecordOutcome};
use crate::core::config::Config;
use crate::core::project::Project;
use crate::core::relocate;

use self::args::Cli;

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let config = Config::from_home()?;
    let spec = cli.to_spec()?;

    let mut catalog = Catalog::load(&config)?;
    // Resolving first means a failed lookup never touches the catalog file.
    let project = Project::resolve(spec, &catalog)?;
    let identifier = project.identifier();

    match catalog.record(&project) {
        RecordOutcome::Inserted => {
            catalog.save(&config)?;
            eprintln!(
                "{} {} ({})",
                "recorded".green().bold(),
                identifier,
                project.path.display()
            );
        }
        RecordOutcome::AlreadyPresent => {
            eprintln!(
                "{} {} is already in the catalog",
                "unchanged".yellow().bold(),
                identifier
            );
        }
    }

    if let Some(remotes) = project.github_remotes() {
        println!("github https: {}", remotes.https);
        println!("github git:   {}", remotes.git);
    }

    if cli.move_dot_folder {
        let destination = relocate::move_dot_folder(&project, &config)?;
        eprintln!(
            "{} {} -> {}",
            "moved".green().bold(),
            project.path.join(project.vcs.dot_folder()).display(),
            destination.display()
        );
    }

    Ok(())
}
