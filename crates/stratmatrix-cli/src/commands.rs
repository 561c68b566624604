//! Command handlers over a file-backed [`Session`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use stratmatrix::{classify, MatrixConfig, Session};

use crate::error::CliError;
use crate::{Cli, Commands};

pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Classify {
        actionability,
        feasibility,
    } = cli.command
    {
        println!("{}", classify(actionability, feasibility));
        return Ok(());
    }

    let config = load_config(&cli.config)?;
    let mut session = open_session(&cli.data, config)?;

    match cli.command {
        Commands::Add {
            name,
            actionability,
            feasibility,
            business_value,
        } => {
            let index =
                session.add_use_case(&name, actionability, feasibility, business_value)?;
            save(&session, &cli.data)?;
            println!("Added {name:?} at row {index}");
        }
        Commands::Import { file } => {
            let count = session.import_path(&file)?;
            save(&session, &cli.data)?;
            println!("Imported {count} use cases from {}", file.display());
        }
        Commands::Export { file: Some(file) } => {
            save(&session, &file)?;
            println!("Exported {} use cases to {}", session.len(), file.display());
        }
        Commands::Export { file: None } => {
            session.write_csv(io::stdout().lock())?;
        }
        Commands::List => list(&session)?,
        Commands::Rename { index, name } => {
            session.rename(index, &name)?;
            save(&session, &cli.data)?;
            println!("Renamed row {index} to {name:?}");
        }
        Commands::Remove { index } => {
            let removed = session.remove(index)?;
            save(&session, &cli.data)?;
            println!("Removed {:?}", removed.name);
        }
        Commands::Reset => {
            let cleared = session.reset();
            save(&session, &cli.data)?;
            println!("Cleared {cleared} use cases");
        }
        Commands::Render { seed, output } => {
            let layout = match seed {
                Some(seed) => session.render_with_seed(seed),
                None => session.render(),
            };
            let json = serde_json::to_string_pretty(&layout)?;
            match output {
                Some(path) => fs::write(path, json + "\n")?,
                None => println!("{json}"),
            }
        }
        Commands::Classify { .. } => {}
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<MatrixConfig, CliError> {
    if path.exists() {
        Ok(MatrixConfig::load(path)?)
    } else {
        Ok(MatrixConfig::default())
    }
}

fn open_session(data: &Path, config: MatrixConfig) -> Result<Session, CliError> {
    let mut session = Session::new(config);
    if data.exists() {
        session.import_path(data)?;
    }
    Ok(session)
}

/// Writes the catalog beside `path` first, then renames it into place, so
/// a failed write leaves the previous file intact.
fn save(session: &Session, path: &Path) -> Result<(), CliError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    session.write_csv(io::BufWriter::new(staged.as_file_mut()))?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn list(session: &Session) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    if session.is_empty() {
        writeln!(out, "No use cases")?;
        return Ok(());
    }
    for (index, record) in session.records().iter().enumerate() {
        writeln!(
            out,
            "{index:>3}  {:<30}  actionability={:<6}  feasibility={:<6}  business_value={:<6}  {}",
            record.name,
            record.actionability,
            record.feasibility,
            record.business_value,
            record.quadrant(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratmatrix::Rating;

    fn session() -> Session {
        let mut session = Session::default();
        session
            .add_use_case("AI Chatbot", Rating::High, Rating::High, Rating::Medium)
            .unwrap();
        session
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_replaces_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stratmatrix.csv");
        fs::write(&path, "stale").unwrap();

        save(&session(), &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name,Actionability,Feasibility,Business Value\nAI Chatbot,High,High,Medium\n"
        );
        assert_eq!(entries(dir.path()), vec!["stratmatrix.csv"]);
    }

    #[test]
    fn test_failed_save_keeps_target_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("catalog");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.csv"), "kept").unwrap();

        assert!(save(&session(), &target).is_err());

        assert_eq!(fs::read_to_string(target.join("keep.csv")).unwrap(), "kept");
        assert_eq!(entries(dir.path()), vec!["catalog"]);
    }
}
