use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracklist::config::{StoreFormat, TrackListConfig};
use tracklist::error::{Result, TrackListError};
use tracklist::model::Section;
use tracklist::session::ListSession;
use tracklist::shell::Shell;
use tracklist::store::json::JsonStore;
use tracklist::store::text::TextStore;
use tracklist::store::SectionStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(&cli)?;
    let mut config = TrackListConfig::load(&data_dir).unwrap_or_default();
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(file) = &cli.file {
        config.data_file = Some(file.clone());
    }

    let path = data_dir.join(config.data_file_name());
    match config.format {
        StoreFormat::Text => {
            let sections = config.section_list()?;
            dispatch(cli, TextStore::new(path, sections))
        }
        StoreFormat::Json => dispatch(cli, JsonStore::new(path)),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("TRACKLIST_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "tracklist", "tracklist")
        .ok_or_else(|| TrackListError::Store("could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn dispatch<S: SectionStore>(cli: Cli, mut store: S) -> Result<()> {
    store.initialize()?;

    let section = match &cli.section {
        Some(name) => Some(name.parse::<Section>()?),
        None => None,
    };

    match cli.command {
        Some(Commands::List) => {
            let section = pick(section, &store)?;
            handle_list(&store, section)
        }
        Some(Commands::Add { text }) => {
            let section = pick(section, &store)?;
            handle_add(&mut store, section, &text.join(" "))
        }
        Some(Commands::Update { index, text }) => {
            let section = pick(section, &store)?;
            handle_update(&mut store, section, index, &text.join(" "))
        }
        Some(Commands::Delete { index }) => {
            let section = pick(section, &store)?;
            handle_delete(&mut store, section, index)
        }
        Some(Commands::Sections) => handle_sections(&store),
        Some(Commands::Init) => handle_init(&store),
        Some(Commands::Path) => handle_path(&store),
        None => run_shell(&mut store, section),
    }
}

/// Default to the first known section when none was given.
fn pick<S: SectionStore>(section: Option<Section>, store: &S) -> Result<Section> {
    match section {
        Some(section) => Ok(section),
        None => store
            .sections()
            .first()
            .cloned()
            .ok_or_else(|| TrackListError::Store("no sections configured".to_string())),
    }
}

/// Load the section, recovering with an empty session and a warning when
/// the store cannot be read.
fn open_session<S: SectionStore>(store: &S, section: Section) -> ListSession {
    match ListSession::load(store, section.clone()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: {}. Starting with an empty list.", e).yellow()
            );
            ListSession::empty(section)
        }
    }
}

fn handle_list<S: SectionStore>(store: &S, section: Section) -> Result<()> {
    let session = open_session(store, section);
    print_records(&session);
    Ok(())
}

fn handle_add<S: SectionStore>(store: &mut S, section: Section, text: &str) -> Result<()> {
    let mut session = open_session(store, section);
    let record = session.add(store, text)?;
    println!("{}", format!("Added: '{}'", record).green());
    Ok(())
}

fn handle_update<S: SectionStore>(
    store: &mut S,
    section: Section,
    index: usize,
    text: &str,
) -> Result<()> {
    let mut session = open_session(store, section);
    let update = session.update(store, index, text)?;
    println!(
        "{}",
        format!("Updated '{}' to '{}'.", update.old, update.new).green()
    );
    Ok(())
}

fn handle_delete<S: SectionStore>(store: &mut S, section: Section, index: usize) -> Result<()> {
    let mut session = open_session(store, section);
    let removed = session.remove(store, index)?;
    println!("{}", format!("Deleted: '{}'", removed).green());
    Ok(())
}

fn handle_sections<S: SectionStore>(store: &S) -> Result<()> {
    for section in store.sections() {
        println!("{}", section);
    }
    Ok(())
}

fn handle_init<S: SectionStore>(store: &S) -> Result<()> {
    match store.path() {
        Some(path) => println!("Initialized store at {}", path.display()),
        None => println!("Initialized store"),
    }
    Ok(())
}

fn handle_path<S: SectionStore>(store: &S) -> Result<()> {
    match store.path() {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(TrackListError::Store(
            "store has no backing file".to_string(),
        )),
    }
}

fn run_shell<S: SectionStore>(store: &mut S, start: Option<Section>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock()).run(store, start)
}

fn print_records(session: &ListSession) {
    println!("--- {} ---", session.section());
    if session.is_empty() {
        println!("{}", "The list is empty.".dimmed());
    } else {
        for (i, record) in session.records().iter().enumerate() {
            println!("{}. {}", i + 1, record);
        }
    }
}
