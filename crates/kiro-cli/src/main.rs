use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiro_config::Config;
use kiro_engine::{DocumentNode, DocumentStore, OwnerId, render, render_font_assets, render_page};
use relative_path::RelativePath;

#[derive(Parser)]
#[command(name = "kiro")]
#[command(about = "Render Kiro documents to HTML and manage stored documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a .kiro file to a standalone HTML page
    Render {
        /// Input Kiro file
        input: PathBuf,

        /// Output HTML file (defaults to input name with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the body fragment and global classes instead of writing a page
        #[arg(long)]
        body_only: bool,

        /// Page title (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the font asset snippets pages include
    Fonts,
    /// Work with the per-owner document store
    #[command(subcommand)]
    Docs(DocsCommand),
}

#[derive(Subcommand)]
enum DocsCommand {
    /// Create a new owner with a welcome document
    NewOwner,
    /// List an owner's documents
    List { owner: OwnerId },
    /// Print a stored document
    Show { owner: OwnerId, path: String },
    /// Render a stored document to a page
    Render {
        owner: OwnerId,
        path: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Store the contents of a local file as a document
    Write {
        owner: OwnerId,
        path: String,
        source: PathBuf,
    },
    /// Delete a document or folder
    Delete { owner: OwnerId, path: String },
    /// Create a folder
    Mkdir { owner: OwnerId, path: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default().context("Failed to load config file")?;
    log::debug!("Config path: {}", Config::config_path().display());

    match cli.command {
        Command::Render {
            input,
            output,
            body_only,
            title,
        } => {
            let title = title.as_deref().unwrap_or(&config.page_title);
            render_file(&input, output, body_only, title)
        }
        Command::Fonts => {
            let assets = render_font_assets();
            for part in [
                assets.google_fonts_link,
                assets.custom_font_links,
                assets.custom_font_css,
                assets.tailwind_config,
            ] {
                println!("{part}");
            }
            Ok(())
        }
        Command::Docs(command) => run_docs(command, &config),
    }
}

fn render_file(input: &Path, output: Option<PathBuf>, body_only: bool, title: &str) -> Result<()> {
    let document = fs::read_to_string(input)
        .with_context(|| format!("Error reading {}", input.display()))?;

    if body_only {
        let rendered = render(&document);
        println!("{}", rendered.html);
        if !rendered.global_classes.is_empty() {
            eprintln!("global classes: {}", rendered.global_classes);
        }
        return Ok(());
    }

    let output = output.unwrap_or_else(|| input.with_extension("html"));
    write_page(&document, title, &output)
}

fn write_page(document: &str, title: &str, output: &Path) -> Result<()> {
    fs::write(output, render_page(document, title))
        .with_context(|| format!("Error writing {}", output.display()))?;
    println!("Created {}", output.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<DocumentStore> {
    let store = DocumentStore::new(&config.storage_path);
    match &config.welcome_template {
        Some(template) => {
            let welcome = fs::read_to_string(template).with_context(|| {
                format!("Error reading welcome template {}", template.display())
            })?;
            Ok(store.with_welcome(welcome))
        }
        None => Ok(store),
    }
}

fn run_docs(command: DocsCommand, config: &Config) -> Result<()> {
    let store = open_store(config)?;

    match command {
        DocsCommand::NewOwner => {
            let owner = OwnerId::new();
            let dir = store.owner_dir(&owner)?;
            log::info!("Owner directory: {}", dir.display());
            println!("{owner}");
        }
        DocsCommand::List { owner } => {
            let documents = store.list_documents(&owner)?;
            print_tree(&documents, 0);
        }
        DocsCommand::Show { owner, path } => {
            print!("{}", store.read_document(&owner, RelativePath::new(&path))?);
        }
        DocsCommand::Render {
            owner,
            path,
            output,
        } => {
            let path = RelativePath::new(&path);
            let document = store.read_document(&owner, path)?;
            let output = output.unwrap_or_else(|| default_page_name(path));
            write_page(&document, &config.page_title, &output)?;
        }
        DocsCommand::Write {
            owner,
            path,
            source,
        } => {
            let content = fs::read_to_string(&source)
                .with_context(|| format!("Error reading {}", source.display()))?;
            store.write_document(&owner, RelativePath::new(&path), &content)?;
            println!("Saved {path}");
        }
        DocsCommand::Delete { owner, path } => {
            store.delete_document(&owner, RelativePath::new(&path))?;
            println!("Deleted {path}");
        }
        DocsCommand::Mkdir { owner, path } => {
            store.create_folder(&owner, RelativePath::new(&path))?;
            println!("Created {path}/");
        }
    }

    Ok(())
}

/// `notes/plan.kiro` renders to `plan.html` in the working directory.
fn default_page_name(path: &RelativePath) -> PathBuf {
    let page = path.with_extension("html");
    PathBuf::from(page.file_name().unwrap_or("page.html"))
}

fn print_tree(nodes: &[DocumentNode], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        if node.is_folder() {
            println!("{indent}{}/", node.name);
            print_tree(&node.children, depth + 1);
        } else {
            println!("{indent}{}", node.name);
        }
    }
}
