//! Demonstration driver for `masthead_core`.
//!
//! # Responsibility
//! - Seed a small catalog and print author, magazine and article summaries.
//! - Honor `MASTHEAD_LOG_LEVEL` / `MASTHEAD_LOG_DIR` for file logging.

use log::info;
use masthead_core::{AuthorRole, CatalogError, CatalogService, LoggingConfig, MagazineKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let logging = LoggingConfig::from_env();
    if let Err(err) = logging.apply() {
        eprintln!("masthead: logging disabled: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("masthead: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CatalogError> {
    let mut catalog = CatalogService::in_memory();

    let carry = catalog.create_author("Carry Bradshaw", AuthorRole::Senior)?;
    let nathaniel = catalog.create_author("Nathaniel Hawthorne", AuthorRole::Junior)?;
    let vogue = catalog.create_magazine("Vogue", "Fashion", MagazineKind::Lifestyle)?;
    let wired = catalog.create_magazine("Wired", "Technology", MagazineKind::Tech)?;

    catalog.add_article(carry, vogue, "How to wear a tutu with style")?;
    catalog.add_article(carry, vogue, "Dating life in NYC")?;
    catalog.add_article(carry, vogue, "Heels and cobblestones")?;
    catalog.add_article(nathaniel, wired, "The scarlet pixel")?;
    catalog.add_article(carry, wired, "Phones as accessories")?;

    println!("masthead_core version={}", masthead_core::core_version());

    println!("\nAuthors:");
    for author in catalog.authors() {
        let topics = catalog
            .author_topic_areas(author.id())?
            .map(|areas| areas.join(", "))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "  {} ({}) - {} article(s), topics: {topics}",
            author.name(),
            author.role().as_str(),
            catalog.author_articles(author.id())?.len()
        );
    }

    println!("\nMagazines:");
    for magazine in catalog.magazines() {
        let contributing = catalog
            .contributing_authors(magazine.id())?
            .map(|authors| {
                authors
                    .iter()
                    .map(|author| author.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "none".to_string());
        println!(
            "  {} [{} / {}] - {} contributor(s), contributing authors: {contributing}",
            magazine.name(),
            magazine.category(),
            magazine.kind().as_str(),
            catalog.contributors(magazine.id())?.len()
        );
        for title in catalog.article_titles(magazine.id())?.unwrap_or_default() {
            println!("    - {title}");
        }
    }

    match catalog.top_publisher() {
        Some(magazine) => println!("\nTop publisher: {}", magazine.name()),
        None => println!("\nTop publisher: none"),
    }

    info!(
        "event=demo_finish module=cli status=ok articles={}",
        catalog.article_count()
    );
    Ok(())
}
