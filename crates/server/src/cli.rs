//! Terminal rendering of the browse, search and detail flows.

use anyhow::Result;
use pokedex_core::catalog::LoadOutcome;
use pokedex_core::{DetailRecord, Pokedex};

/// Load `pages` pages and print the list
pub async fn list(pokedex: &Pokedex, pages: usize) -> Result<()> {
    let catalog = pokedex.catalog();

    for _ in 0..pages {
        match catalog.load_more().await {
            LoadOutcome::Appended { count: 0 } => break,
            LoadOutcome::Appended { .. } | LoadOutcome::Suppressed => {}
            LoadOutcome::Discarded { reason } => {
                eprintln!("Could not load more: {}", reason);
                break;
            }
        }
        if catalog.is_exhausted().await {
            break;
        }
    }

    for (index, entry) in catalog.entries().await.iter().enumerate() {
        println!("#{:<4} {:<16} {}", index + 1, entry.name, entry.image_url);
    }
    Ok(())
}

pub async fn search(pokedex: &Pokedex, term: &str) -> Result<()> {
    match pokedex.search().search(term).await {
        Ok(Some(record)) => print_detail(&record),
        Ok(None) => println!("Type a name to search."),
        Err(e) => {
            tracing::debug!(error = %e, "search failed");
            eprintln!("{}", e.user_message());
        }
    }
    Ok(())
}

pub async fn show(pokedex: &Pokedex, name: &str) -> Result<()> {
    let view = match pokedex.view(name).await {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(());
        }
    };

    print_detail(&view.detail);
    println!();
    println!("Evolutions:");
    if view.evolutions.is_empty() {
        println!("  (unavailable)");
    }
    for node in &view.evolutions {
        println!("  {:<16} {}", node.name, node.image_url);
    }
    Ok(())
}

fn print_detail(record: &DetailRecord) {
    println!("#{} - {}", record.id, record.name);
    println!("{}", record.image_url);
    let types: Vec<String> = record.types.iter().map(|t| t.to_uppercase()).collect();
    println!("Types:     {}", types.join(" "));
    println!("Weight:    {} kg", record.weight_kg);
    println!("Height:    {} m", record.height_m);
    println!("Abilities: {}", record.abilities.join(", "));
}
