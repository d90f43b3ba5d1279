use anyhow::Result;
use std::process;

use nosh_core::models::FavoriteRecord;
use nosh_core::service::NoshService;

use crate::edamam::EdamamClient;

use super::helpers::print_favorite_table;
use super::resolve_recipe;

pub(crate) fn cmd_fav_list(svc: &NoshService, json: bool) -> Result<()> {
    let favorites = svc.list_favorites()?;

    if favorites.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No favorites saved");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
    } else {
        let refs: Vec<&FavoriteRecord> = favorites.iter().collect();
        print_favorite_table(&refs);
    }

    Ok(())
}

pub(crate) async fn cmd_fav_add(
    svc: &NoshService,
    client: &EdamamClient,
    query: &str,
    pick: Option<usize>,
    json: bool,
) -> Result<()> {
    let recipe = resolve_recipe(client, query, pick).await?;
    let record = FavoriteRecord::from_summary(&recipe);
    let added = svc.add_favorite(&record)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if added {
        let label = &record.label;
        println!("Saved '{label}' to favorites");
    } else {
        let label = &record.label;
        println!("'{label}' is already a favorite");
    }

    Ok(())
}

pub(crate) fn cmd_fav_remove(svc: &NoshService, uri: &str, json: bool) -> Result<()> {
    let removed = svc.remove_favorite(uri)?;

    if json {
        println!("{{\"removed\": {removed}}}");
    } else if removed {
        println!("Removed favorite '{uri}'");
    } else {
        println!("No favorite with uri '{uri}'");
    }

    Ok(())
}

pub(crate) async fn cmd_fav_toggle(
    svc: &NoshService,
    client: &EdamamClient,
    query: &str,
    pick: Option<usize>,
    json: bool,
) -> Result<()> {
    let recipe = resolve_recipe(client, query, pick).await?;
    let record = FavoriteRecord::from_summary(&recipe);
    let now_favorite = svc.toggle_favorite(&record)?;

    if json {
        println!("{{\"favorite\": {now_favorite}}}");
    } else if now_favorite {
        let label = &record.label;
        println!("Saved '{label}' to favorites");
    } else {
        let label = &record.label;
        println!("Removed '{label}' from favorites");
    }

    Ok(())
}

pub(crate) fn cmd_fav_show(svc: &NoshService, uri: &str, json: bool) -> Result<()> {
    let favorites = svc.list_favorites()?;
    let Some(record) = favorites.iter().find(|f| f.uri == uri) else {
        if json {
            println!("null");
        } else {
            eprintln!("No favorite with uri '{uri}'");
        }
        process::exit(2);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record.label);
        println!();
        println!("{}", record.ingredients_text);
        println!();
        println!("{}", record.nutrition_text);
    }

    Ok(())
}
