use anyhow::Result;
use std::process;

use nosh_core::models::{RecipeSummary, ingredients_text, nutrition_text};

use crate::edamam::EdamamClient;

use super::helpers::print_recipe_table;
use super::{resolve_recipe, search_remote};

pub(crate) async fn cmd_search(client: &EdamamClient, query: &str, json: bool) -> Result<()> {
    // Best-effort: a failed request degrades to "no results" after a warning
    let hits = match search_remote(client, query).await {
        Ok(hits) => hits,
        Err(e) => {
            eprintln!("Warning: search failed: {e:#}");
            Vec::new()
        }
    };

    if hits.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No recipes found for '{query}'");
        }
        process::exit(2);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        let refs: Vec<&RecipeSummary> = hits.iter().collect();
        print_recipe_table(&refs);
    }

    Ok(())
}

pub(crate) async fn cmd_show(
    client: &EdamamClient,
    query: &str,
    pick: Option<usize>,
    json: bool,
) -> Result<()> {
    let recipe = resolve_recipe(client, query, pick).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("{}", recipe.label);
    if let Some(tags) = recipe.cuisine_type.as_deref() {
        if !tags.is_empty() {
            println!("Cuisine: {}", tags.join(", "));
        }
    }
    if let Some(tags) = recipe.dish_type.as_deref() {
        if !tags.is_empty() {
            println!("Dish: {}", tags.join(", "));
        }
    }
    println!();
    println!("{}", ingredients_text(&recipe));
    println!();
    println!("{}", nutrition_text(&recipe));
    if let Some(url) = &recipe.url {
        println!("\nFull recipe: {url}");
    }

    Ok(())
}
