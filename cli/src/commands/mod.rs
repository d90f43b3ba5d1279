mod favorites;
mod helpers;
mod image;
mod search;

use anyhow::{Result, bail};

use nosh_core::models::{RecipeSummary, normalize_query};

use crate::edamam::EdamamClient;
use helpers::{print_recipe_table, prompt_choice};

pub(crate) use favorites::{cmd_fav_add, cmd_fav_list, cmd_fav_remove, cmd_fav_show, cmd_fav_toggle};
pub(crate) use image::cmd_image;
pub(crate) use search::{cmd_search, cmd_show};

/// Search Edamam with the normalized query (blank input means match-all).
pub(super) async fn search_remote(
    client: &EdamamClient,
    query: &str,
) -> Result<Vec<RecipeSummary>> {
    client.search_async(&normalize_query(query)).await
}

/// Resolve a query to a single recipe. `--pick N` selects without a prompt;
/// otherwise an ambiguous search prints the hits and asks.
pub(super) async fn resolve_recipe(
    client: &EdamamClient,
    query: &str,
    pick: Option<usize>,
) -> Result<RecipeSummary> {
    let hits = search_remote(client, query).await?;

    if hits.is_empty() {
        bail!("No recipes found for '{query}'");
    }

    if let Some(n) = pick {
        if n < 1 || n > hits.len() {
            bail!("--pick {n} is out of range (1-{})", hits.len());
        }
        return Ok(hits.into_iter().nth(n - 1).unwrap());
    }

    if hits.len() == 1 {
        return Ok(hits.into_iter().next().unwrap());
    }

    let refs: Vec<&RecipeSummary> = hits.iter().collect();
    print_recipe_table(&refs);
    let idx = prompt_choice(hits.len())?;
    Ok(hits.into_iter().nth(idx).unwrap())
}
