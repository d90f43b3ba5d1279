use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use nosh_core::models::{FavoriteRecord, RecipeSummary};

pub(crate) fn prompt_choice(count: usize) -> Result<usize> {
    eprint!("\nSelect a recipe (1-{count}): ");
    io::stderr().flush()?;
    let stdin = io::stdin();
    let line = stdin.lock().lines().next().context("No input")??;
    let n: usize = line.trim().parse().context("Invalid number")?;
    if n < 1 || n > count {
        bail!("Selection out of range");
    }
    Ok(n - 1)
}

pub(crate) fn print_recipe_table(recipes: &[&RecipeSummary]) {
    #[derive(Tabled)]
    struct RecipeRow {
        #[tabled(rename = "#")]
        idx: usize,
        #[tabled(rename = "Recipe")]
        label: String,
        #[tabled(rename = "Cal")]
        calories: String,
        #[tabled(rename = "Servings")]
        servings: String,
        #[tabled(rename = "Time")]
        time: String,
        #[tabled(rename = "Cuisine")]
        cuisine: String,
    }

    let rows: Vec<RecipeRow> = recipes
        .iter()
        .enumerate()
        .map(|(i, r)| RecipeRow {
            idx: i + 1,
            label: truncate(&r.label, 40),
            calories: r.calories.map_or("-".into(), |v| format!("{v:.0}")),
            servings: r.servings.map_or("-".into(), |v| format!("{v:.0}")),
            time: r
                .total_time
                .filter(|t| *t > 0.0)
                .map_or("-".into(), |t| format!("{t:.0} min")),
            cuisine: r
                .cuisine_type
                .as_deref()
                .map(|c| truncate(&c.join(", "), 20))
                .unwrap_or_default(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..5)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn print_favorite_table(favorites: &[&FavoriteRecord]) {
    #[derive(Tabled)]
    struct FavoriteRow {
        #[tabled(rename = "#")]
        idx: usize,
        #[tabled(rename = "Recipe")]
        label: String,
        #[tabled(rename = "Uri")]
        uri: String,
    }

    let rows: Vec<FavoriteRow> = favorites
        .iter()
        .enumerate()
        .map(|(i, f)| FavoriteRow {
            idx: i + 1,
            label: truncate(&f.label, 40),
            uri: truncate(&f.uri, 50),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world this is long", 10), "hello w...");
    }

    #[test]
    fn test_truncate_utf8() {
        // Should not panic on multi-byte characters
        assert_eq!(truncate("Crème fraîche", 10), "Crème f...");
        assert_eq!(truncate("Müsli", 10), "Müsli");
        assert_eq!(truncate("日清カップヌードル", 8), "日清カップ...");
    }
}
