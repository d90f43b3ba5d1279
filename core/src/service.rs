use std::path::Path;

use anyhow::Result;

use crate::db::Database;
use crate::models::{FavoriteRecord, RecipeSummary, normalize_query};

/// Platform-native recipe search provider.
///
/// The CLI implements this with reqwest; a mobile embedder brings its own
/// HTTP stack. Called synchronously from Rust — callers with a UI thread
/// should invoke `NoshService` methods from a background thread and
/// marshal results back themselves.
pub trait RecipeSearchProvider: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<RecipeSummary>>;
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct NoshService {
    db: Database,
}

impl NoshService {
    pub fn open(db_path: &Path) -> Result<Self> {
        let db = Database::open(db_path)?;
        Ok(Self { db })
    }

    pub fn new_in_memory() -> Result<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self { db })
    }

    // --- Remote search ---

    /// Search with a tagged result: the caller can tell "no results" from
    /// "request failed". The query is normalized before it reaches the
    /// provider.
    pub fn search(
        &self,
        provider: &dyn RecipeSearchProvider,
        query: &str,
    ) -> Result<Vec<RecipeSummary>> {
        provider.search(&normalize_query(query))
    }

    /// Best-effort search: any transport or decode failure degrades to an
    /// empty list. An empty list is therefore a valid non-error outcome.
    pub fn search_or_empty(
        &self,
        provider: &dyn RecipeSearchProvider,
        query: &str,
    ) -> Vec<RecipeSummary> {
        self.search(provider, query).unwrap_or_default()
    }

    /// Best-effort image fetch; `None` on any failure. No retry, no cache.
    pub fn fetch_image_or_none(
        &self,
        provider: &dyn RecipeSearchProvider,
        url: &str,
    ) -> Option<Vec<u8>> {
        provider.fetch_image(url).ok()
    }

    // --- Favorites ---

    pub fn list_favorites(&self) -> Result<Vec<FavoriteRecord>> {
        self.db.load_favorites()
    }

    pub fn is_favorite(&self, uri: &str) -> Result<bool> {
        self.db.is_favorite(uri)
    }

    pub fn add_favorite(&self, record: &FavoriteRecord) -> Result<bool> {
        self.db.add_favorite(record)
    }

    pub fn remove_favorite(&self, uri: &str) -> Result<bool> {
        self.db.remove_favorite(uri)
    }

    /// Toggle the candidate in or out of favorites; returns the new state.
    pub fn toggle_favorite(&self, candidate: &FavoriteRecord) -> Result<bool> {
        self.db.toggle_favorite(candidate)
    }

    /// Mark a search hit as favorite, precomputing its display texts.
    /// Returns the derived record; a duplicate uri leaves the store as-is.
    pub fn favorite_summary(&self, recipe: &RecipeSummary) -> Result<FavoriteRecord> {
        let record = FavoriteRecord::from_summary(recipe);
        self.db.add_favorite(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::bail;

    use super::*;
    use crate::models::MATCH_ALL_QUERY;

    struct MockProvider {
        recipes: Vec<RecipeSummary>,
        image: Vec<u8>,
        fail: bool,
        last_query: Mutex<Option<String>>,
    }

    impl MockProvider {
        fn with_recipes(recipes: Vec<RecipeSummary>) -> Self {
            Self {
                recipes,
                image: b"\x89PNG fake".to_vec(),
                fail: false,
                last_query: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                recipes: Vec::new(),
                image: Vec::new(),
                fail: true,
                last_query: Mutex::new(None),
            }
        }
    }

    impl RecipeSearchProvider for MockProvider {
        fn search(&self, query: &str) -> Result<Vec<RecipeSummary>> {
            *self.last_query.lock().unwrap() = Some(query.to_string());
            if self.fail {
                bail!("connection refused");
            }
            Ok(self.recipes.clone())
        }

        fn fetch_image(&self, _url: &str) -> Result<Vec<u8>> {
            if self.fail {
                bail!("connection refused");
            }
            Ok(self.image.clone())
        }
    }

    fn summary(uri: &str, label: &str) -> RecipeSummary {
        RecipeSummary {
            uri: uri.to_string(),
            label: label.to_string(),
            image: format!("https://img.example.com/{uri}.jpg"),
            url: None,
            ingredient_lines: Some(vec!["salt".to_string()]),
            calories: Some(100.0),
            servings: Some(2.0),
            total_time: Some(20.0),
            cuisine_type: None,
            meal_type: None,
            dish_type: None,
        }
    }

    #[test]
    fn test_search_passes_results_through_in_order() {
        let svc = NoshService::new_in_memory().unwrap();
        let provider =
            MockProvider::with_recipes(vec![summary("r1", "First"), summary("r2", "Second")]);

        let hits = svc.search(&provider, "soup").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].label, "First");
        assert_eq!(hits[1].label, "Second");
    }

    #[test]
    fn test_search_normalizes_empty_query() {
        let svc = NoshService::new_in_memory().unwrap();
        let provider = MockProvider::with_recipes(vec![summary("r1", "Any")]);

        svc.search(&provider, "   ").unwrap();
        assert_eq!(
            provider.last_query.lock().unwrap().as_deref(),
            Some(MATCH_ALL_QUERY)
        );

        svc.search(&provider, "  soup ").unwrap();
        assert_eq!(provider.last_query.lock().unwrap().as_deref(), Some("soup"));
    }

    #[test]
    fn test_search_or_empty_swallows_failure() {
        let svc = NoshService::new_in_memory().unwrap();
        let provider = MockProvider::failing();

        assert!(svc.search_or_empty(&provider, "soup").is_empty());
        // The tagged variant still reports the failure
        assert!(svc.search(&provider, "soup").is_err());
    }

    #[test]
    fn test_fetch_image_or_none() {
        let svc = NoshService::new_in_memory().unwrap();

        let provider = MockProvider::with_recipes(vec![]);
        let bytes = svc
            .fetch_image_or_none(&provider, "https://img.example.com/x.jpg")
            .unwrap();
        assert_eq!(bytes, b"\x89PNG fake");

        let failing = MockProvider::failing();
        assert!(
            svc.fetch_image_or_none(&failing, "https://img.example.com/x.jpg")
                .is_none()
        );
    }

    #[test]
    fn test_favorite_summary_precomputes_texts() {
        let svc = NoshService::new_in_memory().unwrap();
        let record = svc.favorite_summary(&summary("r1", "Soup")).unwrap();

        assert!(record.ingredients_text.starts_with("Ingredients (1):"));
        assert!(record.nutrition_text.contains("• Calories: 100 kcal"));
        assert!(svc.is_favorite("r1").unwrap());

        let favorites = svc.list_favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0], record);
    }

    #[test]
    fn test_toggle_roundtrip_through_service() {
        let svc = NoshService::new_in_memory().unwrap();
        let record = FavoriteRecord::from_summary(&summary("r1", "Soup"));

        assert!(svc.toggle_favorite(&record).unwrap());
        assert!(svc.is_favorite("r1").unwrap());
        assert!(!svc.toggle_favorite(&record).unwrap());
        assert!(!svc.is_favorite("r1").unwrap());
    }

    #[test]
    fn test_remove_favorite_noop() {
        let svc = NoshService::new_in_memory().unwrap();
        assert!(!svc.remove_favorite("missing").unwrap());
    }
}
