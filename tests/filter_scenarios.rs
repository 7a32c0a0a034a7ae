//! End-to-end filtering scenarios driven through the application state
//! machine, using the public crate API only.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use toolshelf::app::{App, CatalogState, Mode, UiMessage, LOAD_FAILURE_MESSAGE};
use toolshelf::catalog::types::LoadError;
use toolshelf::catalog::{filter, FilterState, Item};

fn item(name: &str, description: &str, category: &str) -> Item {
    Item {
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        link: format!("https://example.com/{}", name.to_lowercase().replace(' ', "-")),
    }
}

fn sample_catalog() -> Vec<Item> {
    vec![
        item("Acme Monitor", "Track brand mentions across networks", "Social Listening"),
        item("EchoTrace", "Conversation monitoring dashboard", "Social Listening"),
        item("PressWire", "Distribute releases to journalists", "Press Mailing"),
        item("BrandGuard", "Reputation scoring and alerts", "Reputation"),
        item("AdVoice", "Sponsored article placement", "Sponsored Content"),
        item("StarReach", "Find and manage influencer campaigns", "Influencer Marketing"),
    ]
}

fn loaded_app() -> App {
    let mut app = App::new();
    app.catalog_loaded(Ok(sample_catalog()));
    app
}

#[test]
fn category_tile_shows_only_that_category() {
    let mut app = loaded_app();
    app.apply(UiMessage::CategoryChanged(Some("Social Listening".to_string())));

    assert_eq!(app.mode, Mode::Filtered);
    assert_eq!(app.results_title(), "Social Listening");
    let names: Vec<&str> = app.results.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Monitor", "EchoTrace"]);
}

#[test]
fn search_is_case_insensitive_across_name_and_description() {
    let mut app = loaded_app();
    app.search_input = "MONITOR".to_string();
    app.apply(UiMessage::SearchSubmitted);

    assert_eq!(app.mode, Mode::Filtered);
    assert_eq!(app.results_title(), "Search results");
    // "Acme Monitor" matches by name, "EchoTrace" by description.
    let names: Vec<&str> = app.results.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Monitor", "EchoTrace"]);
}

#[test]
fn search_and_category_combine_conjunctively() {
    let mut app = loaded_app();
    app.search_input = "monitor".to_string();
    app.apply(UiMessage::CategoryChanged(Some("Reputation".to_string())));

    // "BrandGuard" is in Reputation but does not mention "monitor";
    // the monitoring tools are in the wrong category.
    assert_eq!(app.mode, Mode::Filtered);
    assert!(app.results.is_empty());
}

#[test]
fn no_match_stays_filtered_with_empty_results() {
    let mut app = loaded_app();
    app.search_input = "zzz".to_string();
    app.apply(UiMessage::SearchSubmitted);

    assert_eq!(app.mode, Mode::Filtered);
    assert!(app.results.is_empty());
    assert!(app.clear_filters_visible());
}

#[test]
fn clearing_from_any_filtered_state_restores_home() {
    let mut app = loaded_app();
    app.search_input = "press".to_string();
    app.apply(UiMessage::CategoryChanged(Some("Press Mailing".to_string())));
    assert_eq!(app.mode, Mode::Filtered);

    app.apply(UiMessage::FiltersCleared);

    assert_eq!(app.mode, Mode::Home);
    assert!(app.search_input.is_empty());
    assert_eq!(app.selected_category, None);
    assert!(!app.clear_filters_visible());
}

#[test]
fn empty_submit_never_lists_the_whole_catalog() {
    let mut app = loaded_app();
    app.apply(UiMessage::SearchSubmitted);
    assert_eq!(app.mode, Mode::Home);
    assert!(app.results.is_empty());

    app.search_input = "   ".to_string();
    app.apply(UiMessage::SearchSubmitted);
    assert_eq!(app.mode, Mode::Home);
    assert!(app.results.is_empty());
}

#[test]
fn filter_applied_while_loading_populates_once_loaded() {
    let mut app = App::new();
    app.apply(UiMessage::CategoryChanged(Some("Social Listening".to_string())));
    assert_eq!(app.mode, Mode::Filtered);
    assert!(app.results.is_empty());

    app.catalog_loaded(Ok(sample_catalog()));

    assert_eq!(app.mode, Mode::Filtered);
    let names: Vec<&str> = app.results.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Monitor", "EchoTrace"]);
}

#[test]
fn load_failure_shows_fixed_message_state() {
    let mut app = App::new();
    app.catalog_loaded(Err(LoadError::TooLarge { size: 10, max: 1 }));

    assert!(matches!(app.catalog, CatalogState::Failed));
    assert_eq!(
        LOAD_FAILURE_MESSAGE,
        "Could not load the tool catalog. Try again later."
    );

    // Filtering a failed catalog yields no results, not a crash.
    app.search_input = "acme".to_string();
    app.apply(UiMessage::SearchSubmitted);
    assert!(app.results.is_empty());
}

#[test]
fn combined_filter_equals_intersection_of_individual_filters() {
    let catalog = sample_catalog();
    let by_category = filter(
        &catalog,
        &FilterState {
            search: String::new(),
            category: Some("Social Listening".to_string()),
        },
    );
    let by_search = filter(
        &catalog,
        &FilterState {
            search: "dashboard".to_string(),
            category: None,
        },
    );
    let combined = filter(
        &catalog,
        &FilterState {
            search: "dashboard".to_string(),
            category: Some("Social Listening".to_string()),
        },
    );

    let expected: Vec<&Item> = by_category
        .iter()
        .filter(|&i| by_search.contains(i))
        .collect();
    assert_eq!(combined.iter().collect::<Vec<_>>(), expected);
}

proptest! {
    // Every returned item actually matches the active term, for arbitrary
    // catalogs and search strings.
    #[test]
    fn search_results_are_sound(
        fields in proptest::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,20}"), 0..8),
        term in "[a-zA-Z]{1,6}",
    ) {
        let catalog: Vec<Item> = fields
            .into_iter()
            .map(|(name, description)| item(&name, &description, "Reputation"))
            .collect();

        let state = FilterState {
            search: term.clone(),
            category: None,
        };
        let needle = term.to_lowercase();
        for result in filter(&catalog, &state) {
            prop_assert!(
                result.name.to_lowercase().contains(&needle)
                    || result.description.to_lowercase().contains(&needle)
            );
        }
    }
}
