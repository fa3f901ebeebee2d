use recipe_match_engine::{MatchEngine, MatchEngineError, PantryQuery, RecipeDraft};

fn draft(name: &str, ingredients: &[&str]) -> RecipeDraft {
    let mut d = RecipeDraft::new(name);
    d.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    d
}

#[tokio::test]
async fn test_end_to_end_match() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    engine
        .add_recipe(&draft("Pancakes", &["egg", "flour"]))
        .await
        .unwrap();

    let report = engine
        .match_pantry(PantryQuery::new(vec![
            "egg".to_string(),
            "flour".to_string(),
            "butter".to_string(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.have, vec!["butter", "egg", "flour"]);
    assert_eq!(report.results.len(), 1);

    let m = &report.results[0];
    assert_eq!(m.name, "Pancakes");
    assert_eq!(m.matched, vec!["egg", "flour"]);
    assert!(m.missing.is_empty());
    assert!(m.full_match);
}

#[tokio::test]
async fn test_ranking_and_filtering() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    engine.add_recipe(&draft("B", &["egg", "flour", "sugar"])).await.unwrap();
    engine.add_recipe(&draft("A", &["egg", "flour"])).await.unwrap();
    engine.add_recipe(&draft("C", &["egg"])).await.unwrap();
    engine.add_recipe(&draft("Durian Shake", &["durian"])).await.unwrap();

    let report = engine
        .match_pantry(PantryQuery::new(vec!["egg".to_string(), "flour".to_string()]))
        .await
        .unwrap();

    let names: Vec<&str> = report.results.iter().map(|m| m.name.as_str()).collect();
    // A: 2/0, B: 2/1, C: 1/0; Durian Shake has zero matches and is excluded
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_match_tolerates_naming_variation() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    engine
        .add_recipe(&draft("Ratatouille", &["aubergine", "courgette", "tomatoes"]))
        .await
        .unwrap();

    // regional synonyms and plurals in the pantry
    let report = engine
        .match_pantry(PantryQuery::new(vec![
            "Eggplant".to_string(),
            "zucchini".to_string(),
            "Tomato".to_string(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert!(report.results[0].full_match);
}

#[tokio::test]
async fn test_invalid_cutoff_is_rejected_before_matching() {
    let engine = MatchEngine::new(":memory:").await.unwrap();
    engine.add_recipe(&draft("Omelette", &["egg"])).await.unwrap();

    for bad in [0.0, -1.0, 1.5, f64::NAN] {
        let err = engine
            .match_pantry(PantryQuery::new(vec!["egg".to_string()]).with_cutoff(bad))
            .await;
        assert!(matches!(err, Err(MatchEngineError::InvalidCutoff(_))));
    }
}

#[tokio::test]
async fn test_crud_lifecycle() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    let created = engine.add_recipe(&draft("ToChange", &["x"])).await.unwrap();

    let updated = engine
        .update_recipe(created.id, &draft("Changed", &["a", "b"]))
        .await
        .unwrap();
    assert_eq!(updated.name, "Changed");

    engine.delete_recipe(created.id).await.unwrap();
    let err = engine.get_recipe(created.id).await;
    assert!(matches!(err, Err(MatchEngineError::RecipeNotFound(_))));
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    engine.add_recipe(&draft("DupRecipe", &["i1"])).await.unwrap();
    let err = engine.add_recipe(&draft("DupRecipe", &["i2"])).await;
    assert!(matches!(err, Err(MatchEngineError::DuplicateName(_))));
}

#[tokio::test]
async fn test_blank_pantry_entries_are_ignored() {
    let engine = MatchEngine::new(":memory:").await.unwrap();
    engine.add_recipe(&draft("Omelette", &["egg"])).await.unwrap();

    let report = engine
        .match_pantry(PantryQuery::new(vec![
            "".to_string(),
            "   ".to_string(),
            "Eggs".to_string(),
        ]))
        .await
        .unwrap();

    assert_eq!(report.have, vec!["egg"]);
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_store_stats_through_engine() {
    let engine = MatchEngine::new(":memory:").await.unwrap();

    let stats = engine.store_stats().await.unwrap();
    assert_eq!(stats.total_recipes, 0);

    engine.add_recipe(&draft("A", &["egg", "flour"])).await.unwrap();
    let stats = engine.store_stats().await.unwrap();
    assert_eq!(stats.total_recipes, 1);
    assert_eq!(stats.total_ingredients, 2);
}
