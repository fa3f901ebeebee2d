use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recipe_match_engine::{build_have_set, normalize, rank, Recipe, DEFAULT_CUTOFF};

fn create_test_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let mut recipe = Recipe::new(i as i64, format!("Test Recipe {}", i));
            recipe.ingredients = vec![
                format!("ingredient {}", i % 20),
                "eggs".to_string(),
                "flour".to_string(),
                format!("spice {}", i % 7),
            ];
            recipe
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_plural", |b| {
        b.iter(|| black_box(normalize("Cherries")));
    });

    c.bench_function("normalize_synonym", |b| {
        b.iter(|| black_box(normalize("Scallions")));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let have = build_have_set(["eggs", "flour", "butter", "ingredient 5"]);

    let recipes_10 = create_test_recipes(10);
    let recipes_50 = create_test_recipes(50);
    let recipes_100 = create_test_recipes(100);

    c.bench_function("rank_10", |b| {
        b.iter(|| black_box(rank(&have, &recipes_10, DEFAULT_CUTOFF)));
    });

    c.bench_function("rank_50", |b| {
        b.iter(|| black_box(rank(&have, &recipes_50, DEFAULT_CUTOFF)));
    });

    c.bench_function("rank_100", |b| {
        b.iter(|| black_box(rank(&have, &recipes_100, DEFAULT_CUTOFF)));
    });
}

criterion_group!(benches, bench_normalize, bench_ranking);
criterion_main!(benches);
