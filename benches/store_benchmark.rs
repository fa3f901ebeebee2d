use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recipe_match_engine::{RecipeDraft, RecipeStore, SqliteStore};

async fn setup_store() -> SqliteStore {
    let store = SqliteStore::new(":memory:").await.unwrap();

    for i in 0..100 {
        let mut draft = RecipeDraft::new(format!("Recipe {}", i));
        draft.ingredients = vec!["egg".to_string(), format!("ingredient {}", i)];
        store.create(&draft).await.unwrap();
    }

    store
}

fn bench_store_get(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = runtime.block_on(setup_store());

    c.bench_function("store_get_by_name_hit", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(store.get_by_name("Recipe 50").await.unwrap())
        });
    });

    c.bench_function("store_get_by_name_miss", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(store.get_by_name("nonexistent").await.unwrap())
        });
    });
}

fn bench_store_list(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let store = runtime.block_on(setup_store());

    c.bench_function("store_list_100", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(store.list(0, 100).await.unwrap()) });
    });
}

fn bench_store_create(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store_create", |b| {
        b.to_async(&runtime).iter(|| async {
            let store = SqliteStore::new(":memory:").await.unwrap();
            let draft = RecipeDraft::new("Test Recipe");
            black_box(store.create(&draft).await.unwrap())
        });
    });
}

criterion_group!(benches, bench_store_get, bench_store_list, bench_store_create);
criterion_main!(benches);
