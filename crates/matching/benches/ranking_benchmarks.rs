use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pantry_matching::{rank, FilterCriteria, Recipe};

const INGREDIENT_POOL: &[&str] = &[
    "卵", "ごはん", "しょうゆ", "豚こま", "にんじん", "じゃがいも", "玉ねぎ", "長ねぎ", "味噌",
    "だし", "みりん", "酒", "カレールー", "片栗粉", "小麦粉", "マヨネーズ", "ケチャップ",
    "キャベツ", "豆腐", "鶏もも肉", "合いびき肉", "塩", "こしょう", "砂糖",
];

/// Create a catalog with varied ingredient lists, times and categories
fn create_bench_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let ingredient_count = 3 + (i % 8);
            let ingredients = (0..ingredient_count)
                .map(|j| INGREDIENT_POOL[(i * 7 + j * 3) % INGREDIENT_POOL.len()].to_string())
                .collect();

            let category = match i % 4 {
                0 => "和食",
                1 => "quick",
                2 => "soup",
                _ => "dinner",
            };

            Recipe {
                name: format!("Recipe {}", i),
                ingredients,
                optional: vec![],
                category: vec![category.to_string()],
                time: 5 + (i as u32 % 55),
                steps: vec![],
                tips: None,
            }
        })
        .collect()
}

fn bench_pantry() -> Vec<String> {
    ["玉子", "白米", "醤油", "豚肉", "人参", "男爵", "オニオン", "みそ", "ほんだし", "塩"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Rank 500 recipes with no filters (every recipe scored)
fn bench_rank_500_recipes(c: &mut Criterion) {
    let catalog = create_bench_catalog(500);
    let pantry = bench_pantry();
    let criteria = FilterCriteria::default();

    c.bench_function("rank_500_recipes", |b| {
        b.iter(|| rank(black_box(&catalog), black_box(&pantry), black_box(&criteria)))
    });
}

/// Rank 500 recipes with category, time and match filters
fn bench_rank_500_recipes_filtered(c: &mut Criterion) {
    let catalog = create_bench_catalog(500);
    let pantry = bench_pantry();
    let criteria = FilterCriteria {
        category: Some("和食".to_string()),
        max_time_minutes: 30,
        min_match_pct: 50.0,
        ..Default::default()
    };

    c.bench_function("rank_500_recipes_filtered", |b| {
        b.iter(|| rank(black_box(&catalog), black_box(&pantry), black_box(&criteria)))
    });
}

criterion_group!(benches, bench_rank_500_recipes, bench_rank_500_recipes_filtered);
criterion_main!(benches);
