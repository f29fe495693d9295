use pantry_matching::{rank, FilterCriteria, Recipe};
use pantry_plan::{Pantry, PlanError, WeekPlan, Weekday, MAX_ITEMS_PER_DAY};

fn recipe(name: &str, ingredients: &[&str], time: u32) -> Recipe {
    Recipe {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        optional: vec![],
        category: vec![],
        time,
        steps: vec![],
        tips: None,
    }
}

/// Pantry edits feed straight into the ranking; quantities never matter
#[test]
fn test_pantry_edits_change_ranking() {
    let catalog = vec![
        recipe("Omelette", &["egg", "salt"], 10),
        recipe("Rice Ball", &["ごはん", "塩"], 5),
    ];
    let mut pantry = Pantry::new();
    pantry.add("egg", "6").unwrap();
    pantry.add("salt", "").unwrap();

    let ranked = rank(&catalog, pantry.names(), &FilterCriteria::default()).unwrap();
    assert_eq!(ranked[0].recipe.name, "Omelette");
    assert!(ranked[0].result.is_fully_stocked());

    pantry.remove("salt");
    pantry.add("白米", "2合").unwrap();
    pantry.add("塩", "").unwrap();

    let ranked = rank(&catalog, pantry.names(), &FilterCriteria::default()).unwrap();
    assert_eq!(ranked[0].recipe.name, "Rice Ball");
    assert_eq!(ranked[1].result.missing, vec!["salt".to_string()]);
}

/// Planning every no-shopping recipe fills Monday first, then Tuesday
#[test]
fn test_plan_from_fully_stocked_ranking() {
    let catalog: Vec<Recipe> = (0..5)
        .map(|i| recipe(&format!("Egg dish {i}"), &["卵"], 5 + i))
        .collect();
    let mut pantry = Pantry::new();
    pantry.add("たまご", "10").unwrap();
    let criteria = FilterCriteria {
        only_fully_stocked: true,
        ..Default::default()
    };

    let ranked = rank(&catalog, pantry.names(), &criteria).unwrap();
    let mut plan = WeekPlan::new();
    let placed: Vec<Weekday> = ranked
        .iter()
        .map(|entry| plan.add_recipe(&entry.recipe.name).unwrap())
        .collect();

    assert_eq!(ranked.len(), 5);
    assert_eq!(
        placed,
        vec![
            Weekday::Monday,
            Weekday::Monday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Tuesday
        ]
    );
    assert_eq!(plan.day(Weekday::Monday).items[0], "Egg dish 0");
}

#[test]
fn test_full_week_reports_capacity() {
    let mut plan = WeekPlan::new();
    for i in 0..7 * MAX_ITEMS_PER_DAY {
        plan.add_recipe(&format!("meal {i}")).unwrap();
    }

    let err = plan.add_recipe("extra").unwrap_err();

    assert!(matches!(err, PlanError::PlanFull { .. }));
    assert_eq!(
        err.to_string(),
        "Every day already has 3 meals - remove one first"
    );
}

#[test]
fn test_imported_pantry_ranks_like_original() {
    let catalog = vec![recipe("Omelette", &["egg", "salt"], 10)];
    let pantry = Pantry::from_json(r#"[{"name":"Ｅｇｇ","qty":""}]"#).unwrap();

    let ranked = rank(&catalog, pantry.names(), &FilterCriteria::default()).unwrap();

    assert_eq!(ranked[0].result.hit, 1);
    assert_eq!(ranked[0].result.pct, 50.0);
}
