//! End-to-end load cycles over JSON recipe and advancement documents.

use craftmap_common::{ItemId, RecipeName};
use craftmap_progress::*;

fn recipe(name: &str, json: &str) -> NamedRecipe {
    NamedRecipe::new(name, RawRecipe::from_json(json).expect("recipe json"))
}

fn advancements(json: &str) -> AdvancementDocument {
    AdvancementDocument::from_json(json).expect("advancement json")
}

fn find<'a>(records: &'a [RecipeProgress], name: &str) -> &'a RecipeProgress {
    records
        .iter()
        .find(|record| record.recipe_name.as_str() == name)
        .unwrap_or_else(|| panic!("missing record {name}"))
}

fn item_names(items: &ItemSet) -> Vec<&str> {
    items.iter().map(ItemId::as_str).collect()
}

fn names(list: &[RecipeName]) -> Vec<&str> {
    list.iter().map(RecipeName::as_str).collect()
}

#[test]
fn iron_ingot_smelting_end_to_end() {
    let recipes = [recipe(
        "iron_ingot",
        r#"{
            "type": "minecraft:smelting",
            "result": "minecraft:iron_ingot",
            "ingredient": {"item": "minecraft:iron_ore"}
        }"#,
    )];
    let docs = [advancements(
        r#"{"minecraft:recipes/misc/iron_ingot": {"done": true}}"#,
    )];

    let records = compute_all_progress(&recipes, &docs).expect("compute");
    assert_eq!(records.len(), 1);

    let iron = &records[0];
    assert_eq!(iron.recipe_name.as_str(), "iron_ingot");
    assert_eq!(iron.result_item.as_str(), "iron_ingot");
    assert_eq!(iron.recipe_type, RecipeType::Smelting);
    assert!(iron.is_unlocked);
    assert_eq!(item_names(&iron.ingredients.required_items), vec!["iron_ore"]);
    assert!(iron.ingredients.optional_items.is_empty());
    assert_eq!(
        item_names(&iron.ingredients.unlocked_with_items),
        vec!["iron_ore"]
    );

    let json = serde_json::to_value(iron).expect("serialize");
    assert_eq!(json["recipeName"], "iron_ingot");
    assert_eq!(json["resultItem"], "iron_ingot");
    assert_eq!(json["type"], "smelting");
    assert_eq!(json["isUnlocked"], true);
    assert_eq!(json["ingredients"]["requiredItems"][0], "iron_ore");
    assert_eq!(json["meta"]["isCraftable"], "indeterminate");
}

#[test]
fn output_sorted_by_type_then_name_descending() {
    let smelting = |name: &str| {
        recipe(
            name,
            &format!(
                r#"{{"type": "minecraft:smelting", "result": "minecraft:{name}",
                    "ingredient": {{"item": "minecraft:ore"}}}}"#
            ),
        )
    };
    let blasting = |name: &str| {
        recipe(
            name,
            &format!(
                r#"{{"type": "minecraft:blasting", "result": "minecraft:{name}",
                    "ingredient": {{"item": "minecraft:ore"}}}}"#
            ),
        )
    };

    // Blasting and smelting recipes cannot share names, so suffix them.
    let recipes = [
        blasting("iron_ingot_from_blasting"),
        smelting("iron_ingot"),
        blasting("stick_from_blasting"),
        smelting("stick"),
    ];
    let records = compute_all_progress(&recipes, &[]).expect("compute");

    let order: Vec<_> = records
        .iter()
        .map(|record| (record.recipe_type.as_str(), record.recipe_name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("smelting", "stick"),
            ("smelting", "iron_ingot"),
            ("blasting", "stick_from_blasting"),
            ("blasting", "iron_ingot_from_blasting"),
        ]
    );
}

#[test]
fn stick_unlocks_ladder() {
    let recipes = [
        recipe(
            "stick",
            r##"{
                "type": "minecraft:crafting_shaped",
                "pattern": ["#", "#"],
                "key": {"#": {"tag": "minecraft:planks"}},
                "result": {"item": "minecraft:stick", "count": 4}
            }"##,
        ),
        recipe(
            "ladder",
            r####"{
                "type": "minecraft:crafting_shaped",
                "pattern": ["# #", "###", "# #"],
                "key": {"#": {"item": "minecraft:stick"}},
                "result": {"item": "minecraft:ladder", "count": 3}
            }"####,
        ),
        recipe(
            "oak_planks",
            r#"{
                "type": "minecraft:crafting_shapeless",
                "ingredients": [{"tag": "minecraft:oak_logs"}],
                "result": {"item": "minecraft:planks", "count": 4}
            }"#,
        ),
    ];
    let docs = [advancements(
        r#"{
            "minecraft:recipes/misc/stick": {"criteria": {"has_planks": "2024-01-01"}, "done": true},
            "minecraft:recipes/misc/ladder": {"criteria": {}, "done": false}
        }"#,
    )];

    let records = compute_all_progress(&recipes, &docs).expect("compute");

    let stick = find(&records, "stick");
    assert!(stick.is_unlocked);
    assert_eq!(names(stick.meta().related_locked_recipes()), vec!["ladder"]);
    assert_eq!(names(stick.meta().unlocks_recipes()), vec!["ladder"]);
    assert!(stick.meta().related_unlocked_recipes().is_empty());

    let ladder = find(&records, "ladder");
    assert!(!ladder.is_unlocked);
    assert_eq!(ladder.meta().is_craftable(), Craftability::Craftable);

    let planks = find(&records, "oak_planks");
    assert_eq!(names(planks.meta().related_unlocked_recipes()), vec!["stick"]);
    assert!(planks.meta().unlocks_recipes().is_empty());
    // Locked planks: stick is not craftable yet, logs come from no recipe.
    assert_eq!(stick.meta().is_craftable(), Craftability::NotCraftable);
    assert_eq!(planks.meta().is_craftable(), Craftability::Indeterminate);
}

#[test]
fn special_unlock_overrides() {
    let recipes = [
        recipe(
            "hopper_minecart",
            r#"{
                "type": "minecraft:crafting_shapeless",
                "ingredients": [{"item": "minecraft:hopper"}, {"item": "minecraft:minecart"}],
                "result": {"item": "minecraft:hopper_minecart"}
            }"#,
        ),
        recipe(
            "netherite_armor_trim_smithing_template",
            r####"{
                "type": "minecraft:crafting_shaped",
                "pattern": ["#S#", "#C#", "###"],
                "key": {
                    "#": {"item": "minecraft:diamond"},
                    "C": {"item": "minecraft:netherrack"},
                    "S": {"item": "minecraft:netherite_armor_trim_smithing_template"}
                },
                "result": {"item": "minecraft:netherite_armor_trim_smithing_template", "count": 2}
            }"####,
        ),
        recipe(
            "netherite_sword_smithing",
            r#"{
                "type": "minecraft:smithing_transform",
                "template": {"item": "minecraft:netherite_upgrade_smithing_template"},
                "base": {"item": "minecraft:diamond_sword"},
                "addition": {"item": "minecraft:netherite_ingot"},
                "result": {"item": "minecraft:netherite_sword"}
            }"#,
        ),
    ];

    let records = compute_all_progress(&recipes, &[]).expect("compute");

    let hopper = find(&records, "hopper_minecart");
    assert_eq!(
        item_names(&hopper.ingredients.unlocked_with_items),
        vec!["minecart"]
    );

    let template = find(&records, "netherite_armor_trim_smithing_template");
    assert_eq!(
        item_names(&template.ingredients.unlocked_with_items),
        vec!["netherite_armor_trim_smithing_template"]
    );
    assert_eq!(
        item_names(&template.ingredients.required_items),
        vec![
            "diamond",
            "netherrack",
            "netherite_armor_trim_smithing_template"
        ]
    );

    let sword = find(&records, "netherite_sword_smithing");
    assert_eq!(
        item_names(&sword.ingredients.required_items),
        vec!["diamond_sword", "netherite_ingot"]
    );
    assert_eq!(
        item_names(&sword.ingredients.unlocked_with_items),
        vec!["netherite_ingot"]
    );
}

#[test]
fn earlier_snapshot_wins() {
    let recipes = [recipe(
        "iron_ingot",
        r#"{"type": "minecraft:smelting", "result": "minecraft:iron_ingot",
            "ingredient": {"item": "minecraft:iron_ore"}}"#,
    )];
    let older = advancements(r#"{"minecraft:recipes/misc/iron_ingot": {"done": false}}"#);
    let newer = advancements(r#"{"minecraft:recipes/misc/iron_ingot": {"done": true}}"#);

    let records = compute_all_progress(&recipes, &[older.clone(), newer.clone()]).expect("compute");
    assert!(!records[0].is_unlocked);

    let records = compute_all_progress(&recipes, &[newer, older]).expect("compute");
    assert!(records[0].is_unlocked);
}

#[test]
fn malformed_ingredient_aborts_load() {
    let recipes = [
        recipe(
            "stick",
            r#"{"type": "minecraft:crafting_shapeless", "result": "minecraft:stick",
                "ingredients": [{"item": "minecraft:oak_planks"}]}"#,
        ),
        recipe(
            "broken",
            r#"{"type": "minecraft:crafting_shapeless", "result": "minecraft:broken",
                "ingredients": [{"count": 1}]}"#,
        ),
    ];

    let error = compute_all_progress(&recipes, &[]).expect_err("should fail");
    assert!(matches!(error, ProgressError::MissingIngredientItem { .. }));
    assert_eq!(
        error.to_string(),
        "Ingredient in recipe broken has neither item nor tag"
    );
}

#[test]
fn summary_over_computed_records() {
    let recipes = [
        recipe(
            "iron_ingot",
            r#"{"type": "minecraft:smelting", "result": "minecraft:iron_ingot",
                "ingredient": {"item": "minecraft:raw_iron"}}"#,
        ),
        recipe(
            "iron_nugget",
            r#"{"type": "minecraft:crafting_shapeless", "result": "minecraft:iron_nugget",
                "ingredients": [{"item": "minecraft:iron_ingot"}]}"#,
        ),
    ];
    let docs = [advancements(
        r#"{"minecraft:recipes/misc/iron_ingot": {"done": true}}"#,
    )];

    let records = compute_all_progress(&recipes, &docs).expect("compute");
    let summary = ProgressSummary::from_records(&records);

    assert_eq!(summary.overall.total, 2);
    assert_eq!(summary.overall.unlocked, 1);
    assert_eq!(summary.overall.craftable, 1);
    assert_eq!(summary.overall.indeterminate, 1);
    assert_eq!(summary.counts(RecipeType::Smelting).unlocked, 1);
}

#[test]
fn malformed_result_and_type_use_progress_errors() {
    for json in [
        r#"{"type": "minecraft:smelting", "result": 42, "ingredient": {"item": "minecraft:ore"}}"#,
        r#"{"type": "minecraft:smelting", "result": {"item": 7}, "ingredient": {"item": "minecraft:ore"}}"#,
    ] {
        let error = compute_all_progress(&[recipe("odd_result", json)], &[]).expect_err("should fail");
        assert!(matches!(error, ProgressError::MissingResultItem(_)));
    }

    let error = compute_all_progress(
        &[recipe(
            "odd_type",
            r#"{"type": 7, "result": "minecraft:x", "ingredient": {"item": "minecraft:ore"}}"#,
        )],
        &[],
    )
    .expect_err("should fail");
    assert!(matches!(
        error,
        ProgressError::RecipeTypeUnrecognized { found: Some(found), .. } if found == "7"
    ));
}
