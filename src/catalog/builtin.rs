use crate::models::{CostTier, Ingredient, Meal, SlotCategory, Unit};

use CostTier::{Budget, Premium, Standard};
use SlotCategory::{Breakfast, Dinner, Lunch, Snack};

fn g(name: &str, quantity: f64) -> Ingredient {
    Ingredient::new(name, quantity, Unit::Gram)
}

fn ml(name: &str, quantity: f64) -> Ingredient {
    Ingredient::new(name, quantity, Unit::Milliliter)
}

fn pcs(name: &str, quantity: f64) -> Ingredient {
    Ingredient::new(name, quantity, Unit::Piece)
}

fn meal(
    category: SlotCategory,
    tier: CostTier,
    name: &str,
    (protein_g, fat_g, carbs_g): (f64, f64, f64),
    ingredients: Vec<Ingredient>,
) -> Meal {
    Meal {
        name: name.to_string(),
        category,
        protein_g,
        fat_g,
        carbs_g,
        cost_tier: tier,
        ingredients,
    }
}

/// Meals bundled with the crate. Macros are (protein, fat, carbs) in grams.
pub fn builtin_meals() -> Vec<Meal> {
    vec![
        // ── Breakfast ──────────────────────────────────────────────────────
        meal(Breakfast, Standard, "Овесена каша с кисело мляко и банан", (34.0, 29.0, 94.0), vec![
            g("овесени ядки", 80.0), g("кисело мляко", 250.0), pcs("банан", 1.0), g("орехи", 20.0), g("мед", 15.0),
        ]),
        meal(Breakfast, Standard, "Омлет с пълнозърнест хляб и сирене", (38.0, 32.0, 86.0), vec![
            pcs("яйца", 3.0), g("пълнозърнест хляб", 120.0), g("сирене", 60.0), g("домати", 150.0),
        ]),
        meal(Breakfast, Standard, "Палачинки с извара и мед", (35.0, 28.0, 95.0), vec![
            g("брашно", 100.0), pcs("яйца", 2.0), ml("прясно мляко", 200.0), g("извара", 150.0), g("мед", 20.0),
        ]),
        meal(Breakfast, Standard, "Мюсли с прясно мляко и орехи", (33.0, 31.0, 92.0), vec![
            g("мюсли", 90.0), ml("прясно мляко", 300.0), g("орехи", 25.0),
        ]),
        meal(Breakfast, Standard, "Яйца по панагюрски с хляб", (37.0, 30.0, 88.0), vec![
            pcs("яйца", 3.0), g("кисело мляко", 200.0), g("хляб", 120.0), g("масло", 10.0),
        ]),
        meal(Breakfast, Standard, "Плодова салата", (6.0, 2.0, 70.0), vec![
            pcs("ябълка", 1.0), pcs("банан", 2.0), g("мед", 10.0),
        ]),
        meal(Breakfast, Budget, "Попара със сирене", (22.0, 18.0, 70.0), vec![
            g("хляб", 150.0), g("сирене", 50.0), ml("прясно мляко", 250.0),
        ]),
        meal(Breakfast, Budget, "Филийки с яйце", (24.0, 20.0, 72.0), vec![
            g("хляб", 150.0), pcs("яйца", 2.0), ml("олио", 10.0),
        ]),
        meal(Breakfast, Budget, "Кисело мляко с овесени ядки", (25.0, 15.0, 80.0), vec![
            g("кисело мляко", 400.0), g("овесени ядки", 60.0),
        ]),
        meal(Breakfast, Budget, "Баница с кисело мляко", (20.0, 24.0, 68.0), vec![
            g("брашно", 100.0), g("сирене", 60.0), pcs("яйца", 1.0), g("кисело мляко", 100.0), ml("олио", 15.0),
        ]),
        meal(Breakfast, Premium, "Авокадо тост със сьомга", (36.0, 34.0, 80.0), vec![
            g("пълнозърнест хляб", 120.0), pcs("авокадо", 1.0), g("сьомга", 100.0),
        ]),
        meal(Breakfast, Premium, "Протеинова купа с киноа", (40.0, 28.0, 90.0), vec![
            g("киноа", 80.0), g("кисело мляко", 200.0), g("орехи", 20.0), g("мед", 15.0),
        ]),
        meal(Breakfast, Premium, "Бъркани яйца със спанак и кашкавал", (38.0, 33.0, 78.0), vec![
            pcs("яйца", 4.0), g("спанак", 100.0), g("кашкавал", 50.0), g("пълнозърнест хляб", 100.0),
        ]),
        meal(Breakfast, Premium, "Гръцко кисело мляко с мюсли", (35.0, 25.0, 92.0), vec![
            g("кисело мляко", 350.0), g("мюсли", 60.0), g("мед", 20.0),
        ]),
        // ── Lunch ──────────────────────────────────────────────────────────
        meal(Lunch, Standard, "Пилешко филе с ориз и салата", (52.0, 40.0, 124.0), vec![
            g("пилешко филе", 200.0), g("ориз", 120.0), g("домати", 150.0), g("краставици", 150.0), ml("зехтин", 20.0),
        ]),
        meal(Lunch, Standard, "Боб чорба с хляб и сирене", (48.0, 41.0, 130.0), vec![
            g("боб", 150.0), g("хляб", 150.0), g("сирене", 60.0), pcs("лук", 1.0), ml("олио", 15.0),
        ]),
        meal(Lunch, Standard, "Свинско с картофи", (51.0, 45.0, 122.0), vec![
            g("свинско месо", 200.0), g("картофи", 400.0), pcs("лук", 1.0), ml("олио", 15.0),
        ]),
        meal(Lunch, Standard, "Паста болонезе", (49.0, 43.0, 131.0), vec![
            g("паста", 140.0), g("телешка кайма", 150.0), g("домати", 200.0), g("кашкавал", 30.0),
        ]),
        meal(Lunch, Standard, "Кюфтета с булгур", (53.0, 41.0, 125.0), vec![
            g("кайма", 200.0), g("булгур", 120.0), pcs("лук", 1.0), ml("олио", 10.0),
        ]),
        meal(Lunch, Standard, "Шопска салата", (15.0, 25.0, 20.0), vec![
            g("домати", 200.0), g("краставици", 150.0), g("чушки", 100.0), g("сирене", 80.0),
        ]),
        meal(Lunch, Budget, "Леща яхния с хляб", (30.0, 15.0, 110.0), vec![
            g("леща", 120.0), g("хляб", 100.0), pcs("лук", 1.0), ml("олио", 15.0),
        ]),
        meal(Lunch, Budget, "Картофи яхния с пиле", (32.0, 18.0, 100.0), vec![
            g("пилешко филе", 120.0), g("картофи", 350.0), pcs("лук", 1.0),
        ]),
        meal(Lunch, Budget, "Ориз със зеленчуци и яйце", (22.0, 16.0, 115.0), vec![
            g("ориз", 120.0), pcs("яйца", 2.0), g("чушки", 100.0), ml("олио", 15.0),
        ]),
        meal(Lunch, Budget, "Макарони със сирене", (28.0, 22.0, 105.0), vec![
            g("паста", 120.0), g("сирене", 80.0), pcs("яйца", 1.0), g("масло", 10.0),
        ]),
        meal(Lunch, Premium, "Сьомга с киноа и спанак", (52.0, 40.0, 118.0), vec![
            g("сьомга", 200.0), g("киноа", 100.0), g("спанак", 150.0), ml("зехтин", 15.0),
        ]),
        meal(Lunch, Premium, "Телешки стек с картофи", (55.0, 44.0, 115.0), vec![
            g("телешко филе", 220.0), g("картофи", 400.0), g("масло", 15.0),
        ]),
        meal(Lunch, Premium, "Пиле с киноа и авокадо", (50.0, 42.0, 120.0), vec![
            g("пилешко филе", 200.0), g("киноа", 110.0), pcs("авокадо", 1.0),
        ]),
        meal(Lunch, Premium, "Бяла риба с ориз и зеленчуци", (48.0, 38.0, 125.0), vec![
            g("бяла риба", 250.0), g("ориз", 120.0), g("чушки", 150.0), ml("зехтин", 20.0),
        ]),
        // ── Dinner ─────────────────────────────────────────────────────────
        meal(Dinner, Standard, "Риба с картофи", (44.0, 35.0, 106.0), vec![
            g("бяла риба", 200.0), g("картофи", 350.0), ml("зехтин", 20.0),
        ]),
        meal(Dinner, Standard, "Мусака с кисело мляко", (42.0, 38.0, 110.0), vec![
            g("кайма", 180.0), g("картофи", 350.0), pcs("яйца", 1.0), g("кисело мляко", 150.0),
        ]),
        meal(Dinner, Standard, "Пилешка супа с хляб и яйца", (41.0, 34.0, 112.0), vec![
            g("пилешко филе", 150.0), g("хляб", 120.0), pcs("яйца", 2.0), g("картофи", 150.0),
        ]),
        meal(Dinner, Standard, "Телешко с булгур", (45.0, 37.0, 105.0), vec![
            g("телешко филе", 180.0), g("булгур", 110.0), pcs("лук", 1.0),
        ]),
        meal(Dinner, Standard, "Пълнени чушки с ориз", (43.0, 36.0, 113.0), vec![
            g("чушки", 300.0), g("кайма", 150.0), g("ориз", 80.0), g("кисело мляко", 100.0),
        ]),
        meal(Dinner, Standard, "Таратор с филийка", (10.0, 15.0, 30.0), vec![
            g("кисело мляко", 250.0), g("краставици", 150.0), g("орехи", 10.0), g("хляб", 40.0),
        ]),
        meal(Dinner, Budget, "Леща с ориз", (26.0, 12.0, 95.0), vec![
            g("леща", 100.0), g("ориз", 60.0), pcs("лук", 1.0),
        ]),
        meal(Dinner, Budget, "Омлет с картофи", (28.0, 25.0, 70.0), vec![
            pcs("яйца", 3.0), g("картофи", 250.0), ml("олио", 15.0),
        ]),
        meal(Dinner, Budget, "Боб яхния", (24.0, 14.0, 90.0), vec![
            g("боб", 120.0), pcs("лук", 1.0), g("хляб", 80.0),
        ]),
        meal(Dinner, Budget, "Спагети с кайма", (30.0, 22.0, 95.0), vec![
            g("паста", 110.0), g("кайма", 100.0), g("домати", 150.0),
        ]),
        meal(Dinner, Premium, "Печена сьомга със спанак", (45.0, 38.0, 100.0), vec![
            g("сьомга", 220.0), g("спанак", 200.0), g("картофи", 300.0),
        ]),
        meal(Dinner, Premium, "Телешко филе с киноа", (46.0, 35.0, 104.0), vec![
            g("телешко филе", 200.0), g("киноа", 100.0), ml("зехтин", 10.0),
        ]),
        meal(Dinner, Premium, "Пиле с гъби и ориз", (44.0, 36.0, 108.0), vec![
            g("пилешко филе", 200.0), g("гъби", 200.0), g("ориз", 100.0), g("масло", 15.0),
        ]),
        meal(Dinner, Premium, "Рибена чорба с хляб", (40.0, 30.0, 100.0), vec![
            g("бяла риба", 200.0), g("хляб", 100.0), g("картофи", 200.0), g("домати", 150.0),
        ]),
        // ── Snack ──────────────────────────────────────────────────────────
        meal(Snack, Standard, "Кисело мляко с мед и орехи", (14.0, 12.0, 35.0), vec![
            g("кисело мляко", 200.0), g("мед", 20.0), g("орехи", 15.0),
        ]),
        meal(Snack, Standard, "Протеинов бар", (15.0, 11.0, 37.0), vec![
            pcs("протеинов бар", 1.0),
        ]),
        meal(Snack, Standard, "Филийка с фъстъчено масло", (13.0, 13.0, 36.0), vec![
            g("пълнозърнест хляб", 60.0), g("фъстъчено масло", 25.0),
        ]),
        meal(Snack, Standard, "Извара с плодове", (15.0, 11.0, 38.0), vec![
            g("извара", 120.0), pcs("банан", 1.0), g("мед", 10.0),
        ]),
        meal(Snack, Standard, "Сандвич с шунка", (14.0, 13.0, 34.0), vec![
            g("хляб", 60.0), g("шунка", 50.0), g("кашкавал", 20.0),
        ]),
        meal(Snack, Standard, "Ябълка", (0.5, 0.3, 25.0), vec![
            pcs("ябълка", 1.0),
        ]),
        meal(Snack, Budget, "Банан с кисело мляко", (8.0, 6.0, 40.0), vec![
            pcs("банан", 1.0), g("кисело мляко", 150.0),
        ]),
        meal(Snack, Budget, "Филийка със сирене", (10.0, 9.0, 30.0), vec![
            g("хляб", 60.0), g("сирене", 40.0),
        ]),
        meal(Snack, Budget, "Сварени яйца", (13.0, 10.0, 2.0), vec![
            pcs("яйца", 2.0),
        ]),
        meal(Snack, Budget, "Ябълка с орехи", (4.0, 10.0, 26.0), vec![
            pcs("ябълка", 1.0), g("орехи", 15.0),
        ]),
        meal(Snack, Premium, "Авокадо с яйце", (14.0, 20.0, 12.0), vec![
            pcs("авокадо", 1.0), pcs("яйца", 1.0),
        ]),
        meal(Snack, Premium, "Пушена сьомга с хляб", (16.0, 10.0, 30.0), vec![
            g("сьомга", 60.0), g("пълнозърнест хляб", 60.0),
        ]),
        meal(Snack, Premium, "Кисело мляко с киноа и мед", (15.0, 8.0, 40.0), vec![
            g("кисело мляко", 200.0), g("киноа", 40.0), g("мед", 15.0),
        ]),
        meal(Snack, Premium, "Ядки с мюсли", (8.0, 18.0, 20.0), vec![
            g("орехи", 30.0), g("мюсли", 30.0),
        ]),
    ]
}
