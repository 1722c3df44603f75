use std::collections::BTreeMap;

use crate::models::Unit;
use crate::packs::{GroceryCategory, PackSize};

use GroceryCategory::{Dairy, Grains, MeatFish, Other, Produce};

fn pack(
    size: f64,
    unit: Unit,
    retail_name: &str,
    plural_form: &str,
    category: GroceryCategory,
) -> PackSize {
    PackSize {
        standard_pack_size: size,
        unit,
        retail_name: retail_name.to_string(),
        plural_form: plural_form.to_string(),
        discrete: false,
        category,
    }
}

fn item(singular: &str, plural: &str, category: GroceryCategory) -> PackSize {
    PackSize {
        standard_pack_size: 1.0,
        unit: Unit::Piece,
        retail_name: singular.to_string(),
        plural_form: plural.to_string(),
        discrete: true,
        category,
    }
}

/// Retail packaging for the ingredients of the bundled catalog.
///
/// Ingredients without an entry (tomatoes, cucumbers, peppers, mushrooms) are
/// sold loose and pass through as raw quantities.
pub fn builtin_packs() -> BTreeMap<String, PackSize> {
    use Unit::{Gram, Milliliter, Piece};

    let entries = [
        ("кисело мляко", pack(400.0, Gram, "кофичка", "кофички", Dairy)),
        ("прясно мляко", pack(1000.0, Milliliter, "кутия", "кутии", Dairy)),
        ("сирене", pack(400.0, Gram, "пакет", "пакета", Dairy)),
        ("кашкавал", pack(200.0, Gram, "пакет", "пакета", Dairy)),
        ("извара", pack(250.0, Gram, "кофичка", "кофички", Dairy)),
        ("масло", pack(125.0, Gram, "пакетче", "пакетчета", Dairy)),
        ("яйца", pack(10.0, Piece, "кора", "кори", Dairy)),
        ("пилешко филе", pack(500.0, Gram, "тавичка", "тавички", MeatFish)),
        ("свинско месо", pack(500.0, Gram, "тавичка", "тавички", MeatFish)),
        ("кайма", pack(400.0, Gram, "тавичка", "тавички", MeatFish)),
        ("телешко филе", pack(500.0, Gram, "пакет", "пакета", MeatFish)),
        ("сьомга", pack(250.0, Gram, "филе", "филета", MeatFish)),
        ("бяла риба", pack(400.0, Gram, "пакет", "пакета", MeatFish)),
        ("шунка", pack(150.0, Gram, "пакет", "пакета", MeatFish)),
        ("ориз", pack(1000.0, Gram, "пакет", "пакета", Grains)),
        ("овесени ядки", pack(500.0, Gram, "пакет", "пакета", Grains)),
        ("хляб", pack(500.0, Gram, "самун", "самуна", Grains)),
        ("булгур", pack(500.0, Gram, "пакет", "пакета", Grains)),
        ("паста", pack(500.0, Gram, "пакет", "пакета", Grains)),
        ("мюсли", pack(375.0, Gram, "кутия", "кутии", Grains)),
        ("киноа", pack(400.0, Gram, "пакет", "пакета", Grains)),
        ("брашно", pack(1000.0, Gram, "пакет", "пакета", Grains)),
        ("боб", pack(500.0, Gram, "пакет", "пакета", Grains)),
        ("леща", pack(500.0, Gram, "пакет", "пакета", Grains)),
        ("картофи", pack(2000.0, Gram, "плик", "плика", Produce)),
        ("спанак", pack(400.0, Gram, "пакет", "пакета", Produce)),
        ("банан", item("банан", "банана", Produce)),
        ("ябълка", item("ябълка", "ябълки", Produce)),
        ("авокадо", item("авокадо", "авокада", Produce)),
        ("лук", item("глава лук", "глави лук", Produce)),
        ("мед", pack(400.0, Gram, "буркан", "буркана", Other)),
        ("орехи", pack(200.0, Gram, "пакет", "пакета", Other)),
        ("фъстъчено масло", pack(350.0, Gram, "буркан", "буркана", Other)),
        ("зехтин", pack(500.0, Milliliter, "бутилка", "бутилки", Other)),
        ("олио", pack(1000.0, Milliliter, "бутилка", "бутилки", Other)),
        ("протеинов бар", item("протеинов бар", "протеинови бара", Other)),
    ];

    entries
        .into_iter()
        .map(|(name, pack)| (name.to_string(), pack))
        .collect()
}
