pub mod aggregate;
pub mod list;

pub use aggregate::{AggregateEntry, IngredientAggregate, aggregate_ingredients};
pub use list::{
    ShoppingItem, ShoppingList, build_shopping_list, convert_to_packs, format_exact,
    format_quantity, packs_needed, render_packs, render_raw,
};
