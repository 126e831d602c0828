//! Loot sampling
//!
//! On victory one entry is chosen uniformly from the whole loot table,
//! then a single independent chance roll decides whether it drops. This
//! is deliberately not the spawn tables' first-match scan; the two
//! policies must stay separate.

use rand::Rng;

use crate::catalog::{Catalog, Item, LootEntry};
use crate::error::ContentError;

/// Sample at most one item from a loot table. `find_bonus` is the
/// player's accumulated find chance, added to the chosen entry's drop
/// chance at read time.
pub fn sample_loot(
    catalog: &Catalog,
    table: &[LootEntry],
    find_bonus: f32,
    rng: &mut impl Rng,
) -> Result<Option<Item>, ContentError> {
    if table.is_empty() {
        return Ok(None);
    }
    // Entry selection and the success roll are independent events.
    let entry = &table[rng.gen_range(0..table.len())];
    let chance = (entry.chance + find_bonus).clamp(0.0, 1.0);
    if rng.gen::<f32>() < chance {
        Ok(Some(catalog.instantiate_item(&entry.item_id, entry.quantity)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table(entries: &[(&str, f32)]) -> Vec<LootEntry> {
        entries
            .iter()
            .map(|(id, chance)| LootEntry {
                item_id: id.to_string(),
                chance: *chance,
                quantity: 1,
            })
            .collect()
    }

    #[test]
    fn test_empty_table_yields_nothing() {
        let catalog = Catalog::default_content();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_loot(&catalog, &[], 0.0, &mut rng).unwrap().is_none());
    }

    #[test]
    fn test_selection_is_uniform_over_entries() {
        // Two certain entries: with many rolls both must appear, roughly
        // evenly. A sequential first-match scan would only ever yield the
        // first.
        let catalog = Catalog::default_content();
        let table = table(&[("worn_sword", 1.0), ("leather_cap", 1.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut swords = 0;
        let mut caps = 0;
        for _ in 0..400 {
            match sample_loot(&catalog, &table, 0.0, &mut rng).unwrap() {
                Some(item) if item.id() == "worn_sword" => swords += 1,
                Some(item) if item.id() == "leather_cap" => caps += 1,
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert!(swords > 120, "swords only drawn {swords} times");
        assert!(caps > 120, "caps only drawn {caps} times");
    }

    #[test]
    fn test_chance_roll_is_independent_of_selection() {
        // A zero-chance entry can be selected, in which case nothing
        // drops even though the other entry is certain.
        let catalog = Catalog::default_content();
        let table = table(&[("worn_sword", 0.0), ("leather_cap", 1.0)]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut misses = 0;
        for _ in 0..400 {
            if sample_loot(&catalog, &table, 0.0, &mut rng).unwrap().is_none() {
                misses += 1;
            }
        }
        assert!(misses > 120, "zero-chance entry never selected ({misses} misses)");
    }

    #[test]
    fn test_find_bonus_raises_drop_chance() {
        let catalog = Catalog::default_content();
        let table = table(&[("worn_sword", 0.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        // Bonus of 1.0 makes the roll certain even on a zero-chance entry.
        assert!(sample_loot(&catalog, &table, 1.0, &mut rng).unwrap().is_some());
    }

    #[test]
    fn test_unknown_item_propagates() {
        let catalog = Catalog::default_content();
        let table = table(&[("gilded_crown", 1.0)]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_loot(&catalog, &table, 0.0, &mut rng).is_err());
    }
}
