//! Companion planting checks and guild suggestions.

use ahash::AHashSet;
use serde::Serialize;

use crate::catalog::{plant, PLANTS};
use crate::types::{ClimateType, Element, Plant, PlantLayer};

/// A related pair of placed plants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantPair<'c> {
    pub plant_a: &'c Plant,
    pub plant_b: &'c Plant,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanionCheck<'c> {
    pub good: Vec<PlantPair<'c>>,
    pub bad: Vec<PlantPair<'c>>,
}

/// Report companion and antagonist relationships among placed plants,
/// using the built-in plant catalog.
#[inline]
pub fn check_companions(elements: &[Element]) -> CompanionCheck<'static> {
    check_companions_with(PLANTS, elements)
}

/// Check placed plants against an arbitrary plant table.
///
/// Each unordered pair of species is reported at most once per list, however
/// many instances are placed.  Good and bad are judged separately, so a pair
/// may land in both.  Unknown plant ids are skipped.
pub fn check_companions_with<'c>(catalog: &'c [Plant], elements: &[Element]) -> CompanionCheck<'c> {
    let plants = elements.iter()
        .filter_map(Element::plant_id)
        .filter_map(|id| catalog.iter().find(|p| p.id == id))
        .collect::<Vec<_>>();

    let mut seen = AHashSet::new();
    let mut result = CompanionCheck::default();

    for (i, &a) in plants.iter().enumerate() {
        for &b in &plants[i + 1..] {
            let key = if a.id <= b.id { (a.id, b.id) } else { (b.id, a.id) };
            if !seen.insert(key) { continue }

            if a.likes(b.id) || b.likes(a.id) {
                result.good.push(PlantPair {
                    plant_a: a,
                    plant_b: b,
                    reason: format!("{} and {} grow well together", a.name, b.name),
                });
            }
            if a.dislikes(b.id) || b.dislikes(a.id) {
                result.bad.push(PlantPair {
                    plant_a: a,
                    plant_b: b,
                    reason: format!("{} and {} should be kept apart", a.name, b.name),
                });
            }
        }
    }

    result
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildLayer {
    pub layer: PlantLayer,
    pub suggestions: Vec<&'static Plant>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuildSuggestion {
    pub center_plant: &'static Plant,
    pub layers: Vec<GuildLayer>,
}

/// Most suggestions offered per layer.
const PER_LAYER: usize = 3;

/// Suggest a food-forest guild around `center_id`.
///
/// Every guild layer except the centre's own gets up to three plants, never an
/// antagonist of the centre, companions first and nitrogen fixers next.  With
/// `climates`, only plants growing in at least one of them are offered.
pub fn suggest_guild(center_id: &str, climates: Option<&[ClimateType]>) -> Option<GuildSuggestion> {
    let center = plant(center_id)?;

    let score = |p: &Plant| u8::from(center.likes(p.id)) * 2 + u8::from(p.nitrogen_fixer);

    let layers = PlantLayer::GUILD.into_iter()
        .filter(|&layer| layer != center.layer)
        .map(|layer| {
            let mut suggestions = PLANTS.iter()
                .filter(|p| p.id != center.id && p.layer == layer)
                .filter(|p| climates.is_none_or(|cs| cs.iter().any(|&c| p.grows_in(c))))
                .filter(|p| !center.dislikes(p.id))
                .collect::<Vec<_>>();
            suggestions.sort_by_key(|p| std::cmp::Reverse(score(*p)));
            suggestions.truncate(PER_LAYER);
            GuildLayer { layer, suggestions }
        })
        .collect();

    Some(GuildSuggestion { center_plant: center, layers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LayerType, Shape};
    use geo::Point;

    fn plants(ids: &[&str]) -> Vec<Element> {
        ids.iter()
            .map(|id| Element::new(format!("plant:{id}"), Shape::Point(Point::new(0.0, 0.0)), LayerType::Planting))
            .collect()
    }

    fn pairs<'c>(list: &[PlantPair<'c>]) -> Vec<(&'c str, &'c str)> {
        let mut out = list.iter()
            .map(|p| if p.plant_a.id <= p.plant_b.id { (p.plant_a.id, p.plant_b.id) } else { (p.plant_b.id, p.plant_a.id) })
            .collect::<Vec<_>>();
        out.sort();
        out
    }

    #[test]
    fn finds_friends_and_foes() {
        let check = check_companions(&plants(&["tomato", "basil", "fennel"]));
        assert_eq!(pairs(&check.good), vec![("basil", "tomato")]);
        assert_eq!(pairs(&check.bad), vec![("fennel", "tomato")]);
        assert_eq!(check.good[0].reason, "Tomato and Basil grow well together");
    }

    #[test]
    fn one_sided_relation_counts() {
        // strawberry lists bean, bean does not list strawberry
        let check = check_companions(&plants(&["bean", "strawberry"]));
        assert_eq!(pairs(&check.good), vec![("bean", "strawberry")]);
    }

    #[test]
    fn symmetric_and_deduplicated() {
        let forward = check_companions(&plants(&["tomato", "basil", "tomato", "basil", "potato"]));
        let backward = check_companions(&plants(&["potato", "basil", "tomato", "basil", "tomato"]));

        assert_eq!(pairs(&forward.good), pairs(&backward.good));
        assert_eq!(pairs(&forward.bad), pairs(&backward.bad));
        assert_eq!(pairs(&forward.good), vec![("basil", "tomato")]);
        assert_eq!(pairs(&forward.bad), vec![("potato", "tomato")]);
    }

    #[test]
    fn ignores_non_plants_and_unknown_ids() {
        let mut elements = plants(&["tomato", "dragonfruit"]);
        elements.push(Element::new("shed", Shape::Point(Point::new(0.0, 0.0)), LayerType::Infrastructure));
        let check = check_companions(&elements);
        assert!(check.good.is_empty() && check.bad.is_empty());
    }

    #[test]
    fn guild_prefers_companions_and_skips_own_layer() {
        let guild = suggest_guild("apple", None).unwrap();
        assert_eq!(guild.center_plant.id, "apple");
        assert!(guild.layers.iter().all(|l| l.layer != PlantLayer::Understory));
        assert_eq!(guild.layers.len(), 5);

        let herbs = guild.layers.iter().find(|l| l.layer == PlantLayer::Herbaceous).unwrap();
        let ids = herbs.suggestions.iter().map(|p| p.id).collect::<Vec<_>>();
        assert!(ids.len() <= 3);
        assert!(ids.contains(&"comfrey") && ids.contains(&"chives") && ids.contains(&"yarrow"));

        let roots = guild.layers.iter().find(|l| l.layer == PlantLayer::Root).unwrap();
        assert!(roots.suggestions.iter().all(|p| p.id != "potato"));
    }

    #[test]
    fn guild_respects_climate() {
        let guild = suggest_guild("mango", Some(&[ClimateType::Tropical][..])).unwrap();
        for layer in &guild.layers {
            assert!(layer.suggestions.iter().all(|p| p.grows_in(ClimateType::Tropical)));
        }
        assert!(suggest_guild("triffid", None).is_none());
    }

    #[test]
    fn pair_can_be_both_good_and_bad() {
        fn rival(id: &'static str, companions: &'static [&'static str], antagonists: &'static [&'static str]) -> Plant {
            Plant {
                id,
                name: id,
                layer: PlantLayer::Herbaceous,
                climates: &[],
                companions,
                antagonists,
                nitrogen_fixer: false,
                dynamic_accumulator: false,
            }
        }
        let catalog = [rival("mint", &["sage"], &[]), rival("sage", &[], &["mint"])];

        let check = check_companions_with(&catalog, &plants(&["mint", "sage", "tomato"]));
        assert_eq!(pairs(&check.good), vec![("mint", "sage")]);
        assert_eq!(pairs(&check.bad), vec![("mint", "sage")]);
    }
}
