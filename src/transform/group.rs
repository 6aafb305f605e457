//! Grouping of items by board material and thickness.

use crate::model::Item;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key shared by all items destined for one output file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub material: String,
    pub thickness: u32,
}

impl GroupKey {
    /// Key of a single item.
    pub fn of(item: &Item) -> Self {
        Self {
            material: item.material().to_string(),
            thickness: item.thickness(),
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}mm", self.material, self.thickness)
    }
}

/// Items sharing one [`GroupKey`].
#[derive(Debug, Clone)]
pub struct Group {
    pub key: GroupKey,
    pub items: Vec<Item>,
}

impl Group {
    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition items by `(material, thickness)`.
///
/// Every item lands in exactly one group. Groups come out in ascending key
/// order and keep the input order of their items.
pub fn group_items(items: Vec<Item>) -> Vec<Group> {
    let mut groups: BTreeMap<GroupKey, Vec<Item>> = BTreeMap::new();
    for item in items {
        groups.entry(GroupKey::of(&item)).or_default().push(item);
    }

    groups
        .into_iter()
        .map(|(key, items)| {
            tracing::debug!("Group {}: {} items", key, items.len());
            Group { key, items }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_item;
    use pretty_assertions::assert_eq;

    fn item(position: u32, material: &str) -> Item {
        parse_item(&format!(
            "\t\t{position}\tK.Part{position}\t1\t{material}\t500\t300\tA\t\t\t\t"
        ))
        .unwrap()
    }

    #[test]
    fn test_group_items_by_material_and_thickness() {
        let items = vec![
            item(1, "Oak_18"),
            item(2, "Chipboard_16"),
            item(3, "Oak_18"),
            item(4, "Oak_22"),
            item(5, "Chipboard_16"),
        ];
        let groups = group_items(items);

        let summary: Vec<_> = groups
            .iter()
            .map(|g| {
                (
                    g.key.to_string(),
                    g.items.iter().map(Item::position).collect::<Vec<_>>(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Chipboard 16mm".to_string(), vec![2, 5]),
                ("Oak 18mm".to_string(), vec![1, 3]),
                ("Oak 22mm".to_string(), vec![4]),
            ]
        );
    }

    #[test]
    fn test_group_items_every_item_exactly_once() {
        let materials = ["A_1", "B_2", "A_1", "A_2", "C_3", "B_2", "A_1"];
        let items: Vec<_> = materials
            .iter()
            .enumerate()
            .map(|(i, m)| item(i as u32 + 1, m))
            .collect();
        let groups = group_items(items.clone());

        let mut positions: Vec<u32> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(Item::position))
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, (1..=materials.len() as u32).collect::<Vec<_>>());

        for original in &items {
            let key = GroupKey::of(original);
            let group = groups.iter().find(|g| g.key == key).unwrap();
            assert!(group.items.contains(original));
            assert_eq!(groups.iter().filter(|g| g.key == key).count(), 1);
        }
    }

    #[test]
    fn test_group_items_never_empty() {
        let groups = group_items(vec![item(1, "Oak_18"), item(2, "Oak_19")]);
        assert!(groups.iter().all(|g| !g.is_empty()));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_items_empty_input() {
        assert!(group_items(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_key_structural_equality() {
        let a = GroupKey::of(&item(1, "Oak_18"));
        let b = GroupKey::of(&item(9, "Oak_18"));
        assert_eq!(a, b);
        assert_ne!(a, GroupKey::of(&item(1, "oak_18")));
    }
}
