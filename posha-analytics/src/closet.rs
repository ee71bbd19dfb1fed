use posha_core::models::{ClosetItem, ClosetSummary, TagTally};

/// Composition of the closet: per-category counts and the fabrics on hand.
pub fn closet_summary(items: &[ClosetItem]) -> ClosetSummary {
    let by_category: TagTally = items.iter().filter_map(|i| i.category.as_deref()).collect();

    let mut fabrics: Vec<String> = Vec::new();
    for fabric in items.iter().filter_map(|i| i.fabric.as_deref()) {
        if !fabrics.iter().any(|f| f == fabric) {
            fabrics.push(fabric.to_string());
        }
    }

    ClosetSummary {
        total_items: items.len(),
        legacy_items: items.iter().filter(|i| i.is_legacy()).count(),
        by_category,
        fabrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Option<&str>, fabric: Option<&str>) -> ClosetItem {
        ClosetItem {
            category: category.map(String::from),
            fabric: fabric.map(String::from),
            ..ClosetItem::named(id.into(), format!("item {id}"))
        }
    }

    #[test]
    fn counts_categories_and_dedups_fabrics() {
        let items = vec![
            item("1", Some("Tops"), Some("Cotton")),
            item("2", Some("Bottoms"), Some("Denim")),
            item("3", Some("Tops"), Some("Cotton")),
            item("legacy:Scarf", None, None),
        ];
        let summary = closet_summary(&items);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.legacy_items, 1);
        assert_eq!(summary.by_category.get("Tops"), Some(2));
        assert_eq!(summary.by_category.total(), 3);
        assert_eq!(summary.fabrics, vec!["Cotton".to_string(), "Denim".to_string()]);
    }
}
