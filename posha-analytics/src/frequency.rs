//! Frequency tables over outfit tags.

use posha_core::constants::TOP_COLORS_LIMIT;
use posha_core::models::{FrequencyEntry, OutfitRecord, TagTally};

/// Top colors by occurrence, highest first, at most five entries.
///
/// Every occurrence counts, including repeats inside one outfit. Ties keep
/// the order in which colors were first seen.
pub fn color_frequency(records: &[OutfitRecord]) -> Vec<FrequencyEntry> {
    let mut ranked = tally_lists(records, |r| &r.colors).ranked();
    ranked.truncate(TOP_COLORS_LIMIT);
    ranked
}

/// Every fabric by occurrence, highest first. Not truncated.
pub fn fabric_frequency(records: &[OutfitRecord]) -> Vec<FrequencyEntry> {
    tally_lists(records, |r| &r.fabrics).ranked()
}

/// Count of outfits per occasion. Untagged outfits are skipped.
pub fn occasion_patterns(records: &[OutfitRecord]) -> TagTally {
    records.iter().filter_map(OutfitRecord::occasion_tag).collect()
}

/// Count of outfits per weather condition. Untagged outfits are skipped.
pub fn weather_patterns(records: &[OutfitRecord]) -> TagTally {
    records.iter().filter_map(OutfitRecord::weather_tag).collect()
}

/// True when there is anything to show in the pattern view.
pub fn has_pattern_data(occasions: &TagTally, weather: &TagTally) -> bool {
    !occasions.is_empty() || !weather.is_empty()
}

fn tally_lists<F>(records: &[OutfitRecord], field: F) -> TagTally
where
    F: Fn(&OutfitRecord) -> &Vec<String>,
{
    records
        .iter()
        .flat_map(|r| field(r).iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn outfit(colors: &[&str], fabrics: &[&str]) -> OutfitRecord {
        OutfitRecord {
            id: "t".into(),
            timestamp: Utc::now(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            fabrics: fabrics.iter().map(|s| s.to_string()).collect(),
            occasion: None,
            weather: None,
        }
    }

    #[test]
    fn repeats_within_one_record_count_individually() {
        let ranked = color_frequency(&[outfit(&["Blue", "Blue", "Red"], &[])]);
        assert_eq!(
            ranked,
            vec![FrequencyEntry::new("Blue", 2), FrequencyEntry::new("Red", 1)]
        );
    }

    #[test]
    fn color_ranking_truncates_to_five() {
        let records = vec![outfit(&["A", "B", "C", "D", "E", "F", "G"], &[])];
        let ranked = color_frequency(&records);
        assert_eq!(ranked.len(), 5);
        // All tied: first-seen order survives.
        let names: Vec<_> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn fabric_ranking_is_not_truncated() {
        let records = vec![outfit(&[], &["Cotton", "Linen", "Silk", "Wool", "Denim", "Leather"])];
        assert_eq!(fabric_frequency(&records).len(), 6);
    }
}
