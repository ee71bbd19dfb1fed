use posha_core::models::{FabricInsight, FrequencyEntry};

const BREATHABLE: &[&str] = &["Cotton", "Linen"];
const LUSTROUS: &[&str] = &["Silk", "Satin"];

/// Read a tendency off the most-worn fabric. `None` when nothing is ranked.
pub fn fabric_insight(ranked_fabrics: &[FrequencyEntry]) -> Option<FabricInsight> {
    let top = ranked_fabrics.first()?;
    let tendency = if BREATHABLE.contains(&top.name.as_str()) {
        "breathability and comfort"
    } else if LUSTROUS.contains(&top.name.as_str()) {
        "elegance and texture"
    } else {
        "versatile, everyday wear"
    };
    Some(FabricInsight {
        top_fabric: top.name.clone(),
        tendency: tendency.to_string(),
    })
}
