//! Checkbox-set sections: an array of selected option keys maps to
//! human-readable sentences through a fixed lookup table. Zero selections
//! render a single placeholder line rather than an empty block.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

pub struct OptionSection {
    pub lookup: &'static [(&'static str, &'static str)],
    pub none_selected: &'static str,
}

pub static WELFARE_ARRANGEMENTS: OptionSection = OptionSection {
    lookup: &[
        ("toilets", "Toilets are provided on site."),
        ("washing", "Hot and cold washing facilities are provided."),
        ("drinking_water", "Drinking water is available."),
        ("rest_area", "A heated rest area with seating is provided."),
        ("drying_room", "A drying room for wet clothing is provided."),
        ("canteen", "Canteen facilities are available."),
        ("lockers", "Lockers are provided for personal belongings."),
    ],
    none_selected: "No welfare arrangements selected.",
};

pub static HIGH_RISK_WORK: OptionSection = OptionSection {
    lookup: &[
        ("falls_from_height", "Work involving a risk of falling more than 2 metres."),
        ("buried_services", "Work near buried or overhead services."),
        ("asbestos", "Work involving exposure to asbestos-containing materials."),
        ("confined_spaces", "Work in confined spaces."),
        ("demolition", "Demolition or structural alteration work."),
        ("excavations", "Excavations deeper than 1.2 metres."),
        ("work_near_water", "Work over or near water with a risk of drowning."),
        ("temporary_works", "Temporary works requiring design input."),
        ("hot_works", "Hot works requiring a permit."),
        ("lifting_operations", "Lifting operations using cranes or hoists."),
    ],
    none_selected: "No high-risk construction work selected.",
};

pub static NOTIFIABLE_WORK: OptionSection = OptionSection {
    lookup: &[
        (
            "over_30_days",
            "The project is expected to last longer than 30 working days with more \
             than 20 workers on site simultaneously.",
        ),
        ("over_500_person_days", "The project is expected to exceed 500 person days."),
        ("licensed_asbestos", "Licensed asbestos removal work will be carried out."),
    ],
    none_selected: "No notifiable work selected.",
};

pub static HAZARD_IDENTIFICATION: OptionSection = OptionSection {
    lookup: &[
        ("working_at_height", "Working at height."),
        ("manual_handling", "Manual handling of heavy or awkward loads."),
        ("noise", "Exposure to high noise levels."),
        ("vibration", "Hand-arm vibration from power tools."),
        ("dust_silica", "Dust and respirable crystalline silica."),
        ("slips_trips", "Slips, trips and uneven ground."),
        ("moving_plant", "Moving plant and site vehicles."),
        ("electricity", "Contact with live electrical systems."),
        ("fire", "Fire during construction."),
        ("adverse_weather", "Adverse weather conditions."),
    ],
    none_selected: "No hazards selected.",
};

static LOOKUPS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut all = HashMap::new();
        for (key, section) in [
            ("welfare_arrangements", &WELFARE_ARRANGEMENTS),
            ("high_risk_work", &HIGH_RISK_WORK),
            ("notifiable_work", &NOTIFIABLE_WORK),
            ("hazard_identification", &HAZARD_IDENTIFICATION),
        ] {
            all.insert(key, section.lookup.iter().copied().collect());
        }
        all
    });

pub fn section_for(key: &str) -> Option<&'static OptionSection> {
    match key {
        "welfare_arrangements" => Some(&WELFARE_ARRANGEMENTS),
        "high_risk_work" => Some(&HIGH_RISK_WORK),
        "notifiable_work" => Some(&NOTIFIABLE_WORK),
        "hazard_identification" => Some(&HAZARD_IDENTIFICATION),
        _ => None,
    }
}

/// Pull the selected option keys out of whichever legacy shape the data was
/// stored in: a plain array, `{"selected": [...]}`, or a key->bool map.
fn selected_keys(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
        ),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("selected") {
                return Some(
                    items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::to_string)
                        .collect(),
                );
            }
            if !map.is_empty() && map.values().all(|v| v.is_boolean()) {
                return Some(
                    map.iter()
                        .filter(|(_, v)| v.as_bool() == Some(true))
                        .map(|(k, _)| k.clone())
                        .collect(),
                );
            }
            None
        }
        _ => None,
    }
}

/// Format a checkbox-set section. `None` only when the stored value is not a
/// recognizable selection shape at all (absent section); a present-but-empty
/// selection yields the placeholder line.
pub fn format_options(section_key: &str, value: &Value) -> Option<String> {
    let section = section_for(section_key)?;
    let keys = selected_keys(value)?;
    if keys.is_empty() {
        return Some(section.none_selected.to_string());
    }

    let lookup = LOOKUPS.get(section_key)?;
    let sentences: Vec<&str> = keys
        .iter()
        .filter_map(|k| lookup.get(k.as_str()).copied())
        .collect();
    if sentences.is_empty() {
        Some(section.none_selected.to_string())
    } else {
        Some(sentences.join("\n"))
    }
}
