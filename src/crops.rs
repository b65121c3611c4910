//! Crop and region catalogs used to build selection keyboards.
//!
//! The lists match the major Indian crop groups and agricultural states the
//! assistant advises on. Keyboards show these verbatim, so keep the spelling
//! stable.

pub const CEREALS: &[&str] = &["Rice", "Wheat", "Maize", "Bajra", "Jowar", "Ragi"];
pub const PULSES: &[&str] = &["Chickpea", "Pigeon Pea", "Lentils", "Moong", "Urad", "Black Gram"];
pub const OILSEEDS: &[&str] = &["Groundnut", "Mustard", "Soybean", "Sunflower", "Sesame"];
pub const CASH_CROPS: &[&str] = &["Cotton", "Sugarcane", "Jute", "Tobacco"];
pub const VEGETABLES: &[&str] = &[
    "Tomato",
    "Onion",
    "Potato",
    "Cabbage",
    "Cauliflower",
    "Brinjal",
    "Okra",
];
pub const FRUITS: &[&str] = &["Mango", "Banana", "Citrus", "Grapes", "Pomegranate", "Guava"];
pub const SPICES: &[&str] = &[
    "Turmeric",
    "Chili",
    "Coriander",
    "Cumin",
    "Cardamom",
    "Black Pepper",
];

pub const INDIAN_STATES: &[&str] = &[
    "Punjab",
    "Haryana",
    "Uttar Pradesh",
    "Bihar",
    "West Bengal",
    "Maharashtra",
    "Gujarat",
    "Rajasthan",
    "Madhya Pradesh",
    "Karnataka",
    "Andhra Pradesh",
    "Tamil Nadu",
    "Kerala",
    "Odisha",
    "Assam",
    "Jharkhand",
    "Chhattisgarh",
    "Himachal Pradesh",
    "Uttarakhand",
];

/// Soil types offered on the diversification flow.
pub const SOIL_TYPES: &[&str] = &[
    "Loamy",
    "Clayey",
    "Sandy",
    "Red Soil",
    "Black Soil",
    "Alluvial",
    "Other",
];

/// Every crop the assistant knows, grouped order preserved.
pub fn all_crops() -> Vec<&'static str> {
    CEREALS
        .iter()
        .chain(PULSES)
        .chain(OILSEEDS)
        .chain(CASH_CROPS)
        .chain(VEGETABLES)
        .chain(FRUITS)
        .chain(SPICES)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_crops_concatenates_every_group() {
        let crops = all_crops();
        let expected = CEREALS.len()
            + PULSES.len()
            + OILSEEDS.len()
            + CASH_CROPS.len()
            + VEGETABLES.len()
            + FRUITS.len()
            + SPICES.len();
        assert_eq!(crops.len(), expected);
        assert_eq!(crops.first(), Some(&"Rice"));
        assert!(crops.contains(&"Tomato"));
        assert!(crops.contains(&"Black Pepper"));
    }

    #[test]
    fn all_crops_has_no_duplicates() {
        let crops = all_crops();
        let unique: std::collections::HashSet<_> = crops.iter().collect();
        assert_eq!(unique.len(), crops.len());
    }
}
