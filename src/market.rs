//! Static market price table with deterministic trend commentary.
//!
//! Stands in for a live mandi price feed; the table is sample data and every
//! insight says so. Lookups are case-insensitive and tolerate partial names
//! ("tomatoes" finds "Tomato").

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    Volatile,
    Seasonal,
}

impl Trend {
    /// Deterministic advice line shown under "Recommendations".
    pub fn explanation(&self) -> &'static str {
        match self {
            Trend::Rising => "📈 Prices are rising. Good time to plan harvesting and selling.",
            Trend::Falling => "📉 Prices are falling. Consider waiting if storage is possible.",
            Trend::Stable => "➡️ Prices are stable. Normal market conditions.",
            Trend::Volatile => "📊 Prices are volatile. Monitor closely before selling.",
            Trend::Seasonal => "🍃 Seasonal variation. Prices depend on harvest time.",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Rising => "Rising",
            Trend::Falling => "Falling",
            Trend::Stable => "Stable",
            Trend::Volatile => "Volatile",
            Trend::Seasonal => "Seasonal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CropPrice {
    pub name: &'static str,
    pub price: u32,
    pub unit: &'static str,
    pub trend: Trend,
}

pub const MARKET_DATA: &[CropPrice] = &[
    CropPrice { name: "Rice", price: 2800, unit: "₹/quintal", trend: Trend::Stable },
    CropPrice { name: "Wheat", price: 2400, unit: "₹/quintal", trend: Trend::Rising },
    CropPrice { name: "Tomato", price: 35, unit: "₹/kg", trend: Trend::Volatile },
    CropPrice { name: "Onion", price: 25, unit: "₹/kg", trend: Trend::Stable },
    CropPrice { name: "Potato", price: 18, unit: "₹/kg", trend: Trend::Falling },
    CropPrice { name: "Cotton", price: 7500, unit: "₹/quintal", trend: Trend::Rising },
    CropPrice { name: "Sugarcane", price: 310, unit: "₹/quintal", trend: Trend::Stable },
    CropPrice { name: "Chickpea", price: 5200, unit: "₹/quintal", trend: Trend::Rising },
    CropPrice { name: "Groundnut", price: 6800, unit: "₹/quintal", trend: Trend::Stable },
    CropPrice { name: "Mustard", price: 5500, unit: "₹/quintal", trend: Trend::Rising },
    CropPrice { name: "Soybean", price: 4200, unit: "₹/quintal", trend: Trend::Falling },
    CropPrice { name: "Turmeric", price: 150, unit: "₹/kg", trend: Trend::Rising },
    CropPrice { name: "Chili", price: 180, unit: "₹/kg", trend: Trend::Volatile },
    CropPrice { name: "Mango", price: 45, unit: "₹/kg", trend: Trend::Seasonal },
    CropPrice { name: "Banana", price: 25, unit: "₹/kg", trend: Trend::Stable },
];

/// Look up a crop price, exact name first, then partial match in either
/// direction.
pub fn find_price(crop: &str) -> Option<&'static CropPrice> {
    let query = crop.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    MARKET_DATA
        .iter()
        .find(|entry| entry.name.to_lowercase() == query)
        .or_else(|| {
            MARKET_DATA.iter().find(|entry| {
                let name = entry.name.to_lowercase();
                query.contains(&name) || name.contains(&query)
            })
        })
}

/// Full insight block for one crop, ready to send with HTML parse mode.
///
/// Unknown crops still get the block, with "N/A" price and a pointer to the
/// local mandi.
pub fn market_insights(crop: &str) -> String {
    let entry = find_price(crop);

    let price_line = match entry {
        Some(p) => format!("{} {}", p.price, p.unit),
        None => "N/A ₹/quintal".to_string(),
    };
    let trend_line = match entry {
        Some(p) => p.trend.to_string(),
        None => "Unknown".to_string(),
    };
    let recommendation = match entry {
        Some(p) => p.trend.explanation(),
        None => "Price trend data not available",
    };

    format!(
        "<b>Current Market Price for {crop}:</b>\n\
         - Price: {price_line}\n\
         - Trend: {trend_line}\n\n\
         <b>Recommendations:</b>\n\
         {recommendation}\n\n\
         <b>Tips:</b>\n\
         - Monitor prices regularly at your local mandi or eNAM portal\n\
         - Consider selling when prices are favorable\n\
         - Explore direct farmer-consumer markets for better margins\n\
         - Check government MSP (Minimum Support Price) for applicable crops\n\n\
         <b>Note:</b> This is sample data. For accurate prices, visit:\n\
         - eNAM: https://www.enam.gov.in\n\
         - Local agricultural mandi\n\
         - State agricultural department websites"
    )
}

pub fn all_prices() -> &'static [CropPrice] {
    MARKET_DATA
}

/// Plain listing of the whole table for the /prices command.
pub fn format_price_table() -> String {
    let mut text = String::from("<b>Market Prices:</b>\n");
    for entry in MARKET_DATA {
        text.push_str(&format!(
            "{}: {} {} ({})\n",
            entry.name, entry.price, entry.unit, entry.trend
        ));
    }
    text.push_str("\nSample data. Check your local mandi or eNAM for live rates.");
    text
}
