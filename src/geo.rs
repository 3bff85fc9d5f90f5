//! Country and region catalogue backing the picker dialogs

/// A country and its first-level administrative regions
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub name: &'static str,
    pub regions: &'static [&'static str],
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "Australia",
        regions: &[
            "Australian Capital Territory",
            "New South Wales",
            "Northern Territory",
            "Queensland",
            "South Australia",
            "Tasmania",
            "Victoria",
            "Western Australia",
        ],
    },
    Country {
        name: "Bangladesh",
        regions: &[
            "Barishal",
            "Chattogram",
            "Dhaka",
            "Khulna",
            "Mymensingh",
            "Rajshahi",
            "Rangpur",
            "Sylhet",
        ],
    },
    Country {
        name: "Canada",
        regions: &[
            "Alberta",
            "British Columbia",
            "Manitoba",
            "New Brunswick",
            "Newfoundland and Labrador",
            "Northwest Territories",
            "Nova Scotia",
            "Nunavut",
            "Ontario",
            "Prince Edward Island",
            "Quebec",
            "Saskatchewan",
            "Yukon",
        ],
    },
    Country {
        name: "Germany",
        regions: &[
            "Baden-Württemberg",
            "Bavaria",
            "Berlin",
            "Brandenburg",
            "Bremen",
            "Hamburg",
            "Hesse",
            "Lower Saxony",
            "Mecklenburg-Vorpommern",
            "North Rhine-Westphalia",
            "Rhineland-Palatinate",
            "Saarland",
            "Saxony",
            "Saxony-Anhalt",
            "Schleswig-Holstein",
            "Thuringia",
        ],
    },
    Country {
        name: "India",
        regions: &[
            "Andaman and Nicobar Islands",
            "Andhra Pradesh",
            "Arunachal Pradesh",
            "Assam",
            "Bihar",
            "Chandigarh",
            "Chhattisgarh",
            "Dadra and Nagar Haveli and Daman and Diu",
            "Delhi",
            "Goa",
            "Gujarat",
            "Haryana",
            "Himachal Pradesh",
            "Jammu and Kashmir",
            "Jharkhand",
            "Karnataka",
            "Kerala",
            "Ladakh",
            "Lakshadweep",
            "Madhya Pradesh",
            "Maharashtra",
            "Manipur",
            "Meghalaya",
            "Mizoram",
            "Nagaland",
            "Odisha",
            "Puducherry",
            "Punjab",
            "Rajasthan",
            "Sikkim",
            "Tamil Nadu",
            "Telangana",
            "Tripura",
            "Uttar Pradesh",
            "Uttarakhand",
            "West Bengal",
        ],
    },
    Country {
        name: "Nepal",
        regions: &[
            "Bagmati",
            "Gandaki",
            "Karnali",
            "Koshi",
            "Lumbini",
            "Madhesh",
            "Sudurpashchim",
        ],
    },
    Country {
        name: "Sri Lanka",
        regions: &[
            "Central",
            "Eastern",
            "North Central",
            "North Western",
            "Northern",
            "Sabaragamuwa",
            "Southern",
            "Uva",
            "Western",
        ],
    },
    Country {
        name: "United Kingdom",
        regions: &["England", "Northern Ireland", "Scotland", "Wales"],
    },
    Country {
        name: "United States",
        regions: &[
            "Alabama",
            "Alaska",
            "Arizona",
            "Arkansas",
            "California",
            "Colorado",
            "Connecticut",
            "Delaware",
            "District of Columbia",
            "Florida",
            "Georgia",
            "Hawaii",
            "Idaho",
            "Illinois",
            "Indiana",
            "Iowa",
            "Kansas",
            "Kentucky",
            "Louisiana",
            "Maine",
            "Maryland",
            "Massachusetts",
            "Michigan",
            "Minnesota",
            "Mississippi",
            "Missouri",
            "Montana",
            "Nebraska",
            "Nevada",
            "New Hampshire",
            "New Jersey",
            "New Mexico",
            "New York",
            "North Carolina",
            "North Dakota",
            "Ohio",
            "Oklahoma",
            "Oregon",
            "Pennsylvania",
            "Rhode Island",
            "South Carolina",
            "South Dakota",
            "Tennessee",
            "Texas",
            "Utah",
            "Vermont",
            "Virginia",
            "Washington",
            "West Virginia",
            "Wisconsin",
            "Wyoming",
        ],
    },
];

pub fn country_names() -> Vec<&'static str> {
    COUNTRIES.iter().map(|c| c.name).collect()
}

/// Regions of the named country; empty for an unknown or empty name
pub fn regions_for(country: &str) -> &'static [&'static str] {
    COUNTRIES
        .iter()
        .find(|c| c.name == country)
        .map(|c| c.regions)
        .unwrap_or(&[])
}

/// Case-insensitive substring filter
pub fn filter_options(options: &[&'static str], query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    options
        .iter()
        .filter(|o| query.is_empty() || o.to_lowercase().contains(&query))
        .copied()
        .collect()
}
