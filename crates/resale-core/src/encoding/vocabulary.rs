//! Fixed vocabularies for the categorical fields
//!
//! Position in each table is the integer code the model was trained with.
//! Never reorder or insert in the middle: append only, and only together
//! with a retrained model and a bumped schema version.

/// Towns, codes 0..=25
pub const TOWNS: [&str; 26] = [
    "ANG MO KIO",
    "BEDOK",
    "BISHAN",
    "BUKIT BATOK",
    "BUKIT MERAH",
    "BUKIT PANJANG",
    "BUKIT TIMAH",
    "CENTRAL AREA",
    "CHOA CHU KANG",
    "CLEMENTI",
    "GEYLANG",
    "HOUGANG",
    "JURONG EAST",
    "JURONG WEST",
    "KALLANG/WHAMPOA",
    "MARINE PARADE",
    "PASIR RIS",
    "PUNGGOL",
    "QUEENSTOWN",
    "SEMBAWANG",
    "SENGKANG",
    "SERANGOON",
    "TAMPINES",
    "TOA PAYOH",
    "WOODLANDS",
    "YISHUN",
];

/// Flat types, codes 0..=6
pub const FLAT_TYPES: [&str; 7] = [
    "1 ROOM",
    "2 ROOM",
    "3 ROOM",
    "4 ROOM",
    "5 ROOM",
    "EXECUTIVE",
    "MULTI-GENERATION",
];

/// Flat models, codes 0..=20
pub const FLAT_MODELS: [&str; 21] = [
    "Improved",
    "New Generation",
    "Model A",
    "Standard",
    "Simplified",
    "Premium Apartment",
    "Maisonette",
    "Apartment",
    "Model A2",
    "Type S1",
    "Type S2",
    "Adjoined flat",
    "Terrace",
    "DBSS",
    "Model A-Maisonette",
    "Premium Maisonette",
    "Multi Generation",
    "Premium Apartment Loft",
    "Improved-Maisonette",
    "2-room",
    "3Gen",
];
