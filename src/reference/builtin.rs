//! Built-in Paris 2024 reference lists
//!
//! Countries that won at least one medal and the sports in which medals were
//! awarded, spelled exactly as they appear on the medal table listing.

pub const COUNTRIES: &[&str] = &[
    "Albania",
    "Algeria",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahrain",
    "Belgium",
    "Botswana",
    "Brazil",
    "Bulgaria",
    "Cabo Verde",
    "Canada",
    "Chile",
    "Colombia",
    "Côte d'Ivoire",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Czechia",
    "Democratic People's Republic of Korea",
    "Denmark",
    "Dominica",
    "Dominican Republic",
    "Ecuador",
    "Egypt",
    "Ethiopia",
    "Fiji",
    "France",
    "Georgia",
    "Germany",
    "Great Britain",
    "Greece",
    "Grenada",
    "Guatemala",
    "Hong Kong, China",
    "Hungary",
    "India",
    "Indonesia",
    "Ireland",
    "Islamic Republic of Iran",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kosovo",
    "Kyrgyzstan",
    "Lithuania",
    "Malaysia",
    "Mexico",
    "Mongolia",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Pakistan",
    "Panama",
    "People's Republic of China",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Refugee Olympic Team",
    "Republic of Korea",
    "Republic of Moldova",
    "Romania",
    "Saint Lucia",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "Spain",
    "Sweden",
    "Switzerland",
    "Tajikistan",
    "Thailand",
    "Chinese Taipei",
    "Tunisia",
    "Türkiye",
    "Uganda",
    "Ukraine",
    "United States of America",
    "Uzbekistan",
    "Zambia",
];

pub const SPORTS: &[&str] = &[
    "Artistic Gymnastics",
    "Athletics",
    "Badminton",
    "Breaking",
    "Diving",
    "Equestrian",
    "Fencing",
    "Golf",
    "Judo",
    "Modern Pentathlon",
    "Sailing",
    "Skateboarding",
    "Sport Climbing",
    "Swimming",
    "Table Tennis",
    "Wrestling",
    "Basketball",
    "Boxing",
    "Canoe Slalom",
    "Canoe Sprint",
    "Cycling BMX Freestyle",
    "Cycling BMX Racing",
    "Cycling Road",
    "Cycling Track",
    "Marathon Swimming",
    "Rowing",
    "Shooting",
    "Surfing",
    "Tennis",
    "Water Polo",
    "3x3 Basketball",
    "Archery",
    "Cycling Mountain Bike",
    "Football",
    "Handball",
    "Rugby Sevens",
    "Taekwondo",
    "Triathlon",
    "Volleyball",
    "Artistic Swimming",
    "Hockey",
    "Trampoline Gymnastics",
    "Weightlifting",
    "Rhythmic Gymnastics",
    "Beach Volleyball",
];
