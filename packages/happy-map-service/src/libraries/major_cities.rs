/// A major world city used to weight baseline kindness points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub population: f64, // millions
}

const fn city(name: &'static str, lat: f64, lon: f64, population: f64) -> City {
    City {
        name,
        lat,
        lon,
        population,
    }
}

/// ~60 major world cities with population in millions for density weighting
pub const MAJOR_CITIES: &[City] = &[
    // Top 15 by population
    city("Tokyo", 35.6762, 139.6503, 37.4),
    city("Delhi", 28.7041, 77.1025, 32.9),
    city("Shanghai", 31.2304, 121.4737, 28.5),
    city("Sao Paulo", -23.5505, -46.6333, 22.4),
    city("Mexico City", 19.4326, -99.1332, 21.8),
    city("Cairo", 30.0444, 31.2357, 21.3),
    city("Mumbai", 19.0760, 72.8777, 21.0),
    city("Beijing", 39.9042, 116.4074, 20.9),
    city("Dhaka", 23.8103, 90.4125, 22.5),
    city("Osaka", 34.6937, 135.5023, 19.1),
    city("New York", 40.7128, -74.0060, 18.8),
    city("Karachi", 24.8607, 67.0011, 16.8),
    city("Buenos Aires", -34.6037, -58.3816, 15.4),
    city("Istanbul", 41.0082, 28.9784, 15.6),
    city("Lagos", 6.5244, 3.3792, 15.4),
    // Europe
    city("London", 51.5074, -0.1278, 9.5),
    city("Paris", 48.8566, 2.3522, 11.1),
    city("Berlin", 52.5200, 13.4050, 3.7),
    city("Madrid", 40.4168, -3.7038, 6.7),
    city("Rome", 41.9028, 12.4964, 4.3),
    city("Amsterdam", 52.3676, 4.9041, 1.2),
    city("Stockholm", 59.3293, 18.0686, 1.6),
    city("Vienna", 48.2082, 16.3738, 1.9),
    city("Warsaw", 52.2297, 21.0122, 1.8),
    city("Prague", 50.0755, 14.4378, 1.3),
    city("Brussels", 50.8503, 4.3517, 2.1),
    city("Dublin", 53.3498, -6.2603, 1.4),
    city("Lisbon", 38.7223, -9.1393, 2.9),
    city("Zurich", 47.3769, 8.5417, 1.4),
    city("Helsinki", 60.1699, 24.9384, 1.3),
    // Asia
    city("Seoul", 37.5665, 126.9780, 9.8),
    city("Bangkok", 13.7563, 100.5018, 10.7),
    city("Jakarta", -6.2088, 106.8456, 10.6),
    city("Manila", 14.5995, 120.9842, 14.2),
    city("Singapore", 1.3521, 103.8198, 5.9),
    city("Kuala Lumpur", 3.1390, 101.6869, 8.3),
    city("Taipei", 25.0330, 121.5654, 7.0),
    city("Hong Kong", 22.3193, 114.1694, 7.5),
    city("Hanoi", 21.0278, 105.8342, 8.1),
    city("Ho Chi Minh City", 10.8231, 106.6297, 9.3),
    // Americas
    city("Los Angeles", 34.0522, -118.2437, 12.5),
    city("Chicago", 41.8781, -87.6298, 8.9),
    city("Toronto", 43.6532, -79.3832, 6.3),
    city("Bogota", 4.7110, -74.0721, 11.2),
    city("Lima", -12.0464, -77.0428, 10.9),
    city("Santiago", -33.4489, -70.6693, 6.8),
    city("Montreal", 45.5017, -73.5673, 4.2),
    city("Vancouver", 49.2827, -123.1207, 2.6),
    city("San Francisco", 37.7749, -122.4194, 3.3),
    city("Miami", 25.7617, -80.1918, 6.2),
    // Africa, Middle East and Oceania
    city("Nairobi", -1.2921, 36.8219, 5.0),
    city("Johannesburg", -26.2041, 28.0473, 6.1),
    city("Dubai", 25.2048, 55.2708, 3.5),
    city("Riyadh", 24.7136, 46.6753, 7.7),
    city("Tel Aviv", 32.0853, 34.7818, 4.2),
    city("Casablanca", 33.5731, -7.5898, 3.8),
    city("Sydney", -33.8688, 151.2093, 5.3),
    city("Melbourne", -37.8136, 144.9631, 5.1),
    city("Auckland", -36.8485, 174.7633, 1.7),
    city("Cape Town", -33.9249, 18.4241, 4.6),
];
