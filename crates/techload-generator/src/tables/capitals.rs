//! State capitals used for customer locations.

use super::Capital;

/// All 50 state capitals, in draw order.
pub const STATE_CAPITALS: [Capital; 50] = [
    Capital { state: "AL", city: "Montgomery", lat: 32.377716, long: -86.300568 },
    Capital { state: "AK", city: "Juneau", lat: 58.301598, long: -134.420212 },
    Capital { state: "AZ", city: "Phoenix", lat: 33.448143, long: -112.096962 },
    Capital { state: "AR", city: "Little Rock", lat: 34.746613, long: -92.288986 },
    Capital { state: "CA", city: "Sacramento", lat: 38.576668, long: -121.493629 },
    Capital { state: "CO", city: "Denver", lat: 39.739227, long: -104.984856 },
    Capital { state: "CT", city: "Hartford", lat: 41.764046, long: -72.682198 },
    Capital { state: "DE", city: "Dover", lat: 39.157307, long: -75.519722 },
    Capital { state: "HI", city: "Honolulu", lat: 21.307442, long: -157.857376 },
    Capital { state: "FL", city: "Tallahassee", lat: 30.438118, long: -84.281296 },
    Capital { state: "GA", city: "Atlanta", lat: 33.749027, long: -84.388229 },
    Capital { state: "ID", city: "Boise", lat: 43.617775, long: -116.199722 },
    Capital { state: "IL", city: "Springfield", lat: 39.798363, long: -89.654961 },
    Capital { state: "IN", city: "Indianapolis", lat: 39.768623, long: -86.162643 },
    Capital { state: "IA", city: "Des Moines", lat: 41.591087, long: -93.603729 },
    Capital { state: "KS", city: "Topeka", lat: 39.048191, long: -95.677956 },
    Capital { state: "KY", city: "Frankfort", lat: 38.186722, long: -84.875374 },
    Capital { state: "LA", city: "Baton Rouge", lat: 30.457069, long: -91.187393 },
    Capital { state: "ME", city: "Augusta", lat: 44.307167, long: -69.781693 },
    Capital { state: "MD", city: "Annapolis", lat: 38.978764, long: -76.490936 },
    Capital { state: "MA", city: "Boston", lat: 42.358162, long: -71.063698 },
    Capital { state: "MI", city: "Lansing", lat: 42.733635, long: -84.555328 },
    Capital { state: "MN", city: "St. Paul", lat: 44.955097, long: -93.102211 },
    Capital { state: "MS", city: "Jackson", lat: 32.303848, long: -90.182106 },
    Capital { state: "MO", city: "Jefferson City", lat: 38.579201, long: -92.172935 },
    Capital { state: "MT", city: "Helena", lat: 46.585709, long: -112.018417 },
    Capital { state: "NE", city: "Lincoln", lat: 40.808075, long: -96.699654 },
    Capital { state: "NV", city: "Carson City", lat: 39.163914, long: -119.766121 },
    Capital { state: "NH", city: "Concord", lat: 43.206898, long: -71.537994 },
    Capital { state: "NJ", city: "Trenton", lat: 40.220596, long: -74.769913 },
    Capital { state: "NM", city: "Santa Fe", lat: 35.68224, long: -105.939728 },
    Capital { state: "NC", city: "Raleigh", lat: 35.78043, long: -78.639099 },
    Capital { state: "ND", city: "Bismarck", lat: 46.82085, long: -100.783318 },
    Capital { state: "NY", city: "Albany", lat: 42.652843, long: -73.757874 },
    Capital { state: "OH", city: "Columbus", lat: 39.961346, long: -82.999069 },
    Capital { state: "OK", city: "Oklahoma City", lat: 35.492207, long: -97.503342 },
    Capital { state: "OR", city: "Salem", lat: 44.938461, long: -123.030403 },
    Capital { state: "PA", city: "Harrisburg", lat: 40.264378, long: -76.883598 },
    Capital { state: "RI", city: "Providence", lat: 41.830914, long: -71.414963 },
    Capital { state: "SC", city: "Columbia", lat: 34.000343, long: -81.033211 },
    Capital { state: "SD", city: "Pierre", lat: 44.367031, long: -100.346405 },
    Capital { state: "TN", city: "Nashville", lat: 36.16581, long: -86.784241 },
    Capital { state: "TX", city: "Austin", lat: 30.27467, long: -97.740349 },
    Capital { state: "UT", city: "Salt Lake City", lat: 40.777477, long: -111.888237 },
    Capital { state: "VT", city: "Montpelier", lat: 44.262436, long: -72.580536 },
    Capital { state: "VA", city: "Richmond", lat: 37.538857, long: -77.43364 },
    Capital { state: "WA", city: "Olympia", lat: 47.035805, long: -122.905014 },
    Capital { state: "WV", city: "Charleston", lat: 38.336246, long: -81.612328 },
    Capital { state: "WI", city: "Madison", lat: 43.074684, long: -89.384445 },
    Capital { state: "WY", city: "Cheyenne", lat: 41.140259, long: -104.820236 },
];
