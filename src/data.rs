/// Curated TMDB movie ids served by the catalog.
///
/// The browser UI renders exactly this list; ids that fail validation during
/// aggregation are dropped from the response rather than surfaced as errors.
pub const CURATED_MOVIE_IDS: &[u64] = &[
    860159, 762968, 20770, 1544, 1146591, 884139, 1067298, 1093974, 619154, 1019545, 1311657,
    1152092, 531122, 19994, 520172, 426613, 48650, 290098, 370663, 947891, 948549, 531428, 419743,
    1167366, 641, 9303, 641934, 957304, 258480, 1633, 540, 9382, 568467, 741011, 597219, 273153,
    766798, 475888, 1272890, 506281, 606625, 434714, 294, 535356, 972435, 37636, 971699, 73939,
    19316, 330544, 821390, 19344, 653572, 352498, 687156,
];
