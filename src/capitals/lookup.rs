//! Region lookup over the built-in tables.
//!
//! Matching order: exact → prefix → substring, case-insensitive and
//! whitespace-trimmed. Within a tier the first region in table order wins.

use rand::seq::SliceRandom;
use rand::Rng;

use super::data;
use super::types::{CapitalMatch, CountryKey, Region};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Resolve a free-text region query within a country.
pub fn resolve(query: &str, country: CountryKey) -> Option<CapitalMatch> {
    let q = normalize(query);
    if q.is_empty() {
        return None;
    }

    let regions = data::regions(country);
    let normalized: Vec<(String, &Region)> = regions
        .iter()
        .map(|r| (normalize(r.name), r))
        .collect();

    // Exact match first
    if let Some((_, r)) = normalized.iter().find(|(n, _)| *n == q) {
        return Some(CapitalMatch::from(*r));
    }

    // Prefix match
    if let Some((_, r)) = normalized.iter().find(|(n, _)| n.starts_with(&q)) {
        return Some(CapitalMatch::from(*r));
    }

    // Substring match
    normalized
        .iter()
        .find(|(n, _)| n.contains(&q))
        .map(|(_, r)| CapitalMatch::from(*r))
}

/// Resolve with a raw country key string. Unsupported keys resolve to `None`.
pub fn resolve_key(query: &str, country: &str) -> Option<CapitalMatch> {
    resolve(query, CountryKey::parse(country)?)
}

/// Pick a uniformly random region from a country.
pub fn random_pick<R: Rng + ?Sized>(country: CountryKey, rng: &mut R) -> Option<CapitalMatch> {
    data::regions(country).choose(rng).map(CapitalMatch::from)
}

/// Random pick with a raw country key string, using the thread-local RNG.
pub fn random_pick_key(country: &str) -> Option<CapitalMatch> {
    random_pick(CountryKey::parse(country)?, &mut rand::thread_rng())
}

/// The curated fun fact for a capital, or a generic sentence when none exists.
pub fn fun_fact(capital: &str) -> String {
    match data::builtin_fact(capital) {
        Some(fact) => fact.to_string(),
        None => format!("{} is an interesting place to visit!", capital),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_exact() {
        let m = resolve("California", CountryKey::Us).unwrap();
        assert_eq!(m.region, "California");
        assert_eq!(m.capital, "Sacramento");
    }

    #[test]
    fn test_resolve_exact_every_region() {
        for country in CountryKey::ALL {
            for r in data::regions(country) {
                let m = resolve(r.name, country).unwrap();
                assert_eq!(m.region, r.name);
                assert_eq!(m.capital, r.capital);
            }
        }
    }

    #[test]
    fn test_resolve_case_and_whitespace() {
        let m = resolve("  KARNATAKA ", CountryKey::India).unwrap();
        assert_eq!(m.region, "Karnataka");
        assert_eq!(m.capital, "Bengaluru");
    }

    #[test]
    fn test_resolve_prefix() {
        let m = resolve("cali", CountryKey::Us).unwrap();
        assert_eq!(m.region, "California");
        assert_eq!(m.capital, "Sacramento");
    }

    #[test]
    fn test_resolve_exact_beats_prefix() {
        // "West Virginia" also contains "virginia".
        let m = resolve("virginia", CountryKey::Us).unwrap();
        assert_eq!(m.region, "Virginia");

        // "Chandigarh (UT)" starts with "chandigarh" but no region is named exactly that.
        let m = resolve("chandigarh", CountryKey::India).unwrap();
        assert_eq!(m.region, "Chandigarh (UT)");
    }

    #[test]
    fn test_resolve_prefix_beats_substring() {
        // "New Jersey" etc. contain "new", but the prefix tier picks the first "New ..." state.
        let m = resolve("new", CountryKey::Us).unwrap();
        assert_eq!(m.region, "New Hampshire");
    }

    #[test]
    fn test_resolve_substring() {
        let m = resolve("dakota", CountryKey::Us).unwrap();
        assert_eq!(m.region, "North Dakota");

        let m = resolve("ireland", CountryKey::Uk).unwrap();
        assert_eq!(m.region, "Northern Ireland");
        assert_eq!(m.capital, "Belfast");
    }

    #[test]
    fn test_resolve_one_char_prefix_first_in_order() {
        for country in CountryKey::ALL {
            for r in data::regions(country) {
                let first = r.name.chars().next().unwrap().to_string();
                let m = resolve(&first, country).unwrap();
                let expected = data::regions(country)
                    .iter()
                    .find(|x| x.name.to_lowercase().starts_with(&first.to_lowercase()))
                    .unwrap();
                assert_eq!(m.region, expected.name);
            }
        }
    }

    #[test]
    fn test_resolve_empty() {
        for country in CountryKey::ALL {
            assert!(resolve("", country).is_none());
            assert!(resolve("   ", country).is_none());
        }
    }

    #[test]
    fn test_resolve_not_found() {
        assert!(resolve("atlantis", CountryKey::Us).is_none());
    }

    #[test]
    fn test_resolve_unsupported_key() {
        assert!(resolve_key("California", "france").is_none());
        assert!(resolve_key("California", "").is_none());
        assert_eq!(
            resolve_key("California", "US").unwrap().capital,
            "Sacramento"
        );
    }

    #[test]
    fn test_random_pick_in_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for country in CountryKey::ALL {
            for _ in 0..50 {
                let m = random_pick(country, &mut rng).unwrap();
                assert!(data::regions(country)
                    .iter()
                    .any(|r| r.name == m.region && r.capital == m.capital));
            }
        }
    }

    #[test]
    fn test_random_pick_not_degenerate() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..100)
            .filter_map(|_| random_pick(CountryKey::Uk, &mut rng))
            .map(|m| m.region)
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_pick_unsupported_key() {
        assert!(random_pick_key("mars").is_none());
        assert!(random_pick_key("india").is_some());
    }

    #[test]
    fn test_fun_fact_known() {
        assert_eq!(
            fun_fact("Sacramento"),
            "Sacramento started as a Gold Rush town and has a historic riverfront."
        );
    }

    #[test]
    fn test_fun_fact_fallback() {
        assert_eq!(fun_fact("Atlantis"), "Atlantis is an interesting place to visit!");
    }

    #[test]
    fn test_every_capital_has_fact() {
        for country in CountryKey::ALL {
            for r in data::regions(country) {
                assert!(data::builtin_fact(r.capital).is_some(), "missing fact for {}", r.capital);
            }
        }
    }
}
