//! Random juror nickname generation
//!
//! Comments are anonymous; each submission gets a fresh adjective + "Juror"
//! nickname not tied to any identity.

use rand::seq::SliceRandom;
use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Happy",
    "Gloomy",
    "Furious",
    "Weary",
    "Lively",
    "Quiet",
    "Boisterous",
    "Warm",
    "Cool",
    "Gentle",
    "Strong",
    "Timid",
    "Swift",
    "Unhurried",
    "Bright",
    "Brooding",
    "Wise",
    "Brave",
    "Humble",
    "Honest",
    "Kind",
    "Strict",
    "Adorable",
    "Dashing",
    "Mysterious",
    "Fair",
    "Level-Headed",
    "Careful",
    "Logical",
    "Objective",
    "Analytical",
    "Insightful",
    "Sharp",
    "Earnest",
    "Thoughtful",
    "Righteous",
    "Reasonable",
    "Balanced",
    "Stern",
    "Thorough",
];

const NOUNS: &[&str] = &["Juror"];

/// Generate a random juror nickname
pub fn random_name() -> String {
    let mut rng = rand::thread_rng();

    let adjective = ADJECTIVES
        .choose(&mut rng)
        .expect("adjective list is non-empty");
    let noun = NOUNS.choose(&mut rng).expect("noun list is non-empty");

    format!("{} {}", adjective, noun)
}

/// Generate a random juror nickname with a numeric suffix in 1..=999
pub fn random_name_with_number() -> String {
    let number: u16 = rand::thread_rng().gen_range(1..=999);
    format!("{} {}", random_name(), number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_adjective_plus_juror() {
        for _ in 0..50 {
            let name = random_name();
            let (adjective, noun) = name.rsplit_once(' ').expect("two-part name");
            assert!(ADJECTIVES.contains(&adjective));
            assert_eq!(noun, "Juror");
        }
    }

    #[test]
    fn test_numbered_name_suffix_in_range() {
        for _ in 0..50 {
            let name = random_name_with_number();
            let (base, suffix) = name.rsplit_once(' ').expect("numbered name");
            assert!(base.ends_with("Juror"));
            let number: u16 = suffix.parse().expect("numeric suffix");
            assert!((1..=999).contains(&number));
        }
    }
}
