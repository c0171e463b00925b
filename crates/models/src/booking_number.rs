use chrono::NaiveDate;
use rand::Rng;

const PREFIX: &str = "BK";

/// Generates a human-facing booking number: `BK` + two-digit year + two-digit
/// month + six random decimal digits. There is no uniqueness retry loop; the
/// unique index on the column surfaces the statistically rare collision.
pub fn generate(today: NaiveDate) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| char::from(b'0' + rng.gen_range(0u8..10)))
        .collect();

    format!("{PREFIX}{}{suffix}", today.format("%y%m"))
}

/// Whether a candidate matches the `BK` + 10 decimal digits shape
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == 12
        && candidate.starts_with(PREFIX)
        && candidate[PREFIX.len()..].bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generated_numbers_are_well_formed() {
        for _ in 0..100 {
            let number = generate(date(2025, 6, 15));
            assert!(is_well_formed(&number), "malformed: {number}");
        }
    }

    #[test]
    fn test_generated_numbers_embed_year_and_month() {
        assert!(generate(date(2025, 6, 1)).starts_with("BK2506"));
        assert!(generate(date(2026, 11, 30)).starts_with("BK2611"));
        assert!(generate(date(2030, 1, 5)).starts_with("BK3001"));
    }

    #[test]
    fn test_well_formed_rejects_bad_shapes() {
        assert!(is_well_formed("BK2506123456"));
        assert!(!is_well_formed("BK250612345"));
        assert!(!is_well_formed("BK25061234567"));
        assert!(!is_well_formed("XX2506123456"));
        assert!(!is_well_formed("BK250612345a"));
        assert!(!is_well_formed(""));
    }
}
