//! Target selection: player of the day, or a random player.

use crate::logic::dataset::PlayerDataset;
use crate::models::PlayerRecord;
use chrono::NaiveDate;
use rand::Rng;
use std::sync::Arc;

/// Daily targets are drawn from players rated at least this high (when there are any).
pub const DAILY_MIN_OVERALL: u32 = 85;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a. Stable across platforms and releases, unlike `DefaultHasher`.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET, |h, b| (h ^ u64::from(*b)).wrapping_mul(FNV_PRIME))
}

/// Seed for a calendar date.
pub fn daily_seed(date: NaiveDate) -> u64 {
    fnv1a(format!("footle-{}", date.format("%Y-%m-%d")).as_bytes())
}

/// Player of the day: same date, same player, in every process.
pub fn pick_daily(dataset: &PlayerDataset, date: NaiveDate) -> &Arc<PlayerRecord> {
    let elite: Vec<&Arc<PlayerRecord>> = dataset
        .players()
        .iter()
        .filter(|p| p.overall >= DAILY_MIN_OVERALL)
        .collect();
    let seed = daily_seed(date);
    if elite.is_empty() {
        let index = (seed % dataset.players().len() as u64) as usize;
        &dataset.players()[index]
    } else {
        elite[(seed % elite.len() as u64) as usize]
    }
}

/// Uniformly random player.
pub fn pick_random<'a, R: Rng + ?Sized>(
    dataset: &'a PlayerDataset,
    rng: &mut R,
) -> &'a Arc<PlayerRecord> {
    let index = rng.gen_range(0..dataset.players().len());
    &dataset.players()[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset() -> PlayerDataset {
        let players = (0..40)
            .map(|i| {
                PlayerRecord::new(
                    i,
                    format!("Player {i}"),
                    "Spain",
                    "CM",
                    20 + i % 15,
                    80 + i % 10,
                    "Club",
                    "La Liga",
                )
            })
            .collect();
        PlayerDataset::from_records(players).unwrap()
    }

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn test_pick_daily_is_idempotent() {
        let ds = dataset();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let first = pick_daily(&ds, date).id;
        for _ in 0..10 {
            assert_eq!(pick_daily(&ds, date).id, first);
        }
    }

    #[test]
    fn test_pick_daily_uses_elite_pool() {
        let ds = dataset();
        let mut day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for _ in 0..60 {
            assert!(pick_daily(&ds, day).overall >= DAILY_MIN_OVERALL);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_pick_daily_falls_back_to_whole_dataset() {
        let ds = PlayerDataset::from_records(vec![
            PlayerRecord::new(7, "Only One", "Spain", "CM", 30, 80, "Club", "La Liga"),
        ])
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(pick_daily(&ds, date).id, 7);
    }

    #[test]
    fn test_pick_daily_varies_across_dates() {
        let ds = dataset();
        let mut day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..30 {
            ids.insert(pick_daily(&ds, day).id);
            day = day.succ_opt().unwrap();
        }
        assert!(ids.len() > 1);
    }

    #[test]
    fn test_pick_random_stays_in_range() {
        let ds = dataset();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p = pick_random(&ds, &mut rng);
            assert!(ds.lookup_by_id(p.id).is_some());
        }
    }
}
