use std::cmp::Reverse;

use dotastats_model::medal::{Medal, MedalTier};
use dotastats_model::stats::PlayerStats;
use dotastats_model::win_rate::WinRate;
use dotastats_model::AccountId;
use itertools::Itertools;
use log::debug;
use rand::Rng;

mod last_place;
mod options;

pub use last_place::LastPlaceJoker;
pub use options::RankEngineOptions;

const MAX_STARS: u8 = 5;

/// Decodes an OpenDota `rank_tier` (tens digit = bracket, ones digit = stars).
///
/// Anything that is not exactly two decimal digits is "No rank". A positive leaderboard
/// position always means Immortal and replaces the star label with the position.
pub fn decode_medal(rank_code: Option<i64>, leaderboard_position: Option<i64>) -> Medal {
    let mut medal = rank_code
        .and_then(decode_rank_code)
        .unwrap_or_else(Medal::unranked);
    if let Some(position) = leaderboard_position.filter(|p| *p > 0) {
        medal.tier = MedalTier::Immortal.value();
        medal.stars = 0;
        medal.label = format!("Immortal Top {position}");
    }
    medal
}

fn decode_rank_code(code: i64) -> Option<Medal> {
    if !(10..=99).contains(&code) {
        return None;
    }
    let stars = ((code % 10) as u8).min(MAX_STARS);
    let medal = match MedalTier::from_digit((code / 10) as u8) {
        Some(tier) => Medal {
            tier: tier.value(),
            stars,
            label: format!("{tier} {stars}★"),
        },
        None => Medal {
            tier: 0,
            stars,
            label: format!("Unknown {stars}★"),
        },
    };
    Some(medal)
}

/// Win percentage rounded half-up to one decimal. No games played is 0.0%.
pub fn compute_win_rate(wins: u32, losses: u32) -> WinRate {
    let total = wins as u64 + losses as u64;
    if total == 0 {
        return WinRate::ZERO;
    }
    // tenths = round_half_up(wins * 1000 / total), kept in integers
    let tenths = (wins as u64 * 2000 + total) / (2 * total);
    WinRate::from_tenths(tenths as u16)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub account: AccountId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub raw_rank_code: Option<i64>,
    pub leaderboard_position: Option<i64>,
    pub medal: Medal,
    pub win_rate: WinRate,
}

impl PlayerRecord {
    pub fn new(
        name: impl Into<String>,
        wins: u32,
        losses: u32,
        raw_rank_code: Option<i64>,
        leaderboard_position: Option<i64>,
    ) -> Self {
        PlayerRecord {
            account: AccountId::default(),
            name: name.into(),
            wins,
            losses,
            raw_rank_code,
            leaderboard_position,
            medal: decode_medal(raw_rank_code, leaderboard_position),
            win_rate: compute_win_rate(wins, losses),
        }
    }

    pub fn total_matches(&self) -> u64 {
        self.wins as u64 + self.losses as u64
    }

    pub fn sort_key(&self) -> (u8, WinRate) {
        (self.medal.tier, self.win_rate)
    }
}

impl From<PlayerStats> for PlayerRecord {
    fn from(stats: PlayerStats) -> Self {
        PlayerRecord {
            account: stats.account,
            ..PlayerRecord::new(
                stats.name,
                stats.wins,
                stats.losses,
                stats.rank_tier,
                stats.leaderboard_rank,
            )
        }
    }
}

/// Best first: higher tier, then higher win rate. Equal keys keep their input order.
pub fn rank_players(records: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| Reverse(r.sort_key()));
    ranked
}

pub fn lowest_ranked(ranked: &[PlayerRecord]) -> Option<&PlayerRecord> {
    ranked.last()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastPlace<'a> {
    pub player: &'a PlayerRecord,
    pub phrase: &'a str,
}

pub struct RankEngine {
    joker: LastPlaceJoker,
}

impl RankEngine {
    pub fn new(options: RankEngineOptions) -> Self {
        RankEngine {
            joker: LastPlaceJoker::new(options.last_place_phrases),
        }
    }

    pub fn rank(&self, stats: impl IntoIterator<Item = PlayerStats>) -> Vec<PlayerRecord> {
        let records: Vec<PlayerRecord> = stats.into_iter().map(PlayerRecord::from).collect();
        let ranked = rank_players(&records);
        debug!(
            "Ranking: {}",
            ranked
                .iter()
                .map(|r| format!("{} ({}, {}%)", r.name, r.medal, r.win_rate))
                .join(", ")
        );
        ranked
    }

    pub fn last_place<'a, R: Rng + ?Sized>(
        &'a self,
        ranked: &'a [PlayerRecord],
        rng: &mut R,
    ) -> Option<LastPlace<'a>> {
        let player = lowest_ranked(ranked)?;
        let phrase = self.joker.pick(rng)?;
        Some(LastPlace { player, phrase })
    }
}

impl Default for RankEngine {
    fn default() -> Self {
        RankEngine::new(RankEngineOptions::default())
    }
}
