pub const SESSION_SEED: &[u8] = b"draw_session";

pub const SNAPSHOT_SEED: &[u8] = b"snapshot";

/// How long a draw stays in the `Animating` phase before the result
/// may be revealed.
pub const ANIMATION_DURATION_MS: i64 = 6_000;

/// Offsets from the start of the animation at which the four visual
/// stages begin: charge-up, particles, critical flash, full flash hold.
pub const STAGE_OFFSETS_MS: [i64; 4] = [500, 2_000, 3_500, 5_000];

/// Upper bound on a stored winner name.
pub const MAX_WINNER_NAME_LEN: usize = 32;

/// Static metadata for one prize pool. Member order is display order;
/// duplicates are allowed.
pub struct PrizeInfo {
    pub display_name: &'static str,
    pub description: &'static str,
    pub members: &'static [&'static str],
    pub theme: &'static str,
}

pub const MOUSEPAD: PrizeInfo = PrizeInfo {
    display_name: "マウスパッド (夕霧)",
    description: "滑り心地抜群のゲーミングマウスパッド",
    members: &["A", "D", "H", "I"],
    theme: "from-pink-500 to-rose-600",
};

pub const AUDIO_INTERFACE: PrizeInfo = PrizeInfo {
    display_name: "オーディオインターフェース (YAMAHA ZG01)",
    description: "ゲーム配信に最適なオーディオミキサー",
    members: &["A", "B", "C", "D", "E", "F", "G", "I"],
    theme: "from-cyan-500 to-blue-600",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_pools_are_non_empty_and_names_fit_snapshots() {
        for info in [&MOUSEPAD, &AUDIO_INTERFACE] {
            assert!(!info.members.is_empty());
            for member in info.members {
                assert!(member.len() <= MAX_WINNER_NAME_LEN);
            }
        }
    }

    #[test]
    fn stage_offsets_are_strictly_increasing_within_the_window() {
        let mut previous = 0;
        for offset in STAGE_OFFSETS_MS {
            assert!(offset > previous);
            previous = offset;
        }
        assert!(previous < ANIMATION_DURATION_MS);
    }
}

