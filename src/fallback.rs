//! Fallback quotes for profiles with nothing public to show

use crate::selection::hash_pick;

pub const DEFAULT_QUOTES: &[&str] = &[
    "正在岩壁上尋找人生的意義...",
    "手指還在長繭中，故事正在醞釀",
    "專注攀爬，無暇寫字",
    "話不多說，先爬再說",
    "故事？都刻在岩壁上了",
    "正忙著挑戰下一條路線",
    "低調的小人物，低調的攀登",
];

/// Stable fallback quote for a profile id, independent of render order
pub fn pick_fallback(id: &str) -> &'static str {
    hash_pick(id, DEFAULT_QUOTES.len()).map_or(DEFAULT_QUOTES[0], |i| DEFAULT_QUOTES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_stable() {
        let first = pick_fallback("u2");
        for _ in 0..5 {
            assert_eq!(pick_fallback("u2"), first);
        }
    }

    #[test]
    fn test_fallback_follows_checksum() {
        // 'u' (117) + '2' (50) = 167, 167 % 7 = 6
        assert_eq!(pick_fallback("u2"), DEFAULT_QUOTES[6]);
        assert_eq!(pick_fallback(""), DEFAULT_QUOTES[0]);
    }

    #[test]
    fn test_fallback_varies_across_ids() {
        let distinct: std::collections::HashSet<&str> =
            (1..=7).map(|i| pick_fallback(&format!("user-{}", i))).collect();
        assert!(distinct.len() > 1);
    }
}
