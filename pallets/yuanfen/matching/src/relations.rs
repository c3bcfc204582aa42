//! # 合婚评分 - 干支关系表
//!
//! 天干与地支的两两关系判定。所有表为对称关系, 按无序对存储,
//! 判定函数对两个参数顺序不敏感。
//!
//! ## 索引约定
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)

use pallet_yuanfen_chart::{DiZhi, TianGan};

/// 天干五合: 甲己、乙庚、丙辛、丁壬、戊癸
const TIANGAN_HE: [(u8, u8); 5] = [(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)];

/// 天干相冲: 甲庚、乙辛、丙壬、丁癸
const TIANGAN_CHONG: [(u8, u8); 4] = [(0, 6), (1, 7), (2, 8), (3, 9)];

/// 地支六合: 子丑、寅亥、卯戌、辰酉、巳申、午未
const DIZHI_LIUHE: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// 地支三合局: 寅午戌、巳酉丑、亥卯未、子辰申
///
/// 同组任意两支（含同支）皆判为三合。
const DIZHI_SANHE_GROUPS: [[u8; 3]; 4] = [[2, 6, 10], [5, 9, 1], [11, 3, 7], [0, 4, 8]];

/// 地支相冲: 子午、丑未、寅申、卯酉、辰戌、巳亥
const DIZHI_CHONG: [(u8, u8); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];

/// 地支原辰: 子卯、丑辰、寅巳、午酉、申亥、未戌
const DIZHI_YUANCHEN: [(u8, u8); 6] = [(0, 3), (1, 4), (2, 5), (6, 9), (8, 11), (7, 10)];

/// 地支鬼门: 子亥、丑未、寅申、卯酉、辰戌、巳午
const DIZHI_GUIMEN: [(u8, u8); 6] = [(0, 11), (1, 7), (2, 8), (3, 9), (4, 10), (5, 6)];

fn pair_in(table: &[(u8, u8)], a: u8, b: u8) -> bool {
    table.iter().any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// 天干五合
pub fn is_tiangan_he(a: TianGan, b: TianGan) -> bool {
    pair_in(&TIANGAN_HE, a.0, b.0)
}

/// 天干相冲
pub fn is_tiangan_chong(a: TianGan, b: TianGan) -> bool {
    pair_in(&TIANGAN_CHONG, a.0, b.0)
}

/// 地支六合
pub fn is_dizhi_liuhe(a: DiZhi, b: DiZhi) -> bool {
    pair_in(&DIZHI_LIUHE, a.0, b.0)
}

/// 地支三合（同组任意两支, 含同支）
pub fn is_dizhi_sanhe(a: DiZhi, b: DiZhi) -> bool {
    DIZHI_SANHE_GROUPS
        .iter()
        .any(|group| group.contains(&a.0) && group.contains(&b.0))
}

/// 地支相冲
pub fn is_dizhi_chong(a: DiZhi, b: DiZhi) -> bool {
    pair_in(&DIZHI_CHONG, a.0, b.0)
}

/// 地支原辰
pub fn is_dizhi_yuanchen(a: DiZhi, b: DiZhi) -> bool {
    pair_in(&DIZHI_YUANCHEN, a.0, b.0)
}

/// 地支鬼门
pub fn is_dizhi_guimen(a: DiZhi, b: DiZhi) -> bool {
    pair_in(&DIZHI_GUIMEN, a.0, b.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiangan_relations_are_symmetric() {
        // 甲己合
        assert!(is_tiangan_he(TianGan(0), TianGan(5)));
        assert!(is_tiangan_he(TianGan(5), TianGan(0)));
        // 甲庚冲
        assert!(is_tiangan_chong(TianGan(0), TianGan(6)));
        assert!(is_tiangan_chong(TianGan(6), TianGan(0)));
        // 甲乙既不合也不冲
        assert!(!is_tiangan_he(TianGan(0), TianGan(1)));
        assert!(!is_tiangan_chong(TianGan(0), TianGan(1)));
    }

    #[test]
    fn tiangan_he_covers_all_stems_once() {
        // 五合恰好两两配对十天干
        let mut seen = [0u8; 10];
        for &(a, b) in super::TIANGAN_HE.iter() {
            seen[a as usize] += 1;
            seen[b as usize] += 1;
        }
        assert_eq!(seen, [1; 10]);
    }

    #[test]
    fn dizhi_liuhe_covers_all_branches_once() {
        let mut seen = [0u8; 12];
        for &(a, b) in super::DIZHI_LIUHE.iter() {
            seen[a as usize] += 1;
            seen[b as usize] += 1;
        }
        assert_eq!(seen, [1; 12]);
    }

    #[test]
    fn dizhi_chong_covers_all_branches_once() {
        let mut seen = [0u8; 12];
        for &(a, b) in super::DIZHI_CHONG.iter() {
            seen[a as usize] += 1;
            seen[b as usize] += 1;
        }
        assert_eq!(seen, [1; 12]);
    }

    #[test]
    fn every_table_pair_matches_both_orders() {
        for &(a, b) in super::TIANGAN_HE.iter() {
            assert!(is_tiangan_he(TianGan(a), TianGan(b)));
            assert!(is_tiangan_he(TianGan(b), TianGan(a)));
        }
        for &(a, b) in super::TIANGAN_CHONG.iter() {
            assert!(is_tiangan_chong(TianGan(a), TianGan(b)));
            assert!(is_tiangan_chong(TianGan(b), TianGan(a)));
        }
        for &(a, b) in super::DIZHI_LIUHE.iter() {
            assert!(is_dizhi_liuhe(DiZhi(a), DiZhi(b)));
            assert!(is_dizhi_liuhe(DiZhi(b), DiZhi(a)));
        }
        for &(a, b) in super::DIZHI_CHONG.iter() {
            assert!(is_dizhi_chong(DiZhi(a), DiZhi(b)));
            assert!(is_dizhi_chong(DiZhi(b), DiZhi(a)));
        }
        for &(a, b) in super::DIZHI_YUANCHEN.iter() {
            assert!(is_dizhi_yuanchen(DiZhi(a), DiZhi(b)));
            assert!(is_dizhi_yuanchen(DiZhi(b), DiZhi(a)));
        }
        for &(a, b) in super::DIZHI_GUIMEN.iter() {
            assert!(is_dizhi_guimen(DiZhi(a), DiZhi(b)));
            assert!(is_dizhi_guimen(DiZhi(b), DiZhi(a)));
        }
        // 三合: 同组任意两支（含同支）两个方向都成立
        for group in super::DIZHI_SANHE_GROUPS.iter() {
            for &a in group.iter() {
                for &b in group.iter() {
                    assert!(is_dizhi_sanhe(DiZhi(a), DiZhi(b)));
                    assert!(is_dizhi_sanhe(DiZhi(b), DiZhi(a)));
                }
            }
        }
    }

    #[test]
    fn dizhi_he_relations() {
        // 子丑六合
        assert!(is_dizhi_liuhe(DiZhi(0), DiZhi(1)));
        assert!(is_dizhi_liuhe(DiZhi(1), DiZhi(0)));
        // 寅午戌三合
        assert!(is_dizhi_sanhe(DiZhi(2), DiZhi(6)));
        assert!(is_dizhi_sanhe(DiZhi(6), DiZhi(10)));
        // 同支同组也判为三合
        assert!(is_dizhi_sanhe(DiZhi(1), DiZhi(1)));
        // 子寅既不六合也不三合
        assert!(!is_dizhi_liuhe(DiZhi(0), DiZhi(2)));
        assert!(!is_dizhi_sanhe(DiZhi(0), DiZhi(2)));
    }

    #[test]
    fn dizhi_negative_relations() {
        // 子午冲
        assert!(is_dizhi_chong(DiZhi(0), DiZhi(6)));
        // 子卯原辰
        assert!(is_dizhi_yuanchen(DiZhi(0), DiZhi(3)));
        assert!(is_dizhi_yuanchen(DiZhi(3), DiZhi(0)));
        // 子亥鬼门
        assert!(is_dizhi_guimen(DiZhi(0), DiZhi(11)));
        // 丑未同时为冲与鬼门
        assert!(is_dizhi_chong(DiZhi(1), DiZhi(7)));
        assert!(is_dizhi_guimen(DiZhi(1), DiZhi(7)));
        // 巳午仅鬼门不冲
        assert!(is_dizhi_guimen(DiZhi(5), DiZhi(6)));
        assert!(!is_dizhi_chong(DiZhi(5), DiZhi(6)));
    }
}
