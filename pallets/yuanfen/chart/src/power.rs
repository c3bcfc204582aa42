//! # 四柱排盘 - 五行势力
//!
//! 按位置加权累计五行势力。势力值为定点数, 单位 0.1（下称"分"）:
//!
//! | 位置 | 权重 |
//! |------|------|
//! | 月支 | 4.0 |
//! | 日支 | 2.0 |
//! | 时支 | 1.5 |
//! | 年支 | 1.0 |
//! | 各天干 | 1.0 |
//!
//! 不做归一化: 无时柱共 6 字合计 100 分, 有时柱共 8 字合计 125 分。
//! 运行时不使用浮点, 相似度等派生量全部用整数交叉相乘比较。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

use crate::types::{SiZhu, WuXing};

/// 天干权重（所有柱位相同）
pub const WEIGHT_GAN: u16 = 10;
/// 年支权重
pub const WEIGHT_YEAR_ZHI: u16 = 10;
/// 月支权重（季节/环境, 最重）
pub const WEIGHT_MONTH_ZHI: u16 = 40;
/// 日支权重
pub const WEIGHT_DAY_ZHI: u16 = 20;
/// 时支权重
pub const WEIGHT_HOUR_ZHI: u16 = 15;

/// "强势"阈值: 达到月支级别的势力
pub const STRONG_POWER: u16 = 40;
/// "尚可"阈值
pub const MODERATE_POWER: u16 = 20;
/// 自补阈值: 所缺五行的生源达到此值视为可自行补足
pub const SELF_SUFFICIENT_POWER: u16 = 40;
/// 分布相似判定阈值（千分比）
pub const SIMILARITY_THRESHOLD_PERMILLE: u32 = 750;

/// 一人命盘的五行势力分布（按 [`WuXing::ALL`] 顺序, 单位 0.1）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct WuXingPower(pub [u16; 5]);

impl WuXingPower {
    /// 由四柱累计五行势力
    pub fn of_sizhu(sizhu: &SiZhu) -> Self {
        let mut power = WuXingPower::default();

        power.add(sizhu.year.gan.wuxing(), WEIGHT_GAN);
        power.add(sizhu.year.zhi.wuxing(), WEIGHT_YEAR_ZHI);
        power.add(sizhu.month.gan.wuxing(), WEIGHT_GAN);
        power.add(sizhu.month.zhi.wuxing(), WEIGHT_MONTH_ZHI);
        power.add(sizhu.day.gan.wuxing(), WEIGHT_GAN);
        power.add(sizhu.day.zhi.wuxing(), WEIGHT_DAY_ZHI);

        // 时柱缺省时完全不计入
        if let Some(hour) = sizhu.hour {
            power.add(hour.gan.wuxing(), WEIGHT_GAN);
            power.add(hour.zhi.wuxing(), WEIGHT_HOUR_ZHI);
        }

        power
    }

    fn add(&mut self, wuxing: WuXing, weight: u16) {
        self.0[wuxing.index() as usize] = self.0[wuxing.index() as usize].saturating_add(weight);
    }

    /// 某一行的势力
    pub fn get(&self, wuxing: WuXing) -> u16 {
        self.0[wuxing.index() as usize]
    }

    /// 总势力
    pub fn total(&self) -> u32 {
        self.0.iter().map(|p| *p as u32).sum()
    }

    /// 最弱一行（并列时取 [`WuXing::ALL`] 顺序中靠前者, 保证结果确定）
    pub fn weakest(&self) -> WuXing {
        let mut min = WuXing::Mu;
        for w in WuXing::ALL {
            if self.get(w) < self.get(min) {
                min = w;
            }
        }
        min
    }

    /// 强势行: 势力不低于全行均值的 1.5 倍（10·p ≥ 3·total）且非零
    pub fn strong_flags(&self) -> [bool; 5] {
        let total = self.total();
        let mut flags = [false; 5];
        for w in WuXing::ALL {
            let p = self.get(w) as u32;
            flags[w.index() as usize] = p > 0 && 10 * p >= 3 * total;
        }
        flags
    }

    /// 弱势行: 势力为零, 或不高于均值一半且其生源不足以自补
    pub fn weak_flags(&self) -> [bool; 5] {
        let total = self.total();
        let mut flags = [false; 5];
        for w in WuXing::ALL {
            let p = self.get(w) as u32;
            let starved = 10 * p <= total
                && self.get(w.sheng_source()) < SELF_SUFFICIENT_POWER;
            flags[w.index() as usize] = p == 0 || starved;
        }
        flags
    }

    /// 两个分布的余弦相似度（千分比, 0-1000）
    ///
    /// 余弦对缩放不敏感, 直接在原始分值上计算, 与先归一化等价。
    /// 任一侧总势力为零时视为无相似度。
    pub fn cosine_similarity_permille(a: &Self, b: &Self) -> u32 {
        let (dot, na, nb) = Self::dot_norms(a, b);
        if na == 0 || nb == 0 {
            return 0;
        }
        let denom = isqrt(na * nb);
        if denom == 0 {
            return 0;
        }
        ((dot * 1000 / denom) as u32).min(1000)
    }

    /// 分布是否相似（cos ≥ 0.75, 以 16·dot² ≥ 9·|a|²·|b|² 精确判定）
    pub fn is_similar(a: &Self, b: &Self) -> bool {
        let (dot, na, nb) = Self::dot_norms(a, b);
        if na == 0 || nb == 0 {
            return false;
        }
        16 * dot * dot >= 9 * na * nb
    }

    fn dot_norms(a: &Self, b: &Self) -> (u128, u128, u128) {
        let mut dot = 0u128;
        let mut na = 0u128;
        let mut nb = 0u128;
        for i in 0..5 {
            let x = a.0[i] as u128;
            let y = b.0[i] as u128;
            dot += x * y;
            na += x * x;
            nb += y * y;
        }
        (dot, na, nb)
    }
}

/// 整数平方根（向下取整, 牛顿迭代）
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = (x + 1) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}
