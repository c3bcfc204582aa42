//! # 四柱排盘 - 核心类型
//!
//! 定义天干、地支、五行与四柱的基础类型。
//!
//! ## 索引约定
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//! - 五行: 木(0) 火(1) 土(2) 金(3) 水(4)

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

// ============================================================================
// 五行
// ============================================================================

/// 五行
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum WuXing {
    /// 木
    #[default]
    Mu = 0,
    /// 火
    Huo = 1,
    /// 土
    Tu = 2,
    /// 金
    Jin = 3,
    /// 水
    Shui = 4,
}

impl WuXing {
    /// 固定顺序的全部五行（遍历与取最弱时依赖此顺序）
    pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

    /// 从索引构造（0-4）
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WuXing::Mu),
            1 => Some(WuXing::Huo),
            2 => Some(WuXing::Tu),
            3 => Some(WuXing::Jin),
            4 => Some(WuXing::Shui),
            _ => None,
        }
    }

    /// 索引（0-4）
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 相生循环中本行所生之行
    /// 木生火、火生土、土生金、金生水、水生木
    pub fn sheng(self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Huo,
            WuXing::Huo => WuXing::Tu,
            WuXing::Tu => WuXing::Jin,
            WuXing::Jin => WuXing::Shui,
            WuXing::Shui => WuXing::Mu,
        }
    }

    /// 相生循环中生出本行之行（sheng 的逆向）
    pub fn sheng_source(self) -> WuXing {
        match self {
            WuXing::Huo => WuXing::Mu,
            WuXing::Tu => WuXing::Huo,
            WuXing::Jin => WuXing::Tu,
            WuXing::Shui => WuXing::Jin,
            WuXing::Mu => WuXing::Shui,
        }
    }

    /// 相克循环中本行所克之行
    /// 木克土、火克金、土克水、金克木、水克火
    pub fn ke(self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Tu,
            WuXing::Huo => WuXing::Jin,
            WuXing::Tu => WuXing::Shui,
            WuXing::Jin => WuXing::Mu,
            WuXing::Shui => WuXing::Huo,
        }
    }
}

// ============================================================================
// 天干
// ============================================================================

/// 天干五行对照表（甲乙木、丙丁火、戊己土、庚辛金、壬癸水）
const TIANGAN_WUXING: [WuXing; 10] = [
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Shui,
    WuXing::Shui,
];

/// 天干（索引 0-9）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct TianGan(pub u8);

impl TianGan {
    /// 从索引构造（0-9）
    pub fn new(index: u8) -> Option<Self> {
        if index < 10 {
            Some(TianGan(index))
        } else {
            None
        }
    }

    /// 所属五行
    ///
    /// 表为满长度定长数组, 越界索引直接 panic, 不允许静默回退到默认五行
    pub fn wuxing(self) -> WuXing {
        TIANGAN_WUXING[self.0 as usize]
    }

    /// 阴阳（偶数索引为阳）
    pub fn is_yang(self) -> bool {
        self.0 % 2 == 0
    }
}

// ============================================================================
// 地支
// ============================================================================

/// 地支五行对照表
/// 子水、丑土、寅木、卯木、辰土、巳火、午火、未土、申金、酉金、戌土、亥水
const DIZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui,
    WuXing::Tu,
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Tu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Tu,
    WuXing::Shui,
];

/// 地支（索引 0-11）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct DiZhi(pub u8);

impl DiZhi {
    /// 从索引构造（0-11）
    pub fn new(index: u8) -> Option<Self> {
        if index < 12 {
            Some(DiZhi(index))
        } else {
            None
        }
    }

    /// 所属五行
    ///
    /// 表为满长度定长数组, 越界索引直接 panic, 不允许静默回退到默认五行
    pub fn wuxing(self) -> WuXing {
        DIZHI_WUXING[self.0 as usize]
    }
}

// ============================================================================
// 干支与四柱
// ============================================================================

/// 干支组合（一柱）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

/// 四柱（年/月/日柱必有, 时柱在出生时刻未知时缺省）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct SiZhu {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: Option<GanZhi>,
}

impl SiZhu {
    /// 命盘符号数（无时柱 6 字, 有时柱 8 字）
    pub fn symbol_count(&self) -> u8 {
        if self.hour.is_some() {
            8
        } else {
            6
        }
    }
}

// ============================================================================
// 出生信息
// ============================================================================

/// 出生日期
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// 是否为农历输入（当前不做真实转换, 见 calendar 模块说明）
    pub is_lunar: bool,
}

/// 出生时刻
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct BirthTime {
    pub hour: u8,
    pub minute: u8,
}
