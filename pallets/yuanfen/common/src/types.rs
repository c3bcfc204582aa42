//! # 缘分模块 - 共享类型定义
//!
//! 定义合婚系统所需的核心数据结构。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use scale_info::TypeInfo;

use pallet_yuanfen_chart::{DiZhi, TianGan, WuXing, WuXingPower};

/// 单类目明细条目上限
pub type MaxCategoryNotes = ConstU32<8>;
/// 单类目关系标签上限
pub type MaxCategoryTags = ConstU32<8>;
/// 整体关系标签上限
pub type MaxResultTags = ConstU32<24>;

// ============================================================================
// 合婚等级
// ============================================================================

/// 合婚等级（按最终分数划分）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum CompatLevel {
    /// 上等（75 分以上）
    Excellent = 0,
    /// 中上（55-74 分）
    Good = 1,
    /// 普通（40-54 分）
    #[default]
    Normal = 2,
    /// 需留意（25-39 分）
    Caution = 3,
    /// 需磨合（25 分以下）
    Adjustment = 4,
}

impl CompatLevel {
    /// 由最终分数定级
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => CompatLevel::Excellent,
            55..=74 => CompatLevel::Good,
            40..=54 => CompatLevel::Normal,
            25..=39 => CompatLevel::Caution,
            _ => CompatLevel::Adjustment,
        }
    }
}

// ============================================================================
// 关系标签
// ============================================================================

/// 双方命盘间的关系标签
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum RelationTag {
    /// 日干相同（比肩）
    SameStem = 0,
    /// 天干五合
    TianGanHe = 1,
    /// 天干相冲
    TianGanChong = 2,
    /// 日支六合/三合
    DiZhiHe = 3,
    /// 日支相冲/原辰/鬼门
    DiZhiChong = 4,
    /// 五行互补
    Complementary = 5,
    /// 月支相合（社会性）
    SocialHe = 6,
    /// 月支相冲（社会性）
    SocialChong = 7,
    /// 五行分布相似
    SimilarWuxing = 8,
    /// 同一强势五行
    SameStrongWuxing = 9,
}

// ============================================================================
// 匹配状态
// ============================================================================

/// 合婚请求状态
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub enum MatchStatus {
    /// 等待对方授权
    #[default]
    PendingAuthorization = 0,
    /// 已授权, 可生成报告
    Authorized = 1,
    /// 报告已生成
    Completed = 2,
    /// 发起方取消
    Cancelled = 3,
    /// 对方拒绝
    Rejected = 4,
}

// ============================================================================
// 评分明细
// ============================================================================

/// 评分明细条目（结构化, 展示文案由 [`DetailNote::describe`] 提供）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug,
)]
pub enum DetailNote {
    /// 对方补足己方所缺五行 [五行, 是否强势补足]
    PartnerFillsDeficit { wuxing: WuXing, strong: bool },
    /// 己方补足对方所缺五行 [五行, 是否强势补足]
    FillsPartnerDeficit { wuxing: WuXing, strong: bool },
    /// 双方同一五行均强势
    BothStrong { wuxing: WuXing },
    /// 日干五合 [甲方日干, 乙方日干]
    TianGanHe { a: TianGan, b: TianGan },
    /// 日干相冲 [甲方日干, 乙方日干]
    TianGanChong { a: TianGan, b: TianGan },
    /// 日干相同（比肩）
    SameDayStem { gan: TianGan },
    /// 日支六合 [甲方日支, 乙方日支]
    LiuHe { a: DiZhi, b: DiZhi },
    /// 日支三合 [甲方日支, 乙方日支]
    SanHe { a: DiZhi, b: DiZhi },
    /// 地支相冲 [甲方地支, 乙方地支]
    Chong { a: DiZhi, b: DiZhi },
    /// 地支原辰 [甲方地支, 乙方地支]
    YuanChen { a: DiZhi, b: DiZhi },
    /// 地支鬼门 [甲方地支, 乙方地支]
    GuiMen { a: DiZhi, b: DiZhi },
}

impl DetailNote {
    /// 条目文案
    pub fn describe(&self) -> &'static str {
        match self {
            DetailNote::PartnerFillsDeficit { strong: true, .. } => "对方有力补足己方所缺五行",
            DetailNote::PartnerFillsDeficit { strong: false, .. } => "对方适度补足己方所缺五行",
            DetailNote::FillsPartnerDeficit { strong: true, .. } => "己方有力补足对方所缺五行",
            DetailNote::FillsPartnerDeficit { strong: false, .. } => "己方适度补足对方所缺五行",
            DetailNote::BothStrong { .. } => "双方同一五行俱旺, 气场相近",
            DetailNote::TianGanHe { .. } => "日干五合, 心意相通",
            DetailNote::TianGanChong { .. } => "日干相冲, 观念易有分歧",
            DetailNote::SameDayStem { .. } => "日干相同, 比肩同行",
            DetailNote::LiuHe { .. } => "日支六合, 生活步调契合",
            DetailNote::SanHe { .. } => "日支三合, 呼吸相合",
            DetailNote::Chong { .. } => "地支相冲, 作息易生摩擦",
            DetailNote::YuanChen { .. } => "地支原辰, 莫名不睦",
            DetailNote::GuiMen { .. } => "地支鬼门, 情绪易受牵动",
        }
    }
}

/// 单类目评分明细
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct CategoryDetail {
    /// 类目得分（可为负）
    pub score: i8,
    /// 明细条目
    pub notes: BoundedVec<DetailNote, MaxCategoryNotes>,
    /// 类目关系标签
    pub tags: BoundedVec<RelationTag, MaxCategoryTags>,
}

/// 四类目评分明细
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct ScoreDetails {
    /// 五行互补（0-35）
    pub complementarity: CategoryDetail,
    /// 精神层面: 日干（-3 至 20）
    pub mental: CategoryDetail,
    /// 生活层面: 日支（-9 至 15）
    pub lifestyle: CategoryDetail,
    /// 社会层面: 月支（-9 至 15）
    pub social: CategoryDetail,
}

// ============================================================================
// 关系特征
// ============================================================================

/// 关系特征标志位（由分数与标签推导, 供前端直接渲染）
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct Characteristics {
    // 五行互补相关
    pub has_strong_complementarity: bool,
    pub has_moderate_complementarity: bool,
    pub has_weak_complementarity: bool,
    pub has_no_complementarity: bool,
    // 日柱匹配相关
    pub has_strong_day_pillar_match: bool,
    pub has_moderate_day_pillar_match: bool,
    pub has_day_pillar_conflict: bool,
    pub has_no_day_pillar_match: bool,
    // 标签特征
    pub has_tiangan_he: bool,
    pub has_tiangan_chong: bool,
    pub has_dizhi_he: bool,
    pub has_dizhi_chong: bool,
    pub has_social_he: bool,
    pub has_social_chong: bool,
    pub has_same_stem: bool,
    pub has_complementary: bool,
    pub has_similar_wuxing: bool,
    pub has_same_strong_wuxing: bool,
    // 复合特征
    pub has_day_pillar_match: bool,
    pub has_negative_day_pillar: bool,
}

// ============================================================================
// 合婚结果
// ============================================================================

/// 合婚评分结果（确定性: 同一对命盘在任何节点产出相同结果）
#[derive(
    Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default,
)]
pub struct CompatibilityResult {
    /// 最终分数（0-100）
    pub score: u8,
    /// 合婚等级
    pub level: CompatLevel,
    /// 基础分
    pub base_score: u8,
    /// 五行互补得分（0-35）
    pub complementarity_score: u8,
    /// 精神层面得分: 日干
    pub mental_score: i8,
    /// 生活层面得分: 日支
    pub lifestyle_score: i8,
    /// 社会层面得分: 月支
    pub social_score: i8,
    /// 日柱合计得分（mental + lifestyle）
    pub day_pillar_score: i8,
    /// 关系特征标志位
    pub characteristics: Characteristics,
    /// 全部关系标签（按类目顺序拼接, 不去重）
    pub tags: BoundedVec<RelationTag, MaxResultTags>,
    /// 四类目明细
    pub details: ScoreDetails,
    /// 甲方五行势力分布
    pub power_a: WuXingPower,
    /// 乙方五行势力分布
    pub power_b: WuXingPower,
    /// 分布余弦相似度（千分比）
    pub similarity_permille: u16,
}
