//! # 合婚评分 - 评分引擎
//!
//! 纯函数评分: 输入两份四柱命盘, 输出确定性的合婚结果。
//!
//! ## 评分构成
//!
//! | 类目 | 依据 | 范围 |
//! |------|------|------|
//! | 基础分 | 恒定 | 32 |
//! | 五行互补 | 双向结构性补缺 | 0 至 35 |
//! | 精神层面 | 日干合冲 | -3 至 20 |
//! | 生活层面 | 日支合冲 | -9 至 15 |
//! | 社会层面 | 月支合冲 | -9 至 15 |
//!
//! 合计后截断到 0-100。正向满配超出 100 的部分被截断, 属既定行为。

use frame_support::BoundedVec;

use pallet_yuanfen_chart::power::{MODERATE_POWER, SELF_SUFFICIENT_POWER, STRONG_POWER};
use pallet_yuanfen_chart::{SiZhu, WuXing, WuXingPower};
use pallet_yuanfen_common::types::{
    CategoryDetail, Characteristics, CompatLevel, CompatibilityResult, DetailNote, RelationTag,
    ScoreDetails,
};

use crate::relations::{
    is_dizhi_chong, is_dizhi_guimen, is_dizhi_liuhe, is_dizhi_sanhe, is_dizhi_yuanchen,
    is_tiangan_chong, is_tiangan_he,
};

// ==== 评分常数 ====

/// 基础分
pub const BASE_SCORE: u8 = 32;
/// 五行互补上限
pub const MAX_COMPLEMENTARITY: u8 = 35;
/// 单方向强势补缺加分
pub const STRONG_FILL_BONUS: u8 = 18;
/// 单方向适度补缺加分
pub const MODERATE_FILL_BONUS: u8 = 10;
/// 天干五合加分
pub const TIANGAN_HE_SCORE: i8 = 20;
/// 天干相冲减分
pub const TIANGAN_CHONG_SCORE: i8 = -3;
/// 地支六合加分
pub const LIUHE_SCORE: i8 = 8;
/// 地支三合加分
pub const SANHE_SCORE: i8 = 7;
/// 地支冲/原辰/鬼门各自减分
pub const BRANCH_CLASH_SCORE: i8 = -3;

/// 计算合婚结果
///
/// 对两个参数顺序对称: 分数与等级不随输入顺序变化,
/// 仅互补明细的方向性文案（谁补谁）互换。
pub fn calculate_compatibility(sizhu_a: &SiZhu, sizhu_b: &SiZhu) -> CompatibilityResult {
    let power_a = WuXingPower::of_sizhu(sizhu_a);
    let power_b = WuXingPower::of_sizhu(sizhu_b);

    let complementarity = complementarity_detail(&power_a, &power_b);
    let (mental, lifestyle) = day_pillar_detail(sizhu_a, sizhu_b);
    let social = month_branch_detail(sizhu_a, sizhu_b);

    let day_pillar_score = mental.score + lifestyle.score;

    let raw = BASE_SCORE as i16
        + complementarity.score as i16
        + mental.score as i16
        + lifestyle.score as i16
        + social.score as i16;
    let score = raw.clamp(0, 100) as u8;
    let level = CompatLevel::from_score(score);

    // 汇总标签（保持类目顺序, 不去重）
    let mut tags: BoundedVec<RelationTag, _> = BoundedVec::new();
    for tag in complementarity
        .tags
        .iter()
        .chain(mental.tags.iter())
        .chain(lifestyle.tags.iter())
        .chain(social.tags.iter())
    {
        let _ = tags.try_push(*tag);
    }

    // 无互补但分布相似时补充相似标签
    let similar = WuXingPower::is_similar(&power_a, &power_b);
    if similar && complementarity.score == 0 {
        let _ = tags.try_push(RelationTag::SimilarWuxing);
    }

    let comp_score = complementarity.score as u8;
    let characteristics = Characteristics {
        has_strong_complementarity: comp_score >= 20,
        has_moderate_complementarity: (10..20).contains(&comp_score),
        has_weak_complementarity: (1..10).contains(&comp_score),
        has_no_complementarity: comp_score == 0,
        has_strong_day_pillar_match: day_pillar_score >= 15,
        has_moderate_day_pillar_match: day_pillar_score > 0 && day_pillar_score < 15,
        has_day_pillar_conflict: day_pillar_score < 0,
        has_no_day_pillar_match: day_pillar_score == 0,
        has_tiangan_he: tags.contains(&RelationTag::TianGanHe),
        has_tiangan_chong: tags.contains(&RelationTag::TianGanChong),
        has_dizhi_he: tags.contains(&RelationTag::DiZhiHe),
        has_dizhi_chong: tags.contains(&RelationTag::DiZhiChong),
        has_social_he: tags.contains(&RelationTag::SocialHe),
        has_social_chong: tags.contains(&RelationTag::SocialChong),
        has_same_stem: tags.contains(&RelationTag::SameStem),
        has_complementary: tags.contains(&RelationTag::Complementary),
        has_similar_wuxing: tags.contains(&RelationTag::SimilarWuxing),
        has_same_strong_wuxing: tags.contains(&RelationTag::SameStrongWuxing),
        has_day_pillar_match: day_pillar_score > 0,
        has_negative_day_pillar: tags.contains(&RelationTag::TianGanChong)
            || tags.contains(&RelationTag::DiZhiChong)
            || tags.contains(&RelationTag::SocialChong),
    };

    CompatibilityResult {
        score,
        level,
        base_score: BASE_SCORE,
        complementarity_score: comp_score,
        mental_score: mental.score,
        lifestyle_score: lifestyle.score,
        social_score: social.score,
        day_pillar_score,
        characteristics,
        tags,
        details: ScoreDetails { complementarity, mental, lifestyle, social },
        power_a,
        power_b,
        similarity_permille: WuXingPower::cosine_similarity_permille(&power_a, &power_b) as u16,
    }
}

/// 单方向补缺判定
///
/// 己方最弱五行为零, 或其生源不足以自行补足时, 才向对方求补;
/// 对方在该行的势力达到强势/尚可阈值分别得强/弱加分。
fn fill_bonus(mine: &WuXingPower, partner: &WuXingPower) -> Option<(WuXing, bool, u8)> {
    let weakest = mine.weakest();
    let own = mine.get(weakest);
    let source = mine.get(weakest.sheng_source());
    if own != 0 && source >= SELF_SUFFICIENT_POWER {
        // 可自行补足, 不计对方
        return None;
    }

    let filling = partner.get(weakest);
    if filling >= STRONG_POWER {
        Some((weakest, true, STRONG_FILL_BONUS))
    } else if filling >= MODERATE_POWER {
        Some((weakest, false, MODERATE_FILL_BONUS))
    } else {
        None
    }
}

/// 五行互补类目（双向求和, 上限 35）
pub(crate) fn complementarity_detail(
    power_a: &WuXingPower,
    power_b: &WuXingPower,
) -> CategoryDetail {
    let mut detail = CategoryDetail::default();
    let mut score = 0u8;

    if let Some((wuxing, strong, bonus)) = fill_bonus(power_a, power_b) {
        score += bonus;
        let _ = detail.notes.try_push(DetailNote::PartnerFillsDeficit { wuxing, strong });
        let _ = detail.tags.try_push(RelationTag::Complementary);
    }
    if let Some((wuxing, strong, bonus)) = fill_bonus(power_b, power_a) {
        score += bonus;
        let _ = detail.notes.try_push(DetailNote::FillsPartnerDeficit { wuxing, strong });
        let _ = detail.tags.try_push(RelationTag::Complementary);
    }

    detail.score = score.min(MAX_COMPLEMENTARITY) as i8;

    // 双方同一五行俱旺（仅文案与标签, 不计分）
    for wuxing in WuXing::ALL {
        if power_a.get(wuxing) >= STRONG_POWER && power_b.get(wuxing) >= STRONG_POWER {
            let _ = detail.notes.try_push(DetailNote::BothStrong { wuxing });
            let _ = detail.tags.try_push(RelationTag::SameStrongWuxing);
        }
    }

    detail
}

/// 日柱类目: 精神层面（日干）与生活层面（日支）
pub(crate) fn day_pillar_detail(
    sizhu_a: &SiZhu,
    sizhu_b: &SiZhu,
) -> (CategoryDetail, CategoryDetail) {
    let mut mental = CategoryDetail::default();
    let mut lifestyle = CategoryDetail::default();

    let a_gan = sizhu_a.day.gan;
    let b_gan = sizhu_b.day.gan;
    let a_zhi = sizhu_a.day.zhi;
    let b_zhi = sizhu_b.day.zhi;

    // 精神层面: 日干
    if is_tiangan_he(a_gan, b_gan) {
        mental.score += TIANGAN_HE_SCORE;
        let _ = mental.notes.try_push(DetailNote::TianGanHe { a: a_gan, b: b_gan });
        let _ = mental.tags.try_push(RelationTag::TianGanHe);
    }
    if is_tiangan_chong(a_gan, b_gan) {
        mental.score += TIANGAN_CHONG_SCORE;
        let _ = mental.notes.try_push(DetailNote::TianGanChong { a: a_gan, b: b_gan });
        let _ = mental.tags.try_push(RelationTag::TianGanChong);
    }
    // 日干相同: 比肩, 仅标签不计分
    if a_gan == b_gan {
        let _ = mental.notes.try_push(DetailNote::SameDayStem { gan: a_gan });
        let _ = mental.tags.try_push(RelationTag::SameStem);
    }

    // 生活层面: 日支, 正负关系可叠加
    if is_dizhi_liuhe(a_zhi, b_zhi) {
        lifestyle.score += LIUHE_SCORE;
        let _ = lifestyle.notes.try_push(DetailNote::LiuHe { a: a_zhi, b: b_zhi });
        let _ = lifestyle.tags.try_push(RelationTag::DiZhiHe);
    }
    if is_dizhi_sanhe(a_zhi, b_zhi) {
        lifestyle.score += SANHE_SCORE;
        let _ = lifestyle.notes.try_push(DetailNote::SanHe { a: a_zhi, b: b_zhi });
        let _ = lifestyle.tags.try_push(RelationTag::DiZhiHe);
    }
    if is_dizhi_chong(a_zhi, b_zhi) {
        lifestyle.score += BRANCH_CLASH_SCORE;
        let _ = lifestyle.notes.try_push(DetailNote::Chong { a: a_zhi, b: b_zhi });
        let _ = lifestyle.tags.try_push(RelationTag::DiZhiChong);
    }
    if is_dizhi_yuanchen(a_zhi, b_zhi) {
        lifestyle.score += BRANCH_CLASH_SCORE;
        let _ = lifestyle.notes.try_push(DetailNote::YuanChen { a: a_zhi, b: b_zhi });
        let _ = lifestyle.tags.try_push(RelationTag::DiZhiChong);
    }
    if is_dizhi_guimen(a_zhi, b_zhi) {
        lifestyle.score += BRANCH_CLASH_SCORE;
        let _ = lifestyle.notes.try_push(DetailNote::GuiMen { a: a_zhi, b: b_zhi });
        let _ = lifestyle.tags.try_push(RelationTag::DiZhiChong);
    }

    (mental, lifestyle)
}

/// 社会层面类目: 月支（与日支同一套关系, 不同标签）
pub(crate) fn month_branch_detail(sizhu_a: &SiZhu, sizhu_b: &SiZhu) -> CategoryDetail {
    let mut social = CategoryDetail::default();

    let a_zhi = sizhu_a.month.zhi;
    let b_zhi = sizhu_b.month.zhi;

    if is_dizhi_liuhe(a_zhi, b_zhi) {
        social.score += LIUHE_SCORE;
        let _ = social.notes.try_push(DetailNote::LiuHe { a: a_zhi, b: b_zhi });
        let _ = social.tags.try_push(RelationTag::SocialHe);
    }
    if is_dizhi_sanhe(a_zhi, b_zhi) {
        social.score += SANHE_SCORE;
        let _ = social.notes.try_push(DetailNote::SanHe { a: a_zhi, b: b_zhi });
        let _ = social.tags.try_push(RelationTag::SocialHe);
    }
    if is_dizhi_chong(a_zhi, b_zhi) {
        social.score += BRANCH_CLASH_SCORE;
        let _ = social.notes.try_push(DetailNote::Chong { a: a_zhi, b: b_zhi });
        let _ = social.tags.try_push(RelationTag::SocialChong);
    }
    if is_dizhi_yuanchen(a_zhi, b_zhi) {
        social.score += BRANCH_CLASH_SCORE;
        let _ = social.notes.try_push(DetailNote::YuanChen { a: a_zhi, b: b_zhi });
        let _ = social.tags.try_push(RelationTag::SocialChong);
    }
    if is_dizhi_guimen(a_zhi, b_zhi) {
        social.score += BRANCH_CLASH_SCORE;
        let _ = social.notes.try_push(DetailNote::GuiMen { a: a_zhi, b: b_zhi });
        let _ = social.tags.try_push(RelationTag::SocialChong);
    }

    social
}
