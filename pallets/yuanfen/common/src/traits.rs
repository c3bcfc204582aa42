//! # 缘分模块 - Trait 接口定义
//!
//! 合婚模块通过 [`ChartProvider`] 只读访问命盘快照, 不直接依赖排盘 Pallet 的存储。

use pallet_yuanfen_chart::{SiZhu, WuXingPower};

/// 命盘数据提供者
///
/// 由运行时把排盘 Pallet 接入合婚 Pallet。
pub trait ChartProvider<AccountId> {
    /// 命盘是否存在
    fn chart_exists(chart_id: u64) -> bool;

    /// 账户是否为命盘所有者
    fn is_chart_owner(chart_id: u64, who: &AccountId) -> bool;

    /// 命盘的四柱与五行势力分布
    fn chart_sizhu(chart_id: u64) -> Option<(SiZhu, WuXingPower)>;
}
