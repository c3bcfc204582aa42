//! # 四柱排盘 Pallet (Pallet Yuanfen Chart)
//!
//! ## 概述
//!
//! 本 Pallet 实现四柱命盘的排盘与存档：
//! - 四柱计算（年柱、月柱、日柱、时柱, 时柱可缺省）
//! - 五行势力分布（按柱位加权）
//! - 命盘快照存储（出生信息 + 排盘结果一次性落链）
//!
//! 排盘完全确定: 同一出生输入在任何节点上产出相同四柱与势力分布。
//! 合婚评分由 `pallet-yuanfen-matching` 基于本模块的命盘快照进行。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod calendar;
pub mod power;
pub mod types;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


pub use power::WuXingPower;
pub use types::{BirthDate, BirthTime, DiZhi, GanZhi, SiZhu, TianGan, WuXing};

/// 可排盘的年份范围（历法基准与节气近似在此范围内有效）
pub const MIN_YEAR: u16 = 1900;
pub const MAX_YEAR: u16 = 2100;

#[frame_support::pallet]
pub mod pallet {
    use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use scale_info::TypeInfo;

    use super::{MAX_YEAR, MIN_YEAR};
    use crate::calendar;
    use crate::power::WuXingPower;
    use crate::types::{BirthDate, BirthTime, SiZhu};
    use crate::weights::WeightInfo;

    /// 命盘快照（出生信息与排盘结果一并存档）
    #[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct ChartInfo<T: Config> {
        /// 所有者
        pub owner: T::AccountId,
        /// 命盘名称（可空, 最大 32 字节 UTF-8）
        pub name: BoundedVec<u8, ConstU32<32>>,
        /// 出生日期
        pub birth_date: BirthDate,
        /// 出生时刻（未知时柱时缺省）
        pub birth_time: Option<BirthTime>,
        /// 排盘结果
        pub sizhu: SiZhu,
        /// 五行势力分布
        pub power: WuXingPower,
        /// 创建区块
        pub created_at: BlockNumberFor<T>,
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 每个账户最多创建的命盘数量
        #[pallet::constant]
        type MaxChartsPerAccount: Get<u32>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// 下一个命盘 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_chart_id)]
    pub type NextChartId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 存储映射: 命盘 ID -> 命盘快照
    #[pallet::storage]
    #[pallet::getter(fn chart_by_id)]
    pub type ChartById<T: Config> = StorageMap<_, Blake2_128Concat, u64, ChartInfo<T>>;

    /// 存储映射: 用户 -> 命盘 ID 列表
    #[pallet::storage]
    #[pallet::getter(fn user_charts)]
    pub type UserCharts<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxChartsPerAccount>,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 命盘创建成功 [所有者, 命盘ID, 符号数]
        ChartCreated {
            owner: T::AccountId,
            chart_id: u64,
            symbol_count: u8,
        },
        /// 命盘删除 [所有者, 命盘ID]
        ChartDeleted { owner: T::AccountId, chart_id: u64 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// 无效的年份（须在 1900-2100 之间）
        InvalidYear,
        /// 无效的月份
        InvalidMonth,
        /// 无效的日期
        InvalidDay,
        /// 无效的小时
        InvalidHour,
        /// 无效的分钟
        InvalidMinute,
        /// 命盘数量过多
        TooManyCharts,
        /// 命盘未找到
        ChartNotFound,
        /// 非命盘所有者
        NotChartOwner,
        /// 命盘 ID 已达到最大值
        ChartIdOverflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建命盘
        ///
        /// 校验出生输入后排盘, 将四柱与五行势力一并存档。
        /// 出生时刻缺省时产出 6 字命盘（无时柱）, 提供时刻时产出 8 字命盘。
        ///
        /// # 参数
        ///
        /// - `name`: 命盘名称（可选, 最大 32 字节）
        /// - `birth_date`: 出生日期（公历; 农历标记当前仅作记录）
        /// - `birth_time`: 出生时刻（可选）
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_chart())]
        pub fn create_chart(
            origin: OriginFor<T>,
            name: Option<BoundedVec<u8, ConstU32<32>>>,
            birth_date: BirthDate,
            birth_time: Option<BirthTime>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let existing = UserCharts::<T>::get(&who);
            ensure!(
                existing.len() < T::MaxChartsPerAccount::get() as usize,
                Error::<T>::TooManyCharts
            );

            let sizhu = Self::checked_sizhu(&birth_date, birth_time)?;
            let power = WuXingPower::of_sizhu(&sizhu);

            let chart_id = NextChartId::<T>::get();
            ensure!(chart_id < u64::MAX, Error::<T>::ChartIdOverflow);

            let chart = ChartInfo::<T> {
                owner: who.clone(),
                name: name.unwrap_or_default(),
                birth_date,
                birth_time,
                sizhu,
                power,
                created_at: frame_system::Pallet::<T>::block_number(),
            };

            ChartById::<T>::insert(chart_id, chart);
            UserCharts::<T>::try_mutate(&who, |charts| {
                charts.try_push(chart_id).map_err(|_| Error::<T>::TooManyCharts)
            })?;
            NextChartId::<T>::put(chart_id + 1);

            Self::deposit_event(Event::ChartCreated {
                owner: who,
                chart_id,
                symbol_count: sizhu.symbol_count(),
            });

            Ok(())
        }

        /// 删除命盘
        ///
        /// 只有命盘所有者可以删除自己的命盘。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::delete_chart())]
        pub fn delete_chart(origin: OriginFor<T>, chart_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let chart = ChartById::<T>::get(chart_id).ok_or(Error::<T>::ChartNotFound)?;
            ensure!(chart.owner == who, Error::<T>::NotChartOwner);

            ChartById::<T>::remove(chart_id);
            UserCharts::<T>::mutate(&who, |charts| {
                if let Some(pos) = charts.iter().position(|&id| id == chart_id) {
                    charts.remove(pos);
                }
            });

            Self::deposit_event(Event::ChartDeleted { owner: who, chart_id });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// 校验出生输入并排盘
        ///
        /// 历法层按线性日数外推不做校验, 范围检查集中在此处。
        pub fn checked_sizhu(
            birth_date: &BirthDate,
            birth_time: Option<BirthTime>,
        ) -> Result<SiZhu, Error<T>> {
            ensure!(
                (MIN_YEAR..=MAX_YEAR).contains(&birth_date.year),
                Error::<T>::InvalidYear
            );
            ensure!(
                (1..=12).contains(&birth_date.month),
                Error::<T>::InvalidMonth
            );
            ensure!((1..=31).contains(&birth_date.day), Error::<T>::InvalidDay);
            if let Some(time) = birth_time {
                ensure!(time.hour <= 23, Error::<T>::InvalidHour);
                ensure!(time.minute <= 59, Error::<T>::InvalidMinute);
            }

            Ok(calendar::calculate_sizhu(birth_date, birth_time))
        }

        /// 查询命盘快照的四柱与势力分布（供其他模块只读访问）
        pub fn chart_sizhu(chart_id: u64) -> Option<(SiZhu, WuXingPower)> {
            ChartById::<T>::get(chart_id).map(|chart| (chart.sizhu, chart.power))
        }

        /// 命盘是否存在
        pub fn chart_exists(chart_id: u64) -> bool {
            ChartById::<T>::contains_key(chart_id)
        }

        /// 命盘所有者
        pub fn chart_owner(chart_id: u64) -> Option<T::AccountId> {
            ChartById::<T>::get(chart_id).map(|chart| chart.owner)
        }
    }
}
