//! # 合婚 Pallet (Pallet Yuanfen Matching)
//!
//! ## 概述
//!
//! 本 Pallet 实现双方授权的合婚流程与评分报告：
//! - 合婚请求（发起 / 授权 / 拒绝 / 取消）
//! - 评分报告生成（基于 `pallet-yuanfen-chart` 的命盘快照）
//! - 免费只读评分查询（不落链, 供 RPC 使用）
//!
//! ## 授权流程
//!
//! ```text
//! request_match ──> PendingAuthorization ──authorize_match──> Authorized ──generate_report──> Completed
//!                        │                                        │
//!                        ├─reject_match──> Rejected               └─cancel_match──> Cancelled
//!                        └─cancel_match──> Cancelled
//! ```
//!
//! 评分本身是纯函数（见 [`scoring`]）, 链上只负责授权与存档。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod relations;
pub mod scoring;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

/// 评分算法版本（常数变更时递增, 报告携带生成时版本）
pub const ALGORITHM_VERSION: u8 = 1;

#[frame_support::pallet]
pub mod pallet {
    use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
    use frame_support::pallet_prelude::*;
    use frame_system::pallet_prelude::*;
    use scale_info::TypeInfo;
    use sp_runtime::Saturating;

    use pallet_yuanfen_common::traits::ChartProvider;
    use pallet_yuanfen_common::types::{CompatLevel, CompatibilityResult, MatchStatus};

    use super::ALGORITHM_VERSION;
    use crate::scoring;
    use crate::weights::WeightInfo;

    /// 合婚请求
    #[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct MatchRequest<T: Config> {
        /// 发起方
        pub requester: T::AccountId,
        /// 发起方命盘
        pub requester_chart: u64,
        /// 对方
        pub target: T::AccountId,
        /// 对方命盘
        pub target_chart: u64,
        /// 当前状态
        pub status: MatchStatus,
        /// 发起区块
        pub created_at: BlockNumberFor<T>,
        /// 授权截止区块（含）
        pub expires_at: BlockNumberFor<T>,
    }

    /// 合婚报告（评分结果存档）
    #[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct CompatibilityReport<T: Config> {
        /// 报告 ID
        pub id: u64,
        /// 对应请求 ID
        pub request_id: u64,
        /// 评分结果
        pub result: CompatibilityResult,
        /// 生成区块
        pub generated_at: BlockNumberFor<T>,
        /// 生成时的算法版本
        pub algorithm_version: u8,
    }

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 命盘数据提供者（由运行时接入排盘 Pallet）
        type ChartProvider: ChartProvider<Self::AccountId>;

        /// 每个账户同时持有的请求数量上限（发起方与对方各自计数）
        #[pallet::constant]
        type MaxRequestsPerAccount: Get<u32>;

        /// 请求授权有效期（区块数）
        #[pallet::constant]
        type RequestExpiration: Get<BlockNumberFor<Self>>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// 下一个请求 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_request_id)]
    pub type NextRequestId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 下一个报告 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_report_id)]
    pub type NextReportId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 存储映射: 请求 ID -> 合婚请求
    #[pallet::storage]
    #[pallet::getter(fn request_by_id)]
    pub type Requests<T: Config> = StorageMap<_, Blake2_128Concat, u64, MatchRequest<T>>;

    /// 存储映射: 报告 ID -> 合婚报告
    #[pallet::storage]
    #[pallet::getter(fn report_by_id)]
    pub type Reports<T: Config> = StorageMap<_, Blake2_128Concat, u64, CompatibilityReport<T>>;

    /// 存储映射: 请求 ID -> 报告 ID（一请求一报告）
    #[pallet::storage]
    #[pallet::getter(fn report_of_request)]
    pub type ReportOfRequest<T: Config> = StorageMap<_, Blake2_128Concat, u64, u64>;

    /// 存储映射: 发起方 -> 请求 ID 列表
    #[pallet::storage]
    #[pallet::getter(fn requests_by_requester)]
    pub type RequestsByRequester<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxRequestsPerAccount>,
        ValueQuery,
    >;

    /// 存储映射: 对方 -> 请求 ID 列表
    #[pallet::storage]
    #[pallet::getter(fn requests_by_target)]
    pub type RequestsByTarget<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxRequestsPerAccount>,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 合婚请求发起 [请求ID, 发起方, 对方]
        MatchRequested {
            request_id: u64,
            requester: T::AccountId,
            target: T::AccountId,
        },
        /// 对方授权 [请求ID]
        MatchAuthorized { request_id: u64 },
        /// 对方拒绝 [请求ID]
        MatchRejected { request_id: u64 },
        /// 发起方取消 [请求ID]
        MatchCancelled { request_id: u64 },
        /// 报告生成 [请求ID, 报告ID, 分数, 等级]
        ReportGenerated {
            request_id: u64,
            report_id: u64,
            score: u8,
            level: CompatLevel,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// 请求未找到
        RequestNotFound,
        /// 命盘未找到
        ChartNotFound,
        /// 非命盘所有者
        NotChartOwner,
        /// 不能与自己合婚
        SelfMatchNotAllowed,
        /// 当前状态不允许该操作
        InvalidStatus,
        /// 该操作只允许请求相关方执行
        NotParticipant,
        /// 请求已过授权期
        RequestExpired,
        /// 请求数量过多
        TooManyRequests,
        /// 请求 ID 已达到最大值
        RequestIdOverflow,
        /// 该请求的报告已生成
        ReportAlreadyGenerated,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 发起合婚请求
        ///
        /// 发起方指定自己与对方的命盘。双方命盘都必须存在且归属正确,
        /// 请求进入待授权状态, 在 `RequestExpiration` 个区块内等待对方授权。
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::request_match())]
        pub fn request_match(
            origin: OriginFor<T>,
            requester_chart: u64,
            target: T::AccountId,
            target_chart: u64,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            ensure!(who != target, Error::<T>::SelfMatchNotAllowed);
            ensure!(
                T::ChartProvider::chart_exists(requester_chart),
                Error::<T>::ChartNotFound
            );
            ensure!(
                T::ChartProvider::chart_exists(target_chart),
                Error::<T>::ChartNotFound
            );
            ensure!(
                T::ChartProvider::is_chart_owner(requester_chart, &who),
                Error::<T>::NotChartOwner
            );
            ensure!(
                T::ChartProvider::is_chart_owner(target_chart, &target),
                Error::<T>::NotChartOwner
            );

            let request_id = NextRequestId::<T>::get();
            ensure!(request_id < u64::MAX, Error::<T>::RequestIdOverflow);

            let now = frame_system::Pallet::<T>::block_number();
            let request = MatchRequest::<T> {
                requester: who.clone(),
                requester_chart,
                target: target.clone(),
                target_chart,
                status: MatchStatus::PendingAuthorization,
                created_at: now,
                expires_at: now.saturating_add(T::RequestExpiration::get()),
            };

            RequestsByRequester::<T>::try_mutate(&who, |ids| {
                ids.try_push(request_id).map_err(|_| Error::<T>::TooManyRequests)
            })?;
            RequestsByTarget::<T>::try_mutate(&target, |ids| {
                ids.try_push(request_id).map_err(|_| Error::<T>::TooManyRequests)
            })?;
            Requests::<T>::insert(request_id, request);
            NextRequestId::<T>::put(request_id + 1);

            Self::deposit_event(Event::MatchRequested {
                request_id,
                requester: who,
                target,
            });

            Ok(())
        }

        /// 授权合婚请求（仅对方, 仅待授权状态, 有效期内）
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::authorize_match())]
        pub fn authorize_match(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe| -> DispatchResult {
                let request = maybe.as_mut().ok_or(Error::<T>::RequestNotFound)?;
                ensure!(request.target == who, Error::<T>::NotParticipant);
                ensure!(
                    request.status == MatchStatus::PendingAuthorization,
                    Error::<T>::InvalidStatus
                );
                ensure!(
                    frame_system::Pallet::<T>::block_number() <= request.expires_at,
                    Error::<T>::RequestExpired
                );
                request.status = MatchStatus::Authorized;
                Ok(())
            })?;

            Self::deposit_event(Event::MatchAuthorized { request_id });
            Ok(())
        }

        /// 拒绝合婚请求（仅对方, 仅待授权状态）
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::reject_match())]
        pub fn reject_match(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe| -> DispatchResult {
                let request = maybe.as_mut().ok_or(Error::<T>::RequestNotFound)?;
                ensure!(request.target == who, Error::<T>::NotParticipant);
                ensure!(
                    request.status == MatchStatus::PendingAuthorization,
                    Error::<T>::InvalidStatus
                );
                request.status = MatchStatus::Rejected;
                Ok(())
            })?;

            Self::deposit_event(Event::MatchRejected { request_id });
            Ok(())
        }

        /// 取消合婚请求（仅发起方, 报告生成前可取消）
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::cancel_match())]
        pub fn cancel_match(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe| -> DispatchResult {
                let request = maybe.as_mut().ok_or(Error::<T>::RequestNotFound)?;
                ensure!(request.requester == who, Error::<T>::NotParticipant);
                ensure!(
                    matches!(
                        request.status,
                        MatchStatus::PendingAuthorization | MatchStatus::Authorized
                    ),
                    Error::<T>::InvalidStatus
                );
                request.status = MatchStatus::Cancelled;
                Ok(())
            })?;

            Self::deposit_event(Event::MatchCancelled { request_id });
            Ok(())
        }

        /// 生成合婚报告（请求双方任一, 仅已授权状态, 一请求一报告）
        ///
        /// 按生成时刻的命盘快照评分并存档。命盘在授权后被删除则报告无法生成。
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::generate_report())]
        pub fn generate_report(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let mut request = Requests::<T>::get(request_id).ok_or(Error::<T>::RequestNotFound)?;
            ensure!(
                request.requester == who || request.target == who,
                Error::<T>::NotParticipant
            );
            ensure!(
                !ReportOfRequest::<T>::contains_key(request_id),
                Error::<T>::ReportAlreadyGenerated
            );
            ensure!(
                request.status == MatchStatus::Authorized,
                Error::<T>::InvalidStatus
            );

            let (sizhu_a, _) = T::ChartProvider::chart_sizhu(request.requester_chart)
                .ok_or(Error::<T>::ChartNotFound)?;
            let (sizhu_b, _) = T::ChartProvider::chart_sizhu(request.target_chart)
                .ok_or(Error::<T>::ChartNotFound)?;

            let result = scoring::calculate_compatibility(&sizhu_a, &sizhu_b);
            let score = result.score;
            let level = result.level;

            log::info!(
                target: "yuanfen-matching",
                "合婚报告: 请求 {} 得分 {} 等级 {:?}",
                request_id, score, level,
            );

            let report_id = NextReportId::<T>::get();
            let report = CompatibilityReport::<T> {
                id: report_id,
                request_id,
                result,
                generated_at: frame_system::Pallet::<T>::block_number(),
                algorithm_version: ALGORITHM_VERSION,
            };

            Reports::<T>::insert(report_id, report);
            ReportOfRequest::<T>::insert(request_id, report_id);
            NextReportId::<T>::put(report_id + 1);

            request.status = MatchStatus::Completed;
            Requests::<T>::insert(request_id, request);

            Self::deposit_event(Event::ReportGenerated {
                request_id,
                report_id,
                score,
                level,
            });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// 免费只读评分（供 RPC 使用, 不校验归属与授权, 不落链）
        pub fn compatibility_of(chart_a: u64, chart_b: u64) -> Option<CompatibilityResult> {
            let (sizhu_a, _) = T::ChartProvider::chart_sizhu(chart_a)?;
            let (sizhu_b, _) = T::ChartProvider::chart_sizhu(chart_b)?;
            Some(scoring::calculate_compatibility(&sizhu_a, &sizhu_b))
        }
    }
}
