//! 合婚模块基准测试
//!
//! 基准直接经由排盘 Pallet 准备命盘, 运行时需以其作为 `ChartProvider` 接线。

use super::*;
use crate::pallet::Pallet as Matching;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet_yuanfen_chart::types::BirthDate;
use pallet_yuanfen_common::types::MatchStatus;

fn make_chart<T: Config + pallet_yuanfen_chart::Config>(who: &T::AccountId, day: u8) -> u64 {
    let chart_id = pallet_yuanfen_chart::Pallet::<T>::next_chart_id();
    pallet_yuanfen_chart::Pallet::<T>::create_chart(
        RawOrigin::Signed(who.clone()).into(),
        None,
        BirthDate { year: 1990, month: 1, day, is_lunar: false },
        None,
    )
    .unwrap();
    chart_id
}

#[benchmarks(where T: pallet_yuanfen_chart::Config)]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn request_match() {
        let requester: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let requester_chart = make_chart::<T>(&requester, 1);
        let target_chart = make_chart::<T>(&target, 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(requester.clone()), requester_chart, target.clone(), target_chart);

        assert!(Requests::<T>::contains_key(0));
    }

    #[benchmark]
    fn authorize_match() {
        let requester: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let requester_chart = make_chart::<T>(&requester, 1);
        let target_chart = make_chart::<T>(&target, 2);
        Matching::<T>::request_match(
            RawOrigin::Signed(requester).into(),
            requester_chart,
            target.clone(),
            target_chart,
        )
        .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(target), 0);

        assert_eq!(Requests::<T>::get(0).unwrap().status, MatchStatus::Authorized);
    }

    #[benchmark]
    fn reject_match() {
        let requester: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let requester_chart = make_chart::<T>(&requester, 1);
        let target_chart = make_chart::<T>(&target, 2);
        Matching::<T>::request_match(
            RawOrigin::Signed(requester).into(),
            requester_chart,
            target.clone(),
            target_chart,
        )
        .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(target), 0);

        assert_eq!(Requests::<T>::get(0).unwrap().status, MatchStatus::Rejected);
    }

    #[benchmark]
    fn cancel_match() {
        let requester: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let requester_chart = make_chart::<T>(&requester, 1);
        let target_chart = make_chart::<T>(&target, 2);
        Matching::<T>::request_match(
            RawOrigin::Signed(requester.clone()).into(),
            requester_chart,
            target,
            target_chart,
        )
        .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(requester), 0);

        assert_eq!(Requests::<T>::get(0).unwrap().status, MatchStatus::Cancelled);
    }

    #[benchmark]
    fn generate_report() {
        let requester: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let requester_chart = make_chart::<T>(&requester, 1);
        let target_chart = make_chart::<T>(&target, 2);
        Matching::<T>::request_match(
            RawOrigin::Signed(requester.clone()).into(),
            requester_chart,
            target.clone(),
            target_chart,
        )
        .unwrap();
        Matching::<T>::authorize_match(RawOrigin::Signed(target).into(), 0).unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(requester), 0);

        assert!(Reports::<T>::contains_key(0));
        assert_eq!(Requests::<T>::get(0).unwrap().status, MatchStatus::Completed);
    }

    impl_benchmark_test_suite!(Matching, crate::mock::new_test_ext(), crate::mock::Test);
}
