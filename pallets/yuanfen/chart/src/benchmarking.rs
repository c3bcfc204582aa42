//! 排盘模块基准测试

use super::*;
use crate::pallet::Pallet as YuanfenChart;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_chart() {
        let caller: T::AccountId = whitelisted_caller();
        let birth_date = BirthDate { year: 1990, month: 1, day: 1, is_lunar: false };
        let birth_time = Some(BirthTime { hour: 12, minute: 0 });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), None, birth_date, birth_time);

        assert!(ChartById::<T>::contains_key(0));
        assert_eq!(UserCharts::<T>::get(&caller).len(), 1);
    }

    #[benchmark]
    fn delete_chart() {
        let caller: T::AccountId = whitelisted_caller();
        let birth_date = BirthDate { year: 1990, month: 1, day: 1, is_lunar: false };
        YuanfenChart::<T>::create_chart(
            RawOrigin::Signed(caller.clone()).into(),
            None,
            birth_date,
            None,
        )
        .unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 0);

        assert!(!ChartById::<T>::contains_key(0));
        assert!(UserCharts::<T>::get(&caller).is_empty());
    }

    impl_benchmark_test_suite!(YuanfenChart, crate::mock::new_test_ext(), crate::mock::Test);
}
