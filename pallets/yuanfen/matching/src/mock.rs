//! 合婚模块测试 Mock

use crate as pallet_yuanfen_matching;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use pallet_yuanfen_chart::{SiZhu, WuXingPower};
use pallet_yuanfen_common::traits::ChartProvider;
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        SajuChart: pallet_yuanfen_chart,
        Matching: pallet_yuanfen_matching,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
}

impl pallet_yuanfen_chart::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxChartsPerAccount = ConstU32<8>;
    type WeightInfo = ();
}

/// 把排盘 Pallet 接成命盘数据提供者（运行时侧采用同样的适配）
pub struct SajuChartProvider;
impl ChartProvider<u64> for SajuChartProvider {
    fn chart_exists(chart_id: u64) -> bool {
        SajuChart::chart_exists(chart_id)
    }
    fn is_chart_owner(chart_id: u64, who: &u64) -> bool {
        SajuChart::chart_owner(chart_id).as_ref() == Some(who)
    }
    fn chart_sizhu(chart_id: u64) -> Option<(SiZhu, WuXingPower)> {
        SajuChart::chart_sizhu(chart_id)
    }
}

impl pallet_yuanfen_matching::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type ChartProvider = SajuChartProvider;
    type MaxRequestsPerAccount = ConstU32<16>;
    type RequestExpiration = ConstU64<100>;
    type WeightInfo = ();
}

/// 构建测试外部环境
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default()
        .build_storage()
        .unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
    });
    ext
}

/// 测试账户
pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CHARLIE: u64 = 3;

/// 为账户创建命盘并返回命盘 ID
pub fn create_chart_for(who: u64, year: u16, month: u8, day: u8) -> u64 {
    use pallet_yuanfen_chart::types::BirthDate;

    let next = SajuChart::next_chart_id();
    frame_support::assert_ok!(SajuChart::create_chart(
        RuntimeOrigin::signed(who),
        None,
        BirthDate { year, month, day, is_lunar: false },
        None,
    ));
    next
}
