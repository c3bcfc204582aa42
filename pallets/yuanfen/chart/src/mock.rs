//! 排盘模块测试 Mock

use crate as pallet_yuanfen_chart;
use frame_support::{derive_impl, traits::ConstU32};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        SajuChart: pallet_yuanfen_chart,
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
