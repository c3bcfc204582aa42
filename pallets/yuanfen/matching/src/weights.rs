//! # Yuanfen Matching Pallet Weights
//!
//! 合婚模块权重定义

use frame_support::{traits::Get, weights::Weight};

/// 权重信息 Trait
pub trait WeightInfo {
    fn request_match() -> Weight;
    fn authorize_match() -> Weight;
    fn reject_match() -> Weight;
    fn cancel_match() -> Weight;
    fn generate_report() -> Weight;
}

/// Substrate 权重实现
pub struct SubstrateWeight<T>(core::marker::PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn request_match() -> Weight {
        Weight::from_parts(50_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn authorize_match() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn reject_match() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn cancel_match() -> Weight {
        Weight::from_parts(30_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn generate_report() -> Weight {
        Weight::from_parts(120_000_000, 0)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(4))
    }
}

/// 默认权重实现（用于测试）
impl WeightInfo for () {
    fn request_match() -> Weight { Weight::from_parts(50_000_000, 0) }
    fn authorize_match() -> Weight { Weight::from_parts(30_000_000, 0) }
    fn reject_match() -> Weight { Weight::from_parts(30_000_000, 0) }
    fn cancel_match() -> Weight { Weight::from_parts(30_000_000, 0) }
    fn generate_report() -> Weight { Weight::from_parts(120_000_000, 0) }
}
