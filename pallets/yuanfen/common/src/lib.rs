//! # 缘分模块 - 共享类型和工具
//!
//! 本模块提供合婚系统的共享类型定义和 Trait 接口。
//!
//! ## 功能概述
//!
//! - **类型定义**：合婚等级、关系标签、评分明细、匹配状态等
//! - **Trait 接口**：命盘数据提供者
//!
//! ## 模块结构
//!
//! ```text
//! pallet-yuanfen-common
//! ├── types.rs    # 共享类型定义
//! └── traits.rs   # Trait 接口定义
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod traits;

pub use types::*;
pub use traits::*;
