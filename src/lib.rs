//! HWPortal Client - 作业门户的无界面客户端
//!
//! 基于 Tokio 和 reqwest 实现作业列表页的交互逻辑。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 服务端接口的数据模型
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（作业、统计、账号、会话监控）
//! - `transport`: HTTP 传输层
//! - `ui`: 页面状态与界面宿主
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod transport;
pub mod ui;
pub mod utils;
