//! RosterSystem - 教务花名册后端服务
//!
//! 基于 Actix Web 构建的教师/课程/学生花名册查询服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `roster`: 花名册衍生操作（随机分组、最高分学生）
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod roster;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
