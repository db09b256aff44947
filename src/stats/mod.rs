//! 统计模块 - 统一管理哈希表操作指标

pub mod operation;
pub mod recorder;

use std::{sync::Arc, time::Duration};

pub use operation::{AtomicOperationStats, OperationRecorder, OperationStatsSnapshot};
pub use recorder::{AtomicStatsRecorder, DisabledStatsRecorder, StatsRecorder, StatsRecorderFactory};

use crate::types::OperationType;

/// 全局统计记录器
pub static GLOBAL_STATS: once_cell::sync::Lazy<Arc<dyn StatsRecorder>> =
    once_cell::sync::Lazy::new(|| Arc::new(AtomicStatsRecorder::new()));

/// 获取全局记录器句柄
pub fn global_recorder() -> Arc<dyn StatsRecorder> {
    Arc::clone(&GLOBAL_STATS)
}

/// 记录操作统计
pub fn record_operation(op_type: OperationType, duration: Duration, success: bool) {
    GLOBAL_STATS.record_operation(op_type, duration, success);
}

/// 获取操作统计快照
pub fn operation_snapshot() -> OperationStatsSnapshot {
    GLOBAL_STATS.snapshot()
}

/// 重置所有统计
pub fn reset_stats() {
    GLOBAL_STATS.reset();
}

/// 导出Prometheus格式指标
pub fn export_prometheus() -> String {
    GLOBAL_STATS.export_prometheus()
}
