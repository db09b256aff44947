// src/stats/operation.rs
//! 操作统计 - 跟踪哈希表各类操作的次数与耗时

use crate::types::OperationType;
use std::{
    fmt::Write as _,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录操作
    fn record(&self, op_type: OperationType, duration: Duration, success: bool);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub insert_count: u64,
    pub get_count: u64,
    pub update_count: u64,
    pub remove_count: u64,
    pub rehash_count: u64,
    /// update/remove/get 未命中次数
    pub miss_count: u64,
    pub total_duration: u64, // 纳秒
}

impl OperationStatsSnapshot {
    pub fn count(&self, op_type: OperationType) -> u64 {
        match op_type {
            OperationType::Insert => self.insert_count,
            OperationType::Get => self.get_count,
            OperationType::Update => self.update_count,
            OperationType::Remove => self.remove_count,
            OperationType::Rehash => self.rehash_count,
        }
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    insert_count: AtomicU64,
    get_count: AtomicU64,
    update_count: AtomicU64,
    remove_count: AtomicU64,
    rehash_count: AtomicU64,
    miss_count: AtomicU64,
    total_duration: AtomicU64, // 纳秒
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::Insert => &self.insert_count,
            OperationType::Get => &self.get_count,
            OperationType::Update => &self.update_count,
            OperationType::Remove => &self.remove_count,
            OperationType::Rehash => &self.rehash_count,
        }
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType, duration: Duration, success: bool) {
        self.counter(op_type).fetch_add(1, Ordering::Relaxed);
        self.total_duration
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if !success {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            insert_count: self.insert_count.load(Ordering::Relaxed),
            get_count: self.get_count.load(Ordering::Relaxed),
            update_count: self.update_count.load(Ordering::Relaxed),
            remove_count: self.remove_count.load(Ordering::Relaxed),
            rehash_count: self.rehash_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            total_duration: self.total_duration.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for op in OperationType::ALL {
            self.counter(op).store(0, Ordering::Relaxed);
        }
        self.miss_count.store(0, Ordering::Relaxed);
        self.total_duration.store(0, Ordering::Relaxed);
    }

    fn export_prometheus(&self) -> String {
        let mut output = String::new();

        for op in OperationType::ALL {
            let count = self.counter(op).load(Ordering::Relaxed);
            let _ = writeln!(
                output,
                "# HELP chained_table_operation_{}_count Total {} operations",
                op.as_str(),
                op.as_str()
            );
            let _ = writeln!(output, "# TYPE chained_table_operation_{}_count counter", op.as_str());
            let _ = writeln!(output, "chained_table_operation_{}_count {}", op.as_str(), count);
        }

        // 总耗时和未命中计数
        output.push_str("# HELP chained_table_operation_total_duration Total operation duration (ns)\n");
        output.push_str("# TYPE chained_table_operation_total_duration counter\n");
        let _ = writeln!(
            output,
            "chained_table_operation_total_duration {}",
            self.total_duration.load(Ordering::Relaxed)
        );

        output.push_str("# HELP chained_table_operation_miss_count Total lookups that found no key\n");
        output.push_str("# TYPE chained_table_operation_miss_count counter\n");
        let _ = writeln!(
            output,
            "chained_table_operation_miss_count {}",
            self.miss_count.load(Ordering::Relaxed)
        );

        output
    }
}

/// 禁用操作统计实现
#[derive(Default)]
pub struct DisabledOperationRecorder;

impl OperationRecorder for DisabledOperationRecorder {
    fn record(&self, _op_type: OperationType, _duration: Duration, _success: bool) {}
    fn snapshot(&self) -> OperationStatsSnapshot { OperationStatsSnapshot::default() }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String { String::new() }
}
