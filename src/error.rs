//! 统一错误处理 - 哈希表可能出现的错误类型

/// 链式哈希表可能发生的错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("哈希表尚未初始化，请先调用 initialize()")]
    Uninitialized,

    #[error("哈希表已经初始化 (桶数量: {size})")]
    AlreadyInitialized {
        size: usize,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("扩容溢出，无法将桶数量从 {size} 翻倍")]
    CapacityOverflow {
        size: usize,
    },

    #[error("键不存在: {key}")]
    KeyNotFound {
        key: String,
    },
}

impl TableError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Uninitialized => Some("在 add 之前调用 initialize()"),
            Self::AlreadyInitialized { .. } => Some("initialize() 只需调用一次"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::CapacityOverflow { .. } => Some("减少条目数量或调低初始桶数量"),
            Self::KeyNotFound { .. } => Some("确认键是否已插入"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CapacityOverflow { .. })
    }
}
