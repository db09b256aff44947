//! 核心类型定义 - 键、值、条目和操作类型

use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// 键类型 - 字符串或整数
///
/// 整数键在哈希前转换为十进制字符串，因此 `Key::Int(42)` 与
/// `Key::Str("42")` 落在同一个桶中，但两者并不相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl Key {
    /// 参与哈希计算的文本表示
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) => Cow::Borrowed(s.as_str()),
            Key::Int(n) => Cow::Owned(n.to_string()),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{:?}", s),
            Key::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n as i64)
    }
}

/// 值类型 - 字符串或整数
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Str(String),
    Int(i64),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Int(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

/// 桶内条目 - 拥有所有权的键值对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Key,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// 哈希表状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableState {
    /// 正常读写
    #[default]
    Stable,
    /// 扩容重哈希进行中（仅在 add 内部短暂出现）
    Rehashing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入操作
    Insert,
    /// 获取操作
    Get,
    /// 更新操作
    Update,
    /// 删除操作
    Remove,
    /// 扩容重哈希
    Rehash,
}

impl OperationType {
    /// 全部操作类型，按导出顺序排列
    pub const ALL: [OperationType; 5] = [
        OperationType::Insert,
        OperationType::Get,
        OperationType::Update,
        OperationType::Remove,
        OperationType::Rehash,
    ];

    /// 判断是否为读操作
    pub fn is_read(&self) -> bool {
        matches!(self, OperationType::Get)
    }

    /// 判断是否为写操作
    pub fn is_write(&self) -> bool {
        !self.is_read()
    }

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Get => "get",
            OperationType::Update => "update",
            OperationType::Remove => "remove",
            OperationType::Rehash => "rehash",
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_key_text() {
        assert_eq!(Key::from(42).as_text(), "42");
        assert_eq!(Key::from(-7i64).as_text(), "-7");
        assert_eq!(Key::from("abc").as_text(), "abc");
    }

    #[test]
    fn test_int_and_str_keys_differ() {
        assert_ne!(Key::from(1), Key::from("1"));
        assert!(Key::from(1).is_int());
        assert!(!Key::from("1").is_int());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(5).as_int(), Some(5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from("x").as_int(), None);
    }

    #[test]
    fn test_display() {
        let entry = Entry::new("a", 1);
        assert_eq!(entry.to_string(), "\"a\": 1");
        assert_eq!(Entry::new(3, "v").to_string(), "3: \"v\"");
    }

    #[test]
    fn test_operation_type() {
        assert!(OperationType::Get.is_read());
        assert!(OperationType::Rehash.is_write());
        assert_eq!(OperationType::Update.as_str(), "update");
        assert_eq!(OperationType::ALL.len(), 5);
    }
}
