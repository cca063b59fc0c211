//! 焦点状态定义

use shipyard_core::Field;

/// 编辑时光标所在的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFocus(Field);

impl Default for FieldFocus {
    fn default() -> Self {
        Self(Field::Name)
    }
}

impl FieldFocus {
    pub fn on(field: Field) -> Self {
        Self(field)
    }

    /// 当前字段
    pub fn field(self) -> Field {
        self.0
    }

    /// 下一个字段（循环）
    pub fn next(self) -> Self {
        Self(self.0.next())
    }

    /// 上一个字段（循环）
    pub fn prev(self) -> Self {
        Self(self.0.prev())
    }

    pub fn is(self, field: Field) -> bool {
        self.0 == field
    }
}
