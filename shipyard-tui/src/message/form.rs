//! 表单消息类型

/// 表单与船舶列表相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 开始添加
    Add,

    /// 开始编辑选中项
    Edit,

    /// 请求删除选中项（弹出确认框）
    Delete,

    /// 提交
    Submit,

    /// 放弃编辑
    Cancel,

    /// 列表：上一项
    SelectPrevious,

    /// 列表：下一项
    SelectNext,

    /// 列表：第一项
    SelectFirst,

    /// 列表：最后一项
    SelectLast,

    /// 列表：取消选中
    SelectNone,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 向当前字段输入字符
    Input(char),

    /// 删除当前字段最后一个字符
    Backspace,
}
