//! 类型定义模块

mod field;
mod ship;

pub use field::{Field, FieldValues};
pub use ship::ShipRecord;
