//! 产品目录数据模型，服务端与客户端共用同一份定义

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 产品分类，每个产品内嵌一份副本
///
/// 解码时缺失的字段取默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// 产品记录，解码时缺失的字段取默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// 定点小数，线上格式为 JSON 数字
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    pub category: Category,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Product {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        stock: u32,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            category,
        }
    }
}
