//! Catalog queries

/// 品类编号之间的分隔符
pub const ITEM_TYPE_DELIMITER: char = ',';

/// 列出所有品类查询
#[derive(Debug, Clone, Default)]
pub struct ListCategoryTypesQuery;

/// 按品类编号查询价格
#[derive(Debug, Clone)]
pub struct ListItemsByTypeQuery {
    /// 逗号分隔的品类编号，如 "0,3"
    pub item_types: String,
}

impl ListItemsByTypeQuery {
    pub fn new(item_types: impl Into<String>) -> Self {
        Self {
            item_types: item_types.into(),
        }
    }

    /// 按分隔符拆分出的键，保留顺序、重复和首尾空白
    ///
    /// 空字符串拆分出一个空键。
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.item_types.split(ITEM_TYPE_DELIMITER)
    }
}

/// 品类（不含价格）
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryType {
    pub name: String,
    pub type_code: i32,
}

/// 品类价格
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPrice {
    pub price: f64,
    pub type_code: i32,
}
