//! Business logic handler

use std::sync::Arc;

use crate::domain::Catalog;

use super::queries::*;

/// 目录查询处理器
///
/// 只读访问共享目录，可被任意多个请求并发调用。
pub struct ServiceHandler {
    catalog: Arc<Catalog>,
}

impl ServiceHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 列出所有品类，价格不在结果中
    pub fn list_category_types(&self, _query: ListCategoryTypesQuery) -> Vec<CategoryType> {
        self.catalog
            .entries()
            .map(|(_, record)| CategoryType {
                name: record.name().to_string(),
                type_code: record.type_code(),
            })
            .collect()
    }

    /// 按输入顺序查询每个品类的价格
    ///
    /// 未知编号不是错误：跳过且不产生占位项。重复编号产生重复结果。
    pub fn list_items_by_type(&self, query: &ListItemsByTypeQuery) -> Vec<ItemPrice> {
        let mut items = Vec::new();
        for key in query.keys() {
            let Some(record) = self.catalog.lookup(key) else {
                continue;
            };
            items.push(ItemPrice {
                price: record.price(),
                type_code: record.type_code(),
            });
        }
        items
    }
}
