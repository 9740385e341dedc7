//! 商品目录
//!
//! 品类编号 → 品类记录的只读映射。进程启动时构建一次，之后只读，
//! 由调用方显式持有并通过 `Arc` 注入服务。

use std::collections::HashMap;

use thiserror::Error;

/// 目录构建错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog key {key:?} does not match type code {type_code}")]
    KeyMismatch { key: String, type_code: i32 },

    #[error("Duplicate catalog key: {0}")]
    DuplicateKey(String),
}

/// 品类记录
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    /// 品类名称（如: ESPRESSO）
    name: String,
    /// 品类编号
    type_code: i32,
    /// 单价
    price: f64,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>, type_code: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            type_code,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_code(&self) -> i32 {
        self.type_code
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// 目录中的查询键，即品类编号的十进制字符串
    pub fn key(&self) -> String {
        self.type_code.to_string()
    }
}

/// 商品目录
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CategoryRecord>,
}

impl Catalog {
    /// 由品类记录构建目录，键从 `type_code` 推导
    pub fn new(records: impl IntoIterator<Item = CategoryRecord>) -> Result<Self, CatalogError> {
        Self::from_entries(records.into_iter().map(|record| (record.key(), record)))
    }

    /// 由显式的 (键, 记录) 构建目录
    ///
    /// 键必须等于记录 `type_code` 的十进制字符串，且不能重复。
    pub fn from_entries<K>(
        entries: impl IntoIterator<Item = (K, CategoryRecord)>,
    ) -> Result<Self, CatalogError>
    where
        K: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, record) in entries {
            let key = key.into();
            if key != record.key() {
                return Err(CatalogError::KeyMismatch {
                    key,
                    type_code: record.type_code,
                });
            }
            if map.contains_key(&key) {
                return Err(CatalogError::DuplicateKey(key));
            }
            map.insert(key, record);
        }
        Ok(Self { entries: map })
    }

    /// 咖啡店的标准目录
    pub fn coffeeshop() -> Result<Self, CatalogError> {
        Self::new([
            CategoryRecord::new("CAPPUCCINO", 0, 4.5),
            CategoryRecord::new("COFFEE_BLACK", 1, 3.0),
            CategoryRecord::new("COFFEE_WITH_ROOM", 2, 3.0),
            CategoryRecord::new("ESPRESSO", 3, 3.5),
            CategoryRecord::new("ESPRESSO_DOUBLE", 4, 4.5),
            CategoryRecord::new("LATTE", 5, 4.5),
            CategoryRecord::new("CAKEPOP", 6, 2.5),
            CategoryRecord::new("CROISSANT", 7, 3.25),
            CategoryRecord::new("MUFFIN", 8, 3.0),
            CategoryRecord::new("CROISSANT_CHOCOLATE", 9, 3.5),
        ])
    }

    /// 按键查找，未知键返回 `None`
    pub fn lookup(&self, key: &str) -> Option<&CategoryRecord> {
        self.entries.get(key)
    }

    /// 遍历所有条目，顺序不固定
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CategoryRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffeeshop_catalog() {
        let catalog = Catalog::coffeeshop().unwrap();

        assert_eq!(catalog.len(), 10);
        for (key, record) in catalog.entries() {
            assert_eq!(key, record.type_code().to_string());
        }
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let catalog = Catalog::coffeeshop().unwrap();

        let espresso = catalog.lookup("3").expect("ESPRESSO should be present");
        assert_eq!(espresso, &CategoryRecord::new("ESPRESSO", 3, 3.5));

        let croissant = catalog.lookup("7").unwrap();
        assert_eq!(croissant.name(), "CROISSANT");
        assert_eq!(croissant.price(), 3.25);

        assert!(catalog.lookup("99").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup(" 3").is_none());
        assert!(catalog.lookup("03").is_none());
    }

    #[test]
    fn test_lookup_returns_inserted_records() {
        let records = vec![
            CategoryRecord::new("TEA", 10, 2.0),
            CategoryRecord::new("SCONE", 11, 2.75),
        ];
        let catalog = Catalog::new(records.clone()).unwrap();

        for record in &records {
            assert_eq!(catalog.lookup(&record.key()), Some(record));
        }
        assert!(catalog.lookup("0").is_none());
    }

    #[test]
    fn test_from_entries_rejects_key_mismatch() {
        let result = Catalog::from_entries([("1", CategoryRecord::new("LATTE", 5, 4.5))]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::KeyMismatch {
                key: "1".to_string(),
                type_code: 5,
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_type_code() {
        let result = Catalog::new([
            CategoryRecord::new("LATTE", 5, 4.5),
            CategoryRecord::new("LATTE_LARGE", 5, 5.0),
        ]);

        assert_eq!(result.unwrap_err(), CatalogError::DuplicateKey("5".to_string()));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.entries().count(), 0);
        assert!(catalog.lookup("0").is_none());
    }
}
