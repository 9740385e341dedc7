//! Domain to Proto conversions

use crate::application::{CategoryType, ItemPrice};
use crate::proto;

pub fn category_type_to_proto(category: CategoryType) -> proto::CategoryTypeDto {
    proto::CategoryTypeDto {
        name: category.name,
        type_code: category.type_code,
    }
}

pub fn item_price_to_proto(item: ItemPrice) -> proto::ItemDto {
    proto::ItemDto {
        price: item.price,
        type_code: item.type_code,
    }
}
