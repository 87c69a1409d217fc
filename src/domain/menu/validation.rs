//! Menu Context - Validation Rules
//!
//! 纯函数规则集：对原始 JSON 载荷逐条校验，全部规则都会执行（不短路），
//! 每条失败规则贡献一条固定文案的违规信息，顺序与规则顺序一致。

use serde_json::{Map, Value};

use super::Category;

pub const NAME_MESSAGE: &str = "Item must be a string with at least 3 characters.";
pub const DESCRIPTION_MESSAGE: &str = "Description must be string with at least 10 characters.";
pub const PRICE_MESSAGE: &str = "Price must be a number greater than 0.";
// 缺少空格是既有接口文案的一部分，客户端按原文匹配
pub const CATEGORY_MESSAGE: &str = "Categorymust be appetizer, entree, dessert, or beverage";
pub const INGREDIENTS_MESSAGE: &str = "Ingredients must be an array with at least 1 item.";
pub const AVAILABLE_MESSAGE: &str = "Availability must be a boolean.";

const NAME_MIN_CHARS: usize = 3;
const DESCRIPTION_MIN_CHARS: usize = 10;

/// 单条校验规则
struct Rule {
    field: &'static str,
    message: &'static str,
    check: fn(Option<&Value>) -> bool,
}

const RULES: [Rule; 6] = [
    Rule {
        field: "name",
        message: NAME_MESSAGE,
        check: is_valid_name,
    },
    Rule {
        field: "description",
        message: DESCRIPTION_MESSAGE,
        check: is_valid_description,
    },
    Rule {
        field: "price",
        message: PRICE_MESSAGE,
        check: is_positive_number,
    },
    Rule {
        field: "category",
        message: CATEGORY_MESSAGE,
        check: is_known_category,
    },
    Rule {
        field: "ingredients",
        message: INGREDIENTS_MESSAGE,
        check: is_non_empty_string_list,
    },
    Rule {
        field: "available",
        message: AVAILABLE_MESSAGE,
        check: is_optional_bool,
    },
];

/// 校验菜单项载荷，返回违规信息（为空表示通过）
///
/// 非对象载荷按空对象处理
pub fn validate_menu_payload(payload: &Value) -> Vec<String> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    RULES
        .iter()
        .filter(|rule| !(rule.check)(fields.get(rule.field)))
        .map(|rule| rule.message.to_string())
        .collect()
}

fn is_valid_name(value: Option<&Value>) -> bool {
    has_trimmed_chars(value, NAME_MIN_CHARS)
}

fn is_valid_description(value: Option<&Value>) -> bool {
    has_trimmed_chars(value, DESCRIPTION_MIN_CHARS)
}

fn has_trimmed_chars(value: Option<&Value>, min: usize) -> bool {
    value
        .and_then(Value::as_str)
        .map(|s| s.trim().chars().count() >= min)
        .unwrap_or(false)
}

fn is_positive_number(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .map(|price| price.is_finite() && price > 0.0)
        .unwrap_or(false)
}

fn is_known_category(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .map(|s| s.parse::<Category>().is_ok())
        .unwrap_or(false)
}

fn is_non_empty_string_list(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_array)
        .map(|items| !items.is_empty() && items.iter().all(Value::is_string))
        .unwrap_or(false)
}

fn is_optional_bool(value: Option<&Value>) -> bool {
    value.map(Value::is_boolean).unwrap_or(true)
}
