//! Menu Context - Entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::validate_menu_payload;
use super::{Category, MenuItemId};

/// 菜单项
///
/// 不变量:
/// - id 由 Store 分配，创建后不可变
/// - 其余字段在创建/更新时已通过全部校验规则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

impl MenuItem {
    pub fn from_draft(id: MenuItemId, draft: MenuItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            ingredients: draft.ingredients,
            available: draft.available,
        }
    }

    /// 整体替换除 id 外的所有字段
    pub fn replace_with(&mut self, draft: MenuItemDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}

/// 已校验的菜单项载荷（不含 id）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItemDraft {
    /// 从原始 JSON 载荷构建
    ///
    /// 先执行全部校验规则，任一失败则按规则顺序返回全部违规信息；
    /// 通过后 name/description 以去除首尾空白后的值存储，
    /// available 缺省为 true
    pub fn try_from_payload(payload: Value) -> Result<Self, Vec<String>> {
        let violations = validate_menu_payload(&payload);
        if !violations.is_empty() {
            return Err(violations);
        }

        let mut draft: MenuItemDraft =
            serde_json::from_value(payload).map_err(|e| vec![e.to_string()])?;
        draft.name = draft.name.trim().to_string();
        draft.description = draft.description.trim().to_string();
        Ok(draft)
    }
}
