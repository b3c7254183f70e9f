// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TxKind;

/// Static reference entry of the category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Display name used when a transaction references an id the catalog
/// does not know.
pub const FALLBACK_NAME: &str = "Неизвестно";
pub const FALLBACK_COLOR: &str = "#999";

pub static INCOME: &[Category] = &[
    Category { id: "salary", name: "Зарплата", color: "#2ecc71", icon: "💼" },
    Category { id: "freelance", name: "Фриланс", color: "#27ae60", icon: "💻" },
    Category { id: "investment", name: "Инвестиции", color: "#3498db", icon: "📈" },
    Category { id: "gift", name: "Подарки", color: "#9b59b6", icon: "🎁" },
    Category { id: "other_income", name: "Другие доходы", color: "#34495e", icon: "💰" },
];

pub static EXPENSE: &[Category] = &[
    Category { id: "food", name: "Еда", color: "#e74c3c", icon: "🍕" },
    Category { id: "transport", name: "Транспорт", color: "#e67e22", icon: "🚗" },
    Category { id: "entertainment", name: "Развлечения", color: "#f39c12", icon: "🎬" },
    Category { id: "shopping", name: "Шоппинг", color: "#d35400", icon: "🛍️" },
    Category { id: "health", name: "Здоровье", color: "#c0392b", icon: "🏥" },
    Category { id: "bills", name: "Коммуналка", color: "#16a085", icon: "🏠" },
    Category { id: "education", name: "Образование", color: "#2980b9", icon: "📚" },
    Category { id: "other_expense", name: "Другие расходы", color: "#7f8c8d", icon: "📦" },
];

pub fn by_kind(kind: TxKind) -> &'static [Category] {
    match kind {
        TxKind::Income => INCOME,
        TxKind::Expense => EXPENSE,
    }
}

/// Looks an id up across both partitions.
pub fn find(id: &str) -> Option<&'static Category> {
    all().find(|c| c.id == id)
}

pub fn all() -> impl Iterator<Item = &'static Category> {
    INCOME.iter().chain(EXPENSE.iter())
}
