//! 订单计价
//!
//! 与象棋引擎完全独立：满额立减、指定品类买一送一、批量折扣。
//! 金额均为整数（最小货币单位）。

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub unit_price: i64,
}

fn default_category() -> String {
    "general".to_string()
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, unit_price: i64) -> Self {
        Product {
            name: name.into(),
            category: category.into(),
            unit_price,
        }
    }
}

/// 满额立减
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdDiscount {
    pub threshold: i64,
    pub discount: i64,
}

/// 批量折扣：每满 `min_quantity` 件打 `rate` 折扣（百分比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDiscount {
    pub min_quantity: i64,
    pub rate: i64,
}

/// 促销配置，缺省为不打折
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    pub threshold: Option<ThresholdDiscount>,
    pub buy_one_get_one_category: Option<String>,
    pub bulk: Option<BulkDiscount>,
}

/// 订单行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i64,
}

/// 计价结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub original_amount: i64,
    pub discount: i64,
    pub bulk_discount: i64,
    pub total_amount: i64,
    /// 商品名 -> 实际到手数量（含赠品）
    pub product_quantities: BTreeMap<String, i64>,
}

impl OrderSummary {
    /// 某商品到手数量，不存在时为 0
    pub fn quantity_of(&self, product_name: &str) -> i64 {
        self.product_quantities
            .get(product_name)
            .copied()
            .unwrap_or(0)
    }
}

/// 订单
#[derive(Debug, Clone, Default)]
pub struct OrderService {
    config: PromotionConfig,
    items: Vec<OrderItem>,
}

impl OrderService {
    pub fn new() -> Self {
        OrderService::default()
    }

    pub fn with_config(config: PromotionConfig) -> Self {
        OrderService {
            config,
            items: Vec::new(),
        }
    }

    pub fn config(&self) -> &PromotionConfig {
        &self.config
    }

    pub fn configure_threshold_discount(&mut self, threshold: i64, discount: i64) {
        self.config.threshold = Some(ThresholdDiscount {
            threshold,
            discount,
        });
    }

    pub fn configure_buy_one_get_one(&mut self, category: impl Into<String>) {
        self.config.buy_one_get_one_category = Some(category.into());
    }

    pub fn configure_bulk_discount(&mut self, min_quantity: i64, rate: i64) {
        self.config.bulk = Some(BulkDiscount { min_quantity, rate });
    }

    pub fn add_product(&mut self, product: Product, quantity: i64) {
        self.items.push(OrderItem { product, quantity });
    }

    pub fn calculate_order(&self) -> OrderSummary {
        let mut summary = OrderSummary::default();

        for item in &self.items {
            summary.original_amount += item.product.unit_price * item.quantity;
            summary
                .product_quantities
                .insert(item.product.name.clone(), self.final_quantity(item));
        }

        summary.bulk_discount = self.bulk_discount();

        if let Some(td) = self.config.threshold {
            if td.threshold > 0 && summary.original_amount >= td.threshold {
                summary.discount = td.discount;
            }
        }

        summary.total_amount = summary.original_amount - summary.discount - summary.bulk_discount;
        debug!(
            "order: original={} discount={} bulk={} total={}",
            summary.original_amount, summary.discount, summary.bulk_discount, summary.total_amount
        );
        summary
    }

    /// 买一送一：每个符合品类的订单行固定多送一件
    fn final_quantity(&self, item: &OrderItem) -> i64 {
        match &self.config.buy_one_get_one_category {
            Some(category) if *category == item.product.category => item.quantity + 1,
            _ => item.quantity,
        }
    }

    fn bulk_discount(&self) -> i64 {
        let bulk = match self.config.bulk {
            Some(b) if b.min_quantity > 0 && b.rate > 0 => b,
            _ => return 0,
        };
        self.items
            .iter()
            .filter(|item| item.quantity >= bulk.min_quantity)
            .map(|item| {
                let groups = item.quantity / bulk.min_quantity;
                let per_group = bulk.min_quantity * item.product.unit_price * bulk.rate / 100;
                per_group * groups
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_promotion() {
        let mut order = OrderService::new();
        order.add_product(Product::new("T-shirt", "apparel", 500), 1);
        order.add_product(Product::new("Pants", "apparel", 1000), 1);
        let summary = order.calculate_order();
        assert_eq!(summary.original_amount, 1500);
        assert_eq!(summary.discount, 0);
        assert_eq!(summary.total_amount, 1500);
        assert_eq!(summary.quantity_of("T-shirt"), 1);
    }

    #[test]
    fn test_threshold_discount() {
        let mut order = OrderService::new();
        order.configure_threshold_discount(1000, 100);
        order.add_product(Product::new("T-shirt", "apparel", 500), 2);
        order.add_product(Product::new("Pants", "apparel", 1000), 1);
        let summary = order.calculate_order();
        assert_eq!(summary.original_amount, 2000);
        assert_eq!(summary.discount, 100);
        assert_eq!(summary.total_amount, 1900);
    }

    #[test]
    fn test_threshold_not_reached() {
        let mut order = OrderService::new();
        order.configure_threshold_discount(1000, 100);
        order.add_product(Product::new("Socks", "apparel", 100), 9);
        assert_eq!(order.calculate_order().discount, 0);
    }

    #[test]
    fn test_buy_one_get_one() {
        let mut order = OrderService::new();
        order.configure_buy_one_get_one("cosmetics");
        order.add_product(Product::new("Lipstick", "cosmetics", 300), 2);
        order.add_product(Product::new("Foundation", "cosmetics", 400), 1);
        order.add_product(Product::new("Socks", "apparel", 100), 1);
        let summary = order.calculate_order();
        assert_eq!(summary.original_amount, 1100);
        assert_eq!(summary.total_amount, 1100);
        assert_eq!(summary.quantity_of("Lipstick"), 3);
        assert_eq!(summary.quantity_of("Foundation"), 2);
        assert_eq!(summary.quantity_of("Socks"), 1);
        assert_eq!(summary.quantity_of("Unknown"), 0);
    }

    #[test]
    fn test_bulk_discount() {
        let mut order = OrderService::new();
        order.configure_bulk_discount(10, 20);
        order.add_product(Product::new("Socks", "apparel", 100), 12);
        order.add_product(Product::new("Hat", "apparel", 100), 27);
        order.add_product(Product::new("Belt", "apparel", 100), 9);
        let summary = order.calculate_order();
        // Socks: 1 组 200；Hat: 2 组 400；Belt 不足 10 件
        assert_eq!(summary.original_amount, 4800);
        assert_eq!(summary.bulk_discount, 600);
        assert_eq!(summary.total_amount, 4200);
    }

    #[test]
    fn test_stacked_promotions() {
        let config: PromotionConfig = serde_json::from_str(
            r#"{
                "threshold": { "threshold": 1000, "discount": 100 },
                "buy_one_get_one_category": "cosmetics",
                "bulk": { "min_quantity": 10, "rate": 20 }
            }"#,
        )
        .unwrap();
        let mut order = OrderService::with_config(config);
        order.add_product(Product::new("Lipstick", "cosmetics", 100), 10);
        let summary = order.calculate_order();
        assert_eq!(summary.original_amount, 1000);
        assert_eq!(summary.discount, 100);
        assert_eq!(summary.bulk_discount, 200);
        assert_eq!(summary.total_amount, 700);
        assert_eq!(summary.quantity_of("Lipstick"), 11);
    }

    #[test]
    fn test_empty_config_json() {
        let config: PromotionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PromotionConfig::default());
    }

    #[test]
    fn test_order_item_json() {
        let item: OrderItem =
            serde_json::from_str(r#"{"name":"Pen","unit_price":30,"quantity":2}"#).unwrap();
        assert_eq!(item.product.category, "general");
        assert_eq!(item.quantity, 2);
    }
}
