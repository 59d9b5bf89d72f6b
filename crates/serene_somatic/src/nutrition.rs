//! Keyword-driven meal logging.
//!
//! Each meal description is checked for three food groups. Vegetables are
//! rewarded and their absence penalised, so the trace-element balance can go
//! negative.

use serde::{Deserialize, Serialize};

const PROTEIN: &str = "蛋白质";
const VEGETABLES: &str = "蔬菜";
const FRUIT: &str = "水果";

const AMINO_TARGET: i32 = 3;
const TRACE_TARGET: i32 = 2;
const ANTIOXIDANT_TARGET: i32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientBalance {
    pub amino_acids: i32,
    pub trace_elements: i32,
    pub antioxidants: i32,
}

#[derive(Debug, Clone, Default)]
pub struct NutritionEngine {
    balance: NutrientBalance,
}

impl NutritionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> NutrientBalance {
        self.balance
    }

    pub fn log_meals<S: AsRef<str>>(&mut self, food_log: &[S]) {
        for meal in food_log {
            let meal = meal.as_ref();
            if meal.contains(PROTEIN) {
                self.balance.amino_acids += 1;
            }
            self.balance.trace_elements += if meal.contains(VEGETABLES) { 2 } else { -1 };
            if meal.contains(FRUIT) {
                self.balance.antioxidants += 1;
            }
        }
        tracing::debug!("NutritionEngine: logged {} meal(s), balance {:?}", food_log.len(), self.balance);
    }

    pub fn suggest_adjustment(&self) -> Vec<String> {
        let b = &self.balance;
        vec![
            format!("氨基酸补充剂x{}", (AMINO_TARGET - b.amino_acids).max(0)),
            format!("微量元素零食包x{}", (TRACE_TARGET - b.trace_elements).max(0)),
            if b.antioxidants < ANTIOXIDANT_TARGET {
                "抗氧化茶饮".to_string()
            } else {
                "平衡状态".to_string()
            },
        ]
    }
}
