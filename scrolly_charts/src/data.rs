// Copyright 2025 the Scrolly Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The datasets behind the story panels.

use scrolly_core::Tone;

/// A labelled percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledValue {
    /// Category label.
    pub label: &'static str,
    /// Value in percent.
    pub value: f64,
}

/// Median earnings by age.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarningsAtAge {
    /// Age in years.
    pub age: f64,
    /// Earnings for men, in dollars.
    pub men: f64,
    /// Earnings for women, in dollars.
    pub women: f64,
}

/// Median earnings by education level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarningsByLevel {
    /// Education level.
    pub level: &'static str,
    /// Earnings for men, in dollars.
    pub men: f64,
    /// Earnings for women, in dollars.
    pub women: f64,
}

/// Cumulative lifetime earnings of one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifetimeWealth {
    /// Row label.
    pub label: &'static str,
    /// Earnings in dollars.
    pub value: f64,
    /// Series the row belongs to.
    pub tone: Tone,
}

const fn lv(label: &'static str, value: f64) -> LabeledValue {
    LabeledValue { label, value }
}

/// Gender parity index by country, in percent.
pub const GLOBAL_GAP: [LabeledValue; 6] = [
    lv("Iceland", 91.2),
    lv("Norway", 87.9),
    lv("United States", 82.0),
    lv("Germany", 81.7),
    lv("Japan", 77.5),
    lv("Korea", 68.8),
];

/// Earnings over a career.
pub const LIFETIME_EARNINGS: [EarningsAtAge; 5] = [
    EarningsAtAge { age: 22.0, men: 35_000.0, women: 34_000.0 },
    EarningsAtAge { age: 30.0, men: 58_000.0, women: 52_000.0 },
    EarningsAtAge { age: 40.0, men: 82_000.0, women: 68_000.0 },
    EarningsAtAge { age: 50.0, men: 95_000.0, women: 76_000.0 },
    EarningsAtAge { age: 60.0, men: 98_000.0, women: 78_000.0 },
];

/// Earnings by highest degree.
pub const EDUCATION_GAP: [EarningsByLevel; 4] = [
    EarningsByLevel { level: "High School", men: 45_000.0, women: 34_000.0 },
    EarningsByLevel { level: "Bachelor's", men: 78_000.0, women: 59_000.0 },
    EarningsByLevel { level: "Master's", men: 95_000.0, women: 72_000.0 },
    EarningsByLevel { level: "PhD", men: 115_000.0, women: 88_000.0 },
];

/// Wage gap by industry, in percent.
pub const INDUSTRY_GAP: [LabeledValue; 5] = [
    lv("Finance", 25.0),
    lv("Tech", 18.0),
    lv("Healthcare", 12.0),
    lv("Education", 10.0),
    lv("Retail", 8.0),
];

/// Average cumulative lifetime earnings.
pub const LIFETIME_WEALTH: [LifetimeWealth; 2] = [
    LifetimeWealth {
        label: "Men's Average Earnings",
        value: 3_500_000.0,
        tone: Tone::Men,
    },
    LifetimeWealth {
        label: "Women's Average Earnings",
        value: 2_870_000.0,
        tone: Tone::Women,
    },
];
