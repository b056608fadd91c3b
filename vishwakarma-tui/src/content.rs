//! Fixed copy shown by the app: wizard questions, the canned analysis shown
//! after each answer, the statistics dashboard data and the assistant replies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Doughnut,
    Radar,
}

/// One named series of a chart. `color` overrides the chart palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: &'static [f64],
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: &'static [&'static str],
    pub series: &'static [Series],
    pub colors: Option<&'static [&'static str]>,
}

impl ChartSpec {
    /// Values of the first series, the only one for most charts.
    pub fn values(&self) -> &'static [f64] {
        self.series.first().map(|s| s.values).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub title: &'static str,
    pub content: &'static str,
    pub chart: ChartSpec,
}

pub const QUESTIONS: [&str; 5] = [
    "What is your target market and customer base?",
    "What are your main products or services?",
    "What is your current marketing strategy?",
    "What are your main business challenges?",
    "What are your growth objectives for the next 12 months?",
];

pub const QUESTION_COUNT: usize = QUESTIONS.len();

pub const BASE_COLORS: [&str; 5] = ["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F"];

pub static ANALYSES: [Analysis; QUESTION_COUNT] = [
    Analysis {
        title: "Target Market Analysis",
        content: "Based on your target market, we've identified 3 key customer segments with high growth potential. The primary segment (45%) consists of millennials aged 25-35 with disposable income. Secondary segment (30%) includes Gen-Z consumers who prioritize sustainability.",
        chart: ChartSpec {
            kind: ChartKind::Pie,
            labels: &["Millennials (25-35)", "Gen-Z (18-24)", "Gen-X (36-50)"],
            series: &[Series {
                name: "Share",
                values: &[45.0, 30.0, 25.0],
                color: None,
            }],
            colors: Some(&["#1FB8CD", "#FFC185", "#B4413C"]),
        },
    },
    Analysis {
        title: "Product Portfolio Analysis",
        content: "Your product mix shows strong diversity across 3 categories. Premium products contribute 60% of revenue despite being 20% of volume. Consider expanding premium line based on market demand.",
        chart: ChartSpec {
            kind: ChartKind::Bar,
            labels: &["Premium", "Mid-range", "Budget"],
            series: &[Series {
                name: "Revenue share",
                values: &[60.0, 25.0, 15.0],
                color: None,
            }],
            colors: Some(&["#1FB8CD", "#FFC185", "#B4413C"]),
        },
    },
    Analysis {
        title: "Marketing Strategy Assessment",
        content: "Current marketing channels show Instagram leading with 40% engagement, followed by Facebook at 30%. YouTube content marketing shows 3x higher conversion rates. Recommend increasing video content budget by 25%.",
        chart: ChartSpec {
            kind: ChartKind::Line,
            labels: &["Instagram", "Facebook", "YouTube", "Google Ads"],
            series: &[Series {
                name: "Engagement",
                values: &[40.0, 30.0, 20.0, 10.0],
                color: None,
            }],
            colors: Some(&["#1FB8CD"]),
        },
    },
    Analysis {
        title: "Challenge Priority Matrix",
        content: "Main challenges ranked by impact and urgency. Supply chain optimization ranks highest priority. Digital transformation and customer retention follow. Recommend addressing top 3 challenges in Q1 2025.",
        chart: ChartSpec {
            kind: ChartKind::Bar,
            labels: &[
                "Supply Chain",
                "Digital Transform",
                "Customer Retention",
                "Competition",
                "Funding",
            ],
            series: &[Series {
                name: "Priority",
                values: &[85.0, 75.0, 70.0, 60.0, 45.0],
                color: None,
            }],
            colors: Some(&["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F"]),
        },
    },
    Analysis {
        title: "Growth Projection Analysis",
        content: "12-month growth targets are achievable with 73% confidence based on market trends. Revenue projection shows 35% YoY growth potential. Key milestones include Q1 product launch, Q2 market expansion, Q3 scaling operations.",
        chart: ChartSpec {
            kind: ChartKind::Line,
            labels: &["Q1", "Q2", "Q3", "Q4"],
            series: &[Series {
                name: "Growth",
                values: &[15.0, 25.0, 35.0, 45.0],
                color: None,
            }],
            colors: Some(&["#1FB8CD"]),
        },
    },
];

/// Canned analysis for the question at `index`.
pub fn analysis_for(index: usize) -> Option<&'static Analysis> {
    ANALYSES.get(index)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSales {
    pub name: &'static str,
    pub sales: u32,
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformStats {
    pub name: &'static str,
    pub reach: u32,
    pub engagement: &'static str,
    pub conversion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Campaign {
    pub name: &'static str,
    pub roi: u32,
    pub spent: u32,
    pub revenue: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentShare {
    pub label: &'static str,
    pub percentage: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SALES_MONTHS: [&str; 6] = ["Apr", "May", "Jun", "Jul", "Aug", "Sep"];
pub const SALES_REVENUE: [u32; 6] = [120000, 135000, 145000, 160000, 175000, 190000];

pub const PRODUCTS: [ProductSales; 3] = [
    ProductSales {
        name: "Premium Collection",
        sales: 65000,
        growth: "+12%",
    },
    ProductSales {
        name: "Classic Line",
        sales: 45000,
        growth: "+8%",
    },
    ProductSales {
        name: "Budget Series",
        sales: 25000,
        growth: "+15%",
    },
];

pub const PLATFORMS: [PlatformStats; 3] = [
    PlatformStats {
        name: "Instagram",
        reach: 45000,
        engagement: "8.5%",
        conversion: "2.3%",
    },
    PlatformStats {
        name: "YouTube",
        reach: 25000,
        engagement: "12.1%",
        conversion: "4.1%",
    },
    PlatformStats {
        name: "Facebook",
        reach: 35000,
        engagement: "6.2%",
        conversion: "1.8%",
    },
];

pub const CAMPAIGNS: [Campaign; 2] = [
    Campaign {
        name: "Summer Collection",
        roi: 340,
        spent: 15000,
        revenue: 51000,
    },
    Campaign {
        name: "Festive Special",
        roi: 280,
        spent: 12000,
        revenue: 33600,
    },
];

pub const AGE_GROUPS: [SegmentShare; 3] = [
    SegmentShare {
        label: "18-25",
        percentage: 25,
        value: 35000,
    },
    SegmentShare {
        label: "26-35",
        percentage: 45,
        value: 67500,
    },
    SegmentShare {
        label: "36-50",
        percentage: 30,
        value: 45000,
    },
];

pub const GENDER_SPLIT: [SegmentShare; 2] = [
    SegmentShare {
        label: "Female",
        percentage: 65,
        value: 97500,
    },
    SegmentShare {
        label: "Male",
        percentage: 35,
        value: 52500,
    },
];

pub const SALES_METRICS: [Metric; 2] = [
    Metric {
        value: "₹190K",
        label: "Total Revenue",
    },
    Metric {
        value: "+12%",
        label: "Growth",
    },
];

pub const MARKETING_METRICS: [Metric; 2] = [
    Metric {
        value: "105K",
        label: "Total Reach",
    },
    Metric {
        value: "8.9%",
        label: "Avg Engagement",
    },
];

pub static SALES_CHART: ChartSpec = ChartSpec {
    kind: ChartKind::Line,
    labels: &SALES_MONTHS,
    series: &[Series {
        name: "Revenue",
        values: &[120000.0, 135000.0, 145000.0, 160000.0, 175000.0, 190000.0],
        color: Some("#1FB8CD"),
    }],
    colors: None,
};

pub static MARKETING_CHART: ChartSpec = ChartSpec {
    kind: ChartKind::Bar,
    labels: &["Instagram", "YouTube", "Facebook"],
    series: &[Series {
        name: "Reach",
        values: &[45000.0, 25000.0, 35000.0],
        color: None,
    }],
    colors: Some(&["#1FB8CD", "#FFC185", "#B4413C"]),
};

pub static CUSTOMER_AGE_CHART: ChartSpec = ChartSpec {
    kind: ChartKind::Doughnut,
    labels: &["18-25", "26-35", "36-50"],
    series: &[Series {
        name: "Customers",
        values: &[25.0, 45.0, 30.0],
        color: None,
    }],
    colors: Some(&["#1FB8CD", "#FFC185", "#B4413C"]),
};

pub static PLATFORM_CHART: ChartSpec = ChartSpec {
    kind: ChartKind::Radar,
    labels: &["Reach", "Engagement", "Conversion"],
    series: &[
        Series {
            name: "Instagram",
            values: &[45.0, 8.5, 2.3],
            color: Some("#1FB8CD"),
        },
        Series {
            name: "YouTube",
            values: &[25.0, 12.1, 4.1],
            color: Some("#FFC185"),
        },
    ],
    colors: None,
};

pub const CHAT_GREETING: &str = "Hello! I'm your project assistant. Ask me anything about your business strategy, market analysis, or growth plans.";

pub const CHAT_REPLIES: [&str; 5] = [
    "That's a great question! Based on your project analysis, I'd recommend focusing on digital marketing channels first as they show the highest ROI in your segment.",
    "According to market trends, this strategy typically shows results within 3-6 months. Would you like me to provide more specific timelines?",
    "The data suggests your target audience is most active during evening hours (6-9 PM). Consider scheduling your campaigns accordingly.",
    "Your growth projections look promising! The key success factors include consistent brand messaging and customer retention strategies.",
    "Based on similar businesses, I'd recommend allocating 15-20% of revenue to marketing for optimal growth trajectory.",
];

pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "What are the best marketing strategies for my business?",
    "How can I improve customer retention?",
    "What should be my budget allocation for digital marketing?",
    "How do I analyze my competition effectively?",
];
