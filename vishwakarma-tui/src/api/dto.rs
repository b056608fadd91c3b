use serde::{Deserialize, Serialize};

use crate::content::{self, ChartKind};
use crate::types::{Project, ProjectType};

#[derive(Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

impl ProjectsResponse {
    /// Rows that don't decode (an unknown project type, say) are skipped so
    /// the rest of the listing still shows.
    pub fn into_projects(self) -> Vec<Project> {
        self.results
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Project>(row) {
                Ok(project) => Some(project),
                Err(e) => {
                    tracing::warn!("skipping unreadable project row: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct CreateProjectRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub description: &'a str,
    pub answers: &'a [String],
    pub charts: ChartsSnapshot,
}

/// The chart data a project was created with, stored alongside it by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsSnapshot {
    pub analysis: Vec<AnalysisChart>,
    pub statistics: StatisticsSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisChart {
    pub title: String,
    pub chart_type: ChartKind,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub sales: SalesSnapshot,
    pub marketing: MarketingSnapshot,
    pub customer_segments: SegmentsSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSnapshot {
    pub months: Vec<String>,
    pub revenue: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketingSnapshot {
    pub platforms: Vec<PlatformSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformSnapshot {
    pub name: String,
    pub reach: u32,
    pub engagement: String,
    pub conversion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentsSnapshot {
    pub age_groups: Vec<AgeGroupSnapshot>,
    pub gender: Vec<GenderSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGroupSnapshot {
    pub range: String,
    pub percentage: u32,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSnapshot {
    #[serde(rename = "type")]
    pub kind: String,
    pub percentage: u32,
    pub value: u32,
}

impl ChartsSnapshot {
    pub fn from_catalog() -> Self {
        let analysis = content::ANALYSES
            .iter()
            .map(|a| AnalysisChart {
                title: a.title.to_string(),
                chart_type: a.chart.kind,
                labels: a.chart.labels.iter().map(|l| l.to_string()).collect(),
                data: a.chart.values().to_vec(),
                colors: a
                    .chart
                    .colors
                    .map(|colors| colors.iter().map(|c| c.to_string()).collect()),
            })
            .collect();

        let statistics = StatisticsSnapshot {
            sales: SalesSnapshot {
                months: content::SALES_MONTHS.iter().map(|m| m.to_string()).collect(),
                revenue: content::SALES_REVENUE.to_vec(),
            },
            marketing: MarketingSnapshot {
                platforms: content::PLATFORMS
                    .iter()
                    .map(|p| PlatformSnapshot {
                        name: p.name.to_string(),
                        reach: p.reach,
                        engagement: p.engagement.to_string(),
                        conversion: p.conversion.to_string(),
                    })
                    .collect(),
            },
            customer_segments: SegmentsSnapshot {
                age_groups: content::AGE_GROUPS
                    .iter()
                    .map(|g| AgeGroupSnapshot {
                        range: g.label.to_string(),
                        percentage: g.percentage,
                        value: g.value,
                    })
                    .collect(),
                gender: content::GENDER_SPLIT
                    .iter()
                    .map(|g| GenderSnapshot {
                        kind: g.label.to_string(),
                        percentage: g.percentage,
                        value: g.value,
                    })
                    .collect(),
            },
        };

        Self {
            analysis,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_backend_field_names() {
        let value = serde_json::to_value(ChartsSnapshot::from_catalog()).unwrap();

        assert_eq!(value["analysis"].as_array().unwrap().len(), 5);
        assert_eq!(value["analysis"][0]["chartType"], "pie");
        assert_eq!(value["analysis"][2]["colors"][0], "#1FB8CD");
        assert_eq!(value["statistics"]["sales"]["revenue"][5], 190000);
        assert_eq!(
            value["statistics"]["customerSegments"]["ageGroups"][1]["range"],
            "26-35"
        );
        assert_eq!(
            value["statistics"]["customerSegments"]["gender"][0]["type"],
            "Female"
        );
    }

    #[test]
    fn listing_skips_rows_with_unknown_type() {
        let response: ProjectsResponse = serde_json::from_value(serde_json::json!({
            "results": [
                {"id": 3, "name": "Odd", "type": "Start a Franchise", "created_date": "2026-10-16"},
                {"id": 2, "name": "Tea", "type": "Grow a Business", "created_date": "2026-10-15"},
                {"id": 1, "name": "Spice", "type": "New Market Entry", "created_date": "2026-10-14"}
            ]
        }))
        .unwrap();

        let ids: Vec<i64> = response.into_projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn create_request_serializes_type_label() {
        let answers = vec!["one".to_string()];
        let request = CreateProjectRequest {
            name: "Tea House",
            project_type: ProjectType::GrowBusiness,
            description: "",
            answers: &answers,
            charts: ChartsSnapshot::from_catalog(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "Grow a Business");
        assert_eq!(value["answers"][0], "one");
    }
}
