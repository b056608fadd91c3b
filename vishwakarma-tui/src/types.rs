use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use time::Date;

/// The kinds of project the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ProjectType {
    #[serde(rename = "Grow a Business")]
    GrowBusiness,
    #[serde(rename = "New Market Entry")]
    MarketEntry,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::GrowBusiness, ProjectType::MarketEntry];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::GrowBusiness => "Grow a Business",
            ProjectType::MarketEntry => "New Market Entry",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ProjectType::GrowBusiness => "Scale an existing business with sharper strategy",
            ProjectType::MarketEntry => "Plan a launch into a new market",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A project as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(with = "iso_date")]
    pub created_date: Date,
    #[serde(default)]
    pub questions_answered: bool,
    #[serde(default)]
    pub answers: Vec<String>,
    #[serde(default)]
    pub charts: serde_json::Value,
}

/// A finished wizard draft, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub project_type: ProjectType,
    pub description: String,
    pub answers: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `YYYY-MM-DD` dates. A trailing time component is ignored.
mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::macros::format_description;
    use time::Date;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&raw)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let day = raw.get(..10).unwrap_or(&raw);
        Date::parse(day, format_description!("[year]-[month]-[day]"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn project_parses_backend_payload() {
        let raw = r#"{
            "id": 7,
            "name": "Spice Route",
            "type": "New Market Entry",
            "description": null,
            "created_date": "2026-10-16",
            "questions_answered": true,
            "answers": ["a", "b"],
            "charts": {}
        }"#;

        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.id, 7);
        assert_eq!(project.project_type, ProjectType::MarketEntry);
        assert_eq!(project.description, "");
        assert_eq!(project.created_date, date!(2026 - 10 - 16));
        assert_eq!(project.answers, vec!["a", "b"]);
    }

    #[test]
    fn created_date_ignores_time_component() {
        let raw = r#"{"id":1,"name":"x","type":"Grow a Business","created_date":"2026-01-05T10:00:00Z"}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.created_date, date!(2026 - 01 - 05));
        assert!(project.answers.is_empty());
    }

    #[test]
    fn unknown_project_type_is_rejected() {
        let raw = r#"{"id":1,"name":"x","type":"Start a Cult","created_date":"2026-01-05"}"#;
        assert!(serde_json::from_str::<Project>(raw).is_err());
    }
}
