use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PipelineError, PipelineResult};

/// The news API only indexes a rolling 30-day window (today included).
pub const WINDOW_DAYS: i64 = 29;
pub const DEFAULT_RANGE_DAYS: i64 = 14;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

pub const KEYWORD_REQUIRED: &str = "검색어를 입력해주세요.";

/// Languages offered by the search form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
    Ja,
    Zh,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Ko,
        Language::En,
        Language::Ja,
        Language::Zh,
        Language::De,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| PipelineError::Validation(format!("지원하지 않는 언어입니다: {}", s)))
    }
}

/// Search form values exactly as the user submitted them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchInput {
    pub keyword: Option<String>,
    pub language: Option<String>,
    pub page_size: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A validated search, ready to be sent upstream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub keyword: String,
    pub language: Language,
    pub page_size: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SearchInput {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }

    /// Validate and clamp the input relative to `today`.
    pub fn build(&self, today: NaiveDate) -> PipelineResult<SearchRequest> {
        let keyword = self
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| PipelineError::Validation(KEYWORD_REQUIRED.to_string()))?;

        let language = match self.language.as_deref() {
            Some(code) if !code.trim().is_empty() => code.parse()?,
            _ => Language::default(),
        };

        let page_size = self
            .page_size
            .map(|n| n.clamp(1, MAX_PAGE_SIZE as i64) as u32)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let (start_date, end_date) = clamp_range(
            self.start_date.unwrap_or(today - Duration::days(DEFAULT_RANGE_DAYS)),
            self.end_date.unwrap_or(today),
            today,
        );

        Ok(SearchRequest {
            keyword: keyword.to_string(),
            language,
            page_size,
            start_date,
            end_date,
        })
    }
}

/// Clamp a date range into `[today - WINDOW_DAYS, today]`, keeping start <= end.
pub fn clamp_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let earliest = today - Duration::days(WINDOW_DAYS);
    let end = end.clamp(earliest, today);
    let start = start.max(earliest).min(end);
    (start, end)
}

impl SearchRequest {
    /// Query parameters for the `/everything` endpoint, without the api key
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.keyword.clone()),
            ("from", self.start_date.format("%Y-%m-%d").to_string()),
            ("to", self.end_date.format("%Y-%m-%d").to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("language", self.language.code().to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn empty_or_whitespace_keyword_is_rejected() {
        for keyword in [None, Some(""), Some("   \t")] {
            let input = SearchInput {
                keyword: keyword.map(String::from),
                ..SearchInput::default()
            };
            assert!(matches!(input.build(today()), Err(PipelineError::Validation(_))));
        }
    }

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let req = SearchInput::keyword("  관세 ").build(today()).unwrap();
        assert_eq!(req.keyword, "관세");
        assert_eq!(req.language, Language::Ko);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(req.start_date, days_ago(14));
        assert_eq!(req.end_date, today());
    }

    #[test]
    fn page_size_is_clamped() {
        let mut input = SearchInput::keyword("tariff");
        input.page_size = Some(150);
        assert_eq!(input.build(today()).unwrap().page_size, 100);
        input.page_size = Some(0);
        assert_eq!(input.build(today()).unwrap().page_size, 1);
        input.page_size = Some(-7);
        assert_eq!(input.build(today()).unwrap().page_size, 1);
    }

    #[test]
    fn unsupported_language_is_a_validation_error() {
        let mut input = SearchInput::keyword("tariff");
        input.language = Some("fr".into());
        assert!(matches!(input.build(today()), Err(PipelineError::Validation(_))));
        input.language = Some("EN".into());
        assert_eq!(input.build(today()).unwrap().language, Language::En);
    }

    #[test]
    fn range_always_lands_inside_window() {
        let cases = [
            (days_ago(90), days_ago(60)),
            (days_ago(90), today() + Duration::days(10)),
            (today() + Duration::days(3), today() + Duration::days(9)),
            (days_ago(2), days_ago(10)),
            (days_ago(29), today()),
            (days_ago(5), days_ago(5)),
        ];
        for (start, end) in cases {
            let (s, e) = clamp_range(start, end, today());
            assert!(days_ago(WINDOW_DAYS) <= s, "{start} -> {s}");
            assert!(s <= e, "{s} > {e}");
            assert!(e <= today(), "{end} -> {e}");
        }
    }

    #[test]
    fn in_window_range_is_untouched() {
        assert_eq!(
            clamp_range(days_ago(20), days_ago(3), today()),
            (days_ago(20), days_ago(3))
        );
    }

    #[test]
    fn query_params_use_api_names() {
        let mut input = SearchInput::keyword("tariff");
        input.language = Some("en".into());
        input.page_size = Some(5);
        let params = input.build(today()).unwrap().query_params();
        assert!(params.contains(&("q", "tariff".to_string())));
        assert!(params.contains(&("sortBy", "publishedAt".to_string())));
        assert!(params.contains(&("pageSize", "5".to_string())));
        assert!(params.contains(&("from", "2024-05-17".to_string())));
        assert!(params.contains(&("to", "2024-05-31".to_string())));
    }
}
