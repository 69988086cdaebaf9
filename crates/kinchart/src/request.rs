//! JSON chart requests.
//!
//! A request is either a bare array of members or an object carrying the
//! members together with per-request render options:
//!
//! ```json
//! {
//!   "members": [{"id": 1, "firstName": "Ivan", "lastName": "Petrov", "role": "FATHER"}],
//!   "format": "A4_LANDSCAPE",
//!   "title": "The Petrovs",
//!   "show_photos": true,
//!   "show_dates": true,
//!   "show_patronymic": false
//! }
//! ```

use serde::Deserialize;

use kinchart_core::{family::Member, page::PageSpec};

use crate::{config::AppConfig, error::KinchartError};

/// Members to chart plus optional overrides of the configured options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRequest {
    members: Vec<Member>,

    #[serde(default)]
    format: Option<String>,

    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    show_photos: Option<bool>,

    #[serde(default)]
    show_dates: Option<bool>,

    #[serde(default)]
    show_patronymic: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRequest {
    Members(Vec<Member>),
    Request(ChartRequest),
}

impl ChartRequest {
    /// Creates a request with only members set.
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    /// Parses a request object or a bare member array.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::Input`] if `json` is neither.
    pub fn from_json(json: &str) -> Result<Self, KinchartError> {
        let raw: RawRequest = serde_json::from_str(json).map_err(|err| {
            KinchartError::Input(format!("expected a member array or a chart request: {err}"))
        })?;
        Ok(match raw {
            RawRequest::Members(members) => Self::new(members),
            RawRequest::Request(request) => request,
        })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    /// Page format requested, if any.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::Input`] for an unknown format name.
    pub fn page(&self) -> Result<Option<PageSpec>, KinchartError> {
        self.format
            .as_deref()
            .map(str::parse::<PageSpec>)
            .transpose()
            .map_err(|err| KinchartError::Input(err.to_string()))
    }

    /// Applies the request's overrides on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`KinchartError::Input`] for an unknown format name.
    pub fn apply_to(&self, config: &mut AppConfig) -> Result<(), KinchartError> {
        if let Some(page) = self.page()? {
            config.set_page(page);
        }

        let content = config.content_mut();
        if let Some(title) = &self.title {
            content.set_title(title.clone());
        }
        if let Some(show) = self.show_photos {
            content.set_show_photos(show);
        }
        if let Some(show) = self.show_dates {
            content.set_show_dates(show);
        }
        if let Some(show) = self.show_patronymic {
            content.set_show_patronymic(show);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kinchart_core::{
        family::{MemberId, Role},
        page::{Orientation, PageSize},
    };

    use super::*;

    #[test]
    fn test_bare_array() {
        let request = ChartRequest::from_json(
            r#"[{"id": 1, "firstName": "Ivan", "lastName": "Petrov", "role": "FATHER"}]"#,
        )
        .unwrap();

        assert_eq!(request.members().len(), 1);
        assert_eq!(request.members()[0].id(), &MemberId::new("1"));
        assert_eq!(request.page().unwrap(), None);
    }

    #[test]
    fn test_full_request_overrides() {
        let request = ChartRequest::from_json(
            r#"{
                "members": [
                    {"id": "a", "firstName": "Anna", "lastName": "Petrova", "role": "MOTHER",
                     "photoBase64": "", "fatherId": ""}
                ],
                "format": "A3_LANDSCAPE",
                "title": "The Petrovs",
                "show_dates": false
            }"#,
        )
        .unwrap();

        let member = &request.members()[0];
        assert_eq!(member.role(), Role::Mother);
        assert!(member.photo().is_none());
        assert!(member.father_id().is_none());

        let mut config = AppConfig::default();
        request.apply_to(&mut config).unwrap();
        assert_eq!(config.page(), PageSpec::new(PageSize::A3, Orientation::Landscape));
        assert_eq!(config.content().title(), "The Petrovs");
        assert!(!config.content().show_dates());
        assert!(config.content().show_photos());
    }

    #[test]
    fn test_null_member_fields_accepted() {
        let request = ChartRequest::from_json(
            r#"{"members": [{"id": 1, "firstName": null, "lastName": null, "role": null}]}"#,
        )
        .unwrap();

        let member = &request.members()[0];
        assert_eq!(member.first_name(), "");
        assert_eq!(member.role(), Role::Other);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let request = ChartRequest::from_json(r#"{"members": [], "format": "LETTER"}"#).unwrap();
        let mut config = AppConfig::default();

        assert!(matches!(request.apply_to(&mut config), Err(KinchartError::Input(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            ChartRequest::from_json(r#"{"people": 3}"#),
            Err(KinchartError::Input(_))
        ));
    }
}
