//! Family member records and kinship roles.
//!
//! A [`Member`] is the caller-supplied input of a chart render. Members are
//! immutable for the duration of one render and reference their parents by
//! [`MemberId`]. Those references may point outside the rendered set.
//!
//! # Wire shape
//!
//! Members deserialize from camelCase JSON records:
//!
//! ```
//! # use kinchart_core::family::{Member, Role};
//! let member: Member = serde_json::from_str(r#"{
//!     "id": 3,
//!     "firstName": "Ivan",
//!     "lastName": "Petrov",
//!     "patronymic": "",
//!     "role": "SON",
//!     "fatherId": 1,
//!     "motherId": 2
//! }"#).unwrap();
//!
//! assert_eq!(member.id().as_str(), "3");
//! assert_eq!(member.role(), Role::Son);
//! assert!(member.patronymic().is_none());
//! ```

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a family member.
///
/// Identifiers are compared as strings. Numeric ids in the input are
/// accepted and converted to their decimal representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Self::from(id),
            RawId::Text(id) => Self(id),
        })
    }
}

/// Kinship role of a member relative to the chart owner.
///
/// Fourteen roles are known. Anything else, including a missing role,
/// is [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Grandfather,
    Grandmother,
    Father,
    Mother,
    Son,
    Daughter,
    Brother,
    Sister,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    Grandson,
    Granddaughter,
    #[default]
    #[serde(other)]
    Other,
}

impl Role {
    /// All recognized kinship roles, excluding [`Role::Other`].
    pub const KNOWN: [Role; 14] = [
        Role::Grandfather,
        Role::Grandmother,
        Role::Father,
        Role::Mother,
        Role::Son,
        Role::Daughter,
        Role::Brother,
        Role::Sister,
        Role::Uncle,
        Role::Aunt,
        Role::Nephew,
        Role::Niece,
        Role::Grandson,
        Role::Granddaughter,
    ];

    /// Returns the upper-case tag used in serialized records.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Grandfather => "GRANDFATHER",
            Self::Grandmother => "GRANDMOTHER",
            Self::Father => "FATHER",
            Self::Mother => "MOTHER",
            Self::Son => "SON",
            Self::Daughter => "DAUGHTER",
            Self::Brother => "BROTHER",
            Self::Sister => "SISTER",
            Self::Uncle => "UNCLE",
            Self::Aunt => "AUNT",
            Self::Nephew => "NEPHEW",
            Self::Niece => "NIECE",
            Self::Grandson => "GRANDSON",
            Self::Granddaughter => "GRANDDAUGHTER",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    /// Parses a role tag case-insensitively. Unrecognized tags map to
    /// [`Role::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Ok(Self::KNOWN
            .into_iter()
            .find(|role| role.tag().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Other))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A family member as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: MemberId,

    #[serde(default, deserialize_with = "null_as_default")]
    first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    last_name: String,

    #[serde(
        default,
        deserialize_with = "non_empty_text",
        skip_serializing_if = "Option::is_none"
    )]
    patronymic: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    role: Role,

    #[serde(
        default,
        deserialize_with = "non_empty_text",
        skip_serializing_if = "Option::is_none"
    )]
    birth_date: Option<String>,

    #[serde(
        default,
        deserialize_with = "non_empty_id",
        skip_serializing_if = "Option::is_none"
    )]
    father_id: Option<MemberId>,

    #[serde(
        default,
        deserialize_with = "non_empty_id",
        skip_serializing_if = "Option::is_none"
    )]
    mother_id: Option<MemberId>,

    /// Base64 encoded photo, optionally wrapped in a `data:` URI.
    #[serde(
        default,
        alias = "photoBase64",
        deserialize_with = "non_empty_text",
        skip_serializing_if = "Option::is_none"
    )]
    photo: Option<String>,
}

impl Member {
    /// Creates a member with the required fields set and every optional
    /// field absent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kinchart_core::family::{Member, MemberId, Role};
    /// let son = Member::new("3", "Ivan", "Petrov", Role::Son)
    ///     .with_father("1")
    ///     .with_mother("2");
    ///
    /// assert_eq!(son.father_id(), Some(&MemberId::new("1")));
    /// assert_eq!(son.display_name(), "Petrov Ivan");
    /// ```
    pub fn new(
        id: impl Into<MemberId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            patronymic: None,
            role,
            birth_date: None,
            father_id: None,
            mother_id: None,
            photo: None,
        }
    }

    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_father(mut self, father_id: impl Into<MemberId>) -> Self {
        self.father_id = Some(father_id.into());
        self
    }

    pub fn with_mother(mut self, mother_id: impl Into<MemberId>) -> Self {
        self.mother_id = Some(mother_id.into());
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn father_id(&self) -> Option<&MemberId> {
        self.father_id.as_ref()
    }

    pub fn mother_id(&self) -> Option<&MemberId> {
        self.mother_id.as_ref()
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Returns `"{last_name} {first_name}"` with surrounding blanks removed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
            .trim()
            .to_string()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|text| !text.trim().is_empty()))
}

fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<MemberId>, D::Error> {
    let id = Option::<MemberId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.as_str().trim().is_empty()))
}
