use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Envelope every catalog-service response arrives in. A non-zero `errcode`
/// is a failure carrying the remote-supplied message.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse<T> {
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
    pub data: Option<T>,
}

impl<T> CatalogResponse<T> {
    /// Fail on a non-zero error code, then require a data payload.
    pub fn into_data(self) -> anyhow::Result<T> {
        self.check_code()?;
        match self.data {
            Some(data) => Ok(data),
            None => bail!("catalog response carried no data"),
        }
    }

    /// Fail on a non-zero error code; the payload, if any, is discarded.
    pub fn check(self) -> anyhow::Result<()> {
        self.check_code()
    }

    fn check_code(&self) -> anyhow::Result<()> {
        if self.errcode != 0 {
            bail!("catalog error {}: {}", self.errcode, self.errmsg);
        }
        Ok(())
    }
}

/// Project coordinates reported by the catalog for a token.
#[derive(Debug, Deserialize)]
pub struct ProjectInfo {
    #[serde(rename = "_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

/// One interface category in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInfo {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
}

/// A request header attached to the uploaded interface.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn json() -> Self {
        Header {
            name: "Content-Type".to_string(),
            value: "application/json".to_string(),
        }
    }

    pub fn form() -> Self {
        Header {
            name: "Content-Type".to_string(),
            value: "application/x-www-form-urlencoded".to_string(),
        }
    }
}

/// A query-string parameter in the upload schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub desc: String,
    pub example: String,
    /// Wire encoding: `"1"` required, `"0"` optional.
    pub required: String,
}

/// A form-encoded body parameter in the upload schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormParam {
    pub name: String,
    pub desc: String,
    pub example: String,
    pub required: String,
}

/// A path template variable in the upload schema.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathParam {
    pub name: String,
    pub desc: String,
    pub example: String,
}

/// The endpoint-upload schema sent to the catalog service.
#[derive(Debug, Clone, Serialize)]
pub struct InterfacePayload {
    pub token: String,
    pub method: String,
    pub catid: String,
    pub title: String,
    pub path: String,
    pub req_headers: Vec<Header>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub req_params: Vec<PathParam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub req_query: Vec<QueryParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_body_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub req_body_form: Vec<FormParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_body_other: Option<String>,
    pub res_body_type: String,
    pub res_body: String,
    pub desc: String,
}

/// Wire encoding of the required flag.
pub fn required_flag(required: bool) -> String {
    if required { "1" } else { "0" }.to_string()
}
