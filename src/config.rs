use url::Url;

pub const DEFAULT_API_URL: &str = "https://northcross-api.onrender.com/consulta";
pub const DEFAULT_NOTICE_FIELD: &str = "requiere_aviso_automatico";

/// Query parameter names negotiated with the lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub industry: String,
    pub code: String,
    /// `None` means the origin is not sent at all.
    pub origin: Option<String>,
}

impl QueryParams {
    /// `?industria=..&fraccion=..`, as the public site sends it.
    pub fn web() -> Self {
        Self {
            industry: "industria".to_string(),
            code: "fraccion".to_string(),
            origin: None,
        }
    }

    /// `?origin=..&industria=..&code=..`, as the `/consulta` endpoint declares it.
    pub fn consulta() -> Self {
        Self {
            industry: "industria".to_string(),
            code: "code".to_string(),
            origin: Some("origin".to_string()),
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        ParamConvention::default().params()
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamConvention {
    /// industria + fraccion
    #[default]
    Web,

    /// origin + industria + code
    Consulta,
}

impl ParamConvention {
    pub fn params(self) -> QueryParams {
        match self {
            Self::Web => QueryParams::web(),
            Self::Consulta => QueryParams::consulta(),
        }
    }
}

/// Read-only settings of a [`crate::api::VerificationClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub params: QueryParams,
    /// Response field holding the true / false / absent verdict.
    pub notice_field: String,
    /// Industry value meaning "nothing selected yet".
    pub placeholder: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            params: QueryParams::default(),
            notice_field: DEFAULT_NOTICE_FIELD.to_string(),
            placeholder: None,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_notice_field(mut self, field: impl Into<String>) -> Self {
        self.notice_field = field.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// # Errors
    ///
    /// Fails if `raw` is not an absolute URL.
    pub fn from_url(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::new)
    }

    pub fn is_placeholder(&self, industry: &str) -> bool {
        self.placeholder
            .as_deref()
            .map(str::trim)
            .is_some_and(|p| p.eq_ignore_ascii_case(industry.trim()))
    }
}
