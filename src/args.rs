use aviso::{
    api::Origin,
    config::{ClientConfig, ParamConvention, DEFAULT_API_URL, DEFAULT_NOTICE_FIELD},
};
use url::Url;

#[derive(clap::Parser)]
#[command(name = "aviso")]
#[command(version)]
#[command(about = "Check whether a tariff code requires an Aviso Automático")]
#[command(long_about = "
Asks the North Cross lookup service whether a Mexican TIGIE fracción or a
U.S. HTSUS code requires an Aviso Automático for import.

8-digit codes are normalized to XXXX.XX.XX, so 72081000, 7208-10-00 and
7208.10.00 are the same query.

Examples:
  # Check a steel fracción
  aviso check --industria acero --fraccion 72081000

  # Ask the /consulta endpoint directly, with an HTSUS code
  aviso check --convention consulta --origin us \\
    --industria electronica --fraccion 8471.30.01

  # Is the service up?
  aviso health
")]
pub struct Args {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Check one tariff code
    ///
    /// Prints whether the code requires an Aviso Automático. Incomplete input,
    /// unknown codes and unreachable services are reported as results, never
    /// as failures.
    Check(CheckArgs),

    /// Query the lookup service health endpoint
    Health,
}

#[derive(clap::Args)]
pub struct EndpointArgs {
    /// Lookup endpoint URL
    #[arg(
        long,
        global = true,
        env = "AVISO_API_URL",
        value_hint = clap::ValueHint::Url,
        value_parser = Url::parse,
        default_value = DEFAULT_API_URL
    )]
    pub url: Url,

    /// Query parameter naming expected by the service
    #[arg(
        long,
        global = true,
        value_enum,
        env = "AVISO_PARAM_CONVENTION",
        default_value_t = ParamConvention::Web
    )]
    pub convention: ParamConvention,

    /// Response field holding the verdict
    #[arg(long, global = true, value_name = "FIELD", default_value = DEFAULT_NOTICE_FIELD)]
    pub notice_field: String,

    /// Industry value that means nothing was selected
    #[arg(long, global = true, value_name = "VALUE")]
    pub placeholder: Option<String>,
}

impl EndpointArgs {
    pub fn config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.url.clone())
            .with_params(self.convention.params())
            .with_notice_field(self.notice_field.clone());

        match &self.placeholder {
            Some(placeholder) => config.with_placeholder(placeholder.clone()),
            None => config,
        }
    }
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Industry identifier, e.g. acero or textil
    #[arg(long = "industria", value_name = "ID", default_value = "")]
    pub industry: String,

    /// Tariff code as typed, e.g. 72081000 or 7208.10.00
    #[arg(long = "fraccion", value_name = "CODE", default_value = "")]
    pub code: String,

    /// Nomenclature of the code (defaults to mx)
    #[arg(long, value_enum)]
    pub origin: Option<Origin>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
