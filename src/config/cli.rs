use crate::config::toml_config::{PredictionMode, TomlConfig};
use crate::domain::model::RawPredictionInput;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "crop-yield")]
#[command(about = "Validate crop and location details and fetch a yield prediction")]
pub struct CliConfig {
    /// rice, wheat, maize, soybean, cotton or sugarcane
    #[arg(long, default_value = "")]
    pub crop_type: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub latitude: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub longitude: String,

    /// Area in hectares
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub area: String,

    /// kharif, rabi or zaid
    #[arg(long, default_value = "")]
    pub season: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use the simulated prediction backend
    #[arg(long, conflicts_with = "endpoint")]
    pub mock: bool,

    /// Prediction backend URL
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub geocoder_url: Option<String>,

    /// Skip reverse geocoding and label the location by coordinates
    #[arg(long)]
    pub no_geocode: bool,

    #[arg(long)]
    pub mock_delay_ms: Option<u64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn raw_input(&self) -> RawPredictionInput {
        RawPredictionInput::new(
            self.crop_type.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.area.as_str(),
            self.season.as_str(),
        )
    }

    /// 載入配置檔後套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if self.mock {
            config.prediction.mode = PredictionMode::Mock;
        }
        if let Some(endpoint) = &self.endpoint {
            config.prediction.mode = PredictionMode::Http;
            config.prediction.endpoint = Some(endpoint.clone());
        }
        if let Some(url) = &self.geocoder_url {
            config.geocoding.endpoint = url.clone();
        }
        if self.no_geocode {
            config.geocoding.enabled = false;
        }
        if let Some(delay) = self.mock_delay_ms {
            config.prediction.mock_delay_ms = delay;
        }
        if let Some(seed) = self.seed {
            config.prediction.seed = Some(seed);
        }

        Ok(config)
    }
}
