use clap::Parser;
use weather_core::{Credentials, OpenWeatherClient, WeatherError, WeatherProvider, config};

use crate::render::render_report;
use crate::style::Style;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Iconographic weather report for a city",
    after_help = "For more information, visit https://openweathermap.org/current"
)]
pub struct Cli {
    /// Name of the city to fetch weather for.
    #[arg(short, long)]
    pub city: String,

    /// Show more detailed weather information.
    #[arg(short, long)]
    pub details: bool,
}

impl Cli {
    pub async fn run(self, style: &dyn Style) -> anyhow::Result<()> {
        println!(
            "{}",
            style.info(&format!("Fetching weather for {}...", self.city))
        );

        let report = execute(
            &self.city,
            self.details,
            |key| std::env::var(key).ok(),
            OpenWeatherClient::new,
            style,
        )
        .await?;

        println!();
        for line in report {
            println!("{line}");
        }

        Ok(())
    }
}

/// The whole pipeline behind injectable seams: the environment lookup and
/// the provider constructor. Credentials are resolved before the provider
/// is even built, so a missing key can never reach the network.
pub(crate) async fn execute<P, F, L>(
    city: &str,
    show_details: bool,
    lookup: L,
    make_provider: F,
    style: &dyn Style,
) -> Result<Vec<String>, WeatherError>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(Credentials) -> P,
    P: WeatherProvider,
{
    let city = config::validate_city(city)?;
    let credentials = Credentials::from_lookup(lookup)?;
    let provider = make_provider(credentials);

    let reading = provider.current_weather(&city).await?;

    Ok(render_report(&reading, show_details, style))
}
