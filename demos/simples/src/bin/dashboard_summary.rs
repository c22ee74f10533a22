use facelog_client::application::client::Client;
use facelog_client::application::config::Config;
use facelog_client::application::interfaces::attendance::AttendanceService;
use facelog_client::presentation::user::Role;
use facelog_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting dashboard summary example");

    // Reads FACELOG_API_URL, FACELOG_USERNAME, FACELOG_PASSWORD and FACELOG_TOKEN_FILE
    let client = Client::from_config(Config::new()).await?;
    let auth = client.auth();

    if !auth.is_authenticated().await {
        let profile = auth.login_from_config().await?;
        info!("✓ Logged in as {}", profile.full_name());
    }

    info!("Landing route: {}", auth.landing_path().await);

    match auth.role().await.unwrap_or_default() {
        Role::Instructor => {
            let summary = client.get_instructor_summary().await?;
            info!("Instructor summary: {}", summary);
            info!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            let summary = client.get_apprentice_summary().await?;
            info!("Apprentice summary: {}", summary);
            if summary.needs_attention() {
                info!(
                    "{} absences and {} pending excuses need attention",
                    summary.absent_count, summary.pending_excuses
                );
            }
        }
    }

    Ok(())
}
