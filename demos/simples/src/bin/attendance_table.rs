use facelog_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_config(Config::new()).await?;
    if !client.auth().is_authenticated().await {
        client.auth().login_from_config().await?;
    }

    let mut page = client.get_attendance_logs(1).await?;
    println!("{}", page);

    // Walk the remaining pages through the absolute `next` links
    while let Some(next) = page.next.clone() {
        page = client.get_attendance_logs_at(&next).await?;
        println!("{}", page);
    }

    let excuses = client.get_excuses().await?;
    println!("{}", ExcuseTable(&excuses.results));

    Ok(())
}
