use facelog_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = env::args().skip(1);
    let (Some(session), Some(reason)) = (args.next(), args.next()) else {
        eprintln!("usage: submit_excuse <session-id> <reason> [document]");
        return Ok(());
    };
    let document = match args.next() {
        Some(path) => Some(Attachment::from_path(path).await?),
        None => None,
    };

    let client = Client::from_config(Config::new()).await?;
    if !client.auth().is_authenticated().await {
        client.auth().login_from_config().await?;
    }

    let excuse = client
        .submit_excuse(&NewExcuse {
            session: session.parse()?,
            reason,
            document,
        })
        .await?;
    info!(
        "✓ Excuse for session {} submitted: {}",
        excuse.session, excuse.reason
    );
    if let Some(document) = &excuse.document {
        info!("  Document stored at {}", document);
    }

    Ok(())
}
