use std::io;

use decisiontelecom::{ApiKey, ViberClient, ViberMessageId};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("DT_API_KEY")?;
    let message_id: i64 = required_env("DT_MESSAGE_ID")?.parse()?;

    let client = ViberClient::new(ApiKey::new(api_key)?);
    let receipt = client
        .get_message_status(ViberMessageId::new(message_id))
        .await?;
    println!(
        "message id: {}, status: {}, final: {}",
        receipt.message_id,
        receipt.status,
        receipt.status.is_final()
    );

    Ok(())
}
