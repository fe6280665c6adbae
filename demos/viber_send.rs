use std::io;
use std::time::Duration;

use decisiontelecom::{
    ApiKey, MessageText, RawPhoneNumber, SenderId, ViberClient, ViberMessage, ViberMessageType,
    ViberSourceType,
};

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
    let phone = required_env("DT_PHONE")?;
    let sender = required_env("DT_SENDER")?;
    let text = std::env::var("DT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the decisiontelecom demo.".to_owned());

    let client = ViberClient::builder(ApiKey::new(api_key)?)
        .timeout(Duration::from_secs(30))
        .build()?;
    let message = ViberMessage::new(
        SenderId::new(sender)?,
        RawPhoneNumber::new(phone)?,
        ViberMessageType::TextOnly,
        ViberSourceType::Transactional,
    )
    .with_text(MessageText::new(text)?)
    .with_validity_period(Duration::from_secs(3600));

    let id = client.send_message(&message).await?;
    println!("message id: {id}");

    Ok(())
}
